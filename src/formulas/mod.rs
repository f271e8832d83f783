pub mod beach;
pub mod climate;
pub mod cost;
pub mod food;
pub mod healthcare;

pub use beach::beach_access_score;
pub use climate::climate_score;
pub use cost::cost_of_living_score;
pub use food::food_quality_score;
pub use healthcare::healthcare_score;

use std::fmt;

/// Raw inputs that were not reported arrive as zero; zero is read as
/// "missing" and earns the neutral component. This also catches genuine zero
/// measurements (a 0 C average temperature, zero rainfall).
pub(crate) fn or_neutral(raw: f64, neutral: f64, score: impl FnOnce(f64) -> f64) -> f64 {
    if raw == 0.0 {
        neutral
    } else {
        score(raw)
    }
}

pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// The five raw-measurement formulas, keyed by the factor each one scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    Healthcare,
    Climate,
    FoodQuality,
    CostOfLiving,
    BeachAccess,
}

impl Formula {
    pub const ALL: [Formula; 5] = [
        Formula::Healthcare,
        Formula::Climate,
        Formula::FoodQuality,
        Formula::CostOfLiving,
        Formula::BeachAccess,
    ];

    pub fn factor(self) -> &'static str {
        match self {
            Formula::Healthcare => "Healthcare Quality",
            Formula::Climate => "Sunlight/Climate",
            Formula::FoodQuality => "Food Quality (Natural/Traditional)",
            Formula::CostOfLiving => "Cost of Living",
            Formula::BeachAccess => "Beach/Coastal Access",
        }
    }

    pub fn input_labels(self) -> [&'static str; 3] {
        match self {
            Formula::Healthcare => ["rank", "beds per 1000", "doctors per 1000"],
            Formula::Climate => ["sunny days", "avg temp C", "rainfall mm"],
            Formula::FoodQuality => [
                "organic farms per 100k",
                "cuisine preservation",
                "food safety",
            ],
            Formula::CostOfLiving => ["monthly cost USD", "purchasing power", "housing ratio"],
            Formula::BeachAccess => ["distance km", "beach quality", "beach facilities"],
        }
    }

    /// Evaluates the formula. Unreported inputs (`None`) become zero, except
    /// where the formula distinguishes "not reported" from zero (organic farms,
    /// beach distance).
    pub fn evaluate(self, inputs: [Option<f64>; 3]) -> f64 {
        let [a, b, c] = inputs;
        let b = b.unwrap_or(0.0);
        let c = c.unwrap_or(0.0);
        match self {
            Formula::Healthcare => healthcare_score(a.unwrap_or(0.0), b, c),
            Formula::Climate => climate_score(a.unwrap_or(0.0), b, c),
            Formula::FoodQuality => food_quality_score(a, b, c),
            Formula::CostOfLiving => cost_of_living_score(a.unwrap_or(0.0), b, c),
            Formula::BeachAccess => beach_access_score(a, b, c),
        }
    }

    /// Provenance note stored next to a computed score.
    pub fn note(self, inputs: [Option<f64>; 3]) -> String {
        let parts = self
            .input_labels()
            .iter()
            .zip(inputs)
            .map(|(label, value)| match value {
                Some(value) => format!("{label}={value}"),
                None => format!("{label}=n/a"),
            })
            .collect::<Vec<_>>();
        format!("Based on: {}", parts.join(", "))
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Formula::Healthcare => "healthcare",
            Formula::Climate => "climate",
            Formula::FoodQuality => "food",
            Formula::CostOfLiving => "cost",
            Formula::BeachAccess => "beach",
        };
        f.write_str(name)
    }
}
