use super::{or_neutral, round_tenth};

pub const ORGANIC_NEUTRAL: f64 = 1.5;
pub const TRADITION_NEUTRAL: f64 = 2.0;
pub const SAFETY_NEUTRAL: f64 = 1.5;

/// Food quality from organic farms per 100,000 people, a 1-10 traditional
/// cuisine preservation rating and a 1-10 food safety rating.
///
/// Only a missing organic figure is neutral; a reported zero scores zero.
pub fn food_quality_score(
    organic_farms_per_100k: Option<f64>,
    cuisine_preservation: f64,
    food_safety: f64,
) -> f64 {
    round_tenth(
        organic_component(organic_farms_per_100k)
            + tradition_component(cuisine_preservation)
            + safety_component(food_safety),
    )
}

/// 0-3.
pub fn organic_component(organic_farms_per_100k: Option<f64>) -> f64 {
    organic_farms_per_100k
        .map(|organic| (organic / 33.33).clamp(0.0, 3.0))
        .unwrap_or(ORGANIC_NEUTRAL)
}

/// 0-4.
pub fn tradition_component(cuisine_preservation: f64) -> f64 {
    or_neutral(cuisine_preservation, TRADITION_NEUTRAL, |rating| {
        (rating * 0.4).clamp(0.0, 4.0)
    })
}

/// 0-3.
pub fn safety_component(food_safety: f64) -> f64 {
    or_neutral(food_safety, SAFETY_NEUTRAL, |rating| {
        (rating * 0.3).clamp(0.0, 3.0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn food_quality_score_sums_components() {
        // 50 / 33.33 = 1.50.., 8 * 0.4 = 3.2, 9 * 0.3 = 2.7
        approx(food_quality_score(Some(50.0), 8.0, 9.0), 7.4);
    }

    #[test]
    fn organic_zero_is_not_missing() {
        approx(organic_component(Some(0.0)), 0.0);
        approx(organic_component(None), ORGANIC_NEUTRAL);
    }

    #[test]
    fn components_are_clamped() {
        approx(organic_component(Some(1_000.0)), 3.0);
        approx(tradition_component(25.0), 4.0);
        approx(safety_component(25.0), 3.0);
        approx(food_quality_score(Some(1_000.0), 25.0, 25.0), 10.0);
    }

    #[test]
    fn zero_ratings_fall_back_to_neutral() {
        approx(food_quality_score(None, 0.0, 0.0), 5.0);
    }
}
