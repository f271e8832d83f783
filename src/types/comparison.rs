use crate::error::{Result, WellnessError};
use serde::Serialize;

pub const OVERALL_METRIC: &str = "Overall Score";

/// What a comparison ranks locations by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Factor(String),
    Category(String),
    Overall,
}

impl Selector {
    /// Builds a selector from the two optional filters; giving both is an
    /// error. Empty strings count as not given.
    pub fn from_options(factor: Option<&str>, category: Option<&str>) -> Result<Self> {
        let factor = factor.filter(|factor| !factor.is_empty());
        let category = category.filter(|category| !category.is_empty());
        match (factor, category) {
            (Some(_), Some(_)) => Err(WellnessError::AmbiguousSelector),
            (Some(factor), None) => Ok(Selector::Factor(factor.to_string())),
            (None, Some(category)) => Ok(Selector::Category(category.to_string())),
            (None, None) => Ok(Selector::Overall),
        }
    }

    pub fn metric(&self) -> String {
        match self {
            Selector::Factor(factor) => factor.clone(),
            Selector::Category(category) => format!("{category} (Average)"),
            Selector::Overall => OVERALL_METRIC.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub location: String,
    pub country: String,
    #[serde(rename = "type")]
    pub location_type: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub metric: String,
    pub rows: Vec<ComparisonRow>,
}

impl Comparison {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows sorted by value, highest first; ties keep their original order.
    pub fn sorted_descending(mut self) -> Self {
        self.rows.sort_by(|a, b| b.value.total_cmp(&a.value));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSeries {
    pub location: String,
    pub values: Vec<f64>,
}

/// Per-factor scores of several locations side by side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorProfile {
    pub title: String,
    pub factors: Vec<String>,
    pub series: Vec<ProfileSeries>,
}

impl FactorProfile {
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty() || self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_rejects_both_filters() {
        assert!(matches!(
            Selector::from_options(Some("Cost of Living"), Some("Economic Factors")),
            Err(WellnessError::AmbiguousSelector)
        ));
    }

    #[test]
    fn selector_ignores_empty_filters() {
        assert_eq!(
            Selector::from_options(Some(""), Some("Economic Factors")).ok(),
            Some(Selector::Category("Economic Factors".to_string()))
        );
        assert_eq!(
            Selector::from_options(None, None).ok(),
            Some(Selector::Overall)
        );
    }

    #[test]
    fn metric_labels() {
        assert_eq!(
            Selector::Category("Food & Nutrition".to_string()).metric(),
            "Food & Nutrition (Average)"
        );
        assert_eq!(Selector::Overall.metric(), "Overall Score");
    }

    #[test]
    fn sorted_descending_is_stable() {
        let row = |name: &str, value| ComparisonRow {
            location: name.to_string(),
            country: String::new(),
            location_type: String::new(),
            value,
        };
        let comparison = Comparison {
            metric: OVERALL_METRIC.to_string(),
            rows: vec![row("a", 5.0), row("b", 7.0), row("c", 5.0)],
        }
        .sorted_descending();
        let order = comparison
            .rows
            .iter()
            .map(|row| row.location.as_str())
            .collect::<Vec<_>>();
        assert_eq!(order, ["b", "a", "c"]);
    }
}
