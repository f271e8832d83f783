use crate::analyzer::Analyzer;
use crate::location::Location;
use crate::schema::FactorSchema;
use std::sync::Arc;
use tracing::warn;

type SampleScore = (&'static str, f64, &'static str);

const SAMPLES: [(&str, &str, &str, [SampleScore; 5]); 5] = [
    (
        "Athens",
        "Greece",
        "Coastal City",
        [
            ("Healthcare Quality", 7.0, "Good public healthcare with some waiting times"),
            ("Sunlight/Climate", 9.0, "Mediterranean climate with abundant sunshine"),
            ("Food Quality (Natural/Traditional)", 9.0, "Strong tradition of fresh, local food"),
            ("Beach/Coastal Access", 8.0, "Good beaches within reach of the city"),
            ("Cost of Living", 6.0, "Moderate costs, affordable by European standards"),
        ],
    ),
    (
        "Brasov",
        "Romania",
        "Small Town",
        [
            ("Healthcare Quality", 6.0, "Improving healthcare system"),
            ("Sunlight/Climate", 5.0, "Four seasons with cold winters"),
            (
                "Food Quality (Natural/Traditional)",
                8.0,
                "Strong food traditions and local agriculture",
            ),
            ("Beach/Coastal Access", 1.0, "Landlocked mountain town"),
            ("Cost of Living", 8.0, "Very affordable living costs"),
        ],
    ),
    (
        "Dubai",
        "UAE",
        "Modern City",
        [
            ("Healthcare Quality", 9.0, "Excellent private healthcare"),
            ("Sunlight/Climate", 7.0, "Abundant sunshine but extreme summer heat"),
            (
                "Food Quality (Natural/Traditional)",
                6.0,
                "Great international options but less local tradition",
            ),
            ("Beach/Coastal Access", 9.0, "Excellent beaches and water access"),
            ("Cost of Living", 3.0, "Very high cost of living"),
        ],
    ),
    (
        "Penang",
        "Malaysia",
        "Beach Community",
        [
            ("Healthcare Quality", 7.0, "Good quality private hospitals"),
            ("Sunlight/Climate", 8.0, "Tropical climate with consistent temperatures"),
            ("Food Quality (Natural/Traditional)", 9.0, "Famous for diverse, fresh cuisine"),
            ("Beach/Coastal Access", 9.0, "Island with abundant beaches"),
            ("Cost of Living", 8.0, "Very affordable for Western standards"),
        ],
    ),
    (
        "Taormina",
        "Italy",
        "Village",
        [
            ("Healthcare Quality", 7.0, "Good access to Italian healthcare system"),
            ("Sunlight/Climate", 9.0, "Mediterranean climate with mild winters"),
            (
                "Food Quality (Natural/Traditional)",
                10.0,
                "Exceptional Sicilian cuisine and food culture",
            ),
            ("Beach/Coastal Access", 10.0, "Beautiful beaches and coastal scenery"),
            ("Cost of Living", 7.0, "Moderate by Italian standards"),
        ],
    ),
];

/// Five demonstration locations with hand-assigned scores.
///
/// Scores for factors the given schema does not define are skipped.
pub fn sample_analyzer(schema: Arc<FactorSchema>) -> Analyzer {
    let mut analyzer = Analyzer::new();
    for (name, country, location_type, scores) in SAMPLES {
        let mut location = Location::new(Arc::clone(&schema), name, country, location_type);
        for (factor, score, note) in scores {
            if let Err(e) = location.add_score(factor, score, Some(note)) {
                warn!(location = name, error = %e, "skipping sample score");
            }
        }
        if let Err(e) = analyzer.add_location(location) {
            warn!(location = name, error = %e, "skipping sample location");
        }
    }
    analyzer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Category;

    #[test]
    fn sample_has_five_fully_scored_locations() {
        let analyzer = sample_analyzer(Arc::new(FactorSchema::wellness()));
        assert_eq!(analyzer.len(), 5);
        assert!(analyzer
            .locations()
            .all(|location| location.score_count() == 5));
        let taormina = analyzer
            .get_location("Taormina")
            .expect("taormina should exist");
        assert!((taormina.get_overall_score() - 8.6).abs() < 1e-9);
    }

    #[test]
    fn sample_skips_factors_outside_a_custom_schema() {
        let schema = FactorSchema::new(vec![Category::new("Money", &["Cost of Living"])])
            .expect("schema should build");
        let analyzer = sample_analyzer(Arc::new(schema));
        assert!(analyzer
            .locations()
            .all(|location| location.score_count() == 1));
    }
}
