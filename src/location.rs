use crate::error::{Result, WellnessError};
use crate::schema::FactorSchema;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;

/// A place with sparse per-factor scores.
///
/// Score and note keys are always members of the schema's factor list; notes
/// only exist for scored factors. Averages are derived on demand and never
/// stored.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub location_type: String,
    schema: Arc<FactorSchema>,
    scores: HashMap<String, f64>,
    notes: HashMap<String, String>,
}

impl Location {
    pub fn new(
        schema: Arc<FactorSchema>,
        name: impl Into<String>,
        country: impl Into<String>,
        location_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            location_type: location_type.into(),
            schema,
            scores: HashMap::new(),
            notes: HashMap::new(),
        }
    }

    pub fn schema(&self) -> &FactorSchema {
        &self.schema
    }

    /// Records `score` for `factor`, replacing any previous value. A non-empty
    /// note is stored alongside; an absent note leaves an earlier one in place.
    pub fn add_score(&mut self, factor: &str, score: f64, note: Option<&str>) -> Result<()> {
        if !self.schema.is_valid_factor(factor) {
            return Err(WellnessError::UnknownFactor(factor.to_string()));
        }
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(WellnessError::InvalidScore {
                factor: factor.to_string(),
                score,
            });
        }

        debug!(location = %self.name, factor, score, "recording score");
        self.scores.insert(factor.to_string(), score);
        if let Some(note) = note.filter(|note| !note.is_empty()) {
            self.notes.insert(factor.to_string(), note.to_string());
        }
        Ok(())
    }

    pub fn get_score(&self, factor: &str) -> Option<f64> {
        self.scores.get(factor).copied()
    }

    pub fn get_note(&self, factor: &str) -> Option<&str> {
        self.notes.get(factor).map(String::as_str)
    }

    /// Mean of the recorded scores in `category`; unscored factors are left
    /// out of the denominator. Zero when nothing in the category is scored.
    pub fn get_category_average(&self, category: &str) -> Result<f64> {
        let factors = self.schema.factors_of(category)?;
        let recorded = factors
            .iter()
            .filter_map(|factor| self.get_score(factor))
            .filter(|score| *score > 0.0)
            .collect::<Vec<_>>();
        Ok(mean(&recorded))
    }

    /// Mean of every recorded score, or zero when there are none.
    pub fn get_overall_score(&self) -> f64 {
        let recorded = self.scored_factors().map(|(_, score)| score).collect::<Vec<_>>();
        mean(&recorded)
    }

    /// Recorded scores in schema order.
    pub fn scored_factors(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.schema
            .all_factors()
            .iter()
            .filter_map(|factor| self.get_score(factor).map(|score| (factor.as_str(), score)))
    }

    /// Recorded notes in schema order.
    pub fn noted_factors(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.schema
            .all_factors()
            .iter()
            .filter_map(|factor| self.get_note(factor).map(|note| (factor.as_str(), note)))
    }

    pub fn score_count(&self) -> usize {
        self.scores.len()
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} ({})", self.name, self.country, self.location_type)
    }
}
