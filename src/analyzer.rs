use crate::error::{Result, WellnessError};
use crate::location::Location;
use crate::types::comparison::{Comparison, ComparisonRow, FactorProfile, ProfileSeries, Selector};
use tracing::{debug, warn};

/// Collection of locations keyed by name, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    locations: Vec<Location>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `location`, replacing any existing entry with the same name in
    /// place so the original position is kept. Blank names are rejected.
    pub fn add_location(&mut self, location: Location) -> Result<()> {
        if location.name.trim().is_empty() {
            return Err(WellnessError::EmptyName("location".to_string()));
        }
        match self
            .locations
            .iter_mut()
            .find(|existing| existing.name == location.name)
        {
            Some(existing) => {
                debug!(location = %location.name, "replacing location");
                *existing = location;
            }
            None => self.locations.push(location),
        }
        Ok(())
    }

    pub fn get_location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|location| location.name == name)
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Compares every location by a single factor, a category average or the
    /// overall score. `factor` and `category` are mutually exclusive.
    pub fn compare_locations(
        &self,
        factor: Option<&str>,
        category: Option<&str>,
    ) -> Result<Comparison> {
        let selector = Selector::from_options(factor, category)?;
        self.compare(&selector)
    }

    pub fn compare(&self, selector: &Selector) -> Result<Comparison> {
        let metric = selector.metric();
        if self.locations.is_empty() {
            return Ok(Comparison {
                metric,
                rows: Vec::new(),
            });
        }

        let rows = self
            .locations
            .iter()
            .map(|location| {
                let value = match selector {
                    Selector::Factor(factor) => {
                        if !location.schema().is_valid_factor(factor) {
                            return Err(WellnessError::UnknownFactor(factor.clone()));
                        }
                        location.get_score(factor).unwrap_or(0.0)
                    }
                    Selector::Category(category) => {
                        if !location.schema().is_valid_category(category) {
                            return Err(WellnessError::UnknownCategory(category.clone()));
                        }
                        location.get_category_average(category)?
                    }
                    Selector::Overall => location.get_overall_score(),
                };
                Ok(ComparisonRow {
                    location: location.name.clone(),
                    country: location.country.clone(),
                    location_type: location.location_type.clone(),
                    value,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(metric = %metric, rows = rows.len(), "built comparison");
        Ok(Comparison { metric, rows })
    }

    /// Overall comparison, best first.
    pub fn ranked(&self) -> Comparison {
        let rows = self
            .locations
            .iter()
            .map(|location| ComparisonRow {
                location: location.name.clone(),
                country: location.country.clone(),
                location_type: location.location_type.clone(),
                value: location.get_overall_score(),
            })
            .collect();
        Comparison {
            metric: Selector::Overall.metric(),
            rows,
        }
        .sorted_descending()
    }

    /// Side-by-side factor scores for the named locations. With a category,
    /// its factors are used; without one, every factor scored by at least one
    /// selected location, in schema order. Unknown names are skipped.
    pub fn factor_profile(&self, names: &[&str], category: Option<&str>) -> Result<FactorProfile> {
        let selected = names
            .iter()
            .filter_map(|name| {
                let found = self.get_location(name);
                if found.is_none() {
                    warn!(location = %name, "location not found, skipping");
                }
                found
            })
            .collect::<Vec<_>>();

        let title = match category {
            Some(category) => format!("Comparison of {category} Factors"),
            None => "Wellness Factor Comparison".to_string(),
        };

        let Some(first) = selected.first() else {
            if let Some(category) = category {
                if let Some(location) = self.locations.first() {
                    location.schema().factors_of(category)?;
                }
            }
            return Ok(FactorProfile {
                title,
                factors: Vec::new(),
                series: Vec::new(),
            });
        };

        let schema = first.schema();
        let factors = match category {
            Some(category) => schema.factors_of(category)?.to_vec(),
            None => schema
                .all_factors()
                .iter()
                .filter(|factor| {
                    selected
                        .iter()
                        .any(|location| location.get_score(factor).is_some())
                })
                .cloned()
                .collect(),
        };

        let series = selected
            .iter()
            .map(|location| ProfileSeries {
                location: location.name.clone(),
                values: factors
                    .iter()
                    .map(|factor| location.get_score(factor).unwrap_or(0.0))
                    .collect(),
            })
            .collect();

        Ok(FactorProfile {
            title,
            factors,
            series,
        })
    }
}
