use crate::error::{Result, WellnessError};
use std::collections::HashMap;

/// A named group of related factors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub factors: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, factors: &[&str]) -> Self {
        Self {
            name: name.into(),
            factors: factors.iter().map(|factor| factor.to_string()).collect(),
        }
    }
}

/// Immutable catalog of wellness categories and their factors.
///
/// Built once at startup and shared (usually behind an `Arc`) with every
/// [`Location`](crate::location::Location). Category order and intra-category
/// factor order are preserved; `all_factors` is the flattened sequence in that
/// same order. A factor name may belong to exactly one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorSchema {
    categories: Vec<Category>,
    all_factors: Vec<String>,
}

impl FactorSchema {
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        if categories.is_empty() {
            return Err(WellnessError::EmptySchema);
        }

        let mut owner = HashMap::<&str, &str>::new();
        for category in &categories {
            if category.name.trim().is_empty() {
                return Err(WellnessError::EmptyName("category".to_string()));
            }
            if categories
                .iter()
                .filter(|other| other.name == category.name)
                .count()
                > 1
            {
                return Err(WellnessError::ConfigParse(format!(
                    "category '{}' is defined more than once",
                    category.name
                )));
            }
            for factor in &category.factors {
                if factor.trim().is_empty() {
                    return Err(WellnessError::EmptyName(format!(
                        "factor in category '{}'",
                        category.name
                    )));
                }
                if let Some(first) = owner.insert(factor, &category.name) {
                    return Err(WellnessError::DuplicateFactor {
                        factor: factor.clone(),
                        first: first.to_string(),
                        second: category.name.clone(),
                    });
                }
            }
        }

        let all_factors = categories
            .iter()
            .flat_map(|category| category.factors.iter().cloned())
            .collect();

        Ok(Self {
            categories,
            all_factors,
        })
    }

    /// The seven-category catalog the tool ships with.
    pub fn wellness() -> Self {
        let categories = vec![
            Category::new(
                "Health & Wellbeing",
                &[
                    "Healthcare Quality",
                    "Sunlight/Climate",
                    "Mental Health & Happiness",
                ],
            ),
            Category::new(
                "Food & Nutrition",
                &[
                    "Food Quality (Natural/Traditional)",
                    "Whole Foods Availability",
                    "Traditional Cuisine",
                ],
            ),
            Category::new(
                "Lifestyle & Activities",
                &[
                    "Fitness Opportunities",
                    "Beach/Coastal Access",
                    "Outdoor Recreation",
                ],
            ),
            Category::new(
                "Community & Social",
                &[
                    "Family-Friendliness",
                    "Community Cohesion",
                    "Dating Scene/Romance",
                ],
            ),
            Category::new(
                "Economic Factors",
                &["Cost of Living", "Average Salary", "Economic Stability"],
            ),
            Category::new(
                "Infrastructure & Services",
                &[
                    "Safety and Security",
                    "Educational Opportunities",
                    "Transportation Options",
                ],
            ),
            Category::new(
                "Culture & Environment",
                &[
                    "Nightlife and Entertainment",
                    "Religious Tolerance",
                    "Political Environment",
                ],
            ),
        ];

        let all_factors = categories
            .iter()
            .flat_map(|category| category.factors.iter().cloned())
            .collect();
        Self {
            categories,
            all_factors,
        }
    }

    pub fn is_valid_factor(&self, name: &str) -> bool {
        self.all_factors.iter().any(|factor| factor == name)
    }

    pub fn is_valid_category(&self, name: &str) -> bool {
        self.categories.iter().any(|category| category.name == name)
    }

    pub fn factors_of(&self, category: &str) -> Result<&[String]> {
        self.categories
            .iter()
            .find(|candidate| candidate.name == category)
            .map(|candidate| candidate.factors.as_slice())
            .ok_or_else(|| WellnessError::UnknownCategory(category.to_string()))
    }

    pub fn all_factors(&self) -> &[String] {
        &self.all_factors
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|category| category.name.as_str())
    }
}

impl Default for FactorSchema {
    fn default() -> Self {
        Self::wellness()
    }
}
