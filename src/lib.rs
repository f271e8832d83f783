//! Scoring and comparison of the wellness attributes of locations.
//!
//! Raw measurements go through the [`formulas`], land on a [`Location`] via
//! the [`FactorSchema`] validity gate, and the [`Analyzer`] builds comparison
//! views across locations.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod formulas;
pub mod location;
pub mod logging;
pub mod report;
pub mod sample;
pub mod schema;
pub mod store;
pub mod types;

pub use analyzer::Analyzer;
pub use error::{Result, WellnessError};
pub use formulas::Formula;
pub use location::Location;
pub use schema::{Category, FactorSchema};
pub use types::comparison::{Comparison, ComparisonRow, FactorProfile, Selector};
