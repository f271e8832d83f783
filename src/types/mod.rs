pub mod comparison;
pub mod config;
