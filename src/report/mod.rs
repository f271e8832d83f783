pub mod json;
pub mod md;

use crate::error::WellnessError;
use crate::types::comparison::{Comparison, FactorProfile};
use crate::types::config::ReportFormatSetting;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl From<ReportFormatSetting> for OutputFormat {
    fn from(setting: ReportFormatSetting) -> Self {
        match setting {
            ReportFormatSetting::Json => OutputFormat::Json,
            ReportFormatSetting::Md => OutputFormat::Md,
        }
    }
}

pub fn render_comparison(
    comparison: &Comparison,
    format: OutputFormat,
    precision: usize,
) -> Result<String, WellnessError> {
    match format {
        OutputFormat::Json => json::to_json(comparison).map_err(WellnessError::Json),
        OutputFormat::Md => Ok(md::comparison_to_markdown(comparison, precision)),
    }
}

pub fn render_profile(
    profile: &FactorProfile,
    format: OutputFormat,
    precision: usize,
) -> Result<String, WellnessError> {
    match format {
        OutputFormat::Json => json::to_json(profile).map_err(WellnessError::Json),
        OutputFormat::Md => Ok(md::profile_to_markdown(profile, precision)),
    }
}
