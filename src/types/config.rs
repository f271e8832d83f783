use crate::error::WellnessError;
use crate::schema::{Category, FactorSchema};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_STORE_PATH: &str = "data/processed/locations.json";
pub const DEFAULT_PRECISION: usize = 1;
pub const MAX_PRECISION: usize = 4;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WellnessConfig {
    pub store: Option<StoreConfig>,
    pub report: Option<ReportConfig>,
    pub schema: Option<SchemaConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatSetting {
    #[default]
    Md,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<ReportFormatSetting>,
    pub precision: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchemaConfig {
    #[serde(default)]
    pub categories: Vec<CategoryConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    #[serde(default)]
    pub factors: Vec<String>,
}

impl WellnessConfig {
    pub fn store_path(&self) -> PathBuf {
        self.store
            .as_ref()
            .and_then(|store| store.path.as_deref())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH))
    }

    pub fn report_format(&self) -> ReportFormatSetting {
        self.report
            .as_ref()
            .and_then(|report| report.format)
            .unwrap_or_default()
    }

    pub fn precision(&self) -> usize {
        self.report
            .as_ref()
            .and_then(|report| report.precision)
            .unwrap_or(DEFAULT_PRECISION)
    }

    /// The configured catalog, or the built-in wellness catalog when none is
    /// configured.
    pub fn factor_schema(&self) -> Result<FactorSchema, WellnessError> {
        match &self.schema {
            Some(schema) => FactorSchema::new(
                schema
                    .categories
                    .iter()
                    .map(|category| Category {
                        name: category.name.clone(),
                        factors: category.factors.clone(),
                    })
                    .collect(),
            ),
            None => Ok(FactorSchema::wellness()),
        }
    }

    pub fn validate(&self) -> Result<(), WellnessError> {
        if let Some(path) = self.store.as_ref().and_then(|store| store.path.as_ref()) {
            if path.trim().is_empty() {
                return Err(WellnessError::ConfigParse(
                    "store.path must not be empty".to_string(),
                ));
            }
        }

        if self.precision() > MAX_PRECISION {
            return Err(WellnessError::ConfigParse(format!(
                "report.precision must be between 0 and {MAX_PRECISION} (found {})",
                self.precision()
            )));
        }

        self.factor_schema()
            .map_err(|e| WellnessError::ConfigParse(format!("schema: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: WellnessConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.store_path(), PathBuf::from(DEFAULT_STORE_PATH));
        assert_eq!(cfg.report_format(), ReportFormatSetting::Md);
        assert_eq!(cfg.precision(), 1);
        assert_eq!(
            cfg.factor_schema().expect("default schema").all_factors().len(),
            21
        );
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[store]
path = "out/places.json"

[report]
format = "json"
precision = 2

[[schema.categories]]
name = "Health"
factors = ["Healthcare Quality", "Sunlight/Climate"]

[[schema.categories]]
name = "Money"
factors = ["Cost of Living"]
"#;
        let cfg: WellnessConfig = toml::from_str(toml_str).expect("full config should parse");
        assert_eq!(cfg.store_path(), PathBuf::from("out/places.json"));
        assert_eq!(cfg.report_format(), ReportFormatSetting::Json);
        assert_eq!(cfg.precision(), 2);
        let schema = cfg.factor_schema().expect("schema should build");
        assert_eq!(
            schema.all_factors(),
            ["Healthcare Quality", "Sunlight/Climate", "Cost of Living"]
        );
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_factor_across_categories() {
        let toml_str = r#"
[[schema.categories]]
name = "A"
factors = ["Cost of Living"]

[[schema.categories]]
name = "B"
factors = ["Cost of Living"]
"#;
        let cfg: WellnessConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("appears in both"));
    }

    #[test]
    fn validate_rejects_empty_schema_table() {
        let cfg: WellnessConfig = toml::from_str("[schema]\n").expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("at least one category"));
    }

    #[test]
    fn validate_rejects_precision_out_of_range() {
        let cfg: WellnessConfig =
            toml::from_str("[report]\nprecision = 9\n").expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("report.precision"));
    }

    #[test]
    fn validate_rejects_blank_store_path() {
        let cfg: WellnessConfig =
            toml::from_str("[store]\npath = \" \"\n").expect("config should parse");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn unknown_report_format_fails_to_parse() {
        let result = toml::from_str::<WellnessConfig>("[report]\nformat = \"csv\"\n");
        assert!(result.is_err());
    }
}
