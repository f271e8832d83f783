use crate::analyzer::Analyzer;
use crate::error::{Result, WellnessError};
use crate::location::Location;
use crate::schema::FactorSchema;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreFile {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub saved_at: Option<String>,
    pub locations: Vec<LocationRecord>,
}

/// Everything needed to rebuild a [`Location`]; averages are never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    pub country: String,
    pub location_type: String,
    #[serde(default)]
    pub scores: BTreeMap<String, f64>,
    #[serde(default)]
    pub notes: BTreeMap<String, String>,
}

impl LocationRecord {
    pub fn from_location(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            country: location.country.clone(),
            location_type: location.location_type.clone(),
            scores: location
                .scored_factors()
                .map(|(factor, score)| (factor.to_string(), score))
                .collect(),
            notes: location
                .noted_factors()
                .map(|(factor, note)| (factor.to_string(), note.to_string()))
                .collect(),
        }
    }

    /// Replays every score through [`Location::add_score`], so a record that
    /// breaks the schema or the score range is rejected.
    pub fn into_location(self, schema: Arc<FactorSchema>) -> Result<Location> {
        if self.name.trim().is_empty() {
            return Err(WellnessError::StoreFormat(
                "location name must not be empty".to_string(),
            ));
        }
        if let Some(factor) = self
            .notes
            .keys()
            .find(|factor| !self.scores.contains_key(*factor))
        {
            return Err(WellnessError::StoreFormat(format!(
                "location '{}' has a note for unscored factor '{}'",
                self.name, factor
            )));
        }

        let mut location = Location::new(schema, self.name, self.country, self.location_type);
        for (factor, score) in &self.scores {
            let note = self.notes.get(factor).map(String::as_str);
            location.add_score(factor, *score, note)?;
        }
        Ok(location)
    }
}

impl StoreFile {
    pub fn from_analyzer(analyzer: &Analyzer) -> Self {
        Self {
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
            saved_at: Some(Utc::now().to_rfc3339()),
            locations: analyzer
                .locations()
                .map(LocationRecord::from_location)
                .collect(),
        }
    }

    pub fn into_analyzer(self, schema: Arc<FactorSchema>) -> Result<Analyzer> {
        let mut analyzer = Analyzer::new();
        for record in self.locations {
            analyzer.add_location(record.into_location(Arc::clone(&schema))?)?;
        }
        Ok(analyzer)
    }
}

/// Reads the store at `path`; a missing file is an empty analyzer.
pub fn load(path: &Path, schema: Arc<FactorSchema>) -> Result<Analyzer> {
    if !path.exists() {
        info!(path = %path.display(), "no store found, starting empty");
        return Ok(Analyzer::new());
    }
    let content = fs::read_to_string(path)?;
    let file: StoreFile = serde_json::from_str(&content)?;
    let analyzer = file.into_analyzer(schema)?;
    info!(path = %path.display(), locations = analyzer.len(), "loaded store");
    Ok(analyzer)
}

pub fn save(path: &Path, analyzer: &Analyzer) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(WellnessError::Io)?;
    }
    let json = serde_json::to_string_pretty(&StoreFile::from_analyzer(analyzer))?;
    fs::write(path, json).map_err(WellnessError::Io)?;
    info!(path = %path.display(), locations = analyzer.len(), "saved store");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_analyzer;
    use tempfile::TempDir;

    fn schema() -> Arc<FactorSchema> {
        Arc::new(FactorSchema::wellness())
    }

    #[test]
    fn load_missing_store_is_empty() {
        let dir = TempDir::new().expect("temp dir should be created");
        let analyzer =
            load(&dir.path().join("none.json"), schema()).expect("missing store should load");
        assert!(analyzer.is_empty());
    }

    #[test]
    fn save_then_load_preserves_locations_scores_and_notes() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("data/processed/locations.json");
        let original = sample_analyzer(schema());

        save(&path, &original).expect("save should succeed");
        let loaded = load(&path, schema()).expect("load should succeed");

        let names = loaded
            .locations()
            .map(|location| location.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["Athens", "Brasov", "Dubai", "Penang", "Taormina"]);
        let before = original
            .locations()
            .map(LocationRecord::from_location)
            .collect::<Vec<_>>();
        let after = loaded
            .locations()
            .map(LocationRecord::from_location)
            .collect::<Vec<_>>();
        assert_eq!(before, after);
    }

    #[test]
    fn saved_json_has_no_derived_state() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("locations.json");
        save(&path, &sample_analyzer(schema())).expect("save should succeed");
        let json = fs::read_to_string(&path).expect("store should read");
        assert!(json.contains("\"location_type\": \"Coastal City\""));
        assert!(!json.contains("average"));
        assert!(!json.contains("overall"));
    }

    #[test]
    fn load_rejects_out_of_range_score() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("locations.json");
        fs::write(
            &path,
            r#"{"locations": [{"name": "X", "country": "Y", "location_type": "Z",
                "scores": {"Cost of Living": 11}, "notes": {}}]}"#,
        )
        .expect("store should write");
        let err = load(&path, schema()).expect_err("invalid score should fail");
        assert!(matches!(err, WellnessError::InvalidScore { .. }));
    }

    #[test]
    fn load_rejects_note_without_score() {
        let record = LocationRecord {
            name: "X".to_string(),
            country: "Y".to_string(),
            location_type: "Z".to_string(),
            scores: BTreeMap::new(),
            notes: BTreeMap::from([("Cost of Living".to_string(), "cheap".to_string())]),
        };
        let err = record
            .into_location(schema())
            .expect_err("orphan note should fail");
        assert!(err.to_string().contains("unscored factor"));
    }

    #[test]
    fn load_rejects_unknown_factor_and_empty_name() {
        let record = LocationRecord {
            name: "X".to_string(),
            country: "Y".to_string(),
            location_type: "Z".to_string(),
            scores: BTreeMap::from([("Weather".to_string(), 5.0)]),
            notes: BTreeMap::new(),
        };
        assert!(matches!(
            record.clone().into_location(schema()),
            Err(WellnessError::UnknownFactor(_))
        ));
        let unnamed = LocationRecord {
            name: String::new(),
            scores: BTreeMap::new(),
            ..record
        };
        assert!(matches!(
            unnamed.into_location(schema()),
            Err(WellnessError::StoreFormat(_))
        ));
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("locations.json");
        fs::write(&path, "{not json").expect("store should write");
        assert!(matches!(
            load(&path, schema()),
            Err(WellnessError::Json(_))
        ));
    }
}
