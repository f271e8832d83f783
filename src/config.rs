use crate::error::{Result, WellnessError};
use crate::types::config::WellnessConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "wellness.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".wellness/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/wellness/config.toml";

/// Loads the layered configuration for a project rooted at `root`.
///
/// `explicit` replaces the project file and must exist. With no files at all
/// the defaults are returned.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<WellnessConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<WellnessConfig> {
    let project_path = match explicit {
        Some(path) if !path.exists() => {
            return Err(WellnessError::ConfigParse(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Some(path) => path.to_path_buf(),
        None => root.join(DEFAULT_CONFIG_FILE),
    };

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &project_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: WellnessConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| WellnessError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging config file");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| WellnessError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Tables merge key by key; any other value (arrays included) is replaced.
fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
