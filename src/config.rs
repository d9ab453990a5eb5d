use crate::error::{AdvisorError, Result};
use crate::types::config::AdvisorConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "study-advisor.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".study-advisor/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/study-advisor/config.toml";

pub fn load_config(root: &Path) -> Result<AdvisorConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<AdvisorConfig> {
    let mut merged = Value::Table(Map::new());
    let mut sources = 0usize;
    if let Some(path) = global_path {
        sources += merge_file_if_exists(&mut merged, path)? as usize;
    }
    sources += merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))? as usize;
    sources += merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))? as usize;

    if sources == 0 {
        tracing::debug!(root = %root.display(), "no config files found, using defaults");
    }

    let cfg: AdvisorConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| AdvisorError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    tracing::debug!(path = %path.display(), "merged config file");
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| AdvisorError::ConfigParse(format!("{}: {}", path.display(), e)))
}

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
