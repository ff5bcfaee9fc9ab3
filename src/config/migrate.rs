use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys a complete configuration file carries, in file order.
pub const CONFIG_KEYS: &[&str] = &[
    "database",
    "window_months",
    "dashboard_limit",
    "festive_today",
    "date_format",
    "separator_char",
];

fn parse_mapping(content: &str) -> AppResult<Mapping> {
    // An empty file is a valid (empty) configuration.
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(
            "configuration file is not a YAML mapping".to_string(),
        )),
    }
}

/// Return the known keys that are absent from the given YAML document.
pub fn missing_keys(content: &str) -> AppResult<Vec<String>> {
    let map = parse_mapping(content)?;

    Ok(CONFIG_KEYS
        .iter()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .map(|k| k.to_string())
        .collect())
}

/// Add the default value of every missing key to the YAML document.
///
/// Existing values are never touched, unknown keys are kept as they are.
/// Returns the updated document and the list of keys that were added.
pub fn fill_missing_keys(content: &str) -> AppResult<(String, Vec<String>)> {
    let mut map = parse_mapping(content)?;

    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Config("cannot serialize defaults".to_string())),
    };

    let mut added = Vec::new();
    for key in CONFIG_KEYS {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k)
            && let Some(v) = defaults.get(&k)
        {
            map.insert(k, v.clone());
            added.push(key.to_string());
        }
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(map))?;
    Ok((serialized, added))
}

/// Rewrite the configuration file at `path` with missing keys filled in.
/// The file is left untouched when nothing is missing.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "configuration file not found: {} (run `giftlog init` first)",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    let (updated, added) = fill_missing_keys(&content)?;

    if !added.is_empty() {
        fs::write(path, updated)?;
    }

    Ok(added)
}
