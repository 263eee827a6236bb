//! Settings file loading functionality.
//!
//! This module provides the [`SettingsLoader`] type for loading runtime
//! settings from a YAML file, for deployments that ship settings alongside
//! the application instead of reading them from the backend store.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::Settings;

/// Loads [`Settings`] from a YAML file.
///
/// The file is a flat map of settings keys to values, matching the rows of
/// the backend's key-value store:
///
/// ```text
/// FUEL_RATE_PER_KM: "9.5"
/// LATE_ARRIVAL_TIME: "10:15"
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::SettingsLoader;
///
/// let settings = SettingsLoader::load("./config/settings.yaml")?;
/// println!("Fuel rate: {}", settings.fuel_rate_per_km);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
pub struct SettingsLoader;

impl SettingsLoader {
    /// Loads settings from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the settings file.
    ///
    /// # Returns
    ///
    /// Returns the parsed [`Settings`] on success, or an error if:
    /// - The file is missing
    /// - The file is not a YAML map of scalars
    /// - A known key holds an unparsable value
    ///
    /// Keys absent from the file keep their documented defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Settings> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::SettingsNotFound {
            path: path_str.clone(),
        })?;

        let raw: BTreeMap<String, serde_yaml::Value> =
            serde_yaml::from_str(&content).map_err(|e| EngineError::SettingsParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let mut entries = Vec::with_capacity(raw.len());
        for (key, value) in raw {
            let value = scalar_to_string(&value).ok_or_else(|| EngineError::SettingsParseError {
                path: path_str.clone(),
                message: format!("value for '{}' is not a scalar", key),
            })?;
            entries.push((key, value));
        }

        let settings = Settings::from_entries(entries)?;
        info!(
            fuel_rate_per_km = %settings.fuel_rate_per_km,
            late_arrival_time = %settings.late_arrival_time.format("%H:%M"),
            "Loaded system settings from {}", path_str
        );

        Ok(settings)
    }
}

/// Renders a YAML scalar as the string the key-value store would hold.
fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
