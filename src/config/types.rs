//! Runtime settings types.
//!
//! This module contains the strongly-typed [`Settings`] value injected into
//! calculations, built from the backend's key-value settings store or from
//! a settings file.

use std::str::FromStr;

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::calculation::parse_time;
use crate::error::{EngineError, EngineResult};

/// Settings key for the fuel reimbursement rate per kilometre.
pub const FUEL_RATE_PER_KM_KEY: &str = "FUEL_RATE_PER_KM";

/// Settings key for the late-arrival threshold time.
pub const LATE_ARRIVAL_TIME_KEY: &str = "LATE_ARRIVAL_TIME";

/// Runtime settings snapshot used by the calculation functions.
///
/// The engine treats settings as an immutable snapshot per call; it never
/// caches, refreshes, or watches the underlying store. Missing keys fall
/// back to the documented defaults; malformed values are validation
/// errors, never silently coerced.
///
/// # Example
///
/// ```
/// use attendance_engine::config::Settings;
/// use rust_decimal::Decimal;
///
/// let settings = Settings::default();
/// assert_eq!(settings.fuel_rate_per_km, Decimal::from(9));
/// assert_eq!(settings.late_arrival_time.format("%H:%M").to_string(), "10:15");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Currency amount reimbursed per kilometre. Default 9.
    pub fuel_rate_per_km: Decimal,
    /// Check-ins after this time of day are classified late. Default 10:15.
    pub late_arrival_time: NaiveTime,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            fuel_rate_per_km: Decimal::from(9),
            late_arrival_time: NaiveTime::from_hms_opt(10, 15, 0)
                .expect("valid default late threshold"),
        }
    }
}

impl Settings {
    /// Builds settings from a key-value store snapshot.
    ///
    /// Unknown keys are ignored. Known keys with unparsable values produce
    /// an [`EngineError::InvalidSetting`]; absent keys keep their defaults.
    ///
    /// # Arguments
    ///
    /// * `entries` - (key, value) pairs, e.g. the rows of the backend's
    ///   `system_settings` table.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::config::Settings;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let entries = vec![
    ///     ("FUEL_RATE_PER_KM".to_string(), "9.5".to_string()),
    ///     ("LATE_ARRIVAL_TIME".to_string(), "09:30".to_string()),
    /// ];
    /// let settings = Settings::from_entries(entries).unwrap();
    /// assert_eq!(settings.fuel_rate_per_km, Decimal::from_str("9.5").unwrap());
    /// ```
    pub fn from_entries<I>(entries: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut settings = Settings::default();

        for (key, value) in entries {
            match key.as_str() {
                FUEL_RATE_PER_KM_KEY => {
                    settings.fuel_rate_per_km =
                        Decimal::from_str(value.trim()).map_err(|_| {
                            EngineError::InvalidSetting {
                                key,
                                value,
                                message: "not a decimal number".to_string(),
                            }
                        })?;
                }
                LATE_ARRIVAL_TIME_KEY => {
                    settings.late_arrival_time =
                        parse_time(value.trim()).map_err(|_| EngineError::InvalidSetting {
                            key,
                            value,
                            message: "expected HH:MM".to_string(),
                        })?;
                }
                _ => {}
            }
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_defaults_match_documented_values() {
        let settings = Settings::default();
        assert_eq!(settings.fuel_rate_per_km, Decimal::from(9));
        assert_eq!(
            settings.late_arrival_time,
            NaiveTime::from_hms_opt(10, 15, 0).unwrap()
        );
    }

    #[test]
    fn test_empty_store_falls_back_to_defaults() {
        let settings = Settings::from_entries(vec![]).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_from_entries_overrides_both_keys() {
        let settings = Settings::from_entries(vec![
            entry(FUEL_RATE_PER_KM_KEY, "12.75"),
            entry(LATE_ARRIVAL_TIME_KEY, "09:30"),
        ])
        .unwrap();

        assert_eq!(settings.fuel_rate_per_km, Decimal::from_str("12.75").unwrap());
        assert_eq!(
            settings.late_arrival_time,
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_from_entries_partial_override_keeps_other_default() {
        let settings =
            Settings::from_entries(vec![entry(FUEL_RATE_PER_KM_KEY, "11")]).unwrap();

        assert_eq!(settings.fuel_rate_per_km, Decimal::from(11));
        assert_eq!(
            settings.late_arrival_time,
            Settings::default().late_arrival_time
        );
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let settings =
            Settings::from_entries(vec![entry("COMPANY_NAME", "Acme")]).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_rate_is_an_error() {
        let result = Settings::from_entries(vec![entry(FUEL_RATE_PER_KM_KEY, "nine")]);

        match result {
            Err(EngineError::InvalidSetting { key, value, .. }) => {
                assert_eq!(key, FUEL_RATE_PER_KM_KEY);
                assert_eq!(value, "nine");
            }
            other => panic!("Expected InvalidSetting error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_threshold_is_an_error() {
        let result = Settings::from_entries(vec![entry(LATE_ARRIVAL_TIME_KEY, "25:00")]);
        assert!(result.is_err());
    }
}
