//! Runtime configuration for the attendance engine.
//!
//! This module provides the [`Settings`] snapshot (fuel rate, late-arrival
//! threshold) injected into calculation calls, built either from the
//! backend's key-value store rows or from a YAML settings file.
//!
//! # Example
//!
//! ```
//! use attendance_engine::config::Settings;
//!
//! let settings = Settings::from_entries(vec![
//!     ("FUEL_RATE_PER_KM".to_string(), "9.5".to_string()),
//! ]).unwrap();
//! println!("Rate: {}", settings.fuel_rate_per_km);
//! ```

mod loader;
mod types;

pub use loader::SettingsLoader;
pub use types::{FUEL_RATE_PER_KM_KEY, LATE_ARRIVAL_TIME_KEY, Settings};
