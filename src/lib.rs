//! Attendance and fuel allowance calculation engine
//!
//! This crate provides the calculation core for a workforce management
//! system: custom 26th-to-25th attendance cycles, check-in status
//! derivation, fuel allowance aggregation, and the CSV import/export
//! formats built on top of them.

#![warn(missing_docs)]

pub mod admin;
pub mod calculation;
pub mod config;
pub mod csv;
pub mod error;
pub mod models;
pub mod store;
