//! Core data models for the attendance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod fuel;

pub use attendance::{AttendanceRecord, AttendanceStatus, AttendanceSummary};
pub use employee::{CurrentUser, Employee, Role};
pub use fuel::{FuelLineItem, FuelReport, FuelTotals, YearMonth};
