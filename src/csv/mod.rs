//! CSV import and export formats for the attendance engine.
//!
//! This module implements the fuel import format (validated
//! all-or-nothing batches grouped into reports) and the fuel/attendance
//! export formats, with RFC4180-style quoting throughout.

mod export;
mod fields;
mod import;

pub use export::{
    ATTENDANCE_EXPORT_HEADER, FUEL_EXPORT_HEADER, attendance_csv, fuel_details_csv,
    fuel_import_template,
};
pub use fields::{escape_csv_field, split_csv_line};
pub use import::{FUEL_IMPORT_HEADER, FuelCsvRow, import_fuel_reports, parse_fuel_csv};

pub(crate) use import::is_valid_email;
