//! Error types for the attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during attendance and fuel
//! report processing.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// A single rejected row from a CSV import batch.
///
/// Import validation is all-or-nothing: every failing row is collected and
/// reported together so the caller can surface the complete list at once.
///
/// # Example
///
/// ```
/// use attendance_engine::error::CsvRowError;
///
/// let error = CsvRowError {
///     line: 3,
///     field: "km".to_string(),
///     message: "must be a non-negative number".to_string(),
/// };
/// assert_eq!(error.to_string(), "Line 3: km: must be a non-negative number");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Line {line}: {field}: {message}")]
pub struct CsvRowError {
    /// The 1-based line number in the CSV file, counting the header as line 1.
    pub line: usize,
    /// The field that failed validation.
    pub field: String,
    /// A description of what made the field invalid.
    pub message: String,
}

/// The main error type for the attendance engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::InvalidTime {
///     value: "25:99".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time '25:99': expected HH:MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A time string did not match the `HH:MM` format.
    #[error("Invalid time '{value}': expected HH:MM")]
    InvalidTime {
        /// The value that failed to parse.
        value: String,
    },

    /// A date string did not match the `YYYY-MM-DD` format.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The value that failed to parse.
        value: String,
    },

    /// An email address was syntactically invalid.
    #[error("Invalid email address '{value}'")]
    InvalidEmail {
        /// The value that failed validation.
        value: String,
    },

    /// A distance value was not a non-negative decimal number.
    #[error("Invalid distance '{value}': must be a non-negative number")]
    InvalidDistance {
        /// The value that failed to parse.
        value: String,
    },

    /// A required field was empty or missing.
    #[error("Missing required field '{field}'")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// A CSV import batch contained invalid rows. Nothing was imported.
    #[error("CSV import rejected: {} invalid row(s)", errors.len())]
    CsvBatchRejected {
        /// Every failing row with its line number and reason.
        errors: Vec<CsvRowError>,
    },

    /// One or more employee emails in an import batch could not be resolved.
    /// Nothing was imported.
    #[error("Unresolved employee email(s): {}", emails.join(", "))]
    UnresolvedEmails {
        /// The emails that did not match any employee.
        emails: Vec<String>,
    },

    /// An employee reference did not match any known employee.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was not found.
        id: Uuid,
    },

    /// A fuel report reference did not match any stored report.
    #[error("Fuel report not found: {id}")]
    ReportNotFound {
        /// The identifier that was not found.
        id: Uuid,
    },

    /// An attendance record already exists for the employee on the given date.
    #[error("Attendance already recorded for employee {employee_id} on {date}")]
    DuplicateAttendance {
        /// The employee with the conflicting record.
        employee_id: Uuid,
        /// The date of the conflicting record.
        date: NaiveDate,
    },

    /// A known settings key held a value that could not be parsed.
    /// Missing keys are not errors; documented defaults apply instead.
    #[error("Invalid value '{value}' for setting '{key}': {message}")]
    InvalidSetting {
        /// The settings key.
        key: String,
        /// The value that failed to parse.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A settings file was not found at the specified path.
    #[error("Settings file not found: {path}")]
    SettingsNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    SettingsParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requesting user's role does not permit the attempted action.
    #[error("Role '{role}' is not permitted to {action}")]
    Unauthorized {
        /// The role of the requesting user.
        role: String,
        /// The action that was attempted.
        action: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
