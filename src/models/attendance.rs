//! Attendance record and summary models.
//!
//! This module contains the [`AttendanceRecord`] entity read from the
//! persistence layer and the derived [`AttendanceSummary`] figures.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The attendance classification for a single day.
///
/// `Present` and `Late` can be derived from a check-in time against the
/// configured late threshold; `Absent` is only ever set by explicit user
/// choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Checked in on or before the late threshold.
    Present,
    /// Checked in after the late threshold.
    Late,
    /// Did not attend. Never auto-derived.
    Absent,
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "present"),
            AttendanceStatus::Late => write!(f, "late"),
            AttendanceStatus::Absent => write!(f, "absent"),
        }
    }
}

/// One employee's attendance record for one date.
///
/// The persistence layer enforces at most one record per (employee, date)
/// via its upsert-on-conflict contract; the engine treats records as
/// read-only input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: Uuid,
    /// The date the attendance was recorded for.
    pub date: NaiveDate,
    /// Check-in time, if the employee attended.
    pub check_in: Option<NaiveTime>,
    /// Check-out time, if recorded.
    pub check_out: Option<NaiveTime>,
    /// The attendance classification.
    pub status: AttendanceStatus,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Derived attendance figures for a set of records. Never stored.
///
/// `total` is the number of records and `percentage` is the share of
/// present records, rounded to a whole number.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceSummary;
///
/// let summary = AttendanceSummary {
///     present: 5,
///     absent: 3,
///     late: 2,
///     total: 10,
///     percentage: 50,
/// };
/// assert_eq!(summary.total, summary.present + summary.absent + summary.late);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Number of records with status `Present`.
    pub present: u32,
    /// Number of records with status `Absent`.
    pub absent: u32,
    /// Number of records with status `Late`.
    pub late: u32,
    /// Total number of records.
    pub total: u32,
    /// Rounded share of present records, 0 when there are no records.
    pub percentage: u32,
}

impl AttendanceSummary {
    /// The summary of an empty record set: all fields zero.
    pub const EMPTY: AttendanceSummary = AttendanceSummary {
        present: 0,
        absent: 0,
        late: 0,
        total: 0,
        percentage: 0,
    };
}
