//! Attendance status derivation and summarisation.
//!
//! This module derives an attendance status from a check-in time against
//! the configured late threshold, and reduces a set of attendance records
//! to present/late/absent counts with an attendance percentage.

use chrono::{NaiveTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus, AttendanceSummary};

/// Parses a strict `HH:MM` time string.
///
/// Malformed input is a validation error reported to the caller, never
/// silently defaulted.
///
/// # Arguments
///
/// * `value` - The time string, e.g. `"10:15"`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::parse_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(
///     parse_time("10:15").unwrap(),
///     NaiveTime::from_hms_opt(10, 15, 0).unwrap()
/// );
/// assert!(parse_time("10:75").is_err());
/// assert!(parse_time("about noon").is_err());
/// ```
pub fn parse_time(value: &str) -> EngineResult<NaiveTime> {
    let invalid = || EngineError::InvalidTime {
        value: value.to_string(),
    };

    // Two-digit hours and minutes only; chrono alone would accept "9:30"
    if value.len() != 5 || value.as_bytes()[2] != b':' {
        return Err(invalid());
    }

    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| invalid())
}

/// Converts a time of day to whole minutes since midnight.
fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Derives the attendance status from a check-in time.
///
/// A check-in strictly after the late threshold is `Late`. An on-time
/// check-in reverts a previously `Late` status to `Present`; any other
/// previous status is kept unchanged. `Absent` is never derived here; it
/// is only settable by explicit user choice.
///
/// # Arguments
///
/// * `check_in` - The employee's check-in time.
/// * `late_threshold` - The configured late-arrival threshold.
/// * `previous` - The record's current status (defaults to `Present` on
///   first entry).
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{derive_status, parse_time};
/// use attendance_engine::models::AttendanceStatus;
///
/// let threshold = parse_time("10:15").unwrap();
///
/// let status = derive_status(parse_time("10:16").unwrap(), threshold, AttendanceStatus::Present);
/// assert_eq!(status, AttendanceStatus::Late);
///
/// // On-time check-in reverts an earlier Late
/// let status = derive_status(parse_time("10:15").unwrap(), threshold, AttendanceStatus::Late);
/// assert_eq!(status, AttendanceStatus::Present);
/// ```
pub fn derive_status(
    check_in: NaiveTime,
    late_threshold: NaiveTime,
    previous: AttendanceStatus,
) -> AttendanceStatus {
    if minutes_since_midnight(check_in) > minutes_since_midnight(late_threshold) {
        AttendanceStatus::Late
    } else if previous == AttendanceStatus::Late {
        AttendanceStatus::Present
    } else {
        previous
    }
}

/// Reduces a set of attendance records to summary counts and a percentage.
///
/// The percentage is the share of `Present` records out of all records,
/// rounded to a whole number (half away from zero). An empty input yields
/// an all-zero summary rather than a division error.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::summarize;
///
/// let summary = summarize(&[]);
/// assert_eq!(summary.total, 0);
/// assert_eq!(summary.percentage, 0);
/// ```
pub fn summarize(records: &[AttendanceRecord]) -> AttendanceSummary {
    let mut present = 0u32;
    let mut absent = 0u32;
    let mut late = 0u32;

    for record in records {
        match record.status {
            AttendanceStatus::Present => present += 1,
            AttendanceStatus::Absent => absent += 1,
            AttendanceStatus::Late => late += 1,
        }
    }

    let total = present + absent + late;
    let percentage = if total > 0 {
        (Decimal::from(present) * Decimal::from(100u32) / Decimal::from(total))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or(0)
    } else {
        0
    };

    AttendanceSummary {
        present,
        absent,
        late,
        total,
        percentage,
    }
}
