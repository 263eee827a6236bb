//! Attendance cycle calendar calculations.
//!
//! The organization reports attendance over a custom cycle running from the
//! 26th of one month to the 25th of the next, instead of calendar months.
//! This module computes the current and historical cycles from a reference
//! date. All date arithmetic is by pure construction; no shared date value
//! is ever mutated in place.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// The day of month on which every attendance cycle starts.
pub const CYCLE_START_DAY: u32 = 26;

/// The day of month on which every attendance cycle ends.
pub const CYCLE_END_DAY: u32 = 25;

/// One attendance reporting cycle.
///
/// Invariants: `start_date` falls on the 26th, `end_date` falls on the 25th
/// of the following month. Constructed fresh per query; never persisted.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::current_cycle;
/// use chrono::NaiveDate;
///
/// let reference = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
/// let cycle = current_cycle(reference);
/// assert_eq!(cycle.start_date, NaiveDate::from_ymd_opt(2024, 12, 26).unwrap());
/// assert_eq!(cycle.end_date, NaiveDate::from_ymd_opt(2025, 1, 25).unwrap());
/// assert_eq!(cycle.label, "26 Dec 2024 - 25 Jan 2025");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    /// The first day of the cycle (always the 26th).
    pub start_date: NaiveDate,
    /// The last day of the cycle (always the 25th of the following month).
    pub end_date: NaiveDate,
    /// Human-readable label, e.g. `"26 Jan - 25 Feb 2025"`.
    pub label: String,
}

impl Cycle {
    /// Checks if a given date falls within this cycle, inclusive of both ends.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::calculation::current_cycle;
    /// use chrono::NaiveDate;
    ///
    /// let cycle = current_cycle(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    /// assert!(cycle.contains_date(cycle.start_date));
    /// assert!(cycle.contains_date(cycle.end_date));
    /// assert!(!cycle.contains_date(NaiveDate::from_ymd_opt(2025, 3, 26).unwrap()));
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Builds the cycle whose start is the given 26th-of-month date.
///
/// The end date is the 25th of the month after the start. Day 25 exists in
/// every month, so no clamping is needed.
fn cycle_from_start(start_date: NaiveDate) -> Cycle {
    let end_date = start_date
        .checked_add_months(Months::new(1))
        .and_then(|d| d.with_day(CYCLE_END_DAY))
        .expect("cycle end date within chrono's representable range");

    Cycle {
        label: format_cycle_label(start_date, end_date),
        start_date,
        end_date,
    }
}

/// Formats a cycle label from its boundary dates.
///
/// The start year is included only when the cycle crosses a year boundary.
fn format_cycle_label(start_date: NaiveDate, end_date: NaiveDate) -> String {
    let start_month = start_date.format("%b");
    let end_month = end_date.format("%b");

    if start_date.year() == end_date.year() {
        format!(
            "26 {} - 25 {} {}",
            start_month,
            end_month,
            end_date.year()
        )
    } else {
        format!(
            "26 {} {} - 25 {} {}",
            start_month,
            start_date.year(),
            end_month,
            end_date.year()
        )
    }
}

/// Computes the attendance cycle containing the reference date.
///
/// If the reference day is on or after the 26th, the cycle starts on the
/// 26th of the reference month; otherwise it starts on the 26th of the
/// previous month and ends on the 25th of the reference month.
///
/// # Arguments
///
/// * `reference` - The date to compute the cycle for (typically today).
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::current_cycle;
/// use chrono::NaiveDate;
///
/// // On the 26th the new cycle has just begun
/// let cycle = current_cycle(NaiveDate::from_ymd_opt(2025, 1, 26).unwrap());
/// assert_eq!(cycle.start_date, NaiveDate::from_ymd_opt(2025, 1, 26).unwrap());
/// assert_eq!(cycle.end_date, NaiveDate::from_ymd_opt(2025, 2, 25).unwrap());
///
/// // On the 25th the previous month's cycle is still running
/// let cycle = current_cycle(NaiveDate::from_ymd_opt(2025, 1, 25).unwrap());
/// assert_eq!(cycle.start_date, NaiveDate::from_ymd_opt(2024, 12, 26).unwrap());
/// ```
pub fn current_cycle(reference: NaiveDate) -> Cycle {
    let start_date = if reference.day() >= CYCLE_START_DAY {
        reference.with_day(CYCLE_START_DAY)
    } else {
        reference
            .checked_sub_months(Months::new(1))
            .and_then(|d| d.with_day(CYCLE_START_DAY))
    }
    .expect("cycle start date within chrono's representable range");

    cycle_from_start(start_date)
}

/// Computes the attendance cycle a number of months away from the current one.
///
/// The current cycle's start date is shifted by `offset` months (negative
/// for past cycles) and the end date is recomputed from the shifted start.
///
/// # Arguments
///
/// * `reference` - The date anchoring the current cycle.
/// * `offset` - Number of cycles to shift; negative for past, positive for
///   future, zero for the current cycle.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::cycle_with_offset;
/// use chrono::NaiveDate;
///
/// let reference = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let cycle = cycle_with_offset(reference, -2);
/// assert_eq!(cycle.start_date, NaiveDate::from_ymd_opt(2024, 12, 26).unwrap());
/// assert_eq!(cycle.end_date, NaiveDate::from_ymd_opt(2025, 1, 25).unwrap());
/// ```
pub fn cycle_with_offset(reference: NaiveDate, offset: i32) -> Cycle {
    let current = current_cycle(reference);

    let shifted_start = if offset >= 0 {
        current
            .start_date
            .checked_add_months(Months::new(offset as u32))
    } else {
        current
            .start_date
            .checked_sub_months(Months::new(offset.unsigned_abs()))
    }
    .expect("shifted cycle start within chrono's representable range");

    cycle_from_start(shifted_start)
}

/// Generates the current cycle plus the preceding `count` cycles.
///
/// Cycles are ordered most-recent-first: offsets `0, -1, ..., -count`,
/// giving `count + 1` entries in total. Used to populate cycle selectors.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::past_cycles;
/// use chrono::NaiveDate;
///
/// let reference = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// let cycles = past_cycles(reference, 6);
/// assert_eq!(cycles.len(), 7);
/// assert!(cycles[0].start_date > cycles[1].start_date);
/// ```
pub fn past_cycles(reference: NaiveDate, count: u32) -> Vec<Cycle> {
    (0..=count)
        .map(|i| cycle_with_offset(reference, -(i as i32)))
        .collect()
}
