//! Fuel report models.
//!
//! This module contains the [`FuelReport`] and [`FuelLineItem`] entities
//! plus the derived [`FuelTotals`] and [`YearMonth`] grouping key.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One job/area/distance entry within a single day's fuel report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelLineItem {
    /// The job number the travel was for.
    pub job_no: String,
    /// The area travelled to.
    pub area: String,
    /// Distance travelled in kilometres. Never negative.
    pub km: Decimal,
}

/// A single day's fuel reimbursement report for one employee.
///
/// Invariants: `total_km` is the exact sum of item distances and
/// `total_amount` equals `total_km × rate` at the time the report was
/// computed. Both are stored at full precision; rounding happens only at
/// presentation time. Editing replaces the full item set and recomputes
/// the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelReport {
    /// Unique identifier for the report.
    pub id: Uuid,
    /// The employee the report belongs to.
    pub employee_id: Uuid,
    /// The date the travel took place.
    pub date: NaiveDate,
    /// The job line items making up the report.
    pub items: Vec<FuelLineItem>,
    /// Sum of all item distances, unrounded.
    pub total_km: Decimal,
    /// `total_km` multiplied by the fuel rate in effect at computation time.
    pub total_amount: Decimal,
}

/// Distance and amount totals derived from one or more fuel reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FuelTotals {
    /// Total distance in kilometres.
    pub total_km: Decimal,
    /// Total reimbursement amount.
    pub total_amount: Decimal,
}

/// A calendar month used as a grouping key for fuel summaries.
///
/// Orders chronologically and displays as `YYYY-MM`. Note this is the
/// plain calendar month of the report date, not the attendance cycle.
///
/// # Example
///
/// ```
/// use attendance_engine::models::YearMonth;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
/// let month = YearMonth::from_date(date);
/// assert_eq!(month.to_string(), "2025-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    /// The calendar year.
    pub year: i32,
    /// The calendar month, 1 through 12.
    pub month: u32,
}

impl YearMonth {
    /// Extracts the calendar month key from a date.
    pub fn from_date(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_year_month_display_pads_month() {
        let month = YearMonth {
            year: 2025,
            month: 3,
        };
        assert_eq!(month.to_string(), "2025-03");
    }

    #[test]
    fn test_year_month_orders_chronologically() {
        let dec_2024 = YearMonth {
            year: 2024,
            month: 12,
        };
        let jan_2025 = YearMonth {
            year: 2025,
            month: 1,
        };
        let feb_2025 = YearMonth {
            year: 2025,
            month: 2,
        };
        assert!(dec_2024 < jan_2025);
        assert!(jan_2025 < feb_2025);
    }

    #[test]
    fn test_year_month_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 26).unwrap();
        assert_eq!(
            YearMonth::from_date(date),
            YearMonth {
                year: 2024,
                month: 12
            }
        );
    }

    #[test]
    fn test_serialize_fuel_report() {
        let report = FuelReport {
            id: Uuid::nil(),
            employee_id: Uuid::nil(),
            date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
            items: vec![FuelLineItem {
                job_no: "JOB-001".to_string(),
                area: "North Area".to_string(),
                km: dec("45"),
            }],
            total_km: dec("45"),
            total_amount: dec("405"),
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"date\":\"2025-01-20\""));
        assert!(json.contains("\"job_no\":\"JOB-001\""));

        let deserialized: FuelReport = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, report);
    }

    #[test]
    fn test_fuel_totals_default_is_zero() {
        let totals = FuelTotals::default();
        assert_eq!(totals.total_km, Decimal::ZERO);
        assert_eq!(totals.total_amount, Decimal::ZERO);
    }
}
