//! Fuel allowance aggregation.
//!
//! This module computes per-report distance and reimbursement totals at a
//! configurable rate per kilometre, distributes a report's amount back
//! across its line items, and rolls reports up into employee/month
//! summaries. Totals are exact; rounding happens only at presentation time.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{FuelLineItem, FuelReport, FuelTotals, YearMonth};

/// Computes the distance and amount totals for a report's line items.
///
/// `total_km` is the exact sum of item distances with no rounding;
/// `total_amount` is `total_km × rate_per_km`, stored at full precision.
///
/// # Arguments
///
/// * `items` - The report's line items.
/// * `rate_per_km` - The fuel rate in effect, from configuration.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::report_totals;
/// use attendance_engine::models::FuelLineItem;
/// use rust_decimal::Decimal;
///
/// let items = vec![
///     FuelLineItem { job_no: "JOB-001".into(), area: "North Area".into(), km: Decimal::from(45) },
///     FuelLineItem { job_no: "JOB-002".into(), area: "South Area".into(), km: Decimal::from(30) },
/// ];
/// let totals = report_totals(&items, Decimal::from(9));
/// assert_eq!(totals.total_km, Decimal::from(75));
/// assert_eq!(totals.total_amount, Decimal::from(675));
/// ```
pub fn report_totals(items: &[FuelLineItem], rate_per_km: Decimal) -> FuelTotals {
    let total_km: Decimal = items.iter().map(|item| item.km).sum();

    FuelTotals {
        total_km,
        total_amount: total_km * rate_per_km,
    }
}

/// Distributes a report's total amount back onto one of its line items.
///
/// Used for per-job reporting, where the persisted report-level amount must
/// be shown against each item: the item receives the share of the total
/// proportional to its distance. A report with zero total distance
/// allocates zero to every item.
///
/// # Arguments
///
/// * `item` - The line item to allocate for.
/// * `report_total_km` - The report's total distance.
/// * `report_total_amount` - The report's persisted total amount.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::allocate_item_amount;
/// use attendance_engine::models::FuelLineItem;
/// use rust_decimal::Decimal;
///
/// let item = FuelLineItem {
///     job_no: "JOB-002".into(),
///     area: "South Area".into(),
///     km: Decimal::from(30),
/// };
/// let amount = allocate_item_amount(&item, Decimal::from(75), Decimal::from(675));
/// assert_eq!(amount, Decimal::from(270));
/// ```
pub fn allocate_item_amount(
    item: &FuelLineItem,
    report_total_km: Decimal,
    report_total_amount: Decimal,
) -> Decimal {
    if report_total_km.is_zero() {
        return Decimal::ZERO;
    }

    item.km / report_total_km * report_total_amount
}

/// Rolls fuel reports up into totals per employee per calendar month.
///
/// The grouping key is the report date's calendar month, not the
/// attendance cycle. Sums are plain accumulation with no weighting. The
/// returned map iterates in (employee, month) order.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::aggregate_by_employee_and_month;
/// use attendance_engine::models::{FuelReport, YearMonth};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let employee = Uuid::new_v4();
/// let report = FuelReport {
///     id: Uuid::new_v4(),
///     employee_id: employee,
///     date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
///     items: vec![],
///     total_km: Decimal::from(45),
///     total_amount: Decimal::from(405),
/// };
///
/// let summary = aggregate_by_employee_and_month(&[report]);
/// let month = YearMonth { year: 2025, month: 1 };
/// assert_eq!(summary[&(employee, month)].total_km, Decimal::from(45));
/// ```
pub fn aggregate_by_employee_and_month(
    reports: &[FuelReport],
) -> BTreeMap<(Uuid, YearMonth), FuelTotals> {
    let mut summary: BTreeMap<(Uuid, YearMonth), FuelTotals> = BTreeMap::new();

    for report in reports {
        let key = (report.employee_id, YearMonth::from_date(report.date));
        let entry = summary.entry(key).or_default();
        entry.total_km += report.total_km;
        entry.total_amount += report.total_amount;
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn item(job_no: &str, km: &str) -> FuelLineItem {
        FuelLineItem {
            job_no: job_no.to_string(),
            area: "North Area".to_string(),
            km: dec(km),
        }
    }

    fn report(employee_id: Uuid, date: NaiveDate, km: &str, amount: &str) -> FuelReport {
        FuelReport {
            id: Uuid::new_v4(),
            employee_id,
            date,
            items: vec![],
            total_km: dec(km),
            total_amount: dec(amount),
        }
    }

    /// FA-001: totals across two items at the default rate
    #[test]
    fn test_fa_001_report_totals_two_items() {
        let items = vec![item("JOB-001", "45"), item("JOB-002", "30")];
        let totals = report_totals(&items, dec("9"));

        assert_eq!(totals.total_km, dec("75"));
        assert_eq!(totals.total_amount, dec("675"));
    }

    /// FA-002: totals of an empty item set are zero
    #[test]
    fn test_fa_002_report_totals_empty() {
        let totals = report_totals(&[], dec("9"));
        assert_eq!(totals.total_km, Decimal::ZERO);
        assert_eq!(totals.total_amount, Decimal::ZERO);
    }

    /// FA-003: fractional distances are summed exactly, not rounded
    #[test]
    fn test_fa_003_report_totals_exact_fractions() {
        let items = vec![item("JOB-001", "12.35"), item("JOB-002", "7.05")];
        let totals = report_totals(&items, dec("9.5"));

        assert_eq!(totals.total_km, dec("19.40"));
        assert_eq!(totals.total_amount, dec("184.300"));
    }

    /// FA-004: item allocation is proportional to distance
    #[test]
    fn test_fa_004_allocate_proportional_share() {
        let amount = allocate_item_amount(&item("JOB-002", "30"), dec("75"), dec("675"));
        assert_eq!(amount, dec("270"));
    }

    /// FA-005: zero total distance allocates zero to every item
    #[test]
    fn test_fa_005_allocate_zero_total_km() {
        let amount = allocate_item_amount(&item("JOB-001", "0"), dec("0"), dec("0"));
        assert_eq!(amount, Decimal::ZERO);
    }

    #[test]
    fn test_allocations_sum_to_report_amount() {
        let items = vec![item("JOB-001", "45"), item("JOB-002", "30")];
        let totals = report_totals(&items, dec("9"));

        let allocated: Decimal = items
            .iter()
            .map(|i| allocate_item_amount(i, totals.total_km, totals.total_amount))
            .sum();
        assert_eq!(allocated, totals.total_amount);
    }

    #[test]
    fn test_aggregate_groups_by_employee_and_month() {
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let jan_10 = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let jan_28 = NaiveDate::from_ymd_opt(2025, 1, 28).unwrap();
        let feb_03 = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();

        let reports = vec![
            report(alice, jan_10, "45", "405"),
            report(alice, jan_28, "30", "270"),
            report(alice, feb_03, "10", "90"),
            report(bob, jan_10, "20", "180"),
        ];

        let summary = aggregate_by_employee_and_month(&reports);
        assert_eq!(summary.len(), 3);

        let jan = YearMonth {
            year: 2025,
            month: 1,
        };
        let feb = YearMonth {
            year: 2025,
            month: 2,
        };

        assert_eq!(summary[&(alice, jan)].total_km, dec("75"));
        assert_eq!(summary[&(alice, jan)].total_amount, dec("675"));
        assert_eq!(summary[&(alice, feb)].total_km, dec("10"));
        assert_eq!(summary[&(bob, jan)].total_amount, dec("180"));
    }

    #[test]
    fn test_aggregate_uses_calendar_month_not_cycle() {
        // 26 Jan and 28 Jan fall in the same attendance cycle as 25 Feb,
        // but aggregation keys on the calendar month
        let employee = Uuid::new_v4();
        let reports = vec![
            report(
                employee,
                NaiveDate::from_ymd_opt(2025, 1, 28).unwrap(),
                "10",
                "90",
            ),
            report(
                employee,
                NaiveDate::from_ymd_opt(2025, 2, 25).unwrap(),
                "10",
                "90",
            ),
        ];

        let summary = aggregate_by_employee_and_month(&reports);
        assert_eq!(summary.len(), 2);
    }

    #[test]
    fn test_aggregate_empty_input() {
        assert!(aggregate_by_employee_and_month(&[]).is_empty());
    }
}
