//! CSV export formats.
//!
//! Renders fuel report details and attendance records as CSV text for
//! download. Amounts and distances are rounded to two decimals here, at
//! presentation time only; stored values keep full precision.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::calculation::allocate_item_amount;
use crate::models::{AttendanceRecord, FuelReport};
use crate::store::EmployeeDirectory;

use super::fields::escape_csv_field;
use super::import::FUEL_IMPORT_HEADER;

/// Header row for the fuel details export.
pub const FUEL_EXPORT_HEADER: &str = "Date,Job No,Area,KM,Amount";

/// Header row for the attendance export.
pub const ATTENDANCE_EXPORT_HEADER: &str = "Employee,Date,Check-in,Check-out,Status,Notes";

/// Formats a decimal with two places for presentation.
fn format_2dp(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Renders fuel reports as per-item detail rows.
///
/// Each line item becomes one row; the report's persisted total amount is
/// distributed across its items in proportion to distance, so the export
/// shows a per-job amount even though only report totals are stored.
///
/// # Example
///
/// ```
/// use attendance_engine::csv::fuel_details_csv;
/// use attendance_engine::models::{FuelLineItem, FuelReport};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let report = FuelReport {
///     id: Uuid::new_v4(),
///     employee_id: Uuid::new_v4(),
///     date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
///     items: vec![FuelLineItem {
///         job_no: "JOB-001".into(),
///         area: "North Area".into(),
///         km: Decimal::from(45),
///     }],
///     total_km: Decimal::from(45),
///     total_amount: Decimal::from(405),
/// };
///
/// let csv = fuel_details_csv(&[report]);
/// assert!(csv.starts_with("Date,Job No,Area,KM,Amount\n"));
/// assert!(csv.contains("2025-01-20,JOB-001,North Area,45.00,405.00"));
/// ```
pub fn fuel_details_csv(reports: &[FuelReport]) -> String {
    let mut lines = vec![FUEL_EXPORT_HEADER.to_string()];

    for report in reports {
        for item in &report.items {
            let amount = allocate_item_amount(item, report.total_km, report.total_amount);
            lines.push(
                [
                    report.date.format("%Y-%m-%d").to_string(),
                    escape_csv_field(&item.job_no),
                    escape_csv_field(&item.area),
                    format_2dp(item.km),
                    format_2dp(amount),
                ]
                .join(","),
            );
        }
    }

    lines.join("\n") + "\n"
}

/// Renders attendance records for export.
///
/// Employee ids are resolved to display names through the directory;
/// unknown ids fall back to the raw id. Missing check-in/check-out times
/// are rendered as `N/A`.
pub fn attendance_csv(records: &[AttendanceRecord], directory: &impl EmployeeDirectory) -> String {
    let mut lines = vec![ATTENDANCE_EXPORT_HEADER.to_string()];

    for record in records {
        let name = directory
            .name_of(record.employee_id)
            .unwrap_or_else(|| record.employee_id.to_string());
        let check_in = record
            .check_in
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let check_out = record
            .check_out
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "N/A".to_string());

        lines.push(
            [
                escape_csv_field(&name),
                record.date.format("%Y-%m-%d").to_string(),
                check_in,
                check_out,
                record.status.to_string(),
                escape_csv_field(record.notes.as_deref().unwrap_or("")),
            ]
            .join(","),
        );
    }

    lines.join("\n") + "\n"
}

/// Returns the downloadable fuel import template: the required header and
/// two example rows showing a two-item day.
pub fn fuel_import_template() -> String {
    format!(
        "{}\nexample@company.com,2025-01-20,JOB-001,North Area,45\nexample@company.com,2025-01-20,JOB-002,South Area,30\n",
        FUEL_IMPORT_HEADER
    )
}
