//! Fuel report CSV import.
//!
//! Parses and validates the fuel import format, resolves employee emails
//! to internal identifiers, and groups rows into one report per
//! (employee, date). Validation is all-or-nothing: a batch with any
//! invalid row or unresolved email is rejected in full, reporting every
//! failure, and no reports are produced.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::report_totals;
use crate::error::{CsvRowError, EngineError, EngineResult};
use crate::models::{FuelLineItem, FuelReport};
use crate::store::EmployeeDirectory;

use super::fields::split_csv_line;

/// The required header row for fuel import files.
pub const FUEL_IMPORT_HEADER: &str = "email,date,job_no,area,km";

/// One validated row of a fuel import file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuelCsvRow {
    /// The employee's email address, used to resolve the internal id.
    pub email: String,
    /// The travel date.
    pub date: NaiveDate,
    /// The job number.
    pub job_no: String,
    /// The area travelled to.
    pub area: String,
    /// Distance in kilometres.
    pub km: Decimal,
}

/// Checks an email address for basic syntactic validity.
pub(crate) fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Checks a distance string: unsigned digits with an optional fraction.
fn is_valid_km(value: &str) -> bool {
    if value.is_empty() || value.starts_with('.') || value.ends_with('.') {
        return false;
    }
    let mut dots = 0;
    for c in value.chars() {
        match c {
            '0'..='9' => {}
            '.' => dots += 1,
            _ => return false,
        }
    }
    dots <= 1
}

/// Validates one data row, appending any field errors.
fn validate_row(line: usize, fields: &[String], errors: &mut Vec<CsvRowError>) -> Option<FuelCsvRow> {
    let mut push = |field: &str, message: &str| {
        errors.push(CsvRowError {
            line,
            field: field.to_string(),
            message: message.to_string(),
        });
    };

    if fields.len() != 5 {
        push("row", &format!("expected 5 fields, found {}", fields.len()));
        return None;
    }

    let email = fields[0].trim();
    let date_str = fields[1].trim();
    let job_no = fields[2].trim();
    let area = fields[3].trim();
    let km_str = fields[4].trim();

    let mut valid = true;

    if !is_valid_email(email) {
        push("email", "invalid email format");
        valid = false;
    }
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok();
    if date.is_none() {
        push("date", "expected YYYY-MM-DD");
        valid = false;
    }
    if job_no.is_empty() {
        push("job_no", "is required");
        valid = false;
    }
    if area.is_empty() {
        push("area", "is required");
        valid = false;
    }
    let km = if is_valid_km(km_str) {
        Decimal::from_str(km_str).ok()
    } else {
        None
    };
    if km.is_none() {
        push("km", "must be a non-negative number");
        valid = false;
    }

    if !valid {
        return None;
    }

    Some(FuelCsvRow {
        email: email.to_string(),
        date: date?,
        job_no: job_no.to_string(),
        area: area.to_string(),
        km: km?,
    })
}

/// Parses and validates a fuel import file.
///
/// The first non-empty line must be the [`FUEL_IMPORT_HEADER`]. Blank
/// lines are skipped. Every data row is validated (email syntax, date
/// format, required job_no/area, non-negative decimal km); any failure
/// rejects the whole batch with the complete list of row errors.
///
/// # Example
///
/// ```
/// use attendance_engine::csv::parse_fuel_csv;
///
/// let text = "email,date,job_no,area,km\n\
///             jane@company.com,2025-01-20,JOB-001,North Area,45\n";
/// let rows = parse_fuel_csv(text).unwrap();
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].job_no, "JOB-001");
/// ```
pub fn parse_fuel_csv(text: &str) -> EngineResult<Vec<FuelCsvRow>> {
    let mut rows = Vec::new();
    let mut errors = Vec::new();
    let mut header_seen = false;

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if !header_seen {
            if !line.eq_ignore_ascii_case(FUEL_IMPORT_HEADER) {
                errors.push(CsvRowError {
                    line: line_no,
                    field: "header".to_string(),
                    message: format!("expected '{}'", FUEL_IMPORT_HEADER),
                });
            }
            header_seen = true;
            continue;
        }

        let fields = split_csv_line(line);
        if let Some(row) = validate_row(line_no, &fields, &mut errors) {
            rows.push(row);
        }
    }

    if !errors.is_empty() {
        warn!(invalid_rows = errors.len(), "Rejected fuel import batch");
        return Err(EngineError::CsvBatchRejected { errors });
    }

    Ok(rows)
}

/// Imports a fuel CSV file into fuel reports.
///
/// After validation, every distinct email is resolved through the
/// directory; a single unresolved email aborts the import with the full
/// unresolved list. Surviving rows are grouped by (email, date) in
/// first-appearance order, and each group becomes one [`FuelReport`] with
/// totals computed at the supplied rate. The caller commits the returned
/// reports; nothing is written here.
///
/// # Arguments
///
/// * `text` - The raw CSV file contents.
/// * `directory` - Email-to-id resolution, typically the profile store.
/// * `rate_per_km` - The fuel rate from configuration.
pub fn import_fuel_reports(
    text: &str,
    directory: &impl EmployeeDirectory,
    rate_per_km: Decimal,
) -> EngineResult<Vec<FuelReport>> {
    let rows = parse_fuel_csv(text)?;

    // Resolve every distinct email before building anything
    let mut resolved: HashMap<String, Uuid> = HashMap::new();
    let mut unresolved: Vec<String> = Vec::new();
    for row in &rows {
        let key = row.email.to_ascii_lowercase();
        if resolved.contains_key(&key) || unresolved.iter().any(|e| e.eq_ignore_ascii_case(&key)) {
            continue;
        }
        match directory.id_for_email(&row.email) {
            Some(id) => {
                resolved.insert(key, id);
            }
            None => unresolved.push(row.email.clone()),
        }
    }

    if !unresolved.is_empty() {
        warn!(
            unresolved = unresolved.len(),
            "Rejected fuel import batch: unknown employee emails"
        );
        return Err(EngineError::UnresolvedEmails { emails: unresolved });
    }

    // Group rows by (email, date) in first-appearance order
    let mut group_index: HashMap<(String, NaiveDate), usize> = HashMap::new();
    let mut groups: Vec<((String, NaiveDate), Vec<FuelLineItem>)> = Vec::new();
    for row in rows {
        let key = (row.email.to_ascii_lowercase(), row.date);
        let item = FuelLineItem {
            job_no: row.job_no,
            area: row.area,
            km: row.km,
        };
        match group_index.get(&key) {
            Some(&i) => groups[i].1.push(item),
            None => {
                group_index.insert(key.clone(), groups.len());
                groups.push((key, vec![item]));
            }
        }
    }

    let reports: Vec<FuelReport> = groups
        .into_iter()
        .map(|((email, date), items)| {
            let totals = report_totals(&items, rate_per_km);
            FuelReport {
                id: Uuid::new_v4(),
                employee_id: resolved[&email],
                date,
                items,
                total_km: totals.total_km,
                total_amount: totals.total_amount,
            }
        })
        .collect();

    info!(reports = reports.len(), "Validated fuel import batch");
    Ok(reports)
}
