//! In-memory repository implementation.
//!
//! Backs the integration test suite and serves as a test double for
//! callers. Mirrors the backend's contracts: unique (employee, date)
//! attendance rows with upsert-on-conflict, full item-set replacement for
//! fuel report edits, and case-insensitive email resolution.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::calculation::report_totals;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Employee, FuelLineItem, FuelReport};

use super::{AttendanceRepository, EmployeeDirectory, FuelRepository};

/// An in-memory implementation of the persistence traits.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{Employee, Role};
/// use attendance_engine::store::{EmployeeDirectory, MemoryStore};
/// use uuid::Uuid;
///
/// let mut store = MemoryStore::new();
/// let id = Uuid::new_v4();
/// store.add_employee(Employee {
///     id,
///     email: "jane@company.com".to_string(),
///     full_name: "Jane Doe".to_string(),
///     role: Role::Employee,
///     active: true,
/// });
///
/// assert_eq!(store.id_for_email("JANE@company.com"), Some(id));
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    employees: Vec<Employee>,
    attendance: HashMap<(Uuid, NaiveDate), AttendanceRecord>,
    fuel_reports: Vec<FuelReport>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an employee profile.
    pub fn add_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Returns a stored fuel report by id.
    pub fn fuel_report(&self, id: Uuid) -> Option<&FuelReport> {
        self.fuel_reports.iter().find(|r| r.id == id)
    }

    /// Number of stored fuel reports.
    pub fn fuel_report_count(&self) -> usize {
        self.fuel_reports.len()
    }
}

impl AttendanceRepository for MemoryStore {
    fn records_in_range(
        &self,
        employee_id: Option<Uuid>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        let mut records: Vec<AttendanceRecord> = self
            .attendance
            .values()
            .filter(|r| r.date >= start_date && r.date <= end_date)
            .filter(|r| employee_id.is_none_or(|id| r.employee_id == id))
            .cloned()
            .collect();

        records.sort_by_key(|r| (r.date, r.employee_id));
        Ok(records)
    }

    fn insert(&mut self, record: AttendanceRecord) -> EngineResult<()> {
        let key = (record.employee_id, record.date);
        if self.attendance.contains_key(&key) {
            return Err(EngineError::DuplicateAttendance {
                employee_id: record.employee_id,
                date: record.date,
            });
        }

        self.attendance.insert(key, record);
        Ok(())
    }

    fn upsert(&mut self, record: AttendanceRecord) -> EngineResult<()> {
        self.attendance
            .insert((record.employee_id, record.date), record);
        Ok(())
    }
}

impl FuelRepository for MemoryStore {
    fn reports_in_range(
        &self,
        employee_id: Option<Uuid>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> EngineResult<Vec<FuelReport>> {
        let mut reports: Vec<FuelReport> = self
            .fuel_reports
            .iter()
            .filter(|r| r.date >= start_date && r.date <= end_date)
            .filter(|r| employee_id.is_none_or(|id| r.employee_id == id))
            .cloned()
            .collect();

        reports.sort_by_key(|r| (r.date, r.employee_id));
        Ok(reports)
    }

    fn insert_report(&mut self, report: FuelReport) -> EngineResult<()> {
        self.fuel_reports.push(report);
        Ok(())
    }

    fn replace_items(
        &mut self,
        report_id: Uuid,
        items: Vec<FuelLineItem>,
        rate_per_km: Decimal,
    ) -> EngineResult<()> {
        let report = self
            .fuel_reports
            .iter_mut()
            .find(|r| r.id == report_id)
            .ok_or(EngineError::ReportNotFound { id: report_id })?;

        let totals = report_totals(&items, rate_per_km);
        report.items = items;
        report.total_km = totals.total_km;
        report.total_amount = totals.total_amount;
        Ok(())
    }
}

impl EmployeeDirectory for MemoryStore {
    fn id_for_email(&self, email: &str) -> Option<Uuid> {
        // Deactivated profiles are kept but no longer resolvable for new records
        self.employees
            .iter()
            .find(|e| e.active && e.email.eq_ignore_ascii_case(email))
            .map(|e| e.id)
    }

    fn name_of(&self, id: Uuid) -> Option<String> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.full_name.clone())
    }
}
