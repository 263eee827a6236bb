//! Persistence seams for the attendance engine.
//!
//! The hosted backend owns all entities; the engine only computes derived
//! views. These traits re-express the backend's row-level CRUD surface as
//! abstract repositories that callers implement over their persistence
//! layer. The [`MemoryStore`] implementation backs the test suites and can
//! serve as a test double for callers.

mod memory;

pub use memory::MemoryStore;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, FuelLineItem, FuelReport};

/// Read/write access to attendance records.
///
/// The store enforces at most one record per (employee, date): `insert`
/// rejects a duplicate with a conflict error while `upsert` replaces the
/// existing record.
pub trait AttendanceRepository {
    /// Fetches records within a date range, optionally for one employee,
    /// ordered by date then employee.
    fn records_in_range(
        &self,
        employee_id: Option<Uuid>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>>;

    /// Inserts a new record. Fails with
    /// [`EngineError::DuplicateAttendance`](crate::error::EngineError::DuplicateAttendance)
    /// if a record already exists for the (employee, date) pair.
    fn insert(&mut self, record: AttendanceRecord) -> EngineResult<()>;

    /// Inserts a record, replacing any existing record for the same
    /// (employee, date) pair.
    fn upsert(&mut self, record: AttendanceRecord) -> EngineResult<()>;
}

/// Read/write access to fuel reports and their line items.
pub trait FuelRepository {
    /// Fetches reports within a date range, optionally for one employee,
    /// ordered by date then employee.
    fn reports_in_range(
        &self,
        employee_id: Option<Uuid>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> EngineResult<Vec<FuelReport>>;

    /// Inserts a new fuel report with its items.
    fn insert_report(&mut self, report: FuelReport) -> EngineResult<()>;

    /// Replaces a report's full item set and recomputes its stored totals
    /// at the given rate. Item edits are never incremental patches.
    fn replace_items(
        &mut self,
        report_id: Uuid,
        items: Vec<FuelLineItem>,
        rate_per_km: Decimal,
    ) -> EngineResult<()>;
}

/// Resolution of employee identity.
pub trait EmployeeDirectory {
    /// Resolves an email address to the employee's internal identifier.
    /// Returns `None` for unknown emails; lookups are case-insensitive.
    fn id_for_email(&self, email: &str) -> Option<Uuid>;

    /// Looks up an employee's display name.
    fn name_of(&self, id: Uuid) -> Option<String>;
}
