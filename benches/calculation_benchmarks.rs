//! Performance benchmarks for the attendance engine.
//!
//! This benchmark suite verifies that the calculation core meets performance targets:
//! - Cycle resolution for 12 months of history: < 100μs mean
//! - Summarizing a full cycle of attendance: < 100μs mean
//! - Aggregating a year of fuel reports: < 5ms mean
//! - Importing a 1000-row fuel CSV: < 50ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Duration, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use uuid::Uuid;

use attendance_engine::calculation::{aggregate_by_employee_and_month, past_cycles, summarize};
use attendance_engine::csv::import_fuel_reports;
use attendance_engine::models::{
    AttendanceRecord, AttendanceStatus, Employee, FuelLineItem, FuelReport, Role,
};
use attendance_engine::store::MemoryStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid benchmark date")
}

/// Creates a cycle's worth of attendance records for one employee.
fn create_cycle_records(count: usize) -> Vec<AttendanceRecord> {
    let employee_id = Uuid::new_v4();
    let start = date(2025, 1, 26);

    (0..count)
        .map(|i| AttendanceRecord {
            employee_id,
            date: start + Duration::days(i as i64),
            check_in: NaiveTime::from_hms_opt(9, (i % 60) as u32, 0),
            check_out: NaiveTime::from_hms_opt(17, 0, 0),
            status: match i % 5 {
                0 => AttendanceStatus::Late,
                4 => AttendanceStatus::Absent,
                _ => AttendanceStatus::Present,
            },
            notes: None,
        })
        .collect()
}

/// Creates a year of daily fuel reports spread over several employees.
fn create_fuel_reports(count: usize, employees: usize) -> Vec<FuelReport> {
    let ids: Vec<Uuid> = (0..employees).map(|_| Uuid::new_v4()).collect();
    let start = date(2025, 1, 1);

    (0..count)
        .map(|i| {
            let km = Decimal::from(20 + (i % 40) as i64);
            FuelReport {
                id: Uuid::new_v4(),
                employee_id: ids[i % employees],
                date: start + Duration::days((i % 365) as i64),
                items: vec![FuelLineItem {
                    job_no: format!("JOB-{:04}", i),
                    area: "North Area".to_string(),
                    km,
                }],
                total_km: km,
                total_amount: km * Decimal::from(9),
            }
        })
        .collect()
}

/// Creates a fuel import CSV with the given number of rows and a store
/// that resolves every email in it.
fn create_import_fixture(rows: usize, employees: usize) -> (String, MemoryStore) {
    let mut store = MemoryStore::new();
    for i in 0..employees {
        store.add_employee(Employee {
            id: Uuid::new_v4(),
            email: format!("driver{:03}@company.com", i),
            full_name: format!("Driver {:03}", i),
            role: Role::Employee,
            active: true,
        });
    }

    let mut csv = String::from("email,date,job_no,area,km\n");
    for i in 0..rows {
        let day = date(2025, 1, 1) + Duration::days((i % 28) as i64);
        csv.push_str(&format!(
            "driver{:03}@company.com,{},JOB-{:04},North Area,{}\n",
            i % employees,
            day.format("%Y-%m-%d"),
            i,
            20 + (i % 40)
        ));
    }

    (csv, store)
}

/// Benchmark: Resolving a year of cycle boundaries.
///
/// Target: < 100μs mean
fn bench_past_cycles(c: &mut Criterion) {
    let reference = date(2025, 6, 10);

    c.bench_function("past_cycles_12_months", |b| {
        b.iter(|| black_box(past_cycles(black_box(reference), 11)))
    });
}

/// Benchmark: Summarizing a full cycle of attendance records.
///
/// Target: < 100μs mean
fn bench_summarize_cycle(c: &mut Criterion) {
    let records = create_cycle_records(31);

    c.bench_function("summarize_cycle", |b| {
        b.iter(|| black_box(summarize(black_box(&records))))
    });
}

/// Benchmark: Monthly aggregation over a year of reports.
///
/// Target: < 5ms mean
fn bench_aggregate_year(c: &mut Criterion) {
    let reports = create_fuel_reports(365 * 10, 10);

    let mut group = c.benchmark_group("aggregation");
    group.throughput(Throughput::Elements(reports.len() as u64));
    group.bench_function("aggregate_year_10_employees", |b| {
        b.iter(|| black_box(aggregate_by_employee_and_month(black_box(&reports))))
    });
    group.finish();
}

/// Benchmark: CSV import at various sizes to understand scaling behavior.
///
/// Target: < 50ms mean at 1000 rows
fn bench_csv_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_import");

    for rows in [100, 500, 1000].iter() {
        let (csv, store) = create_import_fixture(*rows, 10);
        let rate = Decimal::from(9);

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), rows, |b, _| {
            b.iter(|| {
                let reports = import_fuel_reports(black_box(&csv), &store, rate)
                    .expect("fixture rows are valid");
                black_box(reports)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_past_cycles,
    bench_summarize_cycle,
    bench_aggregate_year,
    bench_csv_import,
);
criterion_main!(benches);
