//! Calculation logic for the attendance engine.
//!
//! This module contains the pure calculation functions: attendance cycle
//! calendar arithmetic, attendance status derivation and summarisation,
//! and fuel allowance aggregation. All functions are synchronous and
//! stateless; configuration values are passed in per call.

mod attendance_rules;
mod cycle_calendar;
mod fuel_aggregator;

pub use attendance_rules::{derive_status, parse_time, summarize};
pub use cycle_calendar::{
    CYCLE_END_DAY, CYCLE_START_DAY, Cycle, current_cycle, cycle_with_offset, past_cycles,
};
pub use fuel_aggregator::{aggregate_by_employee_and_month, allocate_item_amount, report_totals};
