//! Core data models for the payroll engine.
//!
//! This module contains the input records and the derived values the engine
//! produces. None of them are cached or persisted by the engine.

mod daily_breakdown;
mod pay_period;
mod pay_period_totals;
mod time_entry;

pub use daily_breakdown::DailyBreakdown;
pub use pay_period::{PERIOD_KEY_FORMAT, PayPeriod};
pub use pay_period_totals::{
    AuditStep, EntryAllocation, PayCategory, PayPeriodTotals, PeriodSummary,
};
pub use time_entry::TimeEntry;
