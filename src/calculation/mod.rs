//! Calculation logic for the payroll engine.
//!
//! This module contains pay period date arithmetic, daily aggregation of
//! time entries, weekly overtime allocation, pay calculation with holiday
//! and overtime multipliers, the day-level display split, and the period
//! totals that combine them.

mod daily_aggregator;
mod daily_reconciler;
mod overtime_allocator;
mod pay_calculator;
mod pay_period_resolver;
mod payroll_calculator;
mod period_totals;

pub use daily_aggregator::get_daily_breakdown_for_period;
pub use daily_reconciler::reconcile_daily_breakdown;
pub use overtime_allocator::{
    DEFAULT_WEEKLY_THRESHOLD, HourSplit, ThresholdAccumulator, allocate_entries,
    order_period_entries, split_weekly_hours,
};
pub use pay_calculator::{
    DEFAULT_HOLIDAY_MULTIPLIER, DEFAULT_HOLIDAY_OVERTIME_STACKING, DEFAULT_OVERTIME_MULTIPLIER,
    PayPools, price_entry, resolve_rate,
};
pub use pay_period_resolver::{
    PAYMENT_WEEKDAY, get_all_pay_periods_from_entries, get_last_completed_pay_period,
    get_pay_period_for_date, get_upcoming_pay_date, payment_date_for, try_pay_period_for_date,
    week_start_for,
};
pub use payroll_calculator::PayrollCalculator;
pub use period_totals::{calculate_pay_period_totals, summarize_pay_periods};
