//! Daily aggregation of time entries.
//!
//! Buckets a period's entries into seven calendar-day rows using the hours
//! exactly as recorded. The regular/overtime split produced here is the raw
//! stored split; [`crate::calculation::reconcile_daily_breakdown`] replaces
//! it with the threshold-based split for display.

use crate::models::{DailyBreakdown, PayPeriod, TimeEntry};

use super::pay_period_resolver::week_start_for;

/// Returns exactly seven rows, Monday to Sunday, for `period`.
///
/// Entries whose own week does not start on `period.week_start` are ignored.
/// Holiday hours are the full duration of holiday-tagged entries and overlap
/// the regular/overtime hours rather than adding to them.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{get_daily_breakdown_for_period, get_pay_period_for_date};
/// use payroll_engine::models::TimeEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let wednesday = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// let period = get_pay_period_for_date(wednesday);
/// let entries = vec![TimeEntry::new(wednesday, Decimal::from(8), None).holiday()];
///
/// let days = get_daily_breakdown_for_period(&entries, &period);
/// assert_eq!(days.len(), 7);
/// assert_eq!(days[2].day_name, "Wednesday");
/// assert_eq!(days[2].total_hours, Decimal::from(8));
/// assert_eq!(days[2].holiday_hours, Decimal::from(8));
/// assert_eq!(days[0].total_hours, Decimal::ZERO);
/// ```
pub fn get_daily_breakdown_for_period(
    entries: &[TimeEntry],
    period: &PayPeriod,
) -> Vec<DailyBreakdown> {
    let mut days: Vec<DailyBreakdown> = period.dates().map(DailyBreakdown::empty).collect();

    for entry in entries
        .iter()
        .filter(|e| week_start_for(e.entry_date) == period.week_start)
    {
        let offset = (entry.entry_date - period.week_start).num_days();
        let Some(day) = usize::try_from(offset).ok().and_then(|i| days.get_mut(i)) else {
            continue;
        };

        day.regular_hours += entry.regular();
        day.overtime_hours += entry.overtime();
        if entry.is_holiday {
            day.holiday_hours += entry.total_hours();
        }
    }

    for day in &mut days {
        day.total_hours = day.regular_hours + day.overtime_hours;
    }

    days
}
