//! Day-level regular/overtime split for display.
//!
//! Walks the seven days in calendar order with its own running counter and
//! splits each day's total hours against the weekly threshold. Because it
//! works per day rather than per entry, its split can differ from the
//! entry-level allocation when several entries share the day on which the
//! threshold is crossed. The result is for display only; pay always comes
//! from the entry-level allocation.

use rust_decimal::Decimal;

use crate::models::DailyBreakdown;

use super::overtime_allocator::ThresholdAccumulator;

/// Rewrites each day's regular/overtime hours using the weekly threshold.
///
/// Holiday and total hours are left unchanged.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{
///     get_daily_breakdown_for_period, get_pay_period_for_date, reconcile_daily_breakdown,
/// };
/// use payroll_engine::models::TimeEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let period = get_pay_period_for_date(monday);
/// let entries: Vec<TimeEntry> = monday
///     .iter_days()
///     .take(5)
///     .map(|d| TimeEntry::new(d, Decimal::from(9), None))
///     .collect();
///
/// let days = reconcile_daily_breakdown(
///     get_daily_breakdown_for_period(&entries, &period),
///     Decimal::from(40),
/// );
/// assert_eq!(days[4].regular_hours, Decimal::from(4));
/// assert_eq!(days[4].overtime_hours, Decimal::from(5));
/// ```
pub fn reconcile_daily_breakdown(
    mut days: Vec<DailyBreakdown>,
    weekly_threshold: Decimal,
) -> Vec<DailyBreakdown> {
    days.sort_by_key(|d| d.date);

    let mut accumulator = ThresholdAccumulator::new(weekly_threshold);
    for day in &mut days {
        let split = accumulator.allocate(day.total_hours);
        day.regular_hours = split.regular_hours;
        day.overtime_hours = split.overtime_hours;
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{get_daily_breakdown_for_period, get_pay_period_for_date};
    use crate::models::TimeEntry;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn reconcile(entries: &[TimeEntry]) -> Vec<DailyBreakdown> {
        let period = get_pay_period_for_date(make_date("2026-01-12"));
        reconcile_daily_breakdown(
            get_daily_breakdown_for_period(entries, &period),
            dec("40"),
        )
    }

    /// DR-001: under threshold, everything regular
    #[test]
    fn test_under_threshold_all_regular() {
        let entries = vec![
            TimeEntry::new(make_date("2026-01-12"), dec("6"), None).with_overtime(dec("2")),
            TimeEntry::new(make_date("2026-01-13"), dec("8"), None),
        ];

        let days = reconcile(&entries);
        assert_eq!(days[0].regular_hours, dec("8"));
        assert_eq!(days[0].overtime_hours, Decimal::ZERO);
        assert_eq!(days[1].regular_hours, dec("8"));
    }

    /// DR-002: days after the crossing are all overtime
    #[test]
    fn test_days_after_crossing_all_overtime() {
        let entries: Vec<TimeEntry> = make_date("2026-01-12")
            .iter_days()
            .take(6)
            .map(|d| TimeEntry::new(d, dec("8"), None))
            .collect();

        let days = reconcile(&entries);
        assert_eq!(days[4].regular_hours, dec("8"));
        assert_eq!(days[4].overtime_hours, Decimal::ZERO);
        assert_eq!(days[5].regular_hours, Decimal::ZERO);
        assert_eq!(days[5].overtime_hours, dec("8"));
        assert_eq!(days[6].overtime_hours, Decimal::ZERO);
    }

    /// DR-003: holiday and total hours untouched
    #[test]
    fn test_holiday_and_total_untouched() {
        let entries = vec![
            TimeEntry::new(make_date("2026-01-12"), dec("38"), None),
            TimeEntry::new(make_date("2026-01-13"), dec("4"), None).holiday(),
        ];

        let days = reconcile(&entries);
        assert_eq!(days[1].regular_hours, dec("2"));
        assert_eq!(days[1].overtime_hours, dec("2"));
        assert_eq!(days[1].holiday_hours, dec("4"));
        assert_eq!(days[1].total_hours, dec("4"));
    }

    /// DR-004: day totals always split completely
    #[test]
    fn test_each_day_split_sums_to_total() {
        let entries = vec![
            TimeEntry::new(make_date("2026-01-12"), dec("25"), None),
            TimeEntry::new(make_date("2026-01-14"), dec("10"), None),
            TimeEntry::new(make_date("2026-01-14"), dec("7.5"), None),
            TimeEntry::new(make_date("2026-01-17"), dec("3"), None),
        ];

        for day in reconcile(&entries) {
            assert_eq!(day.regular_hours + day.overtime_hours, day.total_hours);
        }
    }

    #[test]
    fn test_unordered_rows_walked_by_date() {
        let period = get_pay_period_for_date(make_date("2026-01-12"));
        let entries = vec![
            TimeEntry::new(make_date("2026-01-12"), dec("30"), None),
            TimeEntry::new(make_date("2026-01-18"), dec("20"), None),
        ];
        let mut rows = get_daily_breakdown_for_period(&entries, &period);
        rows.reverse();

        let days = reconcile_daily_breakdown(rows, dec("40"));
        assert_eq!(days[0].date, make_date("2026-01-12"));
        assert_eq!(days[0].regular_hours, dec("30"));
        assert_eq!(days[6].regular_hours, dec("10"));
        assert_eq!(days[6].overtime_hours, dec("10"));
    }
}
