//! Weekly overtime allocation.
//!
//! The first `weekly_threshold` hours worked in a pay period are regular and
//! the rest are overtime. This module applies that rule twice:
//!
//! - to the period's total hours, giving the weekly split, and
//! - to individual entries in chronological order, giving the per-entry
//!   split used for pay. An entry that crosses the threshold is prorated.
//!
//! Recorded regular/overtime splits on entries are ignored; only their sum
//! matters.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::models::{PayPeriod, TimeEntry};

use super::pay_period_resolver::week_start_for;

/// Default weekly hours before overtime applies.
pub const DEFAULT_WEEKLY_THRESHOLD: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// A regular/overtime split of some number of hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HourSplit {
    /// Hours within the threshold.
    pub regular_hours: Decimal,
    /// Hours beyond the threshold.
    pub overtime_hours: Decimal,
}

impl HourSplit {
    /// The hours that were split.
    pub fn total(&self) -> Decimal {
        self.regular_hours + self.overtime_hours
    }
}

/// Splits a period's total hours against the weekly threshold.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{split_weekly_hours, DEFAULT_WEEKLY_THRESHOLD};
/// use rust_decimal::Decimal;
///
/// let split = split_weekly_hours(Decimal::from(45), DEFAULT_WEEKLY_THRESHOLD);
/// assert_eq!(split.regular_hours, Decimal::from(40));
/// assert_eq!(split.overtime_hours, Decimal::from(5));
///
/// let split = split_weekly_hours(Decimal::from(32), DEFAULT_WEEKLY_THRESHOLD);
/// assert_eq!(split.regular_hours, Decimal::from(32));
/// assert_eq!(split.overtime_hours, Decimal::ZERO);
/// ```
pub fn split_weekly_hours(total_hours: Decimal, weekly_threshold: Decimal) -> HourSplit {
    HourSplit {
        regular_hours: total_hours.min(weekly_threshold),
        overtime_hours: (total_hours - weekly_threshold).max(Decimal::ZERO),
    }
}

/// Running hours counter that splits successive units of work against a
/// threshold.
///
/// Each call to [`ThresholdAccumulator::allocate`] splits one unit (an entry
/// or a day) and then adds its hours to the running total.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::ThresholdAccumulator;
/// use rust_decimal::Decimal;
///
/// let mut acc = ThresholdAccumulator::new(Decimal::from(40));
/// for _ in 0..4 {
///     acc.allocate(Decimal::from(9));
/// }
///
/// // 36 hours so far; the next 9 cross the threshold after 4
/// let split = acc.allocate(Decimal::from(9));
/// assert_eq!(split.regular_hours, Decimal::from(4));
/// assert_eq!(split.overtime_hours, Decimal::from(5));
/// assert_eq!(acc.accumulated(), Decimal::from(45));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdAccumulator {
    threshold: Decimal,
    accumulated: Decimal,
}

impl ThresholdAccumulator {
    /// Creates a counter starting at zero hours.
    pub fn new(threshold: Decimal) -> Self {
        Self {
            threshold,
            accumulated: Decimal::ZERO,
        }
    }

    /// Hours counted so far.
    pub fn accumulated(&self) -> Decimal {
        self.accumulated
    }

    /// Splits `hours` given the hours already counted, then counts them.
    pub fn allocate(&mut self, hours: Decimal) -> HourSplit {
        let split = if self.accumulated >= self.threshold {
            HourSplit {
                regular_hours: Decimal::ZERO,
                overtime_hours: hours,
            }
        } else if self.accumulated + hours > self.threshold {
            let regular_hours = self.threshold - self.accumulated;
            HourSplit {
                regular_hours,
                overtime_hours: hours - regular_hours,
            }
        } else {
            HourSplit {
                regular_hours: hours,
                overtime_hours: Decimal::ZERO,
            }
        };
        self.accumulated += hours;
        split
    }
}

/// Returns the entries belonging to `period` in the order they are walked.
///
/// Entries are ordered by date, then by creation time (entries without one
/// first), then by ID, so the result does not depend on input order.
pub fn order_period_entries<'a>(
    entries: &'a [TimeEntry],
    period: &PayPeriod,
) -> Vec<&'a TimeEntry> {
    let mut ordered: Vec<&TimeEntry> = entries
        .iter()
        .filter(|e| week_start_for(e.entry_date) == period.week_start)
        .collect();
    ordered.sort_by(|a, b| {
        a.entry_date
            .cmp(&b.entry_date)
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });
    ordered
}

/// Splits each of the period's entries against the weekly threshold.
///
/// Returns the entries in walk order paired with their split.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{allocate_entries, get_pay_period_for_date};
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
/// let allocations = allocate_entries(&entries, &period, Decimal::from(40));
/// assert_eq!(allocations[3].1.overtime_hours, Decimal::ZERO);
/// assert_eq!(allocations[4].1.regular_hours, Decimal::from(4));
/// assert_eq!(allocations[4].1.overtime_hours, Decimal::from(5));
/// ```
pub fn allocate_entries<'a>(
    entries: &'a [TimeEntry],
    period: &PayPeriod,
    weekly_threshold: Decimal,
) -> Vec<(&'a TimeEntry, HourSplit)> {
    let mut accumulator = ThresholdAccumulator::new(weekly_threshold);

    order_period_entries(entries, period)
        .into_iter()
        .map(|entry| {
            let split = accumulator.allocate(entry.total_hours());
            trace!(
                entry_id = %entry.id,
                entry_date = %entry.entry_date,
                regular_hours = %split.regular_hours,
                overtime_hours = %split.overtime_hours,
                accumulated = %accumulator.accumulated(),
                "Allocated entry hours"
            );
            (entry, split)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::get_pay_period_for_date;
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn period() -> PayPeriod {
        get_pay_period_for_date(make_date("2026-01-12"))
    }

    // ==========================================================================
    // Weekly split
    // ==========================================================================

    /// OA-001: exactly at threshold, no overtime
    #[test]
    fn test_weekly_split_exactly_at_threshold() {
        let split = split_weekly_hours(dec("40"), DEFAULT_WEEKLY_THRESHOLD);
        assert_eq!(split.regular_hours, dec("40"));
        assert_eq!(split.overtime_hours, Decimal::ZERO);
    }

    /// OA-002: fractional overtime
    #[test]
    fn test_weekly_split_fractional_overtime() {
        let split = split_weekly_hours(dec("40.25"), DEFAULT_WEEKLY_THRESHOLD);
        assert_eq!(split.regular_hours, dec("40"));
        assert_eq!(split.overtime_hours, dec("0.25"));
        assert_eq!(split.total(), dec("40.25"));
    }

    #[test]
    fn test_weekly_split_zero_hours() {
        let split = split_weekly_hours(Decimal::ZERO, DEFAULT_WEEKLY_THRESHOLD);
        assert_eq!(split, HourSplit::default());
    }

    // ==========================================================================
    // Threshold accumulator
    // ==========================================================================

    /// OA-003: unit landing exactly on the threshold stays regular
    #[test]
    fn test_accumulator_unit_ending_on_threshold_is_regular() {
        let mut acc = ThresholdAccumulator::new(dec("40"));
        acc.allocate(dec("32"));
        let split = acc.allocate(dec("8"));
        assert_eq!(split.regular_hours, dec("8"));
        assert_eq!(split.overtime_hours, Decimal::ZERO);

        let split = acc.allocate(dec("1"));
        assert_eq!(split.regular_hours, Decimal::ZERO);
        assert_eq!(split.overtime_hours, dec("1"));
    }

    /// OA-004: single unit larger than the threshold
    #[test]
    fn test_accumulator_single_unit_over_threshold() {
        let mut acc = ThresholdAccumulator::new(dec("40"));
        let split = acc.allocate(dec("50"));
        assert_eq!(split.regular_hours, dec("40"));
        assert_eq!(split.overtime_hours, dec("10"));
    }

    #[test]
    fn test_accumulator_custom_threshold() {
        let mut acc = ThresholdAccumulator::new(dec("38"));
        acc.allocate(dec("30"));
        let split = acc.allocate(dec("10"));
        assert_eq!(split.regular_hours, dec("8"));
        assert_eq!(split.overtime_hours, dec("2"));
    }

    // ==========================================================================
    // Entry ordering and allocation
    // ==========================================================================

    /// OA-005: recorded split is ignored
    #[test]
    fn test_recorded_split_ignored() {
        let entries = vec![
            TimeEntry::new(make_date("2026-01-12"), dec("2"), None).with_overtime(dec("6")),
        ];

        let allocations = allocate_entries(&entries, &period(), dec("40"));
        assert_eq!(allocations[0].1.regular_hours, dec("8"));
        assert_eq!(allocations[0].1.overtime_hours, Decimal::ZERO);
    }

    /// OA-006: input order does not change the walk
    #[test]
    fn test_entries_walked_chronologically() {
        let entries = vec![
            TimeEntry::new(make_date("2026-01-16"), dec("10"), None),
            TimeEntry::new(make_date("2026-01-12"), dec("20"), None),
            TimeEntry::new(make_date("2026-01-14"), dec("15"), None),
        ];

        let allocations = allocate_entries(&entries, &period(), dec("40"));
        let dates: Vec<NaiveDate> = allocations.iter().map(|(e, _)| e.entry_date).collect();
        assert_eq!(
            dates,
            vec![
                make_date("2026-01-12"),
                make_date("2026-01-14"),
                make_date("2026-01-16")
            ]
        );
        assert_eq!(allocations[2].1.regular_hours, dec("5"));
        assert_eq!(allocations[2].1.overtime_hours, dec("5"));
    }

    /// OA-007: same-day entries ordered by creation time, then ID
    #[test]
    fn test_same_day_tiebreak() {
        let day = make_date("2026-01-12");
        let early = Utc.with_ymd_and_hms(2026, 1, 12, 9, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2026, 1, 12, 17, 0, 0).unwrap();

        let mut no_timestamp = TimeEntry::new(day, dec("1"), None);
        no_timestamp.id = Uuid::from_u128(3);
        let mut late_entry = TimeEntry::new(day, dec("2"), None).with_created_at(late);
        late_entry.id = Uuid::from_u128(1);
        let mut early_b = TimeEntry::new(day, dec("3"), None).with_created_at(early);
        early_b.id = Uuid::from_u128(5);
        let mut early_a = TimeEntry::new(day, dec("4"), None).with_created_at(early);
        early_a.id = Uuid::from_u128(4);

        let entries = vec![late_entry, early_b, no_timestamp, early_a];
        let ordered = order_period_entries(&entries, &period());
        let hours: Vec<Decimal> = ordered.iter().map(|e| e.total_hours()).collect();
        assert_eq!(hours, vec![dec("1"), dec("4"), dec("3"), dec("2")]);
    }

    #[test]
    fn test_allocation_deterministic_under_permutation() {
        let day = make_date("2026-01-15");
        let mut a = TimeEntry::new(day, dec("30"), None);
        a.id = Uuid::from_u128(1);
        let mut b = TimeEntry::new(day, dec("15"), None);
        b.id = Uuid::from_u128(2);

        let forward = vec![a.clone(), b.clone()];
        let reverse = vec![b, a];

        let first: Vec<HourSplit> = allocate_entries(&forward, &period(), dec("40"))
            .into_iter()
            .map(|(_, s)| s)
            .collect();
        let second: Vec<HourSplit> = allocate_entries(&reverse, &period(), dec("40"))
            .into_iter()
            .map(|(_, s)| s)
            .collect();
        assert_eq!(first, second);
    }

    /// OA-008: entries from other weeks excluded from the walk
    #[test]
    fn test_other_weeks_excluded() {
        let entries = vec![
            TimeEntry::new(make_date("2026-01-05"), dec("40"), None),
            TimeEntry::new(make_date("2026-01-13"), dec("8"), None),
        ];

        let allocations = allocate_entries(&entries, &period(), dec("40"));
        assert_eq!(allocations.len(), 1);
        assert_eq!(allocations[0].1.regular_hours, dec("8"));
    }
}
