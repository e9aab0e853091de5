//! Pay period date arithmetic.
//!
//! Pay periods run Monday through Sunday and are paid on the first Friday
//! after they end. Every function takes its reference date explicitly so
//! results never depend on the wall clock.
//!
//! Date arithmetic saturates at the bounds of [`NaiveDate`] instead of
//! panicking; [`try_pay_period_for_date`] reports weeks that cannot be
//! represented in full.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::debug;

use crate::models::{PayPeriod, TimeEntry};

/// The weekday pay is issued on.
pub const PAYMENT_WEEKDAY: Weekday = Weekday::Fri;

/// Returns the Monday of the week containing `date`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::week_start_for;
/// use chrono::NaiveDate;
///
/// // Sunday belongs to the week that started the previous Monday
/// let sunday = NaiveDate::from_ymd_opt(2026, 1, 18).unwrap();
/// assert_eq!(week_start_for(sunday), NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
/// ```
pub fn week_start_for(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(days_back_to_monday(date))
        .unwrap_or(NaiveDate::MIN)
}

fn days_back_to_monday(date: NaiveDate) -> Days {
    Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// Returns the first Friday strictly after `date`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::payment_date_for;
/// use chrono::NaiveDate;
///
/// let sunday = NaiveDate::from_ymd_opt(2026, 1, 18).unwrap();
/// assert_eq!(payment_date_for(sunday), NaiveDate::from_ymd_opt(2026, 1, 23).unwrap());
/// ```
pub fn payment_date_for(date: NaiveDate) -> NaiveDate {
    checked_payment_date_for(date).unwrap_or(NaiveDate::MAX)
}

fn checked_payment_date_for(date: NaiveDate) -> Option<NaiveDate> {
    let days_ahead = match days_until(date.weekday(), PAYMENT_WEEKDAY) {
        0 => 7,
        n => n,
    };
    date.checked_add_days(Days::new(days_ahead))
}

fn days_until(from: Weekday, to: Weekday) -> u64 {
    let from = i64::from(from.num_days_from_monday());
    let to = i64::from(to.num_days_from_monday());
    (to - from).rem_euclid(7).unsigned_abs()
}

fn format_label(week_start: NaiveDate, week_end: NaiveDate) -> String {
    format!(
        "{} - {}",
        week_start.format("%b %-d"),
        week_end.format("%b %-d, %Y")
    )
}

/// Returns the Monday-to-Sunday pay period containing `date`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::get_pay_period_for_date;
/// use chrono::{Datelike, NaiveDate, Weekday};
///
/// let period = get_pay_period_for_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
///
/// assert_eq!(period.week_start.weekday(), Weekday::Mon);
/// assert_eq!(period.week_end.weekday(), Weekday::Sun);
/// assert_eq!(period.payment_date.weekday(), Weekday::Fri);
/// ```
///
/// Near the ends of the calendar the boundaries clamp to [`NaiveDate::MIN`]
/// and [`NaiveDate::MAX`].
pub fn get_pay_period_for_date(date: NaiveDate) -> PayPeriod {
    try_pay_period_for_date(date).unwrap_or_else(|| {
        let week_start = week_start_for(date);
        let week_end = week_start
            .checked_add_days(Days::new(6))
            .unwrap_or(NaiveDate::MAX);
        build_period(week_start, week_end, payment_date_for(week_end))
    })
}

/// Returns the pay period containing `date`, or `None` when its Monday,
/// Sunday or payment Friday falls outside the representable date range.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::try_pay_period_for_date;
/// use chrono::NaiveDate;
///
/// let thursday = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// assert!(try_pay_period_for_date(thursday).is_some());
/// assert!(try_pay_period_for_date(NaiveDate::MAX).is_none());
/// ```
pub fn try_pay_period_for_date(date: NaiveDate) -> Option<PayPeriod> {
    let week_start = date.checked_sub_days(days_back_to_monday(date))?;
    let week_end = week_start.checked_add_days(Days::new(6))?;
    let payment_date = checked_payment_date_for(week_end)?;
    Some(build_period(week_start, week_end, payment_date))
}

fn build_period(week_start: NaiveDate, week_end: NaiveDate, payment_date: NaiveDate) -> PayPeriod {
    PayPeriod {
        week_start,
        week_end,
        payment_date,
        label: format_label(week_start, week_end),
    }
}

/// Returns the pay period starting 7 days before the Monday of
/// `reference_date`'s week.
///
/// This is the previous calendar week, regardless of whether
/// `reference_date` falls early or late in its own week.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::get_last_completed_pay_period;
/// use chrono::NaiveDate;
///
/// let wednesday = NaiveDate::from_ymd_opt(2026, 1, 21).unwrap();
/// let period = get_last_completed_pay_period(wednesday);
///
/// assert_eq!(period.week_start, NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
/// assert_eq!(period.week_end, NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());
/// ```
pub fn get_last_completed_pay_period(reference_date: NaiveDate) -> PayPeriod {
    let previous_week = week_start_for(reference_date)
        .checked_sub_days(Days::new(7))
        .unwrap_or(NaiveDate::MIN);
    get_pay_period_for_date(previous_week)
}

/// Returns `reference_date` if it is a Friday, otherwise the next Friday.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::get_upcoming_pay_date;
/// use chrono::NaiveDate;
///
/// let wednesday = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// assert_eq!(get_upcoming_pay_date(wednesday), NaiveDate::from_ymd_opt(2026, 1, 16).unwrap());
///
/// let friday = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();
/// assert_eq!(get_upcoming_pay_date(friday), friday);
/// ```
pub fn get_upcoming_pay_date(reference_date: NaiveDate) -> NaiveDate {
    let days_ahead = days_until(reference_date.weekday(), PAYMENT_WEEKDAY);
    reference_date
        .checked_add_days(Days::new(days_ahead))
        .unwrap_or(NaiveDate::MAX)
}

/// Returns one pay period per distinct week found in `entries`, most recent first.
///
/// Entries whose week cannot be represented in full (see
/// [`try_pay_period_for_date`]) are skipped.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::get_all_pay_periods_from_entries;
/// use payroll_engine::models::TimeEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entries = vec![
///     TimeEntry::new(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(), Decimal::from(8), None),
///     TimeEntry::new(NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(), Decimal::from(8), None),
///     TimeEntry::new(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(), Decimal::from(8), None),
/// ];
///
/// let periods = get_all_pay_periods_from_entries(&entries);
/// assert_eq!(periods.len(), 2);
/// assert_eq!(periods[0].week_start, NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
/// assert_eq!(periods[1].week_start, NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
/// ```
pub fn get_all_pay_periods_from_entries(entries: &[TimeEntry]) -> Vec<PayPeriod> {
    let mut periods: BTreeMap<NaiveDate, PayPeriod> = BTreeMap::new();
    for entry in entries {
        match try_pay_period_for_date(entry.entry_date) {
            Some(period) => {
                periods.entry(period.week_start).or_insert(period);
            }
            None => debug!(
                entry_id = %entry.id,
                entry_date = %entry.entry_date,
                "Skipping entry whose pay period is outside the supported date range"
            ),
        }
    }
    periods.into_values().rev().collect()
}
