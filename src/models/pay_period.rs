//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type describing one Monday-to-Sunday
//! payroll week and the Friday it is paid on. Periods are built by the
//! resolver in [`crate::calculation`]; this type only carries the values.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date format used for [`PayPeriod::key`].
pub const PERIOD_KEY_FORMAT: &str = "%Y-%m-%d";

/// A Monday-through-Sunday payroll week.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::get_pay_period_for_date;
/// use chrono::NaiveDate;
///
/// let period = get_pay_period_for_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
///
/// assert_eq!(period.week_start, NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
/// assert_eq!(period.week_end, NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());
/// assert_eq!(period.payment_date, NaiveDate::from_ymd_opt(2026, 1, 23).unwrap());
/// assert_eq!(period.label, "Jan 12 - Jan 18, 2026");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The Monday the period starts on (inclusive).
    pub week_start: NaiveDate,
    /// The Sunday the period ends on (inclusive).
    pub week_end: NaiveDate,
    /// The Friday the period is paid on, always after `week_end`.
    pub payment_date: NaiveDate,
    /// Human-readable label, e.g. "Jan 12 - Jan 18, 2026".
    pub label: String,
}

impl PayPeriod {
    /// Checks if a given date falls within this period, inclusive of both ends.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::calculation::get_pay_period_for_date;
    /// use chrono::NaiveDate;
    ///
    /// let period = get_pay_period_for_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
    ///
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()));
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 18).unwrap()));
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 19).unwrap()));
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.week_start && date <= self.week_end
    }

    /// The formatted week start, used to de-duplicate periods.
    pub fn key(&self) -> String {
        self.week_start.format(PERIOD_KEY_FORMAT).to_string()
    }

    /// The seven dates of the period, Monday first.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..7u64).filter_map(move |offset| self.week_start.checked_add_days(Days::new(offset)))
    }
}
