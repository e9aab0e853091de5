//! Per-day hour breakdown for display.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours worked on one calendar day of a pay period.
///
/// After reconciliation the regular/overtime split is for display only; pay
/// is always derived from the entry-level allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBreakdown {
    /// The calendar date.
    pub date: NaiveDate,
    /// Full English day name, e.g. "Monday".
    pub day_name: String,
    /// Hours shown as regular time.
    pub regular_hours: Decimal,
    /// Hours shown as overtime.
    pub overtime_hours: Decimal,
    /// Hours worked on holiday-tagged entries. Overlaps regular/overtime.
    pub holiday_hours: Decimal,
    /// All hours worked on this day.
    pub total_hours: Decimal,
}

impl DailyBreakdown {
    /// Creates a zero-filled row for `date`.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::DailyBreakdown;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let day = DailyBreakdown::empty(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
    /// assert_eq!(day.day_name, "Monday");
    /// assert_eq!(day.total_hours, Decimal::ZERO);
    /// ```
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            day_name: day_name(date.weekday()).to_string(),
            regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            holiday_hours: Decimal::ZERO,
            total_hours: Decimal::ZERO,
        }
    }

    /// Returns true if any hours were worked on this day.
    pub fn is_worked(&self) -> bool {
        self.total_hours > Decimal::ZERO
    }
}

fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
