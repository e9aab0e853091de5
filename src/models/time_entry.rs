//! Time entry model.
//!
//! A [`TimeEntry`] is one day's recorded work as persisted by the surrounding
//! time-tracking system. The engine only reads entries; it never edits them.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded block of work on a single calendar date.
///
/// `regular_hours` and `overtime_hours` are the split as it was originally
/// recorded. The engine treats their sum as the true worked duration and
/// re-derives the split against the weekly threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Unique identifier for the entry, used as the final sort tiebreaker.
    pub id: Uuid,
    /// The calendar date the work was done on.
    pub entry_date: NaiveDate,
    /// Hours recorded as regular time. Missing values count as zero.
    #[serde(default)]
    pub regular_hours: Option<Decimal>,
    /// Hours recorded as overtime. Missing values count as zero.
    #[serde(default)]
    pub overtime_hours: Option<Decimal>,
    /// The hourly rate snapshotted when the entry was created.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Whether the work was done on a holiday.
    #[serde(default)]
    pub is_holiday: bool,
    /// When the entry was created, used to order entries sharing a date.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl TimeEntry {
    /// Creates an entry with only regular hours recorded.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::TimeEntry;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let entry = TimeEntry::new(
    ///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
    ///     Decimal::from(8),
    ///     Some(Decimal::from(20)),
    /// );
    /// assert_eq!(entry.total_hours(), Decimal::from(8));
    /// assert!(!entry.is_holiday);
    /// ```
    pub fn new(
        entry_date: NaiveDate,
        regular_hours: Decimal,
        hourly_rate: Option<Decimal>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            entry_date,
            regular_hours: Some(regular_hours),
            overtime_hours: None,
            hourly_rate,
            is_holiday: false,
            created_at: None,
        }
    }

    /// Returns the entry tagged as holiday work.
    pub fn holiday(mut self) -> Self {
        self.is_holiday = true;
        self
    }

    /// Returns the entry with recorded overtime hours set.
    pub fn with_overtime(mut self, overtime_hours: Decimal) -> Self {
        self.overtime_hours = Some(overtime_hours);
        self
    }

    /// Returns the entry with its creation timestamp set.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// The entry's recorded regular hours, zero if missing.
    pub fn regular(&self) -> Decimal {
        self.regular_hours.unwrap_or(Decimal::ZERO)
    }

    /// The entry's recorded overtime hours, zero if missing.
    pub fn overtime(&self) -> Decimal {
        self.overtime_hours.unwrap_or(Decimal::ZERO)
    }

    /// The entry's true worked duration: recorded regular plus overtime hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::TimeEntry;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let entry = TimeEntry::new(
    ///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
    ///     Decimal::from(8),
    ///     None,
    /// )
    /// .with_overtime(Decimal::from(2));
    /// assert_eq!(entry.total_hours(), Decimal::from(10));
    /// ```
    pub fn total_hours(&self) -> Decimal {
        self.regular() + self.overtime()
    }
}
