//! Pay calculation for allocated entries.
//!
//! Each entry is paid at its own snapshotted rate, falling back to the
//! caller's rate and then to zero. Non-holiday hours go into the regular and
//! overtime pools; holiday-tagged hours go entirely into the holiday pool,
//! with their overtime portion multiplied according to the policy's
//! [`HolidayOvertimeStacking`] rule.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{HolidayOvertimeStacking, PayPolicy};
use crate::models::{EntryAllocation, PayCategory, TimeEntry};

use super::overtime_allocator::HourSplit;

/// Default multiplier for overtime hours.
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Default multiplier for holiday hours.
pub const DEFAULT_HOLIDAY_MULTIPLIER: Decimal = Decimal::from_parts(20, 0, 0, false, 1);

/// Default rule for combining holiday and overtime multipliers: the larger
/// of the two applies.
pub const DEFAULT_HOLIDAY_OVERTIME_STACKING: HolidayOvertimeStacking =
    HolidayOvertimeStacking::GreaterOf;

/// Resolves the hourly rate for an entry.
///
/// The entry's snapshotted rate wins; otherwise `fallback_rate`; otherwise
/// zero. A missing rate is never an error.
pub fn resolve_rate(entry: &TimeEntry, fallback_rate: Option<Decimal>) -> Decimal {
    match entry.hourly_rate.or(fallback_rate) {
        Some(rate) => rate,
        None => {
            debug!(
                entry_id = %entry.id,
                entry_date = %entry.entry_date,
                "No hourly rate on entry and no fallback rate, paying $0"
            );
            Decimal::ZERO
        }
    }
}

/// Prices one entry's hour split.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{price_entry, HourSplit};
/// use payroll_engine::config::PayPolicy;
/// use payroll_engine::models::{PayCategory, TimeEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = TimeEntry::new(
///     NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
///     Decimal::from(9),
///     Some(Decimal::from(20)),
/// );
/// let split = HourSplit {
///     regular_hours: Decimal::from(4),
///     overtime_hours: Decimal::from(5),
/// };
///
/// let allocation = price_entry(&entry, split, None, &PayPolicy::default());
/// assert_eq!(allocation.regular_amount, Decimal::from(80));
/// assert_eq!(allocation.overtime_amount, Decimal::from(150));
/// assert_eq!(allocation.category, PayCategory::Overtime);
/// ```
pub fn price_entry(
    entry: &TimeEntry,
    split: HourSplit,
    fallback_rate: Option<Decimal>,
    policy: &PayPolicy,
) -> EntryAllocation {
    let rate = resolve_rate(entry, fallback_rate);

    let (regular_amount, overtime_amount, category) = if entry.is_holiday {
        (
            split.regular_hours * rate * policy.holiday_multiplier(),
            split.overtime_hours * rate * policy.holiday_overtime_multiplier(),
            PayCategory::Holiday,
        )
    } else {
        let category = if split.overtime_hours.is_zero() {
            PayCategory::Regular
        } else {
            PayCategory::Overtime
        };
        (
            split.regular_hours * rate,
            split.overtime_hours * rate * policy.overtime_multiplier(),
            category,
        )
    };

    EntryAllocation {
        entry_id: entry.id,
        entry_date: entry.entry_date,
        regular_hours: split.regular_hours,
        overtime_hours: split.overtime_hours,
        rate,
        is_holiday: entry.is_holiday,
        regular_amount,
        overtime_amount,
        category,
    }
}

/// Running regular, overtime and holiday pay totals.
///
/// The pools are disjoint, so [`PayPools::total`] is their exact sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PayPools {
    /// Pay for non-holiday regular hours.
    pub regular_pay: Decimal,
    /// Pay for non-holiday overtime hours.
    pub overtime_pay: Decimal,
    /// Pay for holiday-tagged hours.
    pub holiday_pay: Decimal,
}

impl PayPools {
    /// Adds a priced entry to the pools.
    pub fn add(&mut self, allocation: &EntryAllocation) {
        if allocation.is_holiday {
            self.holiday_pay += allocation.regular_amount + allocation.overtime_amount;
        } else {
            self.regular_pay += allocation.regular_amount;
            self.overtime_pay += allocation.overtime_amount;
        }
    }

    /// Sum of all three pools.
    pub fn total(&self) -> Decimal {
        self.regular_pay + self.overtime_pay + self.holiday_pay
    }
}
