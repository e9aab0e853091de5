//! Calculation result models for the payroll engine.
//!
//! This module contains [`PayPeriodTotals`] and its associated structures,
//! which capture every output of a period calculation: hour totals, pay
//! totals, the daily display breakdown, per-entry allocations and an audit
//! trail.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DailyBreakdown, PayPeriod};

/// The pay pool an entry's hours were paid from.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayCategory;
///
/// let category = PayCategory::Holiday;
/// assert_eq!(serde_json::to_string(&category).unwrap(), "\"holiday\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayCategory {
    /// Entirely within the weekly threshold, paid at the base rate.
    Regular,
    /// Some or all hours beyond the weekly threshold.
    Overtime,
    /// Holiday-tagged entry, paid into the holiday pool.
    Holiday,
}

/// The result of prorating one time entry against the weekly threshold.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{EntryAllocation, PayCategory};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let allocation = EntryAllocation {
///     entry_id: Uuid::nil(),
///     entry_date: NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
///     regular_hours: Decimal::from(4),
///     overtime_hours: Decimal::from(5),
///     rate: Decimal::from(20),
///     is_holiday: false,
///     regular_amount: Decimal::from(80),
///     overtime_amount: Decimal::from(150),
///     category: PayCategory::Overtime,
/// };
/// assert_eq!(allocation.amount(), Decimal::from(230));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryAllocation {
    /// The ID of the time entry.
    pub entry_id: Uuid,
    /// The date of the time entry.
    pub entry_date: NaiveDate,
    /// Hours of this entry falling within the weekly threshold.
    pub regular_hours: Decimal,
    /// Hours of this entry falling beyond the weekly threshold.
    pub overtime_hours: Decimal,
    /// The hourly rate applied (snapshot rate, fallback rate, or zero).
    pub rate: Decimal,
    /// Whether the entry was tagged as holiday work.
    pub is_holiday: bool,
    /// Pay for the regular portion, including any holiday multiplier.
    pub regular_amount: Decimal,
    /// Pay for the overtime portion, including any multiplier.
    pub overtime_amount: Decimal,
    /// Which pay pool the amounts were added to.
    pub category: PayCategory,
}

impl EntryAllocation {
    /// Total pay for this entry.
    pub fn amount(&self) -> Decimal {
        self.regular_amount + self.overtime_amount
    }
}

/// A single step in the audit trail recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number, starting at 1.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// Hour and pay totals for one pay period.
///
/// `total_pay` is always exactly `regular_pay + overtime_pay + holiday_pay`,
/// and `regular_hours + overtime_hours` is always `total_hours`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriodTotals {
    /// Weekly hours within the threshold.
    pub regular_hours: Decimal,
    /// Weekly hours beyond the threshold.
    pub overtime_hours: Decimal,
    /// Hours worked on holiday-tagged entries.
    pub holiday_hours: Decimal,
    /// All hours worked in the period.
    pub total_hours: Decimal,
    /// Number of days in the period with any hours worked.
    pub days_worked: u32,
    /// Pay for non-holiday regular hours.
    pub regular_pay: Decimal,
    /// Pay for non-holiday overtime hours.
    pub overtime_pay: Decimal,
    /// Pay for all holiday-tagged hours.
    pub holiday_pay: Decimal,
    /// Sum of the three pay pools.
    pub total_pay: Decimal,
    /// Seven rows, Monday to Sunday. The regular/overtime split is display only.
    pub daily_breakdown: Vec<DailyBreakdown>,
    /// One allocation per in-period entry, in the order they were walked.
    pub entry_allocations: Vec<EntryAllocation>,
    /// Decisions made during the calculation.
    pub audit_trace: Vec<AuditStep>,
}

/// A pay period together with its computed totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// The pay period.
    pub period: PayPeriod,
    /// The totals computed for that period.
    pub totals: PayPeriodTotals,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_allocation(category: PayCategory) -> EntryAllocation {
        EntryAllocation {
            entry_id: Uuid::nil(),
            entry_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            regular_hours: dec("8"),
            overtime_hours: dec("0"),
            rate: dec("25"),
            is_holiday: category == PayCategory::Holiday,
            regular_amount: dec("400"),
            overtime_amount: dec("0"),
            category,
        }
    }

    #[test]
    fn test_pay_category_serialization() {
        assert_eq!(
            serde_json::to_string(&PayCategory::Regular).unwrap(),
            "\"regular\""
        );
        assert_eq!(
            serde_json::to_string(&PayCategory::Overtime).unwrap(),
            "\"overtime\""
        );
        let parsed: PayCategory = serde_json::from_str("\"holiday\"").unwrap();
        assert_eq!(parsed, PayCategory::Holiday);
    }

    #[test]
    fn test_entry_allocation_amount() {
        let mut allocation = create_allocation(PayCategory::Overtime);
        allocation.overtime_amount = dec("37.5");
        assert_eq!(allocation.amount(), dec("437.5"));
    }

    #[test]
    fn test_entry_allocation_serializes_decimals_as_strings() {
        let json = serde_json::to_value(create_allocation(PayCategory::Holiday)).unwrap();
        assert_eq!(json["regular_amount"], "400");
        assert_eq!(json["category"], "holiday");
        assert_eq!(json["is_holiday"], true);
    }

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "weekly_threshold_split".to_string(),
            rule_name: "Weekly Threshold Split".to_string(),
            input: serde_json::json!({"total_hours": "45"}),
            output: serde_json::json!({"overtime_hours": "5"}),
            reasoning: "45 hours exceeds 40 hour threshold".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        let deserialized: AuditStep = serde_json::from_str(&json).unwrap();
        assert_eq!(step, deserialized);
    }
}
