//! Pay period totals.
//!
//! Ties the aggregator, allocator, pay calculator and reconciler together
//! into the totals for one pay period, with an audit trail of every
//! decision. The calculation is pure: identical inputs always produce
//! identical output.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PayPolicy;
use crate::models::{AuditStep, PayPeriod, PayPeriodTotals, PeriodSummary, TimeEntry};

use super::daily_aggregator::get_daily_breakdown_for_period;
use super::daily_reconciler::reconcile_daily_breakdown;
use super::overtime_allocator::{allocate_entries, split_weekly_hours};
use super::pay_calculator::{PayPools, price_entry};
use super::pay_period_resolver::try_pay_period_for_date;

/// Calculates hour and pay totals for one pay period.
///
/// Hours are split against `policy.weekly_threshold()` for the whole week;
/// pay is computed entry by entry in chronological order, each entry at its
/// own snapshotted rate or `fallback_rate`. Entries outside `period` are
/// ignored.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_pay_period_totals, get_pay_period_for_date};
/// use payroll_engine::config::PayPolicy;
/// use payroll_engine::models::TimeEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let entries: Vec<TimeEntry> = monday
///     .iter_days()
///     .take(5)
///     .map(|d| TimeEntry::new(d, Decimal::from(9), Some(Decimal::from(20))))
///     .collect();
///
/// let totals = calculate_pay_period_totals(
///     &entries,
///     &get_pay_period_for_date(monday),
///     None,
///     &PayPolicy::default(),
/// );
///
/// assert_eq!(totals.regular_hours, Decimal::from(40));
/// assert_eq!(totals.overtime_hours, Decimal::from(5));
/// assert_eq!(totals.regular_pay, Decimal::from(800));
/// assert_eq!(totals.overtime_pay, Decimal::from(150));
/// assert_eq!(totals.total_pay, Decimal::from(950));
/// ```
pub fn calculate_pay_period_totals(
    entries: &[TimeEntry],
    period: &PayPeriod,
    fallback_rate: Option<Decimal>,
    policy: &PayPolicy,
) -> PayPeriodTotals {
    let threshold = policy.weekly_threshold();
    let mut audit_trace: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    // Daily buckets: weekly total hours come from here, not the entries' split
    let daily = get_daily_breakdown_for_period(entries, period);
    let total_hours: Decimal = daily.iter().map(|d| d.total_hours).sum();
    let holiday_hours: Decimal = daily.iter().map(|d| d.holiday_hours).sum();
    let days_worked = daily.iter().filter(|d| d.is_worked()).count() as u32;

    audit_trace.push(AuditStep {
        step_number,
        rule_id: "daily_aggregation".to_string(),
        rule_name: "Daily Aggregation".to_string(),
        input: serde_json::json!({
            "week_start": period.week_start.to_string(),
            "week_end": period.week_end.to_string(),
        }),
        output: serde_json::json!({
            "total_hours": total_hours.normalize().to_string(),
            "holiday_hours": holiday_hours.normalize().to_string(),
            "days_worked": days_worked,
        }),
        reasoning: format!(
            "{} hours recorded across {} days in {}",
            total_hours.normalize(),
            days_worked,
            period.label
        ),
    });
    step_number += 1;

    let weekly = split_weekly_hours(total_hours, threshold);
    audit_trace.push(AuditStep {
        step_number,
        rule_id: "weekly_threshold_split".to_string(),
        rule_name: "Weekly Threshold Split".to_string(),
        input: serde_json::json!({
            "total_hours": total_hours.normalize().to_string(),
            "weekly_threshold": threshold.normalize().to_string(),
        }),
        output: serde_json::json!({
            "regular_hours": weekly.regular_hours.normalize().to_string(),
            "overtime_hours": weekly.overtime_hours.normalize().to_string(),
        }),
        reasoning: if weekly.overtime_hours > Decimal::ZERO {
            format!(
                "{} hours worked exceeds {} hour threshold by {} hours",
                total_hours.normalize(),
                threshold.normalize(),
                weekly.overtime_hours.normalize()
            )
        } else {
            format!(
                "{} hours worked is within {} hour threshold, no overtime",
                total_hours.normalize(),
                threshold.normalize()
            )
        },
    });
    step_number += 1;

    // Entry-level walk for pay
    let mut pools = PayPools::default();
    let mut entry_allocations = Vec::new();
    for (entry, split) in allocate_entries(entries, period, threshold) {
        let allocation = price_entry(entry, split, fallback_rate, policy);
        pools.add(&allocation);

        audit_trace.push(AuditStep {
            step_number,
            rule_id: "entry_proration".to_string(),
            rule_name: "Entry Proration".to_string(),
            input: serde_json::json!({
                "entry_id": entry.id.to_string(),
                "entry_date": entry.entry_date.to_string(),
                "hours": entry.total_hours().normalize().to_string(),
                "is_holiday": entry.is_holiday,
            }),
            output: serde_json::json!({
                "regular_hours": allocation.regular_hours.normalize().to_string(),
                "overtime_hours": allocation.overtime_hours.normalize().to_string(),
                "rate": allocation.rate.normalize().to_string(),
                "amount": allocation.amount().normalize().to_string(),
            }),
            reasoning: format!(
                "{} regular and {} overtime hours at ${}{} = ${}",
                allocation.regular_hours.normalize(),
                allocation.overtime_hours.normalize(),
                allocation.rate.normalize(),
                if entry.is_holiday { " (holiday)" } else { "" },
                allocation.amount().normalize()
            ),
        });
        step_number += 1;
        entry_allocations.push(allocation);
    }

    let total_pay = pools.total();
    audit_trace.push(AuditStep {
        step_number,
        rule_id: "period_totals".to_string(),
        rule_name: "Period Totals".to_string(),
        input: serde_json::json!({
            "entries": entry_allocations.len(),
        }),
        output: serde_json::json!({
            "regular_pay": pools.regular_pay.normalize().to_string(),
            "overtime_pay": pools.overtime_pay.normalize().to_string(),
            "holiday_pay": pools.holiday_pay.normalize().to_string(),
            "total_pay": total_pay.normalize().to_string(),
        }),
        reasoning: format!(
            "${} regular + ${} overtime + ${} holiday = ${}",
            pools.regular_pay.normalize(),
            pools.overtime_pay.normalize(),
            pools.holiday_pay.normalize(),
            total_pay.normalize()
        ),
    });

    debug!(
        period = %period.label,
        entries = entry_allocations.len(),
        total_hours = %total_hours,
        overtime_hours = %weekly.overtime_hours,
        total_pay = %total_pay,
        "Calculated pay period totals"
    );

    PayPeriodTotals {
        regular_hours: weekly.regular_hours,
        overtime_hours: weekly.overtime_hours,
        holiday_hours,
        total_hours,
        days_worked,
        regular_pay: pools.regular_pay,
        overtime_pay: pools.overtime_pay,
        holiday_pay: pools.holiday_pay,
        total_pay,
        daily_breakdown: reconcile_daily_breakdown(daily, threshold),
        entry_allocations,
        audit_trace,
    }
}

/// Calculates totals for every pay period present in `entries`, most recent first.
///
/// Entries are grouped by week in a single pass, so each period's totals
/// only see that week's entries. Weeks that cannot be represented are
/// skipped, matching [`super::get_all_pay_periods_from_entries`].
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::summarize_pay_periods;
/// use payroll_engine::config::PayPolicy;
/// use payroll_engine::models::TimeEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entries = vec![
///     TimeEntry::new(NaiveDate::from_ymd_opt(2026, 1, 6).unwrap(), Decimal::from(8), Some(Decimal::from(20))),
///     TimeEntry::new(NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(), Decimal::from(6), Some(Decimal::from(20))),
/// ];
///
/// let summaries = summarize_pay_periods(&entries, None, &PayPolicy::default());
/// assert_eq!(summaries.len(), 2);
/// assert_eq!(summaries[0].totals.total_pay, Decimal::from(120));
/// assert_eq!(summaries[1].totals.total_pay, Decimal::from(160));
/// ```
pub fn summarize_pay_periods(
    entries: &[TimeEntry],
    fallback_rate: Option<Decimal>,
    policy: &PayPolicy,
) -> Vec<PeriodSummary> {
    let mut weeks: BTreeMap<NaiveDate, (PayPeriod, Vec<TimeEntry>)> = BTreeMap::new();
    for entry in entries {
        if let Some(period) = try_pay_period_for_date(entry.entry_date) {
            weeks
                .entry(period.week_start)
                .or_insert_with(|| (period, Vec::new()))
                .1
                .push(entry.clone());
        }
    }

    weeks
        .into_values()
        .rev()
        .map(|(period, week_entries)| {
            let totals = calculate_pay_period_totals(&week_entries, &period, fallback_rate, policy);
            PeriodSummary { period, totals }
        })
        .collect()
}
