//! Calculator bound to a loaded payroll configuration.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::{PayPolicy, PayrollConfig};
use crate::models::{PayPeriod, PayPeriodTotals, PeriodSummary, TimeEntry};

use super::pay_period_resolver::{get_last_completed_pay_period, get_pay_period_for_date};
use super::period_totals::{calculate_pay_period_totals, summarize_pay_periods};

/// Runs period calculations with a fixed policy and fallback rate.
///
/// Holds no state besides its configuration, so it can be shared freely
/// between callers.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::PayrollCalculator;
/// use payroll_engine::models::TimeEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let calculator = PayrollCalculator::default().with_fallback_rate(Some(Decimal::from(20)));
/// let entries = vec![TimeEntry::new(
///     NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
///     Decimal::from(8),
///     None,
/// )];
///
/// let totals = calculator.totals_for_date(&entries, NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());
/// assert_eq!(totals.total_pay, Decimal::from(160));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayrollCalculator {
    policy: PayPolicy,
    fallback_rate: Option<Decimal>,
}

impl PayrollCalculator {
    /// Creates a calculator from a policy and fallback rate.
    pub fn new(policy: PayPolicy, fallback_rate: Option<Decimal>) -> Self {
        Self {
            policy,
            fallback_rate,
        }
    }

    /// Returns the calculator with a different fallback rate.
    pub fn with_fallback_rate(mut self, fallback_rate: Option<Decimal>) -> Self {
        self.fallback_rate = fallback_rate;
        self
    }

    /// The policy calculations run with.
    pub fn policy(&self) -> &PayPolicy {
        &self.policy
    }

    /// The rate used for entries without a snapshotted rate.
    pub fn fallback_rate(&self) -> Option<Decimal> {
        self.fallback_rate
    }

    /// Totals for an explicit pay period.
    pub fn totals_for_period(&self, entries: &[TimeEntry], period: &PayPeriod) -> PayPeriodTotals {
        calculate_pay_period_totals(entries, period, self.fallback_rate, &self.policy)
    }

    /// Totals for the pay period containing `date`.
    pub fn totals_for_date(&self, entries: &[TimeEntry], date: NaiveDate) -> PayPeriodTotals {
        self.totals_for_period(entries, &get_pay_period_for_date(date))
    }

    /// The previous week's period relative to `reference_date`, with its totals.
    pub fn last_completed(
        &self,
        entries: &[TimeEntry],
        reference_date: NaiveDate,
    ) -> PeriodSummary {
        let period = get_last_completed_pay_period(reference_date);
        let totals = self.totals_for_period(entries, &period);
        PeriodSummary { period, totals }
    }

    /// Totals for every period present in `entries`, most recent first.
    pub fn summaries(&self, entries: &[TimeEntry]) -> Vec<PeriodSummary> {
        summarize_pay_periods(entries, self.fallback_rate, &self.policy)
    }
}

impl From<&PayrollConfig> for PayrollCalculator {
    fn from(config: &PayrollConfig) -> Self {
        Self::new(*config.policy(), config.fallback_rate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_calculator_from_loaded_config() {
        let loader = ConfigLoader::load("./config/default").unwrap();
        let calculator = PayrollCalculator::from(loader.config());

        assert_eq!(calculator.policy().weekly_threshold(), dec("40"));
        assert_eq!(calculator.fallback_rate(), None);
    }

    #[test]
    fn test_last_completed_uses_previous_week() {
        let calculator = PayrollCalculator::default();
        let entries = vec![
            TimeEntry::new(make_date("2026-01-13"), dec("8"), Some(dec("20"))),
            TimeEntry::new(make_date("2026-01-20"), dec("8"), Some(dec("20"))),
        ];

        let summary = calculator.last_completed(&entries, make_date("2026-01-21"));
        assert_eq!(summary.period.week_start, make_date("2026-01-12"));
        assert_eq!(summary.totals.total_hours, dec("8"));
    }

    #[test]
    fn test_summaries_match_period_totals() {
        let calculator = PayrollCalculator::default().with_fallback_rate(Some(dec("18")));
        let entries = vec![
            TimeEntry::new(make_date("2026-01-13"), dec("8"), None),
            TimeEntry::new(make_date("2026-01-20"), dec("8"), Some(dec("20"))),
        ];

        for summary in calculator.summaries(&entries) {
            assert_eq!(
                summary.totals,
                calculator.totals_for_period(&entries, &summary.period)
            );
        }
    }
}
