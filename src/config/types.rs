//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the validated
//! [`PayPolicy`] the calculation functions take.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    DEFAULT_HOLIDAY_MULTIPLIER, DEFAULT_HOLIDAY_OVERTIME_STACKING, DEFAULT_OVERTIME_MULTIPLIER,
    DEFAULT_WEEKLY_THRESHOLD,
};
use crate::error::{EngineError, EngineResult};

/// Metadata identifying a payroll configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollMetadata {
    /// Short identifier for the configuration (e.g., "default").
    pub code: String,
    /// The human-readable name of the configuration.
    pub name: String,
    /// The version or effective date of the configuration.
    pub version: String,
}

/// How the overtime portion of a holiday entry is multiplied.
///
/// Holiday and overtime premiums are never both applied in full by default;
/// [`HolidayOvertimeStacking::GreaterOf`] pays whichever is larger.
///
/// # Example
///
/// ```
/// use payroll_engine::config::HolidayOvertimeStacking;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let overtime = Decimal::from_str("1.5").unwrap();
/// let holiday = Decimal::from_str("2.0").unwrap();
///
/// assert_eq!(HolidayOvertimeStacking::GreaterOf.stacked_multiplier(overtime, holiday), holiday);
/// assert_eq!(
///     HolidayOvertimeStacking::Additive.stacked_multiplier(overtime, holiday),
///     Decimal::from_str("2.5").unwrap()
/// );
/// assert_eq!(
///     HolidayOvertimeStacking::Compounded.stacked_multiplier(overtime, holiday),
///     Decimal::from_str("3.0").unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayOvertimeStacking {
    /// Use the larger of the overtime and holiday multipliers.
    #[default]
    GreaterOf,
    /// Add both premiums on top of the base rate: `overtime + holiday - 1`.
    Additive,
    /// Multiply the two multipliers together.
    Compounded,
}

impl HolidayOvertimeStacking {
    /// The multiplier applied to overtime hours worked on a holiday entry.
    pub fn stacked_multiplier(
        self,
        overtime_multiplier: Decimal,
        holiday_multiplier: Decimal,
    ) -> Decimal {
        match self {
            Self::GreaterOf => overtime_multiplier.max(holiday_multiplier),
            Self::Additive => overtime_multiplier + holiday_multiplier - Decimal::ONE,
            Self::Compounded => overtime_multiplier * holiday_multiplier,
        }
    }
}

/// The threshold and multipliers a period calculation is run with.
///
/// Construct with [`PayPolicy::new`] or [`PayPolicy::default`]; both
/// guarantee a positive threshold and multipliers of at least 1.
///
/// # Example
///
/// ```
/// use payroll_engine::config::{HolidayOvertimeStacking, PayPolicy};
/// use rust_decimal::Decimal;
///
/// let policy = PayPolicy::new(
///     Decimal::from(38),
///     Decimal::new(15, 1),
///     Decimal::new(25, 1),
///     HolidayOvertimeStacking::GreaterOf,
/// )
/// .unwrap();
/// assert_eq!(policy.weekly_threshold(), Decimal::from(38));
///
/// assert!(PayPolicy::new(
///     Decimal::ZERO,
///     Decimal::new(15, 1),
///     Decimal::from(2),
///     HolidayOvertimeStacking::GreaterOf,
/// )
/// .is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayPolicy {
    weekly_threshold: Decimal,
    overtime_multiplier: Decimal,
    holiday_multiplier: Decimal,
    stacking: HolidayOvertimeStacking,
}

impl PayPolicy {
    /// Creates a validated policy.
    ///
    /// Returns [`EngineError::InvalidThreshold`] if `weekly_threshold <= 0`
    /// and [`EngineError::InvalidMultiplier`] if either multiplier is below 1.
    pub fn new(
        weekly_threshold: Decimal,
        overtime_multiplier: Decimal,
        holiday_multiplier: Decimal,
        stacking: HolidayOvertimeStacking,
    ) -> EngineResult<Self> {
        let policy = Self {
            weekly_threshold,
            overtime_multiplier,
            holiday_multiplier,
            stacking,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Checks the policy's threshold and multipliers.
    pub fn validate(&self) -> EngineResult<()> {
        if self.weekly_threshold <= Decimal::ZERO {
            return Err(EngineError::InvalidThreshold {
                value: self.weekly_threshold,
            });
        }
        for (name, value) in [
            ("overtime_multiplier", self.overtime_multiplier),
            ("holiday_multiplier", self.holiday_multiplier),
        ] {
            if value < Decimal::ONE {
                return Err(EngineError::InvalidMultiplier {
                    name: name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Hours per period paid at the regular rate before overtime starts.
    pub fn weekly_threshold(&self) -> Decimal {
        self.weekly_threshold
    }

    /// Multiplier for non-holiday overtime hours.
    pub fn overtime_multiplier(&self) -> Decimal {
        self.overtime_multiplier
    }

    /// Multiplier for holiday hours within the threshold.
    pub fn holiday_multiplier(&self) -> Decimal {
        self.holiday_multiplier
    }

    /// The holiday/overtime stacking rule.
    pub fn stacking(&self) -> HolidayOvertimeStacking {
        self.stacking
    }

    /// Multiplier for holiday hours beyond the threshold, per the stacking rule.
    pub fn holiday_overtime_multiplier(&self) -> Decimal {
        self.stacking
            .stacked_multiplier(self.overtime_multiplier, self.holiday_multiplier)
    }
}

impl Default for PayPolicy {
    fn default() -> Self {
        Self {
            weekly_threshold: DEFAULT_WEEKLY_THRESHOLD,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
            holiday_multiplier: DEFAULT_HOLIDAY_MULTIPLIER,
            stacking: DEFAULT_HOLIDAY_OVERTIME_STACKING,
        }
    }
}

/// Overtime section of policy.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimeSection {
    /// Weekly hours before overtime applies.
    #[serde(default = "default_weekly_threshold")]
    pub weekly_threshold: Decimal,
    /// Overtime pay multiplier.
    #[serde(default = "default_overtime_multiplier")]
    pub multiplier: Decimal,
}

/// Holiday section of policy.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaySection {
    /// Holiday pay multiplier.
    #[serde(default = "default_holiday_multiplier")]
    pub multiplier: Decimal,
    /// How holiday and overtime multipliers combine.
    #[serde(default)]
    pub stacking: HolidayOvertimeStacking,
}

/// Policy configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// Overtime settings.
    pub overtime: OvertimeSection,
    /// Holiday settings.
    pub holiday: HolidaySection,
    /// Rate used for entries with no snapshotted hourly rate.
    #[serde(default)]
    pub fallback_rate: Option<Decimal>,
}

fn default_weekly_threshold() -> Decimal {
    DEFAULT_WEEKLY_THRESHOLD
}

fn default_overtime_multiplier() -> Decimal {
    DEFAULT_OVERTIME_MULTIPLIER
}

fn default_holiday_multiplier() -> Decimal {
    DEFAULT_HOLIDAY_MULTIPLIER
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    metadata: PayrollMetadata,
    policy: PayPolicy,
    fallback_rate: Option<Decimal>,
}

impl PayrollConfig {
    /// Creates a configuration, rejecting a negative fallback rate.
    pub fn new(
        metadata: PayrollMetadata,
        policy: PayPolicy,
        fallback_rate: Option<Decimal>,
    ) -> EngineResult<Self> {
        if let Some(rate) = fallback_rate.filter(|r| *r < Decimal::ZERO) {
            return Err(EngineError::InvalidFallbackRate { value: rate });
        }
        Ok(Self {
            metadata,
            policy,
            fallback_rate,
        })
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        &self.metadata
    }

    /// Returns the validated pay policy.
    pub fn policy(&self) -> &PayPolicy {
        &self.policy
    }

    /// Returns the rate used for entries without a snapshotted rate.
    pub fn fallback_rate(&self) -> Option<Decimal> {
        self.fallback_rate
    }
}
