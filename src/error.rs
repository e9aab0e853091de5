//! Error types for the payroll engine.
//!
//! Time-entry data is never rejected by the engine; the only failures are
//! configuration problems, which are reported through [`EngineError`].

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The weekly overtime threshold was zero or negative.
    #[error("Weekly overtime threshold must be positive, got {value}")]
    InvalidThreshold {
        /// The rejected threshold.
        value: Decimal,
    },

    /// A pay multiplier was below 1.
    #[error("Multiplier '{name}' must be at least 1, got {value}")]
    InvalidMultiplier {
        /// Which multiplier was rejected (e.g. "overtime_multiplier").
        name: String,
        /// The rejected value.
        value: Decimal,
    },

    /// The configured fallback hourly rate was negative.
    #[error("Fallback hourly rate must not be negative, got {value}")]
    InvalidFallbackRate {
        /// The rejected rate.
        value: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/payroll.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/payroll.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_threshold_displays_value() {
        let error = EngineError::InvalidThreshold {
            value: Decimal::ZERO,
        };
        assert_eq!(
            error.to_string(),
            "Weekly overtime threshold must be positive, got 0"
        );
    }

    #[test]
    fn test_invalid_multiplier_displays_name_and_value() {
        let error = EngineError::InvalidMultiplier {
            name: "holiday_multiplier".to_string(),
            value: Decimal::from_str("0.5").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Multiplier 'holiday_multiplier' must be at least 1, got 0.5"
        );
    }

    #[test]
    fn test_invalid_fallback_rate_displays_value() {
        let error = EngineError::InvalidFallbackRate {
            value: Decimal::from_str("-20").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Fallback hourly rate must not be negative, got -20"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_threshold() -> EngineResult<()> {
            Err(EngineError::InvalidThreshold {
                value: Decimal::ZERO,
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_threshold()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
