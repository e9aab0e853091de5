//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{PayPolicy, PayrollConfig, PayrollMetadata, PolicyFile};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── payroll.yaml   # Configuration metadata
/// └── policy.yaml    # Threshold, multipliers, stacking rule, fallback rate
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Weekly threshold: {}", loader.policy().weekly_threshold());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or unparsable, or if the
    /// policy it describes is invalid (non-positive threshold, multiplier
    /// below 1, negative fallback rate).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PayrollMetadata>(&path.join("payroll.yaml"))?;
        let policy_file = Self::load_yaml::<PolicyFile>(&path.join("policy.yaml"))?;

        let policy = PayPolicy::new(
            policy_file.overtime.weekly_threshold,
            policy_file.overtime.multiplier,
            policy_file.holiday.multiplier,
            policy_file.holiday.stacking,
        )?;
        let config = PayrollConfig::new(metadata, policy, policy_file.fallback_rate)?;

        info!(
            code = %config.metadata().code,
            version = %config.metadata().version,
            weekly_threshold = %policy.weekly_threshold(),
            "Loaded payroll configuration"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        self.config.metadata()
    }

    /// Returns the validated pay policy.
    pub fn policy(&self) -> &PayPolicy {
        self.config.policy()
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}
