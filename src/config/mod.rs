//! Configuration loading and management for the payroll engine.
//!
//! This module provides the validated [`PayPolicy`] every calculation runs
//! with, and loading of policies from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded payroll config: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    HolidayOvertimeStacking, HolidaySection, OvertimeSection, PayPolicy, PayrollConfig,
    PayrollMetadata, PolicyFile,
};
