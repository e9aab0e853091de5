//! Payroll Pay-Period Engine
//!
//! This crate turns daily time-entry records into weekly regular, overtime
//! and holiday hour totals, pay amounts, and a per-day display breakdown.
//! Pay periods run Monday to Sunday and are paid the following Friday.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
