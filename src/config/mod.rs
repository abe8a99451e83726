//! Payroll policy configuration.
//!
//! This module holds the policy constants a payroll run uses (tax rate,
//! pay periods per year, overtime threshold and multiplier) and a loader
//! for overriding them from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::PolicyLoader;
//!
//! let loader = PolicyLoader::load("./config/payroll.yaml").unwrap();
//! println!("Pay periods: {}", loader.policy().pay_periods_per_year);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{
    DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_OVERTIME_THRESHOLD_HOURS, DEFAULT_PAY_PERIODS_PER_YEAR,
    DEFAULT_TAX_RATE, PayrollPolicy,
};
