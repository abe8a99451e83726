//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading payroll
//! policy overrides from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::PayrollPolicy;

/// Loads and provides access to a payroll policy.
///
/// # File Format
///
/// ```text
/// tax_rate: "0.2265"
/// pay_periods_per_year: 24
/// overtime_threshold_hours: "40"
/// overtime_multiplier: "1.5"
/// ```
///
/// Any key may be omitted, in which case the default value is used.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/payroll.yaml")?;
/// println!("Tax rate: {}", loader.policy().tax_rate);
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: PayrollPolicy,
}

impl PolicyLoader {
    /// Loads a policy from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - A value is out of range (`InvalidPolicy`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let policy = Self::parse(&content).map_err(|err| match err {
            PayrollError::ConfigParseError { message, .. } => PayrollError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        debug!(path = %path_str, ?policy, "Loaded payroll policy");
        Ok(Self { policy })
    }

    /// Parses and validates a policy from YAML text.
    pub fn parse(content: &str) -> PayrollResult<PayrollPolicy> {
        let policy: PayrollPolicy =
            serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        policy.validate()?;
        Ok(policy)
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }

    /// Consumes the loader and returns the policy.
    pub fn into_policy(self) -> PayrollPolicy {
        self.policy
    }
}
