//! Payroll policy types.
//!
//! This module contains the strongly-typed policy structure that is
//! deserialized from a YAML policy file, along with its default values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// The flat combined withholding rate applied to taxable income (22.65%).
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(2265, 0, 0, false, 4);

/// Number of semimonthly pay periods a salary is divided across.
pub const DEFAULT_PAY_PERIODS_PER_YEAR: u32 = 24;

/// Hours per period paid at the base hourly rate before overtime applies.
pub const DEFAULT_OVERTIME_THRESHOLD_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Multiplier applied to the hourly rate for overtime hours.
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// The policy constants a payroll run is computed with.
///
/// Missing keys in a policy file fall back to the [`Default`] values,
/// which are the standard constants every documented scenario relies on.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = PayrollPolicy::default();
/// assert_eq!(policy.tax_rate, Decimal::new(2265, 4));
/// assert_eq!(policy.pay_periods_per_year, 24);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollPolicy {
    /// Flat withholding rate applied to taxable income.
    pub tax_rate: Decimal,
    /// Pay periods per year used to divide an annual salary.
    pub pay_periods_per_year: u32,
    /// Hours after which hourly employees earn overtime.
    pub overtime_threshold_hours: Decimal,
    /// Overtime rate as a multiple of the base hourly rate.
    pub overtime_multiplier: Decimal,
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            pay_periods_per_year: DEFAULT_PAY_PERIODS_PER_YEAR,
            overtime_threshold_hours: DEFAULT_OVERTIME_THRESHOLD_HOURS,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

impl PayrollPolicy {
    /// Checks that every value is in range.
    ///
    /// A tax rate above 1 would withhold more than the taxable amount, so it
    /// is rejected along with non-positive period counts and overtime
    /// multipliers below 1.
    pub fn validate(&self) -> PayrollResult<()> {
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE {
            return Err(invalid("tax_rate", "must be between 0 and 1"));
        }
        if self.pay_periods_per_year == 0 {
            return Err(invalid("pay_periods_per_year", "must be greater than 0"));
        }
        if self.overtime_threshold_hours < Decimal::ZERO {
            return Err(invalid("overtime_threshold_hours", "cannot be negative"));
        }
        if self.overtime_multiplier < Decimal::ONE {
            return Err(invalid("overtime_multiplier", "must be at least 1"));
        }
        Ok(())
    }

    /// Returns the pay period count as a decimal divisor.
    pub fn pay_periods_divisor(&self) -> Decimal {
        Decimal::from(self.pay_periods_per_year)
    }
}

fn invalid(field: &str, message: &str) -> PayrollError {
    PayrollError::InvalidPolicy {
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_constants_are_exact() {
        let policy = PayrollPolicy::default();
        assert_eq!(policy.tax_rate, dec("0.2265"));
        assert_eq!(policy.pay_periods_per_year, 24);
        assert_eq!(policy.overtime_threshold_hours, dec("40"));
        assert_eq!(policy.overtime_multiplier, dec("1.5"));
    }

    #[test]
    fn test_default_policy_is_valid() {
        assert!(PayrollPolicy::default().validate().is_ok());
    }

    #[test]
    fn test_tax_rate_above_one_is_rejected() {
        let policy = PayrollPolicy {
            tax_rate: dec("1.01"),
            ..PayrollPolicy::default()
        };
        assert!(matches!(
            policy.validate(),
            Err(PayrollError::InvalidPolicy { field, .. }) if field == "tax_rate"
        ));
    }

    #[test]
    fn test_zero_pay_periods_is_rejected() {
        let policy = PayrollPolicy {
            pay_periods_per_year: 0,
            ..PayrollPolicy::default()
        };
        assert!(matches!(
            policy.validate(),
            Err(PayrollError::InvalidPolicy { field, .. }) if field == "pay_periods_per_year"
        ));
    }

    #[test]
    fn test_overtime_multiplier_below_one_is_rejected() {
        let policy = PayrollPolicy {
            overtime_multiplier: dec("0.5"),
            ..PayrollPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let policy: PayrollPolicy = serde_yaml::from_str("pay_periods_per_year: 26\n").unwrap();
        assert_eq!(policy.pay_periods_per_year, 26);
        assert_eq!(policy.tax_rate, dec("0.2265"));
        assert_eq!(policy.overtime_multiplier, dec("1.5"));
    }

    #[test]
    fn test_pay_periods_divisor() {
        assert_eq!(PayrollPolicy::default().pay_periods_divisor(), dec("24"));
    }
}
