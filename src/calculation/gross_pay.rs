//! Gross pay calculation functionality.
//!
//! This module provides the per-method formula that turns a compensation
//! method and the hours worked into one period's gross pay.
//!
//! ## Rate Structure
//!
//! - **Hourly:** base rate up to the overtime threshold (40 hours by default),
//!   then the overtime multiplier (1.5 by default) on every hour beyond it.
//! - **Salaried:** annual salary divided by the pay periods per year (24 by
//!   default). Hours are ignored.
//!
//! Both results are rounded to cents, half away from zero.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PayrollPolicy;
use crate::models::CompensationMethod;

use super::money::round_money;

/// Calculates one period's gross pay.
///
/// # Arguments
///
/// * `method` - How the employee is paid, with the rate
/// * `hours_worked` - Hours worked this period
/// * `policy` - Overtime threshold/multiplier and pay periods per year
///
/// # Returns
///
/// The rounded gross pay, or `None` when an hourly method is given negative
/// hours. A payroll run rejects negative hours before reaching this point.
/// Salaried pay ignores `hours_worked`, including negative values.
///
/// Also `None` when the amount does not fit in a `Decimal` or the policy has
/// zero pay periods per year.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_gross_pay;
/// use payroll_engine::config::PayrollPolicy;
/// use payroll_engine::models::CompensationMethod;
/// use rust_decimal::Decimal;
///
/// let policy = PayrollPolicy::default();
/// let hourly = CompensationMethod::Hourly { hourly_rate: Decimal::from(20) };
/// let salaried = CompensationMethod::Salaried { annual_salary: Decimal::from(72000) };
///
/// assert_eq!(calculate_gross_pay(&hourly, Decimal::from(45), &policy), Some(Decimal::from(950)));
/// assert_eq!(calculate_gross_pay(&salaried, Decimal::from(-3), &policy), Some(Decimal::from(3000)));
/// ```
pub fn calculate_gross_pay(
    method: &CompensationMethod,
    hours_worked: Decimal,
    policy: &PayrollPolicy,
) -> Option<Decimal> {
    let gross_pay = match method {
        CompensationMethod::Hourly { hourly_rate } => {
            if hours_worked < Decimal::ZERO {
                return None;
            }
            hourly_gross_pay(*hourly_rate, hours_worked, policy)?
        }
        CompensationMethod::Salaried { annual_salary } => {
            annual_salary.checked_div(policy.pay_periods_divisor())?
        }
    };

    let gross_pay = round_money(gross_pay);
    debug!(
        pay_type = %method.pay_type(),
        hours_worked = %hours_worked,
        gross_pay = %gross_pay,
        "Calculated gross pay"
    );
    Some(gross_pay)
}

fn hourly_gross_pay(
    hourly_rate: Decimal,
    hours_worked: Decimal,
    policy: &PayrollPolicy,
) -> Option<Decimal> {
    let threshold = policy.overtime_threshold_hours;
    if hours_worked <= threshold {
        return hourly_rate.checked_mul(hours_worked);
    }

    let overtime_hours = hours_worked.checked_sub(threshold)?;
    let overtime_rate = hourly_rate.checked_mul(policy.overtime_multiplier)?;
    let regular_pay = hourly_rate.checked_mul(threshold)?;
    regular_pay.checked_add(overtime_hours.checked_mul(overtime_rate)?)
}
