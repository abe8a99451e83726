//! Payroll run functionality.
//!
//! This module provides the withholding breakdown and the payroll run that
//! credits a compensation record's YTD totals and issues a [`PayStub`].
//!
//! Only gross pay is rounded. Taxable amount, tax, and net pay keep full
//! precision through the YTD update; rounding happens again only when an
//! amount is formatted.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::PayrollPolicy;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{CompensationRecord, PayStub};

use super::gross_pay::calculate_gross_pay;

/// The amounts derived from one period's gross pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayrollBreakdown {
    /// Gross pay before deductions.
    pub gross_pay: Decimal,
    /// Gross pay minus pretax deductions, floored at zero.
    pub taxable_amount: Decimal,
    /// Tax withheld from the taxable amount.
    pub taxes: Decimal,
    /// Taxable amount minus tax, floored at zero.
    pub net_pay: Decimal,
}

/// Derives taxable amount, tax, and net pay from gross pay.
///
/// Deductions larger than gross pay floor the taxable amount at zero
/// instead of producing a negative figure.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_withholding;
/// use rust_decimal::Decimal;
///
/// let breakdown = calculate_withholding(
///     Decimal::new(80000, 2),
///     Decimal::ZERO,
///     Decimal::new(2265, 4),
/// );
/// assert_eq!(breakdown.taxes, Decimal::new(18120, 2));
/// assert_eq!(breakdown.net_pay, Decimal::new(61880, 2));
/// ```
pub fn calculate_withholding(
    gross_pay: Decimal,
    pretax_deductions: Decimal,
    tax_rate: Decimal,
) -> PayrollBreakdown {
    let taxable_amount = (gross_pay - pretax_deductions).max(Decimal::ZERO);
    let taxes = taxable_amount * tax_rate;
    let net_pay = (taxable_amount - taxes).max(Decimal::ZERO);

    PayrollBreakdown {
        gross_pay,
        taxable_amount,
        taxes,
        net_pay,
    }
}

/// Runs payroll for one employee and one pay period.
///
/// Computes gross pay, withholds tax, adds net pay and tax to the record's
/// YTD totals, and returns a stub with the post-run totals. Each call is a
/// separate credit: running twice with the same hours pays twice.
///
/// # Errors
///
/// Returns [`PayrollError::Validation`] if `hours_worked` is negative,
/// [`PayrollError::InvalidPolicy`] if the policy is out of range, and
/// [`PayrollError::Calculation`] if gross pay or a YTD total does not fit in
/// a `Decimal`. The record is left untouched on any error.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::run_payroll;
/// use payroll_engine::config::PayrollPolicy;
/// use payroll_engine::models::CompensationRecord;
/// use rust_decimal::Decimal;
///
/// let mut record = CompensationRecord::hourly(
///     "Test Employee", "NEU001", Decimal::new(2000, 2),
///     Decimal::ZERO, Decimal::new(100000, 2), Decimal::new(20000, 2),
/// ).unwrap();
///
/// let stub = run_payroll(&mut record, Decimal::from(40), &PayrollPolicy::default()).unwrap();
///
/// assert_eq!(stub.to_csv(), "Test Employee,618.80,181.20,1618.80,381.20");
/// assert_eq!(record.ytd_earnings(), Decimal::new(161880, 2));
/// ```
pub fn run_payroll(
    record: &mut CompensationRecord,
    hours_worked: Decimal,
    policy: &PayrollPolicy,
) -> PayrollResult<PayStub> {
    if hours_worked < Decimal::ZERO {
        warn!(
            employee_id = %record.id(),
            hours_worked = %hours_worked,
            "Rejected payroll run with negative hours"
        );
        return Err(PayrollError::validation(
            "hours_worked",
            "hours worked cannot be negative",
        ));
    }
    policy.validate()?;

    let gross_pay = calculate_gross_pay(record.method(), hours_worked, policy)
        .ok_or_else(|| overflow(record, "gross pay"))?;
    let breakdown = calculate_withholding(gross_pay, record.pretax_deductions(), policy.tax_rate);
    debug!(
        employee_id = %record.id(),
        gross_pay = %breakdown.gross_pay,
        taxable_amount = %breakdown.taxable_amount,
        taxes = %breakdown.taxes,
        net_pay = %breakdown.net_pay,
        "Calculated withholding"
    );

    let ytd_earnings = record
        .ytd_earnings()
        .checked_add(breakdown.net_pay)
        .ok_or_else(|| overflow(record, "YTD earnings"))?;
    let ytd_taxes_paid = record
        .ytd_taxes_paid()
        .checked_add(breakdown.taxes)
        .ok_or_else(|| overflow(record, "YTD taxes paid"))?;

    // The stub is validated before the record changes so a failure leaves no partial credit.
    let stub = PayStub::new(
        record,
        breakdown.net_pay,
        breakdown.taxes,
        ytd_earnings,
        ytd_taxes_paid,
    )?
    .with_breakdown(breakdown.gross_pay, breakdown.taxable_amount);

    record.apply_ytd(ytd_earnings, ytd_taxes_paid);

    info!(
        employee_id = %record.id(),
        run_id = %stub.run_id(),
        net_pay = %breakdown.net_pay,
        ytd_earnings = %record.ytd_earnings(),
        ytd_taxes_paid = %record.ytd_taxes_paid(),
        "Payroll run credited YTD totals"
    );

    Ok(stub)
}

fn overflow(record: &CompensationRecord, amount: &str) -> PayrollError {
    warn!(employee_id = %record.id(), amount, "Payroll amount out of range");
    PayrollError::Calculation {
        message: format!("{amount} for employee '{}' is out of range", record.id()),
    }
}

impl CompensationRecord {
    /// Runs payroll under the default policy.
    ///
    /// See [`run_payroll`] for the full contract.
    pub fn run_payroll(&mut self, hours_worked: Decimal) -> PayrollResult<PayStub> {
        run_payroll(self, hours_worked, &PayrollPolicy::default())
    }

    /// Runs payroll under an explicit policy.
    pub fn run_payroll_with_policy(
        &mut self,
        hours_worked: Decimal,
        policy: &PayrollPolicy,
    ) -> PayrollResult<PayStub> {
        run_payroll(self, hours_worked, policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_hourly_record() -> CompensationRecord {
        CompensationRecord::hourly(
            "Test Employee",
            "NEU001",
            dec("20.00"),
            dec("0.00"),
            dec("1000.00"),
            dec("200.00"),
        )
        .unwrap()
    }

    fn create_salaried_record(pretax: &str) -> CompensationRecord {
        CompensationRecord::salaried(
            "Jane Smith",
            "E456",
            dec("72000.00"),
            dec(pretax),
            dec("0.00"),
            dec("0.00"),
        )
        .unwrap()
    }

    #[test]
    fn test_withholding_without_deductions() {
        let breakdown = calculate_withholding(dec("800.00"), dec("0"), dec("0.2265"));
        assert_eq!(breakdown.taxable_amount, dec("800.00"));
        assert_eq!(breakdown.taxes, dec("181.20"));
        assert_eq!(breakdown.net_pay, dec("618.80"));
    }

    #[test]
    fn test_withholding_subtracts_deductions_before_tax() {
        let breakdown = calculate_withholding(dec("3000.00"), dec("300.00"), dec("0.2265"));
        assert_eq!(breakdown.taxable_amount, dec("2700.00"));
        assert_eq!(breakdown.taxes, dec("611.55"));
        assert_eq!(breakdown.net_pay, dec("2088.45"));
    }

    #[test]
    fn test_withholding_floors_taxable_at_zero() {
        let breakdown = calculate_withholding(dec("637.50"), dec("15000.00"), dec("0.2265"));
        assert_eq!(breakdown.taxable_amount, Decimal::ZERO);
        assert_eq!(breakdown.taxes, Decimal::ZERO);
        assert_eq!(breakdown.net_pay, Decimal::ZERO);
    }

    #[test]
    fn test_withholding_keeps_full_precision() {
        let breakdown = calculate_withholding(dec("950.00"), dec("0"), dec("0.2265"));
        assert_eq!(breakdown.taxes, dec("215.175"));
        assert_eq!(breakdown.net_pay, dec("734.825"));
    }

    #[test]
    fn test_regular_hours_run() {
        let mut record = create_hourly_record();
        let stub = record.run_payroll(dec("40")).unwrap();

        assert_eq!(stub.net_pay(), dec("618.80"));
        assert_eq!(stub.taxes_withheld(), dec("181.20"));
        assert_eq!(stub.gross_pay(), Some(dec("800.00")));
        assert_eq!(stub.taxable_amount(), Some(dec("800.00")));
        assert_eq!(record.ytd_earnings(), dec("1618.80"));
        assert_eq!(record.ytd_taxes_paid(), dec("381.20"));
        assert_eq!(
            record.to_csv(),
            "HOURLY,Test Employee,NEU001,20.00,0.00,1618.80,381.20"
        );
    }

    #[test]
    fn test_overtime_run_keeps_unrounded_ytd() {
        let mut record = create_hourly_record();
        let stub = record.run_payroll(dec("45")).unwrap();

        assert_eq!(stub.net_pay(), dec("734.825"));
        assert_eq!(record.ytd_earnings(), dec("1734.825"));
        assert_eq!(stub.to_csv(), "Test Employee,734.83,215.18,1734.83,415.18");
    }

    #[test]
    fn test_zero_hours_run_pays_nothing() {
        let mut record = create_hourly_record();
        let stub = record.run_payroll(Decimal::ZERO).unwrap();
        assert_eq!(stub.net_pay(), Decimal::ZERO);
        assert_eq!(record.ytd_earnings(), dec("1000.00"));
    }

    #[test]
    fn test_negative_hours_rejected_without_mutation() {
        let mut record = create_hourly_record();
        let before = record.clone();

        let result = record.run_payroll(dec("-5"));

        assert_eq!(
            result.unwrap_err(),
            PayrollError::validation("hours_worked", "hours worked cannot be negative")
        );
        assert_eq!(record, before);
    }

    #[test]
    fn test_negative_hours_rejected_for_salaried_too() {
        let mut record = create_salaried_record("0");
        assert!(matches!(
            record.run_payroll(dec("-1")),
            Err(PayrollError::Validation { .. })
        ));
        assert_eq!(record.ytd_earnings(), Decimal::ZERO);
    }

    #[test]
    fn test_salaried_run_with_deductions() {
        let mut record = create_salaried_record("300.00");
        let stub = record.run_payroll(dec("0")).unwrap();
        assert_eq!(stub.gross_pay(), Some(dec("3000.00")));
        assert_eq!(stub.net_pay(), dec("2088.45"));
        assert_eq!(stub.taxes_withheld(), dec("611.55"));
    }

    #[test]
    fn test_repeated_runs_accumulate() {
        let mut record = create_hourly_record();
        record.run_payroll(dec("40")).unwrap();
        let second = record.run_payroll(dec("40")).unwrap();

        assert_eq!(record.ytd_earnings(), dec("2237.60"));
        assert_eq!(record.ytd_taxes_paid(), dec("562.40"));
        assert_eq!(second.ytd_earnings_after(), dec("2237.60"));
    }

    #[test]
    fn test_deductions_exceeding_gross_leave_ytd_unchanged() {
        let mut record = CompensationRecord::hourly(
            "John Doe",
            "E123",
            dec("25.50"),
            dec("15000.00"),
            dec("2500.00"),
            dec("200.00"),
        )
        .unwrap();
        let stub = record.run_payroll(dec("40")).unwrap();
        assert_eq!(stub.net_pay(), Decimal::ZERO);
        assert_eq!(stub.taxes_withheld(), Decimal::ZERO);
        assert_eq!(record.ytd_earnings(), dec("2500.00"));
    }

    #[test]
    fn test_run_with_custom_tax_rate() {
        let policy = PayrollPolicy {
            tax_rate: dec("0.10"),
            ..PayrollPolicy::default()
        };
        let mut record = create_hourly_record();
        let stub = record.run_payroll_with_policy(dec("40"), &policy).unwrap();
        assert_eq!(stub.taxes_withheld(), dec("80.00"));
        assert_eq!(stub.net_pay(), dec("720.00"));
    }

    #[test]
    fn test_pay_rate_near_max_fails_without_mutation() {
        let mut record = CompensationRecord::hourly(
            "Big",
            "E1",
            Decimal::MAX,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        )
        .unwrap();
        let before = record.clone();

        let result = record.run_payroll(dec("40"));

        assert!(matches!(result, Err(PayrollError::Calculation { .. })));
        assert_eq!(record, before);
    }

    #[test]
    fn test_ytd_near_max_fails_without_mutation() {
        let mut record = CompensationRecord::salaried(
            "Big",
            "E1",
            dec("72000.00"),
            Decimal::ZERO,
            Decimal::MAX,
            Decimal::ZERO,
        )
        .unwrap();
        let before = record.clone();

        let result = record.run_payroll(Decimal::ZERO);

        assert_eq!(
            result.unwrap_err(),
            PayrollError::Calculation {
                message: "YTD earnings for employee 'E1' is out of range".to_string()
            }
        );
        assert_eq!(record, before);
    }

    #[test]
    fn test_invalid_policy_rejected_without_mutation() {
        let policy = PayrollPolicy {
            tax_rate: dec("2"),
            ..PayrollPolicy::default()
        };
        let mut record = create_hourly_record();
        let before = record.clone();
        assert!(matches!(
            record.run_payroll_with_policy(dec("40"), &policy),
            Err(PayrollError::InvalidPolicy { .. })
        ));
        assert_eq!(record, before);
    }
}
