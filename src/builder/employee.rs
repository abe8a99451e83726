//! Compensation record parsing.

use std::str::FromStr;

use tracing::warn;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{CompensationMethod, CompensationRecord, PayType};

use super::fields::{parse_decimal, split_fields};

/// Number of fields in an employee CSV line.
pub const EMPLOYEE_FIELD_COUNT: usize = 7;

/// Builds a [`CompensationRecord`] from one CSV line.
///
/// The line must have exactly seven fields, in the same order
/// [`CompensationRecord::to_csv`] writes them:
///
/// ```text
/// TYPE,name,id,payRate,pretaxDeductions,ytdEarnings,ytdTaxesPaid
/// ```
///
/// `TYPE` is `HOURLY` or `SALARY` in any case. Every field is trimmed.
///
/// # Errors
///
/// - [`PayrollError::Format`] if the field count is not seven
/// - [`PayrollError::NumberFormat`] if an amount is not a number
/// - [`PayrollError::UnknownType`] if `TYPE` is not recognized
/// - [`PayrollError::Validation`] if a value is empty or negative
///
/// Amounts are parsed before the tag is checked.
///
/// # Examples
///
/// ```
/// use payroll_engine::builder::build_employee_from_csv;
/// use payroll_engine::models::PayType;
/// use rust_decimal::Decimal;
///
/// let record = build_employee_from_csv("HOURLY,John Doe,E123,25.50,15000.00,2500.00,200.00").unwrap();
///
/// assert_eq!(record.name(), "John Doe");
/// assert_eq!(record.pay_type(), PayType::Hourly);
/// assert_eq!(record.pretax_deductions(), Decimal::new(1500000, 2));
/// ```
pub fn build_employee_from_csv(line: &str) -> PayrollResult<CompensationRecord> {
    parse_employee(line).inspect_err(|err| {
        warn!(error = %err, "Rejected employee CSV record");
    })
}

fn parse_employee(line: &str) -> PayrollResult<CompensationRecord> {
    let fields = split_fields(line, "employee", EMPLOYEE_FIELD_COUNT)?;
    let [tag, name, id, pay_rate, pretax, ytd_earnings, ytd_taxes] = fields[..] else {
        return Err(PayrollError::Format {
            record: "employee".to_string(),
            expected: EMPLOYEE_FIELD_COUNT,
            found: fields.len(),
        });
    };

    let pay_rate = parse_decimal("pay_rate", pay_rate)?;
    let pretax_deductions = parse_decimal("pretax_deductions", pretax)?;
    let ytd_earnings = parse_decimal("ytd_earnings", ytd_earnings)?;
    let ytd_taxes_paid = parse_decimal("ytd_taxes_paid", ytd_taxes)?;
    let pay_type = PayType::from_str(tag)?;

    CompensationRecord::new(
        name,
        id,
        CompensationMethod::new(pay_type, pay_rate),
        pretax_deductions,
        ytd_earnings,
        ytd_taxes_paid,
    )
}

impl FromStr for CompensationRecord {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        build_employee_from_csv(s)
    }
}
