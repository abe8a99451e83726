//! Pay stub model.
//!
//! A [`PayStub`] is the immutable outcome of one payroll run: what was paid,
//! what was withheld, and the employee's YTD totals after the run.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use uuid::Uuid;

use crate::calculation::format_money;
use crate::error::{PayrollError, PayrollResult};

use super::CompensationRecord;

/// The result of one payroll run for one employee.
///
/// The stub copies the employee's name and id rather than borrowing the
/// record, so it cannot be used to modify the employee.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{CompensationRecord, PayStub};
/// use rust_decimal::Decimal;
///
/// let employee = CompensationRecord::hourly(
///     "John Doe", "E123", Decimal::new(2500, 2),
///     Decimal::new(20000, 2), Decimal::new(5000000, 2), Decimal::new(800000, 2),
/// ).unwrap();
///
/// let stub = PayStub::new(
///     &employee,
///     Decimal::new(200000, 2),
///     Decimal::new(50000, 2),
///     Decimal::new(5200000, 2),
///     Decimal::new(850000, 2),
/// ).unwrap();
///
/// assert_eq!(stub.to_csv(), "John Doe,2000.00,500.00,52000.00,8500.00");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct PayStub {
    run_id: Uuid,
    issued_at: DateTime<Utc>,
    employee_name: String,
    employee_id: String,
    gross_pay: Option<Decimal>,
    taxable_amount: Option<Decimal>,
    net_pay: Decimal,
    taxes_withheld: Decimal,
    ytd_earnings_after: Decimal,
    ytd_taxes_paid_after: Decimal,
}

impl PayStub {
    /// Creates a stub for `employee`.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::Validation`] if any amount is negative.
    pub fn new(
        employee: &CompensationRecord,
        net_pay: Decimal,
        taxes_withheld: Decimal,
        ytd_earnings_after: Decimal,
        ytd_taxes_paid_after: Decimal,
    ) -> PayrollResult<Self> {
        let amounts = [
            ("net_pay", net_pay),
            ("taxes_withheld", taxes_withheld),
            ("ytd_earnings_after", ytd_earnings_after),
            ("ytd_taxes_paid_after", ytd_taxes_paid_after),
        ];
        if let Some((field, _)) = amounts.iter().find(|(_, amount)| *amount < Decimal::ZERO) {
            return Err(PayrollError::validation(
                field,
                format!("{} cannot be negative", field.replace('_', " ")),
            ));
        }

        Ok(Self {
            run_id: Uuid::new_v4(),
            issued_at: Utc::now(),
            employee_name: employee.name().to_string(),
            employee_id: employee.id().to_string(),
            gross_pay: None,
            taxable_amount: None,
            net_pay,
            taxes_withheld,
            ytd_earnings_after,
            ytd_taxes_paid_after,
        })
    }

    /// Attaches the gross and taxable figures of the run that produced this stub.
    pub(crate) fn with_breakdown(mut self, gross_pay: Decimal, taxable_amount: Decimal) -> Self {
        self.gross_pay = Some(gross_pay);
        self.taxable_amount = Some(taxable_amount);
        self
    }

    /// Returns the unique id of this run.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Returns when the stub was issued.
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Returns the employee's name.
    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    /// Returns the employee's id.
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    /// Returns gross pay, if the stub came from a payroll run.
    pub fn gross_pay(&self) -> Option<Decimal> {
        self.gross_pay
    }

    /// Returns the taxable amount, if the stub came from a payroll run.
    pub fn taxable_amount(&self) -> Option<Decimal> {
        self.taxable_amount
    }

    /// Returns net pay at full precision.
    pub fn net_pay(&self) -> Decimal {
        self.net_pay
    }

    /// Returns taxes withheld at full precision.
    pub fn taxes_withheld(&self) -> Decimal {
        self.taxes_withheld
    }

    /// Returns YTD earnings after this run.
    pub fn ytd_earnings_after(&self) -> Decimal {
        self.ytd_earnings_after
    }

    /// Returns YTD taxes paid after this run.
    pub fn ytd_taxes_paid_after(&self) -> Decimal {
        self.ytd_taxes_paid_after
    }

    /// Net pay as a float, for display only.
    pub fn net_pay_f64(&self) -> f64 {
        self.net_pay.to_f64().unwrap_or_default()
    }

    /// Taxes withheld as a float, for display only.
    pub fn taxes_withheld_f64(&self) -> f64 {
        self.taxes_withheld.to_f64().unwrap_or_default()
    }

    /// Encodes the stub as
    /// `employeeName,netPay,taxesWithheld,ytdEarningsAfter,ytdTaxesPaidAfter`.
    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.employee_name,
            format_money(self.net_pay),
            format_money(self.taxes_withheld),
            format_money(self.ytd_earnings_after),
            format_money(self.ytd_taxes_paid_after)
        )
    }
}
