//! Compensation record model and related types.
//!
//! This module defines the [`CompensationRecord`] struct, the
//! [`CompensationMethod`] it is paid by, and the [`PayType`] tag used in
//! the CSV encoding.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{calculate_gross_pay, format_money};
use crate::config::PayrollPolicy;
use crate::error::{PayrollError, PayrollResult};

/// The compensation-method tag as it appears in a record's CSV form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayType {
    /// Paid per hour worked, with overtime.
    Hourly,
    /// Paid a fixed share of an annual salary each period.
    Salary,
}

impl PayType {
    /// Returns the canonical tag (`HOURLY` or `SALARY`).
    pub fn as_str(&self) -> &'static str {
        match self {
            PayType::Hourly => "HOURLY",
            PayType::Salary => "SALARY",
        }
    }
}

impl fmt::Display for PayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayType {
    type Err = PayrollError;

    /// Parses a tag case-insensitively.
    ///
    /// ```
    /// use payroll_engine::models::PayType;
    ///
    /// assert_eq!("hourly".parse::<PayType>().unwrap(), PayType::Hourly);
    /// assert!("PART_TIME".parse::<PayType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HOURLY" => Ok(PayType::Hourly),
            "SALARY" => Ok(PayType::Salary),
            _ => Err(PayrollError::UnknownType {
                tag: s.trim().to_string(),
            }),
        }
    }
}

/// How an employee is paid, carrying the rate for that method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CompensationMethod {
    /// Hourly wage; hours beyond the overtime threshold earn the overtime multiplier.
    Hourly {
        /// Wage per hour.
        hourly_rate: Decimal,
    },
    /// Annual salary divided evenly across the pay periods of the year.
    Salaried {
        /// Salary per year.
        annual_salary: Decimal,
    },
}

impl CompensationMethod {
    /// Pairs a tag with its rate.
    pub fn new(pay_type: PayType, pay_rate: Decimal) -> Self {
        match pay_type {
            PayType::Hourly => CompensationMethod::Hourly {
                hourly_rate: pay_rate,
            },
            PayType::Salary => CompensationMethod::Salaried {
                annual_salary: pay_rate,
            },
        }
    }

    /// Returns the tag for this method.
    pub fn pay_type(&self) -> PayType {
        match self {
            CompensationMethod::Hourly { .. } => PayType::Hourly,
            CompensationMethod::Salaried { .. } => PayType::Salary,
        }
    }

    /// Returns the hourly wage or annual salary.
    pub fn pay_rate(&self) -> Decimal {
        match self {
            CompensationMethod::Hourly { hourly_rate } => *hourly_rate,
            CompensationMethod::Salaried { annual_salary } => *annual_salary,
        }
    }
}

/// One employee's identity, pay rate, and year-to-date totals.
///
/// Every decimal field is non-negative. The rate and deductions never change
/// after construction; the YTD totals only grow, and only through a payroll
/// run. Running payroll takes `&mut self`, so a record has a single writer at
/// a time; callers sharing records across threads must lock per record.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::{CompensationRecord, PayType};
/// use rust_decimal::Decimal;
///
/// let record = CompensationRecord::hourly(
///     "Test Employee",
///     "NEU001",
///     Decimal::new(2000, 2),
///     Decimal::ZERO,
///     Decimal::new(100000, 2),
///     Decimal::new(20000, 2),
/// )
/// .unwrap();
///
/// assert_eq!(record.pay_type(), PayType::Hourly);
/// assert_eq!(record.to_csv(), "HOURLY,Test Employee,NEU001,20.00,0.00,1000.00,200.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompensationRecord {
    name: String,
    id: String,
    method: CompensationMethod,
    pretax_deductions: Decimal,
    ytd_earnings: Decimal,
    ytd_taxes_paid: Decimal,
}

impl CompensationRecord {
    /// Creates a record after validating every field.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::Validation`] if the name or id is blank, or if
    /// the pay rate, pretax deductions, or either YTD total is negative.
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        method: CompensationMethod,
        pretax_deductions: Decimal,
        ytd_earnings: Decimal,
        ytd_taxes_paid: Decimal,
    ) -> PayrollResult<Self> {
        let name = name.into();
        let id = id.into();

        if name.trim().is_empty() {
            return Err(PayrollError::validation("name", "employee name cannot be empty"));
        }
        if id.trim().is_empty() {
            return Err(PayrollError::validation("id", "employee id cannot be empty"));
        }
        if method.pay_rate() < Decimal::ZERO {
            return Err(PayrollError::validation("pay_rate", "pay rate cannot be negative"));
        }
        if pretax_deductions < Decimal::ZERO {
            return Err(PayrollError::validation(
                "pretax_deductions",
                "pretax deductions cannot be negative",
            ));
        }
        if ytd_earnings < Decimal::ZERO {
            return Err(PayrollError::validation(
                "ytd_earnings",
                "YTD earnings cannot be negative",
            ));
        }
        if ytd_taxes_paid < Decimal::ZERO {
            return Err(PayrollError::validation(
                "ytd_taxes_paid",
                "YTD taxes paid cannot be negative",
            ));
        }

        Ok(Self {
            name,
            id,
            method,
            pretax_deductions,
            ytd_earnings,
            ytd_taxes_paid,
        })
    }

    /// Creates an hourly record.
    pub fn hourly(
        name: impl Into<String>,
        id: impl Into<String>,
        hourly_rate: Decimal,
        pretax_deductions: Decimal,
        ytd_earnings: Decimal,
        ytd_taxes_paid: Decimal,
    ) -> PayrollResult<Self> {
        Self::new(
            name,
            id,
            CompensationMethod::Hourly { hourly_rate },
            pretax_deductions,
            ytd_earnings,
            ytd_taxes_paid,
        )
    }

    /// Creates a salaried record.
    pub fn salaried(
        name: impl Into<String>,
        id: impl Into<String>,
        annual_salary: Decimal,
        pretax_deductions: Decimal,
        ytd_earnings: Decimal,
        ytd_taxes_paid: Decimal,
    ) -> PayrollResult<Self> {
        Self::new(
            name,
            id,
            CompensationMethod::Salaried { annual_salary },
            pretax_deductions,
            ytd_earnings,
            ytd_taxes_paid,
        )
    }

    /// Returns the employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the employee's id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the compensation method.
    pub fn method(&self) -> &CompensationMethod {
        &self.method
    }

    /// Returns the compensation-method tag.
    pub fn pay_type(&self) -> PayType {
        self.method.pay_type()
    }

    /// Returns the hourly wage or annual salary.
    pub fn pay_rate(&self) -> Decimal {
        self.method.pay_rate()
    }

    /// Returns the per-period pretax deductions.
    pub fn pretax_deductions(&self) -> Decimal {
        self.pretax_deductions
    }

    /// Returns year-to-date net earnings.
    pub fn ytd_earnings(&self) -> Decimal {
        self.ytd_earnings
    }

    /// Returns year-to-date taxes withheld.
    pub fn ytd_taxes_paid(&self) -> Decimal {
        self.ytd_taxes_paid
    }

    /// Gross pay for one period under the default policy.
    ///
    /// Returns `None` for negative hours on an hourly record. Salaried
    /// records ignore `hours_worked` entirely.
    ///
    /// ```
    /// use payroll_engine::models::CompensationRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let record = CompensationRecord::hourly(
    ///     "Test Employee", "NEU001", Decimal::new(2000, 2),
    ///     Decimal::ZERO, Decimal::ZERO, Decimal::ZERO,
    /// ).unwrap();
    ///
    /// assert_eq!(record.gross_pay(Decimal::from(45)), Some(Decimal::new(95000, 2)));
    /// assert_eq!(record.gross_pay(Decimal::from(-5)), None);
    /// ```
    pub fn gross_pay(&self, hours_worked: Decimal) -> Option<Decimal> {
        calculate_gross_pay(&self.method, hours_worked, &PayrollPolicy::default())
    }

    /// Stores the YTD totals a payroll run computed for this record.
    pub(crate) fn apply_ytd(&mut self, ytd_earnings: Decimal, ytd_taxes_paid: Decimal) {
        self.ytd_earnings = ytd_earnings;
        self.ytd_taxes_paid = ytd_taxes_paid;
    }

    /// Encodes the record as
    /// `TYPE,name,id,payRate,pretaxDeductions,ytdEarnings,ytdTaxesPaid`
    /// with two decimal digits on every amount.
    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{},{},{},{},{}",
            self.pay_type(),
            self.name,
            self.id,
            format_money(self.pay_rate()),
            format_money(self.pretax_deductions),
            format_money(self.ytd_earnings),
            format_money(self.ytd_taxes_paid)
        )
    }
}
