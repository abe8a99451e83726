//! Calculation logic for the payroll engine.
//!
//! This module contains the gross pay formulas for hourly and salaried
//! employees, the tax withholding breakdown, the payroll run that updates
//! YTD totals, and money rounding/formatting.

mod gross_pay;
mod money;
mod payroll;

pub use gross_pay::calculate_gross_pay;
pub use money::{MONEY_SCALE, format_money, round_money};
pub use payroll::{PayrollBreakdown, calculate_withholding, run_payroll};
