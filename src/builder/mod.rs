//! CSV record parsing.
//!
//! This module builds [`CompensationRecord`](crate::models::CompensationRecord)s
//! and [`TimeCard`](crate::models::TimeCard)s from single comma-delimited
//! lines. Both parsers are pure functions of their input.
//!
//! # Example
//!
//! ```
//! use payroll_engine::builder::{build_employee_from_csv, build_time_card_from_csv};
//!
//! let mut record = build_employee_from_csv("SALARY,Jane Smith,E456,72000.00,0.00,0.00,0.00")?;
//! let card = build_time_card_from_csv("E456,80")?;
//!
//! let stub = record.run_payroll(card.hours_worked())?;
//! assert_eq!(stub.to_csv(), "Jane Smith,2320.50,679.50,2320.50,679.50");
//! # Ok::<(), payroll_engine::error::PayrollError>(())
//! ```

mod employee;
mod fields;
mod time_card;

pub use employee::{EMPLOYEE_FIELD_COUNT, build_employee_from_csv};
pub use time_card::{TIME_CARD_FIELD_COUNT, build_time_card_from_csv};
