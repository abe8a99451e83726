//! Payroll Engine for hourly and salaried employees
//!
//! This crate computes gross pay, tax withholding, and net pay for one
//! employee per pay period, keeps year-to-date totals, and reads and writes
//! the CSV forms of employee records, time cards, and pay stubs.

#![warn(missing_docs)]

pub mod builder;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
