//! Core data models for the payroll engine.
//!
//! This module contains the compensation record, pay stub, and time card
//! types the rest of the engine operates on.

mod employee;
mod pay_stub;
mod time_card;

pub use employee::{CompensationMethod, CompensationRecord, PayType};
pub use pay_stub::PayStub;
pub use time_card::TimeCard;
