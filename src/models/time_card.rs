//! Time card model.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{PayrollError, PayrollResult};

/// Hours one employee worked in a pay period.
///
/// The caller matches `employee_id` to a [`CompensationRecord`](super::CompensationRecord);
/// the time card itself carries no behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeCard {
    employee_id: String,
    hours_worked: Decimal,
}

impl TimeCard {
    /// Creates a time card.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::Validation`] if `employee_id` is blank or
    /// `hours_worked` is negative.
    pub fn new(employee_id: impl Into<String>, hours_worked: Decimal) -> PayrollResult<Self> {
        let employee_id = employee_id.into();
        if employee_id.trim().is_empty() {
            return Err(PayrollError::validation(
                "employee_id",
                "employee id cannot be empty",
            ));
        }
        if hours_worked < Decimal::ZERO {
            return Err(PayrollError::validation(
                "hours_worked",
                "hours worked cannot be negative",
            ));
        }
        Ok(Self {
            employee_id,
            hours_worked,
        })
    }

    /// Returns the employee id.
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    /// Returns the hours worked.
    pub fn hours_worked(&self) -> Decimal {
        self.hours_worked
    }

    /// Encodes the card as `employeeId,hoursWorked`.
    pub fn to_csv(&self) -> String {
        format!("{},{}", self.employee_id, self.hours_worked)
    }
}
