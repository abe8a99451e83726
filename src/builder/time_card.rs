//! Time card parsing.

use std::str::FromStr;

use tracing::warn;

use crate::error::{PayrollError, PayrollResult};
use crate::models::TimeCard;

use super::fields::{parse_decimal, split_fields};

/// Number of fields in a time card CSV line.
pub const TIME_CARD_FIELD_COUNT: usize = 2;

/// Builds a [`TimeCard`] from a CSV line of the form `employeeId,hoursWorked`.
///
/// # Errors
///
/// - [`PayrollError::Format`] if the field count is not two
/// - [`PayrollError::NumberFormat`] if the hours are not a number
/// - [`PayrollError::Validation`] if the id is empty or the hours are negative
///
/// # Examples
///
/// ```
/// use payroll_engine::builder::build_time_card_from_csv;
/// use rust_decimal::Decimal;
///
/// let card = build_time_card_from_csv("E123,38.5").unwrap();
/// assert_eq!(card.employee_id(), "E123");
/// assert_eq!(card.hours_worked(), Decimal::new(385, 1));
/// ```
pub fn build_time_card_from_csv(line: &str) -> PayrollResult<TimeCard> {
    parse_time_card(line).inspect_err(|err| {
        warn!(error = %err, "Rejected time card CSV record");
    })
}

fn parse_time_card(line: &str) -> PayrollResult<TimeCard> {
    let fields = split_fields(line, "time card", TIME_CARD_FIELD_COUNT)?;
    let [employee_id, hours_worked] = fields[..] else {
        return Err(PayrollError::Format {
            record: "time card".to_string(),
            expected: TIME_CARD_FIELD_COUNT,
            found: fields.len(),
        });
    };

    let hours_worked = parse_decimal("hours_worked", hours_worked)?;
    TimeCard::new(employee_id, hours_worked)
}

impl FromStr for TimeCard {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        build_time_card_from_csv(s)
    }
}
