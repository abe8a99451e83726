//! Field splitting and number parsing shared by the record parsers.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};

/// Splits a comma-delimited line into trimmed fields, checking the count.
///
/// A blank line has zero fields.
pub(crate) fn split_fields<'a>(
    line: &'a str,
    record: &str,
    expected: usize,
) -> PayrollResult<Vec<&'a str>> {
    let fields: Vec<&str> = if line.trim().is_empty() {
        Vec::new()
    } else {
        line.split(',').map(str::trim).collect()
    };

    if fields.len() != expected {
        return Err(PayrollError::Format {
            record: record.to_string(),
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

/// Parses one already-trimmed field as a decimal.
pub(crate) fn parse_decimal(field: &str, value: &str) -> PayrollResult<Decimal> {
    let number_format = || PayrollError::NumberFormat {
        field: field.to_string(),
        value: value.to_string(),
    };

    // `Decimal::from_str` also accepts `_` digit separators.
    if !value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
    {
        return Err(number_format());
    }
    Decimal::from_str(value).map_err(|_| number_format())
}
