//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a record constructor, the CSV builder, the policy
//! loader, or a payroll run can report.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::UnknownType {
///     tag: "PART_TIME".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown employee type: PART_TIME");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayrollError {
    /// A required value was negative, empty, or missing.
    #[error("Invalid value for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A delimited record had the wrong number of fields.
    #[error("Invalid {record} CSV format. Expected {expected} fields, found {found}")]
    Format {
        /// The kind of record being parsed ("employee" or "time card").
        record: String,
        /// The number of fields the record requires.
        expected: usize,
        /// The number of fields actually present.
        found: usize,
    },

    /// The compensation-method tag was not recognized.
    #[error("Unknown employee type: {tag}")]
    UnknownType {
        /// The tag as it appeared in the input.
        tag: String,
    },

    /// A monetary or hours field could not be parsed as a decimal number.
    #[error("Invalid number format in field '{field}': '{value}'")]
    NumberFormat {
        /// The field that failed to parse.
        field: String,
        /// The raw text of the field.
        value: String,
    },

    /// An amount fell outside the range a `Decimal` can represent.
    #[error("Calculation error: {message}")]
    Calculation {
        /// A description of the calculation that failed.
        message: String,
    },

    /// Policy file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A policy value was outside its allowed range.
    #[error("Invalid policy value '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was out of range.
        field: String,
        /// A description of the allowed range.
        message: String,
    },
}

impl PayrollError {
    /// Builds a [`PayrollError::Validation`] for the given field.
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_displays_field_and_message() {
        let error = PayrollError::validation("hours_worked", "hours worked cannot be negative");
        assert_eq!(
            error.to_string(),
            "Invalid value for 'hours_worked': hours worked cannot be negative"
        );
    }

    #[test]
    fn test_format_displays_record_and_counts() {
        let error = PayrollError::Format {
            record: "employee".to_string(),
            expected: 7,
            found: 5,
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee CSV format. Expected 7 fields, found 5"
        );
    }

    #[test]
    fn test_unknown_type_displays_tag() {
        let error = PayrollError::UnknownType {
            tag: "CONTRACT".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown employee type: CONTRACT");
    }

    #[test]
    fn test_number_format_displays_field_and_value() {
        let error = PayrollError::NumberFormat {
            field: "pay_rate".to_string(),
            value: "INVALID".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid number format in field 'pay_rate': 'INVALID'"
        );
    }

    #[test]
    fn test_calculation_displays_message() {
        let error = PayrollError::Calculation {
            message: "gross pay overflows".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: gross pay overflows");
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PayrollError::ConfigNotFound {
            path: "/missing/payroll.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/payroll.yaml"
        );
    }

    #[test]
    fn test_invalid_policy_displays_field_and_message() {
        let error = PayrollError::InvalidPolicy {
            field: "tax_rate".to_string(),
            message: "must be between 0 and 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid policy value 'tax_rate': must be between 0 and 1"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_type() -> PayrollResult<()> {
            Err(PayrollError::UnknownType {
                tag: "X".to_string(),
            })
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_unknown_type()?;
            Ok(())
        }

        assert_eq!(
            propagates_error(),
            Err(PayrollError::UnknownType {
                tag: "X".to_string()
            })
        );
    }
}
