//! Error taxonomy shared by every calculation.

use thiserror::Error;

/// Validation errors raised before any arithmetic runs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field was left blank.
    #[error("{field} is required")]
    Missing { field: &'static str },

    /// A count field did not hold a whole number.
    #[error("{field} must be a whole number, got {value:?}")]
    NotAnInteger { field: &'static str, value: String },

    /// A count field held a negative number.
    #[error("{field} cannot be negative, got {value}")]
    Negative { field: &'static str, value: i64 },

    /// A percentage field did not hold a finite number.
    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },

    /// A percentage fell outside `[0, 100]`.
    #[error("{field} must be between 0 and 100, got {value}")]
    PercentageOutOfRange { field: &'static str, value: f64 },

    /// A date field could not be parsed.
    #[error("{field} is not a valid date: {value:?}")]
    InvalidDate { field: &'static str, value: String },
}

/// Failure of an attendance calculation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A percentage denominator was zero.
    #[error("cannot compute a percentage: {denominator} is zero")]
    DivisionGuard { denominator: &'static str },

    /// A count exceeded the range it is reported in.
    #[error("{quantity} is too large to report")]
    Overflow { quantity: &'static str },
}
