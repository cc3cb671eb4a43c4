//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    #[error("ID cannot be empty")]
    EmptyId,

    /// The provided phone number does not match the accepted pattern.
    #[error("Invalid phone number: {value} (expected {expected})")]
    InvalidPhoneNumber {
        value: String,
        expected: &'static str,
    },
}
