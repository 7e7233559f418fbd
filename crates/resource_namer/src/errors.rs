//! Resource naming error types.
//!
//! A composed name that fails validation is always a configuration or
//! programmer error (bad base name, or a length budget the caller should not
//! have asked for). These errors are never transient and are never retried.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors produced while composing or validating resource names.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamerError {
    /// The composed (or supplied) name does not satisfy RFC 1035.
    #[error(transparent)]
    InvalidName(#[from] InvalidNameError),
}

/// Result type alias for naming operations.
pub type NamerResult<T> = Result<T, NamerError>;

/// A name that was rejected, together with the first rule it broke.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid resource name '{name}': {reason}")]
pub struct InvalidNameError {
    pub name: String,
    pub reason: InvalidNameReason,
}

impl InvalidNameError {
    pub fn new(name: impl Into<String>, reason: InvalidNameReason) -> Self {
        Self {
            name: name.into(),
            reason,
        }
    }
}

/// The rule a rejected name broke.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidNameReason {
    #[error("name cannot be empty")]
    Empty,

    #[error("name must start with a letter, not a hyphen")]
    LeadingHyphen,

    #[error("name must start with a letter, not a digit")]
    LeadingDigit,

    #[error("name must end with a letter or digit, not a hyphen")]
    TrailingHyphen,

    #[error("name must not contain uppercase letters")]
    Uppercase,

    #[error("name contains disallowed character '{0}' (only lowercase letters, digits and hyphens are allowed)")]
    DisallowedCharacter(char),

    #[error("name is {length} characters long, RFC 1035 allows at most {limit}")]
    TooLong { length: usize, limit: usize },

    #[error("name is {length} characters long, the requested maximum is {max_length}")]
    ExceedsBudget { length: usize, max_length: usize },
}
