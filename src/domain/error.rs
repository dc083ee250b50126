//! Validation errors for value objects
//!
//! Pure domain errors raised at value-object construction time.
//! They are independent of the web/infrastructure layer.

use thiserror::Error;

/// Value-object construction failures.
///
/// Each variant carries a human-readable, field-level message so the
/// boundary can aggregate several of them into one response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("username must be 3 to 15 characters long")]
    UsernameLength(usize),

    #[error("username may only contain letters and digits")]
    UsernamePattern,

    #[error("password must be 8 to 20 characters long")]
    PasswordLength(usize),

    #[error("quantity must be between 1 and 9999 (got {0})")]
    QuantityOutOfRange(i32),
}
