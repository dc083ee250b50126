//! Quantity type
//!
//! Domain primitive for cart-item quantities with range validation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Maximum quantity per cart item
const MAX_QUANTITY: i32 = 9999;

/// Quantity represents a validated cart-item quantity.
///
/// # Invariants
/// - Value is always positive
/// - Value never exceeds 9999
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Quantity(i32);

impl Quantity {
    /// Create a new Quantity with validation.
    ///
    /// # Errors
    /// - `ValidationError::QuantityOutOfRange` if value is not in 1..=9999
    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if !(1..=MAX_QUANTITY).contains(&value) {
            return Err(ValidationError::QuantityOutOfRange(value));
        }

        Ok(Self(value))
    }

    /// Get the underlying value.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for Quantity {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Quantity::new(value)
    }
}

impl From<Quantity> for i32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}
