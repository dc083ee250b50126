//! Username type
//!
//! Domain primitive for customer names. Validated at construction time,
//! ensuring invalid names cannot exist in the system. Lookups and equality
//! are case-insensitive, matching the uniqueness rule in the store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::ValidationError;

/// Minimum username length
const MIN_LENGTH: usize = 3;

/// Maximum username length
const MAX_LENGTH: usize = 15;

/// Username represents a validated customer name.
///
/// # Invariants
/// - Length is between 3 and 15 characters
/// - Only ASCII letters and digits
/// - Equality ignores case ("Alice" == "alice")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Create a new Username with validation.
    ///
    /// # Errors
    /// - `ValidationError::UsernameLength` if length is outside 3..=15
    /// - `ValidationError::UsernamePattern` if any character is not `[a-zA-Z0-9]`
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        let length = value.chars().count();
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(ValidationError::UsernameLength(length));
        }

        if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::UsernamePattern);
        }

        Ok(Self(value))
    }

    /// Get the username as entered at signup (original casing preserved).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Username {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Username {}

impl Hash for Username {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_ascii_lowercase().hash(state);
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Username {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Username::new(s)
    }
}

impl TryFrom<String> for Username {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Username::new(value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_valid() {
        for value in ["abc", "abcdefghijklmno", "user1", "A1b2C3"] {
            let username = Username::new(value);
            assert!(username.is_ok(), "expected {value:?} to be valid");
            assert_eq!(username.unwrap().as_str(), value);
        }
    }

    #[test]
    fn test_username_invalid_length() {
        for value in ["", "ab", "abcdefghijklmnop"] {
            let result = Username::new(value);
            assert!(
                matches!(result, Err(ValidationError::UsernameLength(_))),
                "expected length error for {value:?}"
            );
        }
    }

    #[test]
    fn test_username_invalid_pattern() {
        for value in ["ab c", "user!", "@!&@#&!", "한글입니다"] {
            let result = Username::new(value);
            assert_eq!(
                result,
                Err(ValidationError::UsernamePattern),
                "expected pattern error for {value:?}"
            );
        }
    }

    #[test]
    fn test_username_equality_ignores_case() {
        let a = Username::new("Alice").unwrap();
        let b = Username::new("alice").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "Alice");
    }

    #[test]
    fn test_username_serde_round_trip() {
        let username = Username::new("shopper01").unwrap();
        let json = serde_json::to_string(&username).unwrap();
        assert_eq!(json, "\"shopper01\"");

        let parsed: Username = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, username);

        let invalid: Result<Username, _> = serde_json::from_str("\"ab\"");
        assert!(invalid.is_err());
    }
}
