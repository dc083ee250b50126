//! Password types
//!
//! `Password` is a validated plaintext credential that only lives long enough
//! to be hashed or verified; it never leaves this module in raw form.
//! `PasswordHash` is the one-way digest stored on a customer. Both delegate
//! the algorithm to the injected [`PasswordHasher`] capability.

use serde::{Deserialize, Serialize};

use crate::auth::{HasherError, PasswordHasher};

use super::ValidationError;

/// Minimum password length
const MIN_LENGTH: usize = 8;

/// Maximum password length
const MAX_LENGTH: usize = 20;

/// Password represents a validated plaintext password.
///
/// # Invariants
/// - Length is between 8 and 20 characters
/// - The raw value is never exposed; the only way out is through a hasher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Create a new Password with validation.
    ///
    /// # Errors
    /// - `ValidationError::PasswordLength` if length is outside 8..=20
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        let length = value.chars().count();
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(ValidationError::PasswordLength(length));
        }

        Ok(Self(value))
    }

    /// Hash this password with the given capability, consuming the plaintext.
    pub fn hash_with(self, hasher: &dyn PasswordHasher) -> Result<PasswordHash, HasherError> {
        hasher.hash(&self.0).map(PasswordHash)
    }
}

/// PasswordHash is the stored, one-way digest of a customer password.
///
/// Comparison is only possible through [`PasswordHash::matches`]; there is no
/// way to compare plaintext against the digest outside the hasher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap a digest previously produced by a [`PasswordHasher`].
    pub fn from_stored(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Verify a login attempt against this digest.
    pub fn matches(&self, hasher: &dyn PasswordHasher, raw: &str) -> bool {
        hasher.verify(raw, &self.0)
    }

    /// The digest in its encoded storage form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic hasher for tests; prefixes instead of digesting.
    struct FakeHasher;

    impl PasswordHasher for FakeHasher {
        fn hash(&self, raw: &str) -> Result<String, HasherError> {
            Ok(format!("fake${raw}"))
        }

        fn verify(&self, raw: &str, hash: &str) -> bool {
            hash == format!("fake${raw}")
        }
    }

    #[test]
    fn test_password_valid_lengths() {
        for value in ["password", "password1234", "a".repeat(20).as_str()] {
            assert!(Password::new(value).is_ok(), "expected {value:?} valid");
        }
    }

    #[test]
    fn test_password_invalid_lengths() {
        for value in ["", "a", "short12", "a".repeat(21).as_str()] {
            let result = Password::new(value);
            assert!(
                matches!(result, Err(ValidationError::PasswordLength(_))),
                "expected length error for {value:?}"
            );
        }
    }

    #[test]
    fn test_password_matches_through_hasher() {
        let hasher = FakeHasher;
        let password = Password::new("password1234").unwrap();
        let hash = password.hash_with(&hasher).unwrap();

        assert!(hash.matches(&hasher, "password1234"));
        assert!(!hash.matches(&hasher, "wrongpass123"));
    }

    #[test]
    fn test_password_hash_round_trips_storage_form() {
        let hasher = FakeHasher;
        let hash = Password::new("password1234")
            .unwrap()
            .hash_with(&hasher)
            .unwrap();

        let restored = PasswordHash::from_stored(hash.as_str());
        assert!(restored.matches(&hasher, "password1234"));
    }
}
