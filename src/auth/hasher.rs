//! Password hashing capability
//!
//! A narrow hash/verify interface so the domain never embeds an algorithm
//! choice and tests can substitute a deterministic fake.

use argon2::password_hash::{rand_core::OsRng, PasswordHash as ParsedHash, SaltString};
use argon2::{Argon2, PasswordHasher as _, PasswordVerifier as _};
use thiserror::Error;

/// Errors from the hashing capability.
#[derive(Debug, Error)]
pub enum HasherError {
    #[error("failed to hash password: {0}")]
    Hash(String),
}

/// One-way password hashing.
pub trait PasswordHasher: Send + Sync {
    /// Produce a self-describing digest of the raw password.
    fn hash(&self, raw: &str) -> Result<String, HasherError>;

    /// Check a raw password against a stored digest.
    /// Malformed digests verify as `false`, never as an error.
    fn verify(&self, raw: &str, hash: &str) -> bool;
}

/// Production hasher backed by Argon2id with per-password random salts.
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, raw: &str) -> Result<String, HasherError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(raw.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|e| HasherError::Hash(e.to_string()))
    }

    fn verify(&self, raw: &str, hash: &str) -> bool {
        match ParsedHash::new(hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(raw.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = Argon2PasswordHasher::new();
        let digest = hasher.hash("password1234").unwrap();

        assert!(digest.starts_with("$argon2"));
        assert!(hasher.verify("password1234", &digest));
        assert!(!hasher.verify("wrongpass123", &digest));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = Argon2PasswordHasher::new();
        let a = hasher.hash("password1234").unwrap();
        let b = hasher.hash("password1234").unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_digest_verifies_false() {
        let hasher = Argon2PasswordHasher::new();
        assert!(!hasher.verify("password1234", "not-a-digest"));
    }
}
