//! Auth capabilities
//!
//! Password hashing and token issuance, injected into services as narrow
//! interfaces.

pub mod hasher;
pub mod token;

pub use hasher::{Argon2PasswordHasher, HasherError, PasswordHasher};
pub use token::{TokenError, TokenIssuer};
