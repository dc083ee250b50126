//! Identity tokens
//!
//! Issues and parses signed JWTs carrying a username claim. Tokens are
//! stateless: validity is signature validity only. There is no expiry claim
//! and no server-side revocation list.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from issuing or resolving tokens.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to issue token: {0}")]
    Issue(jsonwebtoken::errors::Error),

    #[error("invalid token")]
    Invalid,
}

/// The single claim a token carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Claims {
    sub: String,
}

/// Issues and resolves HS256-signed identity tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenIssuer {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens carry no exp claim; only the signature is checked.
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue a token binding to the given username.
    pub fn issue(&self, username: &str) -> Result<String, TokenError> {
        let claims = Claims {
            sub: username.to_string(),
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(TokenError::Issue)
    }

    /// Resolve a token back to its username claim.
    ///
    /// Fails with `TokenError::Invalid` on a bad signature or missing claim;
    /// the caller surfaces this as an authentication failure without detail.
    pub fn resolve(&self, token: &str) -> Result<String, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims.sub)
            .map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret-at-least-32-bytes-long!!";

    #[test]
    fn test_issue_and_resolve() {
        let issuer = TokenIssuer::new(SECRET);
        let token = issuer.issue("alice").unwrap();

        assert_eq!(issuer.resolve(&token).unwrap(), "alice");
    }

    #[test]
    fn test_tampered_token_rejected() {
        let issuer = TokenIssuer::new(SECRET);
        let mut token = issuer.issue("alice").unwrap();
        token.push('x');

        assert!(matches!(issuer.resolve(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let issuer = TokenIssuer::new(SECRET);
        let other = TokenIssuer::new(b"another-secret-that-does-not-match");
        let token = other.issue("alice").unwrap();

        assert!(matches!(issuer.resolve(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let issuer = TokenIssuer::new(SECRET);
        assert!(matches!(
            issuer.resolve("not.a.token"),
            Err(TokenError::Invalid)
        ));
    }
}
