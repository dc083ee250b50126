//! Auth service
//!
//! Verifies credentials and issues identity tokens. Stateless: nothing is
//! written on login, and resolving a token only checks the signature.

use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::{PasswordHasher, TokenIssuer};
use crate::error::AppError;
use crate::store::CustomerStore;

use super::{LoginCommand, LoginResult};

/// Service for credential verification and token issuance.
pub struct AuthService {
    customers: CustomerStore,
    hasher: Arc<dyn PasswordHasher>,
    tokens: TokenIssuer,
}

impl AuthService {
    pub fn new(pool: PgPool, hasher: Arc<dyn PasswordHasher>, tokens: TokenIssuer) -> Self {
        Self {
            customers: CustomerStore::new(pool),
            hasher,
            tokens,
        }
    }

    /// Verify credentials and issue a token carrying the username claim.
    ///
    /// Unknown username and wrong password both collapse into the same
    /// generic `Authentication` error; no detail leaks to the caller.
    pub async fn create_token(&self, command: LoginCommand) -> Result<LoginResult, AppError> {
        let customer = self
            .customers
            .find_by_username(&command.username)
            .await?
            .ok_or(AppError::Authentication)?;

        if !customer
            .password
            .matches(self.hasher.as_ref(), &command.password)
        {
            return Err(AppError::Authentication);
        }

        let access_token = self
            .tokens
            .issue(customer.username.as_str())
            .map_err(|e| AppError::Internal(e.to_string()))?;

        Ok(LoginResult { access_token })
    }

    /// Resolve a presented token back to its username claim.
    pub fn resolve_identity(&self, token: &str) -> Result<String, AppError> {
        self.tokens
            .resolve(token)
            .map_err(|_| AppError::Authentication)
    }
}
