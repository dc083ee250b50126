//! API module
//!
//! HTTP surface: shared state, middleware, and route definitions.

pub mod middleware;
pub mod routes;

use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::{Argon2PasswordHasher, PasswordHasher, TokenIssuer};

pub use routes::{create_protected_router, create_public_router};

/// Shared application state: the pool plus the injected capabilities.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub hasher: Arc<dyn PasswordHasher>,
    pub tokens: TokenIssuer,
}

impl AppState {
    /// Production wiring: argon2 hashing, HS256 tokens.
    pub fn new(pool: PgPool, jwt_secret: &[u8]) -> Self {
        Self {
            pool,
            hasher: Arc::new(Argon2PasswordHasher::new()),
            tokens: TokenIssuer::new(jwt_secret),
        }
    }
}
