//! shopcart Library
//!
//! Shopping cart backend: customer signup/login, ownership-scoped cart
//! mutation, and atomic cart-to-order placement.

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod domain;
mod error;
pub mod handlers;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use error::{AppError, AppResult};

/// Build the application router.
///
/// Login and signup stay outside the auth middleware; everything else under
/// /api requires a bearer token.
pub fn build_router(state: AppState) -> Router {
    let protected = api::create_protected_router().layer(middleware::from_fn_with_state(
        state.clone(),
        api::middleware::auth_middleware,
    ));

    let api_router = api::create_public_router()
        .merge(protected)
        .layer(middleware::from_fn(api::middleware::logging_middleware));

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .nest("/api", api_router)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
