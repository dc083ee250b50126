//! Services module
//!
//! Application services that orchestrate domain types, capabilities, and
//! stores. One file per service, commands and results shared.

mod auth_service;
mod cart_service;
mod commands;
mod customer_service;
mod order_service;


pub use auth_service::AuthService;
pub use cart_service::CartService;
pub use commands::*;
pub use customer_service::CustomerService;
pub use order_service::OrderService;
