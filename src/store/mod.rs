//! Store module
//!
//! sqlx-backed persistence for customers, cart items, and orders.

pub mod cart_store;
pub mod customer_store;
pub mod order_store;

pub use cart_store::CartStore;
pub use customer_store::CustomerStore;
pub use order_store::OrderStore;
