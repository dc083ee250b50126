//! Domain module
//!
//! Self-validating value objects and the entities built from them.

pub mod cart;
pub mod customer;
pub mod error;
pub mod order;
pub mod password;
pub mod quantity;
pub mod username;

pub use cart::CartItem;
pub use customer::Customer;
pub use error::ValidationError;
pub use order::{Order, OrderLine};
pub use password::{Password, PasswordHash};
pub use quantity::Quantity;
pub use username::Username;
