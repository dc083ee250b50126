//! Command definitions
//!
//! Commands represent intentions to change the system state; results are
//! what the boundary echoes back.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Command to sign up a new customer. Field validation happens in the
/// service so errors can be aggregated across fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupCommand {
    pub username: String,
    pub password: String,
    pub phone_number: String,
    pub address: String,
}

impl SignupCommand {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        phone_number: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            phone_number: phone_number.into(),
            address: address.into(),
        }
    }
}

/// Command to verify credentials and obtain a token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

impl LoginCommand {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Command to update a customer's contact fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCustomerCommand {
    pub phone_number: String,
    pub address: String,
}

/// Command to put a product into the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCartItemCommand {
    pub product_id: i64,
    pub quantity: i32,
}

impl AddCartItemCommand {
    pub fn new(product_id: i64, quantity: i32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// One line of an order placement, referencing a cart item to consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineRequest {
    pub cart_item_id: Uuid,
}

/// Command to convert cart items into an order.
///
/// Line order is preserved exactly as given; no reordering or dedup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrderCommand {
    pub lines: Vec<OrderLineRequest>,
}

impl PlaceOrderCommand {
    pub fn new(cart_item_ids: impl IntoIterator<Item = Uuid>) -> Self {
        Self {
            lines: cart_item_ids
                .into_iter()
                .map(|cart_item_id| OrderLineRequest { cart_item_id })
                .collect(),
        }
    }
}

/// Result of a successful signup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResult {
    pub customer_id: Uuid,
    pub username: String,
}

/// Result of a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResult {
    pub access_token: String,
}

/// Result of adding a cart item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCartItemResult {
    pub cart_item_id: Uuid,
}

/// Result of a successful order placement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrderResult {
    pub order_id: Uuid,
}
