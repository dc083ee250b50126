//! Order and order line entities

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A placed order header. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create a new order header for a customer.
    pub fn new(customer_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            created_at: Utc::now(),
        }
    }
}

/// A snapshot of one cart item taken at order-placement time.
///
/// Lines belong to exactly one order and are deleted with it, never
/// independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub order_id: Uuid,
    pub product_id: i64,
    pub quantity: i32,
}
