//! Cart item entity

use uuid::Uuid;

use super::Quantity;

/// A product pending order placement, scoped to its owning customer.
///
/// Every mutation must verify the acting customer owns the item; the services
/// enforce this, the entity just carries the owning `customer_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub product_id: i64,
    pub quantity: Quantity,
}

impl CartItem {
    /// Create a new cart item with a fresh id.
    pub fn new(customer_id: Uuid, product_id: i64, quantity: Quantity) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            product_id,
            quantity,
        }
    }

    /// Check whether the given customer owns this item.
    pub fn is_owned_by(&self, customer_id: Uuid) -> bool {
        self.customer_id == customer_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership_check() {
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let item = CartItem::new(owner, 5, Quantity::new(2).unwrap());

        assert!(item.is_owned_by(owner));
        assert!(!item.is_owned_by(stranger));
    }
}
