//! Cart service
//!
//! Ownership-enforcing cart mutations. Every operation re-resolves the
//! acting username to a customer and verifies that loaded items belong to
//! them before touching anything.

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{CartItem, Quantity};
use crate::error::AppError;
use crate::store::{CartStore, CustomerStore};

use super::{AddCartItemCommand, AddCartItemResult};

/// Service for cart mutations scoped to the acting customer.
pub struct CartService {
    customers: CustomerStore,
    carts: CartStore,
}

impl CartService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            customers: CustomerStore::new(pool.clone()),
            carts: CartStore::new(pool),
        }
    }

    /// All items owned by the acting customer, in creation order.
    pub async fn list_items(&self, username: &str) -> Result<Vec<CartItem>, AppError> {
        let customer_id = self.resolve_customer_id(username).await?;

        Ok(self.carts.list_by_customer(customer_id).await?)
    }

    /// Add a product to the cart, validating the quantity.
    pub async fn add_item(
        &self,
        username: &str,
        command: AddCartItemCommand,
    ) -> Result<AddCartItemResult, AppError> {
        let customer_id = self.resolve_customer_id(username).await?;
        let quantity = Quantity::new(command.quantity)?;

        let item = CartItem::new(customer_id, command.product_id, quantity);
        self.carts.insert(&item).await?;

        Ok(AddCartItemResult {
            cart_item_id: item.id,
        })
    }

    /// Overwrite the quantity of an owned cart item.
    pub async fn update_quantity(
        &self,
        username: &str,
        cart_item_id: Uuid,
        quantity: i32,
    ) -> Result<(), AppError> {
        let item = self.load_owned(username, cart_item_id).await?;
        let quantity = Quantity::new(quantity)?;

        self.carts.update_quantity(item.id, quantity).await?;

        Ok(())
    }

    /// Remove an owned cart item. Deleting a missing or foreign item fails.
    pub async fn delete_item(&self, username: &str, cart_item_id: Uuid) -> Result<(), AppError> {
        let item = self.load_owned(username, cart_item_id).await?;

        self.carts.delete(item.id).await?;

        Ok(())
    }

    async fn resolve_customer_id(&self, username: &str) -> Result<Uuid, AppError> {
        self.customers
            .find_by_username(username)
            .await?
            .map(|customer| customer.id)
            .ok_or_else(|| AppError::CustomerNotFound(username.to_string()))
    }

    /// Load an item and verify the acting customer owns it.
    async fn load_owned(&self, username: &str, cart_item_id: Uuid) -> Result<CartItem, AppError> {
        let customer_id = self.resolve_customer_id(username).await?;

        let item = self
            .carts
            .find_by_id(cart_item_id)
            .await?
            .ok_or(AppError::CartItemNotFound(cart_item_id))?;

        if !item.is_owned_by(customer_id) {
            return Err(AppError::Ownership);
        }

        Ok(item)
    }
}
