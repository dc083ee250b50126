//! Order service
//!
//! Orchestrates the cart-to-order transaction: snapshot each referenced cart
//! item into an order line and remove it from the cart, all inside one
//! explicit transaction. Any failure before commit rolls everything back;
//! the cart is left exactly as it was and no order becomes visible.

use sqlx::PgPool;

use crate::domain::Order;
use crate::error::AppError;
use crate::store::{CartStore, CustomerStore, OrderStore};

use super::{PlaceOrderCommand, PlaceOrderResult};

/// Service for the atomic cart-to-order conversion.
pub struct OrderService {
    pool: PgPool,
    customers: CustomerStore,
    carts: CartStore,
    orders: OrderStore,
}

impl OrderService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            customers: CustomerStore::new(pool.clone()),
            carts: CartStore::new(pool.clone()),
            orders: OrderStore::new(pool.clone()),
            pool,
        }
    }

    /// Convert the referenced cart items into a persisted order.
    ///
    /// Line requests are consumed in the given order, without reordering or
    /// dedup. Each referenced item must exist and belong to the acting
    /// customer; the ownership re-check happens inside the transaction, on
    /// the loaded row, so a cart listed before the call cannot be trusted.
    pub async fn place_order(
        &self,
        username: &str,
        command: PlaceOrderCommand,
    ) -> Result<PlaceOrderResult, AppError> {
        if command.lines.is_empty() {
            return Err(AppError::Validation(vec![
                "order must reference at least one cart item".to_string(),
            ]));
        }

        // One transaction spans every store write below. Early returns drop
        // the transaction, which rolls back the header, any lines, and any
        // cart deletions already performed.
        let mut tx = self.pool.begin().await?;

        let customer_id = self
            .customers
            .find_id_by_username(&mut tx, username)
            .await?
            .ok_or_else(|| AppError::CustomerNotFound(username.to_string()))?;

        let order = Order::new(customer_id);
        self.orders.insert_order(&mut tx, &order).await?;

        for (line_no, line) in command.lines.iter().enumerate() {
            let item = self
                .carts
                .find_by_id_in(&mut tx, line.cart_item_id)
                .await?
                .ok_or(AppError::CartItemNotFound(line.cart_item_id))?;

            if !item.is_owned_by(customer_id) {
                return Err(AppError::Ownership);
            }

            // Snapshot product and quantity as they are at this moment.
            self.orders
                .insert_line(
                    &mut tx,
                    order.id,
                    line_no as i32,
                    item.product_id,
                    item.quantity.value(),
                )
                .await?;

            self.carts.delete_in(&mut tx, item.id).await?;
        }

        tx.commit().await?;

        tracing::info!(
            order_id = %order.id,
            %customer_id,
            lines = command.lines.len(),
            "Order placed"
        );

        Ok(PlaceOrderResult { order_id: order.id })
    }
}
