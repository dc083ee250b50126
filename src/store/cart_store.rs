//! Cart store
//!
//! Persists cart items scoped to a customer. Loads never filter by owner;
//! ownership checks are the calling service's responsibility. The `_in`
//! variants participate in the order-placement transaction.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::domain::{CartItem, Quantity};

/// Store for cart items.
#[derive(Debug, Clone)]
pub struct CartStore {
    pool: PgPool,
}

impl CartStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All items owned by a customer, in creation order (stable across calls).
    pub async fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<CartItem>, sqlx::Error> {
        let rows: Vec<(Uuid, Uuid, i64, i32)> = sqlx::query_as(
            r#"
            SELECT id, customer_id, product_id, quantity
            FROM cart_items
            WHERE customer_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_item).collect()
    }

    /// Persist a new cart item.
    pub async fn insert(&self, item: &CartItem) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO cart_items (id, customer_id, product_id, quantity, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            "#,
        )
        .bind(item.id)
        .bind(item.customer_id)
        .bind(item.product_id)
        .bind(item.quantity.value())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Load a cart item by id, regardless of owner.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<CartItem>, sqlx::Error> {
        let row: Option<(Uuid, Uuid, i64, i32)> = sqlx::query_as(
            "SELECT id, customer_id, product_id, quantity FROM cart_items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_item).transpose()
    }

    /// Load a cart item inside an open transaction, locking the row so a
    /// racing order placement serializes on it.
    pub async fn find_by_id_in(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
    ) -> Result<Option<CartItem>, sqlx::Error> {
        let row: Option<(Uuid, Uuid, i64, i32)> = sqlx::query_as(
            "SELECT id, customer_id, product_id, quantity FROM cart_items WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;

        row.map(row_to_item).transpose()
    }

    /// Overwrite the quantity of an existing item.
    pub async fn update_quantity(&self, id: Uuid, quantity: Quantity) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE cart_items SET quantity = $2 WHERE id = $1")
            .bind(id)
            .bind(quantity.value())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Remove an item, returning how many rows went away.
    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Remove an item inside an open transaction.
    pub async fn delete_in(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected())
    }
}

fn row_to_item(
    (id, customer_id, product_id, quantity): (Uuid, Uuid, i64, i32),
) -> Result<CartItem, sqlx::Error> {
    let quantity = Quantity::new(quantity).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

    Ok(CartItem {
        id,
        customer_id,
        product_id,
        quantity,
    })
}
