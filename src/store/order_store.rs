//! Order store
//!
//! Persists order headers and their line snapshots. All writes happen inside
//! the caller's transaction; an order is never partially visible.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::domain::{Order, OrderLine};

/// Store for orders and order lines.
#[derive(Debug, Clone)]
pub struct OrderStore {
    pool: PgPool,
}

impl OrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new order header.
    pub async fn insert_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: &Order,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO orders (id, customer_id, created_at) VALUES ($1, $2, $3)")
            .bind(order.id)
            .bind(order.customer_id)
            .bind(order.created_at)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// Append one line snapshot to an order. `line_no` preserves the
    /// sequence the caller received the line requests in.
    pub async fn insert_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order_id: Uuid,
        line_no: i32,
        product_id: i64,
        quantity: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO order_lines (order_id, line_no, product_id, quantity)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(order_id)
        .bind(line_no)
        .bind(product_id)
        .bind(quantity)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    /// Load the lines of an order in their original sequence.
    pub async fn find_lines(&self, order_id: Uuid) -> Result<Vec<OrderLine>, sqlx::Error> {
        let rows: Vec<(Uuid, i64, i32)> = sqlx::query_as(
            r#"
            SELECT order_id, product_id, quantity
            FROM order_lines
            WHERE order_id = $1
            ORDER BY line_no
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(order_id, product_id, quantity)| OrderLine {
                order_id,
                product_id,
                quantity,
            })
            .collect())
    }
}
