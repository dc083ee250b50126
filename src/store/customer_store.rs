//! Customer store
//!
//! Persists and retrieves customer records. Username lookups are
//! case-insensitive, matching the uniqueness rule.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::domain::{Customer, PasswordHash, Username};

/// Store for customer aggregates.
#[derive(Debug, Clone)]
pub struct CustomerStore {
    pool: PgPool,
}

impl CustomerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new customer.
    pub async fn insert(&self, customer: &Customer) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO customers (id, username, password_hash, phone_number, address, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            "#,
        )
        .bind(customer.id)
        .bind(customer.username.as_str())
        .bind(customer.password.as_str())
        .bind(&customer.phone_number)
        .bind(&customer.address)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Check whether a username is already taken (case-insensitive).
    pub async fn exists_username(&self, username: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM customers WHERE LOWER(username) = LOWER($1))",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
    }

    /// Load a customer by username (case-insensitive).
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Customer>, sqlx::Error> {
        let row: Option<(Uuid, String, String, String, String)> = sqlx::query_as(
            r#"
            SELECT id, username, password_hash, phone_number, address
            FROM customers
            WHERE LOWER(username) = LOWER($1)
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_customer).transpose()
    }

    /// Resolve a username to its customer id inside an open transaction.
    pub async fn find_id_by_username(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        username: &str,
    ) -> Result<Option<Uuid>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM customers WHERE LOWER(username) = LOWER($1)")
            .bind(username)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Overwrite the mutable contact fields.
    pub async fn update_info(
        &self,
        id: Uuid,
        phone_number: &str,
        address: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE customers SET phone_number = $2, address = $3, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(phone_number)
        .bind(address)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Replace the stored password digest.
    pub async fn update_password(
        &self,
        id: Uuid,
        password: &PasswordHash,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE customers SET password_hash = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(password.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Remove a customer (account withdrawal). Cart items go with it.
    pub async fn delete(&self, id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM cart_items WHERE customer_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Map a customers row back into the domain type.
///
/// Stored values already passed validation at signup; a row that no longer
/// does indicates corruption and surfaces as a decode error.
fn row_to_customer(
    (id, username, password_hash, phone_number, address): (Uuid, String, String, String, String),
) -> Result<Customer, sqlx::Error> {
    let username = Username::new(username).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

    Ok(Customer {
        id,
        username,
        password: PasswordHash::from_stored(password_hash),
        phone_number,
        address,
    })
}
