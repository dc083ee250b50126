//! Customer service
//!
//! Signup with aggregated field validation, plus the owner-scoped account
//! operations (profile update, password change, withdrawal).

use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::PasswordHasher;
use crate::domain::{Customer, Password, Username};
use crate::error::AppError;
use crate::store::CustomerStore;

use super::{SignupCommand, SignupResult, UpdateCustomerCommand};

/// Service for customer lifecycle operations.
pub struct CustomerService {
    customers: CustomerStore,
    hasher: Arc<dyn PasswordHasher>,
}

impl CustomerService {
    pub fn new(pool: PgPool, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            customers: CustomerStore::new(pool),
            hasher,
        }
    }

    /// Validate the signup fields, collecting every violation instead of
    /// stopping at the first one.
    pub fn validate_signup(command: &SignupCommand) -> Result<(Username, Password), AppError> {
        let mut messages = Vec::new();

        let username = match Username::new(&command.username) {
            Ok(username) => Some(username),
            Err(e) => {
                messages.push(e.to_string());
                None
            }
        };

        let password = match Password::new(&command.password) {
            Ok(password) => Some(password),
            Err(e) => {
                messages.push(e.to_string());
                None
            }
        };

        match (username, password) {
            (Some(username), Some(password)) => Ok((username, password)),
            _ => Err(AppError::Validation(messages)),
        }
    }

    /// Sign up a new customer.
    ///
    /// Fails with `UsernameTaken` if the name is already in use
    /// (case-insensitive) and `Validation` on malformed fields.
    pub async fn signup(&self, command: SignupCommand) -> Result<SignupResult, AppError> {
        let (username, password) = Self::validate_signup(&command)?;

        if self.customers.exists_username(username.as_str()).await? {
            return Err(AppError::UsernameTaken);
        }

        let password = password.hash_with(self.hasher.as_ref())?;
        let customer = Customer::new(username, password, command.phone_number, command.address);

        self.customers.insert(&customer).await?;

        tracing::info!(customer_id = %customer.id, username = %customer.username, "Customer signed up");

        Ok(SignupResult {
            customer_id: customer.id,
            username: customer.username.into(),
        })
    }

    /// Load the customer behind a resolved identity.
    pub async fn find_by_username(&self, username: &str) -> Result<Customer, AppError> {
        self.customers
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::CustomerNotFound(username.to_string()))
    }

    /// Update the acting customer's phone number and address.
    pub async fn update_info(
        &self,
        username: &str,
        command: UpdateCustomerCommand,
    ) -> Result<(), AppError> {
        let customer = self.find_by_username(username).await?;

        self.customers
            .update_info(customer.id, &command.phone_number, &command.address)
            .await?;

        Ok(())
    }

    /// Check that the given plaintext matches the acting customer's password.
    pub async fn confirm_password(&self, username: &str, password: &str) -> Result<(), AppError> {
        let customer = self.find_by_username(username).await?;

        if !customer.password.matches(self.hasher.as_ref(), password) {
            return Err(AppError::Authentication);
        }

        Ok(())
    }

    /// Replace the acting customer's password with a new, validated one.
    pub async fn update_password(&self, username: &str, password: &str) -> Result<(), AppError> {
        let customer = self.find_by_username(username).await?;

        let password = Password::new(password)?.hash_with(self.hasher.as_ref())?;
        self.customers
            .update_password(customer.id, &password)
            .await?;

        Ok(())
    }

    /// Account withdrawal: delete the customer and everything they own.
    pub async fn withdraw(&self, username: &str) -> Result<Uuid, AppError> {
        let customer = self.find_by_username(username).await?;

        self.customers.delete(customer.id).await?;

        tracing::info!(customer_id = %customer.id, "Customer withdrawn");

        Ok(customer.id)
    }
}
