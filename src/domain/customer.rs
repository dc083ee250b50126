//! Customer entity

use uuid::Uuid;

use super::{PasswordHash, Username};

/// A signed-up customer.
///
/// The password is only ever held in hashed form; phone number and address
/// are free-form contact fields mutable by the owning customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: Uuid,
    pub username: Username,
    pub password: PasswordHash,
    pub phone_number: String,
    pub address: String,
}

impl Customer {
    /// Create a new customer with a fresh id.
    pub fn new(
        username: Username,
        password: PasswordHash,
        phone_number: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password,
            phone_number: phone_number.into(),
            address: address.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer_gets_fresh_id() {
        let username = Username::new("alice").unwrap();
        let password = PasswordHash::from_stored("$argon2id$fake");

        let a = Customer::new(username.clone(), password.clone(), "01012341234", "Seoul");
        let b = Customer::new(username, password, "01012341234", "Seoul");

        assert_ne!(a.id, b.id);
        assert_eq!(a.username, b.username);
    }
}
