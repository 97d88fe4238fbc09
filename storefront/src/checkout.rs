//! Checkout flow
//!
//! Field validation runs before anything touches the network; a draft is
//! only built and submitted once every rule passes.

use parlour_client::ClientError;
use shared::models::OrderDraft;
use thiserror::Error;

use crate::cart::CartStore;

/// Checkout failure
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout is not reachable with nothing in the cart
    #[error("Cart is empty")]
    EmptyCart,

    /// Rule 1: trimmed name must be at least 2 characters
    #[error("Name must be at least 2 characters")]
    NameTooShort,

    /// Rule 2: the phone number must contain 7-15 digits
    #[error("Phone must be 7-15 digits")]
    PhoneInvalid,

    /// The order was submitted but the remote rejected or never answered it
    #[error("Failed to place order: {0}")]
    Submit(#[from] ClientError),
}

/// Customer-entered checkout fields
///
/// Email, table, and note are optional and pass through unmodified (trimmed,
/// empty when absent).
#[derive(Debug, Clone, Default)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub table: String,
    pub note: String,
}

impl CustomerDetails {
    /// Apply the validation rules in order; the first failure wins
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if self.name.trim().chars().count() < 2 {
            return Err(CheckoutError::NameTooShort);
        }

        let digits = self.phone.chars().filter(char::is_ascii_digit).count();
        if !(7..=15).contains(&digits) {
            return Err(CheckoutError::PhoneInvalid);
        }

        Ok(())
    }

    /// Serialize the cart and fields into the order payload
    pub fn to_draft(&self, cart: &CartStore) -> OrderDraft {
        OrderDraft {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            table: self.table.trim().to_string(),
            review: self.note.trim().to_string(),
            cart: cart.to_order_lines(),
            total_amount: cart.total_amount(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(name: &str, phone: &str) -> CustomerDetails {
        CustomerDetails {
            name: name.to_string(),
            phone: phone.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_name_rule_runs_first() {
        // both fields invalid: the name failure wins
        let err = details(" a ", "123").validate().unwrap_err();
        assert!(matches!(err, CheckoutError::NameTooShort));
    }

    #[test]
    fn test_phone_digit_count_bounds() {
        assert!(matches!(
            details("Asha", "123456").validate().unwrap_err(),
            CheckoutError::PhoneInvalid
        ));
        assert!(details("Asha", "1234567").validate().is_ok());
        assert!(details("Asha", "123456789012345").validate().is_ok());
        assert!(matches!(
            details("Asha", "1234567890123456").validate().unwrap_err(),
            CheckoutError::PhoneInvalid
        ));
    }

    #[test]
    fn test_phone_strips_formatting_characters() {
        // separators and a leading + do not count toward the digit total
        assert!(details("Asha", "+91 98765-43210").validate().is_ok());
        assert!(matches!(
            details("Asha", "+--- (12) 34").validate().unwrap_err(),
            CheckoutError::PhoneInvalid
        ));
    }

    #[test]
    fn test_draft_carries_trimmed_fields() {
        let dir = tempfile::TempDir::new().unwrap();
        let cart = CartStore::load(dir.path());
        let mut customer = details("  Asha  ", " 9876543210 ");
        customer.note = " less sugar ".to_string();

        let draft = customer.to_draft(&cart);
        assert_eq!(draft.name, "Asha");
        assert_eq!(draft.phone, "9876543210");
        assert_eq!(draft.review, "less sugar");
        assert_eq!(draft.email, "");
        assert_eq!(draft.total_amount, 0.0);
    }
}
