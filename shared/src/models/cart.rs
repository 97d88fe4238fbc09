//! Cart line item

use serde::{Deserialize, Serialize};

use super::Product;

/// A cart line item aggregating quantity for one product
///
/// Invariant (enforced by the storefront cart store): at most one line item
/// per product id, `quantity >= 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product.id
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    pub quantity: u32,
}

impl CartItem {
    /// Create a fresh line item (quantity 1) for a product
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Line total: price x quantity
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
