//! Cart store
//!
//! Ordered line items owned by this session, persisted to a JSON blob after
//! every mutation. Persistence is best-effort: a full disk never loses the
//! in-memory cart, it only stops surviving a restart.

use std::path::{Path, PathBuf};

use shared::models::{CartItem, OrderLine, Product};

const CART_FILE: &str = "cart.json";

/// Persistent cart state
///
/// Invariant: at most one line item per product id; quantities are >= 1
/// (an adjustment that would drop a quantity to zero removes the item).
#[derive(Debug)]
pub struct CartStore {
    file_path: PathBuf,
    items: Vec<CartItem>,
}

impl CartStore {
    /// Recreate the cart from storage; a missing or corrupt blob means empty
    pub fn load(data_dir: &Path) -> Self {
        let file_path = data_dir.join(CART_FILE);
        let items = match std::fs::read_to_string(&file_path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(path = %file_path.display(), error = %e, "cart blob corrupt, starting empty");
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::warn!(path = %file_path.display(), error = %e, "cart load failed, starting empty");
                Vec::new()
            }
        };

        Self { file_path, items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of a product: bump the existing line or append a new one
    pub fn add(&mut self, product: &Product) {
        match self.items.iter_mut().find(|item| item.id == product.id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem::from_product(product)),
        }
        self.persist();
    }

    /// Drop the line for a product id; unknown ids are a no-op
    pub fn remove(&mut self, product_id: i64) {
        self.items.retain(|item| item.id != product_id);
        self.persist();
    }

    /// Change a line's quantity by `delta`; at or below zero the line goes away
    ///
    /// Unknown product ids are ignored.
    pub fn adjust(&mut self, product_id: i64, delta: i32) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == product_id) else {
            return;
        };

        let quantity = i64::from(item.quantity) + i64::from(delta);
        if quantity <= 0 {
            self.items.retain(|item| item.id != product_id);
        } else {
            item.quantity = quantity as u32;
        }
        self.persist();
    }

    /// Empty the cart (successful checkout)
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Sum of quantities across all lines
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of price x quantity across all lines
    pub fn total_amount(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// The order payload view of the cart
    pub fn to_order_lines(&self) -> Vec<OrderLine> {
        self.items
            .iter()
            .map(|item| OrderLine {
                name: item.name.clone(),
                price: item.price,
                quantity: item.quantity,
            })
            .collect()
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.items)
            .map_err(std::io::Error::other)
            .and_then(|blob| {
                if let Some(parent) = self.file_path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&self.file_path, blob)
            });

        if let Err(e) = result {
            tracing::warn!(path = %self.file_path.display(), error = %e, "cart save failed");
        }
    }
}
