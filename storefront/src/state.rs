//! Application state
//!
//! One explicit state object per page, constructed at startup and handed to
//! the render functions -- nothing here is a global.

use shared::models::{Category, Product};

/// Which slice of the product grid is showing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

/// Customer page state: the loaded catalog plus the active category filter
#[derive(Debug, Default)]
pub struct AppState {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub filter: CategoryFilter,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog (cache hit or fresh fetch)
    pub fn apply_menu(&mut self, categories: Vec<Category>, products: Vec<Product>) {
        self.categories = categories;
        self.products = products;
    }

    /// Switch the product grid to one category, or back to all items
    pub fn filter_by_category(&mut self, name: Option<&str>) {
        self.filter = match name {
            Some(name) => CategoryFilter::Named(name.to_string()),
            None => CategoryFilter::All,
        };
    }

    /// The products the current filter lets through, in catalog order
    pub fn filtered_products(&self) -> Vec<&Product> {
        match &self.filter {
            CategoryFilter::All => self.products.iter().collect(),
            CategoryFilter::Named(name) => self
                .products
                .iter()
                .filter(|product| product.category == *name)
                .collect(),
        }
    }

    /// Look a product up by id
    pub fn product(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }
}
