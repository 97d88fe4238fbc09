//! Shared types for the Parlour ordering suite
//!
//! Common types used by both the storefront and back-office applications:
//! domain models, the remote service wire envelope, and utility helpers.

pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    CachedMenu, CartItem, Category, DashboardStats, NewProduct, Order, OrderDraft, OrderLine,
    OrderStatus, Product, ProductType,
};
pub use response::EnvelopeError;
