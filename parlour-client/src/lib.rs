//! Parlour Client - HTTP client for the remote ordering service
//!
//! Wraps the action-dispatched endpoint behind one awaitable call with
//! built-in timeout and cancellation, plus a typed method per action.

pub mod config;
pub mod error;
pub mod http;

pub use config::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
pub use error::{ClientError, ClientResult};
pub use http::MenuClient;

// Re-export shared types for convenience
pub use shared::models::{Category, DashboardStats, NewProduct, Order, OrderDraft, OrderStatus, Product};
