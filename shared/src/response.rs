//! Wire envelope for the remote ordering service
//!
//! Every response arrives as a JSON object of the form
//!
//! ```json
//! { "status": "success" | "error", "error": "...", ...payload }
//! ```
//!
//! with the action-specific payload fields spread at the top level. The
//! envelope is validated here, at the boundary, so callers only ever see a
//! typed payload or a typed failure -- never a silently-absent field.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Category, DashboardStats, Order, Product};

/// Fallback message when the remote reports an error without a message
pub const GENERIC_REMOTE_ERROR: &str = "Unknown error occurred";

/// Failure decoding a remote response
#[derive(Debug, Clone, Error)]
pub enum EnvelopeError {
    /// The remote answered with `status: "error"`
    #[error("{0}")]
    Remote(String),

    /// The body was not a valid envelope or the payload did not match its schema
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Decode a raw response body into the action's typed payload
///
/// `status: "error"` becomes [`EnvelopeError::Remote`] carrying the reported
/// `error` message (or [`GENERIC_REMOTE_ERROR`]); anything that is not a
/// well-formed envelope becomes [`EnvelopeError::Decode`].
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, EnvelopeError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| EnvelopeError::Decode(e.to_string()))?;

    let status = value
        .get("status")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| EnvelopeError::Decode("missing status field".to_string()))?;

    match status {
        "success" => serde_json::from_value(value).map_err(|e| EnvelopeError::Decode(e.to_string())),
        "error" => {
            let message = value
                .get("error")
                .and_then(serde_json::Value::as_str)
                .unwrap_or(GENERIC_REMOTE_ERROR);
            Err(EnvelopeError::Remote(message.to_string()))
        }
        other => Err(EnvelopeError::Decode(format!(
            "unexpected status value: {other}"
        ))),
    }
}

// ============================================================================
// Per-action payload schemas
// ============================================================================

/// `getCategories`
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesPayload {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// `getAllProducts`
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsPayload {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// `getDashboardStats`
#[derive(Debug, Clone, Deserialize)]
pub struct StatsPayload {
    pub stats: DashboardStats,
}

/// `getOrders`
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersPayload {
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// `adminLogin`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub authenticated: bool,
}

/// `placeOrder`
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceOrderPayload {
    #[serde(rename = "orderId")]
    pub order_id: String,
}

/// `generateBill`
#[derive(Debug, Clone, Deserialize)]
pub struct BillPayload {
    pub bill: Order,
}

/// Actions whose success responses carry no payload
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Ack {}
