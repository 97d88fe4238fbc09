//! Order Model
//!
//! Orders are created by checkout submission and mutated only by the
//! pending -> completed status transition; the client never deletes them.

use serde::{Deserialize, Serialize};

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

/// One line of a submitted order (quantity-aggregated cart entry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl OrderLine {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Order entity as the remote service stores it
///
/// The capitalized wire names come from the spreadsheet column headers;
/// `Timestamp` doubles as the unique order id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Table", default)]
    pub table: String,
    #[serde(rename = "Items", default)]
    pub items: Vec<OrderLine>,
    #[serde(rename = "Total")]
    pub total: f64,
    #[serde(rename = "Status", default)]
    pub status: OrderStatus,
    #[serde(rename = "Review", default)]
    pub review: String,
}

/// Order payload submitted at checkout
///
/// Serialized to a JSON string and sent as the single `orderData` parameter
/// of the `placeOrder` action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub table: String,
    #[serde(default)]
    pub review: String,
    pub cart: Vec<OrderLine>,
    #[serde(rename = "totalAmount")]
    pub total_amount: f64,
}
