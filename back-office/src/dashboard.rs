//! Dashboard state

use chrono::DateTime;
use serde::Serialize;
use shared::models::{Category, DashboardStats, Order, Product};

/// Everything the dashboard page shows, loaded in one pass
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
}

/// One point of the recent-sales series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesPoint {
    pub label: String,
    pub total: f64,
}

impl Dashboard {
    /// Order totals for the most recent orders, oldest first
    ///
    /// The remote returns orders newest-first; the series takes the first
    /// seven and flips them so a chart reads left to right.
    pub fn recent_sales(&self) -> Vec<SalesPoint> {
        self.orders
            .iter()
            .take(7)
            .rev()
            .map(|order| SalesPoint {
                label: date_label(&order.timestamp),
                total: order.total,
            })
            .collect()
    }
}

/// Date part of an order timestamp; unparseable stamps pass through whole
fn date_label(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}
