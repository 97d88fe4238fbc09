//! Dashboard statistics

use serde::{Deserialize, Serialize};

/// Aggregate figures shown on the back-office dashboard
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_orders: u64,
    pub total_sales: f64,
    pub today_orders: u64,
    pub pending_orders: u64,
}
