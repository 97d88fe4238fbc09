//! HTTP client for the action-dispatched ordering service
//!
//! One awaitable [`MenuClient::call`] replaces the original script-injection
//! round trip: the action and its URL-encoded parameters go out as a GET,
//! and the response races the configured timeout and the cancellation token.
//! Concurrent calls share nothing mutable, so any number may be in flight.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::{ClientConfig, ClientError, ClientResult};
use shared::models::{
    Category, DashboardStats, NewProduct, Order, OrderDraft, OrderStatus, Product,
};
use shared::response::{
    Ack, BillPayload, CategoriesPayload, LoginPayload, OrdersPayload, PlaceOrderPayload,
    ProductsPayload, StatsPayload,
};

/// HTTP client for the remote ordering service
#[derive(Debug, Clone)]
pub struct MenuClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
    cancellation: CancellationToken,
}

impl MenuClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            endpoint: config.endpoint.clone(),
            timeout: Duration::from_secs(config.timeout),
            cancellation: config.cancellation.clone(),
        }
    }

    /// The configured endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Dispatch an action with its parameters and decode the typed payload
    ///
    /// Each call carries a fresh trace id in its log fields. Timeout maps to
    /// [`ClientError::Timeout`], a fired cancellation token to
    /// [`ClientError::Cancelled`]; both leave no state behind.
    pub async fn call<T: DeserializeOwned>(
        &self,
        action: &str,
        params: &[(&str, String)],
    ) -> ClientResult<T> {
        let trace_id = Uuid::new_v4();
        tracing::debug!(%trace_id, action, "dispatching remote call");

        let request = self
            .client
            .get(&self.endpoint)
            .query(&[("action", action)])
            .query(params);

        let exchange = async {
            let response = request.send().await?;
            response.text().await
        };

        let body = tokio::select! {
            _ = self.cancellation.cancelled() => {
                tracing::debug!(%trace_id, action, "remote call cancelled");
                return Err(ClientError::Cancelled);
            }
            outcome = tokio::time::timeout(self.timeout, exchange) => match outcome {
                Ok(Ok(body)) => body,
                Ok(Err(e)) => {
                    tracing::warn!(%trace_id, action, error = %e, "remote call failed");
                    return Err(ClientError::Network(e));
                }
                Err(_) => {
                    tracing::warn!(%trace_id, action, timeout = ?self.timeout, "remote call timed out");
                    return Err(ClientError::Timeout);
                }
            },
        };

        let payload = shared::response::decode(&body)?;
        tracing::debug!(%trace_id, action, "remote call succeeded");
        Ok(payload)
    }

    // ========== Auth ==========

    /// Check the shared admin password against the remote service
    ///
    /// No session token is issued; the result only gates the local UI.
    pub async fn admin_login(&self, password: &str) -> ClientResult<bool> {
        let payload: LoginPayload = self
            .call("adminLogin", &[("pw", password.to_string())])
            .await?;
        Ok(payload.authenticated)
    }

    // ========== Catalog ==========

    /// Fetch all menu categories
    pub async fn get_categories(&self) -> ClientResult<Vec<Category>> {
        let payload: CategoriesPayload = self.call("getCategories", &[]).await?;
        Ok(payload.categories)
    }

    /// Fetch the full product list
    pub async fn get_all_products(&self) -> ClientResult<Vec<Product>> {
        let payload: ProductsPayload = self.call("getAllProducts", &[]).await?;
        Ok(payload.products)
    }

    /// Create a category
    pub async fn add_category(&self, name: &str, image: &str) -> ClientResult<()> {
        self.call::<Ack>(
            "addCategory",
            &[("name", name.to_string()), ("image", image.to_string())],
        )
        .await?;
        Ok(())
    }

    /// Delete a category
    ///
    /// An unforced delete is rejected while products still reference the
    /// category; the rejection is recognizable via
    /// [`ClientError::is_category_conflict`].
    pub async fn delete_category(&self, name: &str, force: bool) -> ClientResult<()> {
        let mut params = vec![("name", name.to_string())];
        if force {
            params.push(("force", "true".to_string()));
        }
        self.call::<Ack>("deleteCategory", &params).await?;
        Ok(())
    }

    /// Create a product
    pub async fn add_product(&self, product: &NewProduct) -> ClientResult<()> {
        self.call::<Ack>(
            "addProduct",
            &[
                ("name", product.name.clone()),
                ("price", product.price.to_string()),
                ("category", product.category.clone()),
                ("type", product.kind.as_str().to_string()),
                ("image", product.image.clone()),
                ("description", product.description.clone()),
            ],
        )
        .await?;
        Ok(())
    }

    /// Delete a product by name
    pub async fn delete_product(&self, name: &str) -> ClientResult<()> {
        self.call::<Ack>("deleteProduct", &[("name", name.to_string())])
            .await?;
        Ok(())
    }

    // ========== Orders ==========

    /// Submit an order; returns the remote-assigned order id
    ///
    /// The draft travels as a single JSON-string `orderData` parameter, the
    /// shape the spreadsheet backend expects.
    pub async fn place_order(&self, draft: &OrderDraft) -> ClientResult<String> {
        let order_data =
            serde_json::to_string(draft).map_err(|e| ClientError::Decode(e.to_string()))?;
        let payload: PlaceOrderPayload = self
            .call("placeOrder", &[("orderData", order_data)])
            .await?;
        Ok(payload.order_id)
    }

    /// Fetch all orders
    pub async fn get_orders(&self) -> ClientResult<Vec<Order>> {
        let payload: OrdersPayload = self.call("getOrders", &[]).await?;
        Ok(payload.orders)
    }

    /// Transition an order's status
    pub async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> ClientResult<()> {
        self.call::<Ack>(
            "updateOrderStatus",
            &[
                ("orderId", order_id.to_string()),
                ("status", status.as_str().to_string()),
            ],
        )
        .await?;
        Ok(())
    }

    /// Fetch a single order rendered server-side as a bill
    pub async fn generate_bill(&self, order_id: &str) -> ClientResult<Order> {
        let payload: BillPayload = self
            .call("generateBill", &[("orderId", order_id.to_string())])
            .await?;
        Ok(payload.bill)
    }

    // ========== Dashboard ==========

    /// Fetch aggregate dashboard statistics
    pub async fn get_dashboard_stats(&self) -> ClientResult<DashboardStats> {
        let payload: StatsPayload = self.call("getDashboardStats", &[]).await?;
        Ok(payload.stats)
    }
}
