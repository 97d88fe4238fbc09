//! Admin controller
//!
//! Thin façade over the remote service for catalog and order management.
//! There is no session: a successful login only opens the local gate, and
//! every privileged action still stands or falls with the remote's answer.

use parlour_client::{ClientConfig, MenuClient};
use shared::models::{NewProduct, Order, OrderStatus};

use crate::dashboard::Dashboard;
use crate::error::{AdminError, AdminResult};

/// Admin pages use a shorter request window than the storefront
pub const ADMIN_TIMEOUT_SECS: u64 = 15;

/// Outcome of an unforced category delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// Products still reference the category; ask the operator before
    /// retrying with [`BackOffice::force_delete_category`]
    InUse,
}

/// Admin application: one instance per dashboard page
#[derive(Debug)]
pub struct BackOffice {
    client: MenuClient,
    authenticated: bool,
    pub dashboard: Dashboard,
}

impl BackOffice {
    /// Construct against the default endpoint with the admin timeout
    pub fn new() -> Self {
        Self::with_client(
            ClientConfig::default()
                .with_timeout(ADMIN_TIMEOUT_SECS)
                .build_client(),
        )
    }

    /// Construct with a prepared client (tests, custom endpoints)
    pub fn with_client(client: MenuClient) -> Self {
        Self {
            client,
            authenticated: false,
            dashboard: Dashboard::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn require_auth(&self) -> AdminResult<()> {
        if self.authenticated {
            Ok(())
        } else {
            Err(AdminError::NotAuthenticated)
        }
    }

    // ========== Auth ==========

    /// Check the shared password with the remote and open the local gate
    pub async fn login(&mut self, password: &str) -> AdminResult<()> {
        if self.client.admin_login(password).await? {
            self.authenticated = true;
            tracing::debug!("admin authenticated");
            Ok(())
        } else {
            Err(AdminError::InvalidPassword)
        }
    }

    /// Close the gate; no remote state exists to tear down
    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    // ========== Dashboard ==========

    /// Fetch stats, categories, products, and orders in one concurrent pass
    pub async fn load_dashboard(&mut self) -> AdminResult<&Dashboard> {
        self.require_auth()?;
        let (stats, categories, products, orders) = tokio::try_join!(
            self.client.get_dashboard_stats(),
            self.client.get_categories(),
            self.client.get_all_products(),
            self.client.get_orders(),
        )?;

        self.dashboard = Dashboard {
            stats,
            categories,
            products,
            orders,
        };
        Ok(&self.dashboard)
    }

    // ========== Categories ==========

    pub async fn add_category(&self, name: &str, image: &str) -> AdminResult<()> {
        self.require_auth()?;
        self.client.add_category(name, image).await?;
        Ok(())
    }

    /// Unforced delete: referenced categories come back as
    /// [`DeleteOutcome::InUse`] instead of deleting anything
    pub async fn delete_category(&self, name: &str) -> AdminResult<DeleteOutcome> {
        self.require_auth()?;
        match self.client.delete_category(name, false).await {
            Ok(()) => Ok(DeleteOutcome::Deleted),
            Err(e) if e.is_category_conflict() => {
                tracing::debug!(category = name, "delete blocked by product references");
                Ok(DeleteOutcome::InUse)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Forced delete, only to be called after the operator confirmed the
    /// [`DeleteOutcome::InUse`] answer
    pub async fn force_delete_category(&self, name: &str) -> AdminResult<()> {
        self.require_auth()?;
        self.client.delete_category(name, true).await?;
        Ok(())
    }

    // ========== Products ==========

    pub async fn add_product(&self, product: &NewProduct) -> AdminResult<()> {
        self.require_auth()?;
        self.client.add_product(product).await?;
        Ok(())
    }

    pub async fn delete_product(&self, name: &str) -> AdminResult<()> {
        self.require_auth()?;
        self.client.delete_product(name).await?;
        Ok(())
    }

    // ========== Orders ==========

    /// Transition an order (pending -> completed is the only move the
    /// dashboard offers)
    pub async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> AdminResult<()> {
        self.require_auth()?;
        self.client.update_order_status(order_id, status).await?;
        Ok(())
    }

    /// Fetch the order behind a bill; rendering stays local and read-only
    pub async fn generate_bill(&self, order_id: &str) -> AdminResult<Order> {
        self.require_auth()?;
        Ok(self.client.generate_bill(order_id).await?)
    }
}

impl Default for BackOffice {
    fn default() -> Self {
        Self::new()
    }
}
