//! Storefront orchestrator
//!
//! Ties the client, cache, cart, and page state together. Constructed once
//! at startup; render callbacks receive the state after every change so the
//! cache snapshot always paints before the fresh fetch lands.

use std::path::Path;

use parlour_client::{ClientResult, MenuClient};

use crate::cache::MenuCache;
use crate::cart::CartStore;
use crate::checkout::{CheckoutError, CustomerDetails};
use crate::state::AppState;

/// Customer application: one instance per page
#[derive(Debug)]
pub struct Storefront {
    client: MenuClient,
    cache: MenuCache,
    pub cart: CartStore,
    pub state: AppState,
}

impl Storefront {
    /// Construct with storage rooted in `data_dir`
    pub fn new(client: MenuClient, data_dir: &Path) -> Self {
        Self {
            client,
            cache: MenuCache::new(data_dir),
            cart: CartStore::load(data_dir),
            state: AppState::new(),
        }
    }

    /// Construct from already-built parts (tests, custom TTLs)
    pub fn from_parts(client: MenuClient, cache: MenuCache, cart: CartStore) -> Self {
        Self {
            client,
            cache,
            cart,
            state: AppState::new(),
        }
    }

    /// Load the menu: serve a fresh-enough cache snapshot immediately, then
    /// fetch the live catalog and overwrite both state and cache
    ///
    /// `render` runs after each state change -- once for the cache hit (if
    /// any) and once for the fresh data, in that order.
    pub async fn load_menu<F>(&mut self, mut render: F) -> ClientResult<()>
    where
        F: FnMut(&AppState),
    {
        if let Some(snapshot) = self.cache.read() {
            self.state.apply_menu(snapshot.categories, snapshot.products);
            render(&self.state);
        }

        let (categories, products) = tokio::try_join!(
            self.client.get_categories(),
            self.client.get_all_products()
        )?;

        self.state.apply_menu(categories, products);
        self.cache.write(&self.state.categories, &self.state.products);
        render(&self.state);
        Ok(())
    }

    /// Drop the cache and reload from the remote
    pub async fn refresh_menu<F>(&mut self, render: F) -> ClientResult<()>
    where
        F: FnMut(&AppState),
    {
        self.cache.invalidate();
        self.load_menu(render).await
    }

    /// Add one unit of a product to the cart
    ///
    /// Returns the product name for the confirmation notice; ids not in the
    /// loaded catalog are silently ignored.
    pub fn add_to_cart(&mut self, product_id: i64) -> Option<String> {
        let product = self.state.product(product_id)?.clone();
        self.cart.add(&product);
        Some(product.name)
    }

    /// Validate, submit, and settle the order; returns the remote order id
    ///
    /// Validation failures never reach the network. On success the cart is
    /// cleared and the menu cache invalidated so the next load is forced
    /// fresh; on failure both cart and details stay intact for a retry.
    pub async fn checkout(&mut self, details: &CustomerDetails) -> Result<String, CheckoutError> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        details.validate()?;

        let draft = details.to_draft(&self.cart);
        let order_id = self.client.place_order(&draft).await?;

        self.cart.clear();
        self.cache.invalidate();
        tracing::debug!(order_id = %order_id, "order placed");
        Ok(order_id)
    }
}
