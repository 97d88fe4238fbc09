//! Client configuration

use tokio_util::sync::CancellationToken;

/// Deployed web-app endpoint of the remote ordering service
pub const DEFAULT_ENDPOINT: &str =
    "https://script.google.com/macros/s/AKfycb-parlour-orders/exec";

/// Default request timeout in seconds (storefront instances)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the ordering service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service endpoint URL
    pub endpoint: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Cancellation token observed by every in-flight call
    pub cancellation: CancellationToken,
}

impl ClientConfig {
    /// Create a new client configuration for the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
            cancellation: CancellationToken::new(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the cancellation token shared with the caller
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Create a client from this configuration
    pub fn build_client(&self) -> super::MenuClient {
        super::MenuClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
