//! Async wrapper around [`AuctionClient`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every request on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//! Pair it with [`Dashboard::complete`](crate::Dashboard::complete) to drive
//! the dashboard from async code; stale results are discarded there.
//!
//! # Example
//!
//! ```no_run
//! use classic_car_insights::{AsyncAuctionClient, Dashboard};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AsyncAuctionClient::builder().build().await.unwrap();
//!     let mut dash = Dashboard::new();
//!
//!     if dash.begin_load_options() {
//!         dash.finish_load_options(client.filter_options().await);
//!     }
//!     if let Some(ticket) = dash.toggle_make("Ford") {
//!         let (ticket, result) = client.fetch_ticket(ticket).await;
//!         dash.complete(ticket, result);
//!     }
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::config;
use crate::dashboard::TrendTicket;
use crate::error::{AuctionError, Result};
use crate::models::{FilterOptions, ImportResult, PriceTrendResponse};
use crate::queries::{ImportParams, TrendParams};
use crate::{AuctionApi, AuctionClient};

// ---------------------------------------------------------------------------
// AsyncAuctionClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncAuctionClient`].
pub struct AsyncAuctionClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for AsyncAuctionClientBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl AsyncAuctionClientBuilder {
    /// Set the server origin.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the async client.
    ///
    /// The blocking HTTP client is created on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncAuctionClient> {
        tokio::task::spawn_blocking(move || {
            let client = AuctionClient::builder()
                .base_url(self.base_url)
                .timeout(self.timeout)
                .build()?;
            Ok(AsyncAuctionClient {
                inner: Arc::new(client),
            })
        })
        .await
        .map_err(|e| AuctionError::Runtime(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncAuctionClient
// ---------------------------------------------------------------------------

/// Async wrapper around [`AuctionClient`].
///
/// Cheap to clone; clones share the same underlying client.
#[derive(Clone)]
pub struct AsyncAuctionClient {
    inner: Arc<AuctionClient>,
}

impl AsyncAuctionClient {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncAuctionClientBuilder {
        AsyncAuctionClientBuilder::default()
    }

    /// Run a sync client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&AuctionClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(|e| AuctionError::Runtime(format!("Task join error: {e}")))?
    }

    pub async fn filter_options(&self) -> Result<FilterOptions> {
        self.run(|c| c.filter_options()).await
    }

    pub async fn price_trends(&self, params: TrendParams) -> Result<PriceTrendResponse> {
        self.run(move |c| c.price_trends(&params)).await
    }

    pub async fn trigger_import(&self, params: ImportParams) -> Result<ImportResult> {
        self.run(move |c| c.trigger_import(&params)).await
    }

    /// Fetch the trends for `ticket`, handing the ticket back alongside the
    /// result so it can be completed against a dashboard.
    pub async fn fetch_ticket(
        &self,
        ticket: TrendTicket,
    ) -> (TrendTicket, Result<PriceTrendResponse>) {
        let result = self.price_trends(ticket.params().clone()).await;
        (ticket, result)
    }

    /// Release the client on the blocking pool.
    ///
    /// The blocking HTTP client must not be dropped on an async worker
    /// thread; call this instead of a plain drop under Tokio.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || {
            drop(self);
            Ok(())
        })
        .await
        .map_err(|e| AuctionError::Runtime(format!("Task join error: {e}")))?
    }
}
