//! Classic Car Insights SDK for Rust.
//!
//! Provides a typed client for the auction-sales API (filter vocabulary,
//! per-make average-price trends, import trigger, raw sale records) and a
//! [`Dashboard`] state object that keeps a filter selection, the trend
//! request it implies, and the chart data derived from the response
//! consistent with each other.
//!
//! # Quick start
//!
//! ```no_run
//! use classic_car_insights::{AuctionClient, TrendParams};
//!
//! let client = AuctionClient::builder()
//!     .base_url("http://localhost:8000")
//!     .build()
//!     .unwrap();
//!
//! let options = client.filters().options().unwrap();
//! let trends = client
//!     .trends()
//!     .fetch(&TrendParams {
//!         makes: vec!["Ford".into(), "Chevrolet".into()],
//!         year_min: Some(1960),
//!         ..Default::default()
//!     })
//!     .unwrap();
//! ```

pub mod api;
#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod queries;
pub mod query_builder;
pub mod transport;

pub use api::AuctionApi;
#[cfg(feature = "async")]
pub use async_client::AsyncAuctionClient;
pub use dashboard::{ChartRow, Dashboard, TrendTicket, TrendView};
pub use error::{AuctionError, Result};
pub use queries::{ImportParams, TrendParams};
pub use query_builder::QueryBuilder;
pub use transport::Transport;

use std::fmt;
use std::time::Duration;

use models::{FilterOptions, ImportResult, PriceTrendResponse};

// ---------------------------------------------------------------------------
// AuctionClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AuctionClient`].
///
/// Use [`AuctionClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](AuctionClientBuilder::build).
pub struct AuctionClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for AuctionClientBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl AuctionClientBuilder {
    /// Set the server origin. The `/api/auction-sales` path is appended.
    ///
    /// Defaults to `http://localhost:8000`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client. No request is made until the first query.
    pub fn build(self) -> Result<AuctionClient> {
        if self.base_url.trim().is_empty() {
            return Err(AuctionError::InvalidArgument(
                "base_url must not be empty".into(),
            ));
        }
        let transport = Transport::new(&self.base_url, self.timeout)?;
        Ok(AuctionClient { transport })
    }
}

// ---------------------------------------------------------------------------
// AuctionClient
// ---------------------------------------------------------------------------

/// The main entry point for talking to the auction-sales API.
///
/// Wraps a [`Transport`] and exposes endpoint-specific query interfaces as
/// lightweight borrowing wrappers.
pub struct AuctionClient {
    transport: Transport,
}

impl AuctionClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> AuctionClientBuilder {
        AuctionClientBuilder::default()
    }

    /// Access the filter vocabulary query interface.
    pub fn filters(&self) -> queries::FilterQuery<'_> {
        queries::FilterQuery::new(&self.transport)
    }

    /// Access the price trend query interface.
    pub fn trends(&self) -> queries::TrendQuery<'_> {
        queries::TrendQuery::new(&self.transport)
    }

    /// Access the sale record and import interface.
    pub fn sales(&self) -> queries::SalesQuery<'_> {
        queries::SalesQuery::new(&self.transport)
    }

    /// Return a reference to the underlying [`Transport`].
    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}

impl AuctionApi for AuctionClient {
    fn filter_options(&self) -> Result<FilterOptions> {
        self.filters().options()
    }

    fn price_trends(&self, params: &TrendParams) -> Result<PriceTrendResponse> {
        self.trends().fetch(params)
    }

    fn trigger_import(&self, params: &ImportParams) -> Result<ImportResult> {
        self.sales().import(params)
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for AuctionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AuctionClient(base_url={}, timeout={}s)",
            self.transport.base_url,
            self.transport.timeout().as_secs()
        )
    }
}
