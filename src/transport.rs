//! Blocking HTTP transport for the auction-sales API.
//!
//! Every call is a single best-effort round trip: no retry and no caching.
//! Non-success statuses become [`AuctionError::Status`], bodies that fail to
//! parse become [`AuctionError::Decode`].

use crate::config;
use crate::error::{AuctionError, Result};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Owns the HTTP client and the server base URL.
pub struct Transport {
    /// Server origin, without a trailing slash.
    pub base_url: String,
    timeout: Duration,
    client: Client,
}

impl Transport {
    /// Create a transport for the given base URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            client,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL of an endpoint path under the auction-sales base path.
    pub fn url(&self, path: &str) -> String {
        config::endpoint_url(&self.base_url, path)
    }

    /// GET `path` with the given query parameters and decode the JSON body.
    pub fn get<T: DeserializeOwned>(&self, path: &str, query: &[(String, String)]) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, params = query.len(), "GET");
        self.send(&url, self.client.get(&url).query(query))
    }

    /// POST `path` with query parameters and no body.
    pub fn post<T: DeserializeOwned>(&self, path: &str, query: &[(String, String)]) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, params = query.len(), "POST");
        self.send(&url, self.client.post(&url).query(query))
    }

    /// POST `path` with a JSON body.
    pub fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, "POST json");
        self.send(&url, self.client.post(&url).json(body))
    }

    fn send<T: DeserializeOwned>(&self, url: &str, request: RequestBuilder) -> Result<T> {
        let resp = request.send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AuctionError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}
