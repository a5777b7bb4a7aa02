//! Query-string builder for the auction-sales endpoints.
//!
//! Parameters keep insertion order, so repeated keys (one `make` per selected
//! make) reach the server in the order they were added. Optional values are
//! skipped entirely when absent. Builder methods return `&mut Self` for
//! chaining.
//!
//! # Example
//!
//! ```rust
//! use classic_car_insights::QueryBuilder;
//! let pairs = QueryBuilder::new()
//!     .push_all("make", &["Ford", "GM"])
//!     .push_opt("model", None::<&str>)
//!     .push_opt("year_min", Some(1965))
//!     .build();
//! assert_eq!(pairs.len(), 3);
//! ```

use std::fmt::Display;

use crate::error::Result;

/// Builds ordered `key=value` query parameters.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    params: Vec<(String, String)>,
}

impl QueryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single parameter.
    pub fn push(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// Append one parameter per value, in order, all under the same key.
    pub fn push_all<V: Display>(&mut self, key: &str, values: &[V]) -> &mut Self {
        self.params
            .extend(values.iter().map(|v| (key.to_string(), v.to_string())));
        self
    }

    /// Append the parameter only when a value is present.
    pub fn push_opt<V: Display>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.push(key, v);
        }
        self
    }

    /// Like [`push_opt`](Self::push_opt), but also skips empty strings.
    pub fn push_non_empty(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        self.push_opt(key, value.filter(|v| !v.is_empty()))
    }

    /// Return the collected `(key, value)` pairs.
    pub fn build(&self) -> Vec<(String, String)> {
        self.params.clone()
    }

    /// Encode the parameters as an `application/x-www-form-urlencoded` string.
    pub fn encode(&self) -> Result<String> {
        serde_urlencoded::to_string(&self.params)
            .map_err(|e| crate::error::AuctionError::InvalidArgument(e.to_string()))
    }
}
