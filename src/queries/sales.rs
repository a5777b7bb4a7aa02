//! Raw auction sale records and the import trigger.

use crate::config;
use crate::error::{AuctionError, Result};
use crate::models::{AuctionSale, AuctionSaleCreate, ImportResult};
use crate::query_builder::QueryBuilder;
use crate::transport::Transport;

// ---------------------------------------------------------------------------
// ImportParams
// ---------------------------------------------------------------------------

/// Parameters for the import trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportParams {
    pub make: String,
    pub model: Option<String>,
    pub limit: u32,
}

impl ImportParams {
    /// Import up to [`DEFAULT_IMPORT_LIMIT`](config::DEFAULT_IMPORT_LIMIT)
    /// sales for `make`.
    pub fn new(make: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: None,
            limit: config::DEFAULT_IMPORT_LIMIT,
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn to_query(&self) -> Vec<(String, String)> {
        QueryBuilder::new()
            .push("make", &self.make)
            .push_non_empty("model", self.model.as_deref())
            .push("limit", self.limit)
            .build()
    }
}

// ---------------------------------------------------------------------------
// SalesQuery
// ---------------------------------------------------------------------------

/// Query interface for the sale records behind the trends.
pub struct SalesQuery<'a> {
    transport: &'a Transport,
}

impl<'a> SalesQuery<'a> {
    /// Create a new `SalesQuery` bound to the given transport.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List stored sales with `skip`/`limit` pagination.
    ///
    /// Defaults to the first 100 records.
    pub fn list(&self, skip: Option<u32>, limit: Option<u32>) -> Result<Vec<AuctionSale>> {
        let query = QueryBuilder::new()
            .push("skip", skip.unwrap_or(0))
            .push("limit", limit.unwrap_or(config::DEFAULT_LIST_LIMIT))
            .build();
        self.transport.get("", &query)
    }

    /// Store a single sale record and return it with its assigned id.
    pub fn create(&self, sale: &AuctionSaleCreate) -> Result<AuctionSale> {
        if sale.car_name.trim().is_empty() {
            return Err(AuctionError::InvalidArgument(
                "car_name must not be empty".into(),
            ));
        }
        self.transport.post_json("", sale)
    }

    /// Ask the server to import sales for a make (and optionally a model).
    ///
    /// Mutates server-side data. An empty make is rejected without a request.
    pub fn import(&self, params: &ImportParams) -> Result<ImportResult> {
        if params.make.trim().is_empty() {
            return Err(AuctionError::InvalidArgument(
                "make is required to trigger an import".into(),
            ));
        }
        self.transport.post(config::IMPORT_PATH, &params.to_query())
    }
}
