//! Price trend queries against the `/trends` endpoint.

use crate::config;
use crate::error::Result;
use crate::models::{FilterSelection, PriceTrendResponse};
use crate::query_builder::QueryBuilder;
use crate::transport::Transport;

// ---------------------------------------------------------------------------
// TrendParams
// ---------------------------------------------------------------------------

/// Parameters for a price trend request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrendParams {
    pub makes: Vec<String>,
    pub model: Option<String>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
}

impl TrendParams {
    /// Encode as query pairs: one `make` per entry in order, then the
    /// optional scalars only when present.
    pub fn to_query(&self) -> Vec<(String, String)> {
        QueryBuilder::new()
            .push_all("make", &self.makes)
            .push_non_empty("model", self.model.as_deref())
            .push_opt("year_min", self.year_min)
            .push_opt("year_max", self.year_max)
            .build()
    }
}

impl From<&FilterSelection> for TrendParams {
    fn from(selection: &FilterSelection) -> Self {
        Self {
            makes: selection.selected_makes.clone(),
            model: selection.selected_model.clone(),
            year_min: selection.year_min,
            year_max: selection.year_max,
        }
    }
}

// ---------------------------------------------------------------------------
// TrendQuery
// ---------------------------------------------------------------------------

/// Query interface for per-make average-price series.
pub struct TrendQuery<'a> {
    transport: &'a Transport,
}

impl<'a> TrendQuery<'a> {
    /// Create a new `TrendQuery` bound to the given transport.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Fetch price trends for the given parameters.
    ///
    /// An empty `makes` list is sent as-is; the server decides what an
    /// unfiltered query means. The dashboard never issues one.
    pub fn fetch(&self, params: &TrendParams) -> Result<PriceTrendResponse> {
        self.transport.get(config::TRENDS_PATH, &params.to_query())
    }
}
