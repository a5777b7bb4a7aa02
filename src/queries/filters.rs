//! Filter vocabulary query against the `/filters` endpoint.

use crate::config;
use crate::error::Result;
use crate::models::FilterOptions;
use crate::transport::Transport;

/// Query interface for the makes, models and years the server knows about.
pub struct FilterQuery<'a> {
    transport: &'a Transport,
}

impl<'a> FilterQuery<'a> {
    /// Create a new `FilterQuery` bound to the given transport.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Fetch the available filter options.
    pub fn options(&self) -> Result<FilterOptions> {
        self.transport.get(config::FILTERS_PATH, &[])
    }
}
