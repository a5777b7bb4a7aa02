//! The calls the dashboard needs from the server.
//!
//! [`AuctionClient`](crate::AuctionClient) implements this over HTTP; tests
//! and alternative transports can provide their own.

use crate::error::Result;
use crate::models::{FilterOptions, ImportResult, PriceTrendResponse};
use crate::queries::{ImportParams, TrendParams};

pub trait AuctionApi {
    fn filter_options(&self) -> Result<FilterOptions>;

    fn price_trends(&self, params: &TrendParams) -> Result<PriceTrendResponse>;

    fn trigger_import(&self, params: &ImportParams) -> Result<ImportResult>;
}

impl<T: AuctionApi + ?Sized> AuctionApi for &T {
    fn filter_options(&self) -> Result<FilterOptions> {
        (**self).filter_options()
    }

    fn price_trends(&self, params: &TrendParams) -> Result<PriceTrendResponse> {
        (**self).price_trends(params)
    }

    fn trigger_import(&self, params: &ImportParams) -> Result<ImportResult> {
        (**self).trigger_import(params)
    }
}
