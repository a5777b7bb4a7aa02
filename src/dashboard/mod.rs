//! Dashboard state: filter selection, trend pipeline, and the views derived
//! from them.
//!
//! [`Dashboard`] is the single owner of all state. Every mutator that
//! changes the effective trend query returns the [`TrendTicket`] to fetch;
//! run it with [`Dashboard::run`] or fetch it elsewhere and hand the result
//! to [`Dashboard::complete`].
//!
//! ```no_run
//! use classic_car_insights::{AuctionClient, Dashboard};
//!
//! let client = AuctionClient::builder().build().unwrap();
//! let mut dash = Dashboard::new();
//! dash.mount(&client);
//!
//! if let Some(ticket) = dash.toggle_make("Ford") {
//!     dash.run(&client, ticket);
//! }
//! println!("{}", dash.chart_panel());
//! ```

pub mod chart;
pub mod filters;
pub mod pipeline;
pub mod view;

pub use chart::{ChartRow, SeriesSummary, TrendView};
pub use filters::FilterController;
pub use pipeline::{TrendPipeline, TrendState, TrendTicket};
pub use view::{ChartPanelView, FilterPanelView};

use crate::api::AuctionApi;
use crate::error::Result;
use crate::models::{FilterOptions, ImportResult, PriceTrendResponse};
use crate::queries::ImportParams;

#[derive(Default)]
pub struct Dashboard {
    filters: FilterController,
    trends: TrendPipeline,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterController {
        &self.filters
    }

    pub fn trends(&self) -> &TrendPipeline {
        &self.trends
    }

    /// Load the filter vocabulary (once) and bring trends in line with the
    /// current selection.
    pub fn mount<A: AuctionApi>(&mut self, api: &A) {
        self.filters.load_options(api);
        if let Some(ticket) = self.trends.on_selection(self.filters.selection()) {
            self.trends.run(api, ticket);
        }
    }

    /// Split form of the options fetch for callers that do their own I/O.
    /// Returns `false` if the options were already requested.
    pub fn begin_load_options(&mut self) -> bool {
        self.filters.begin_load()
    }

    pub fn finish_load_options(&mut self, result: Result<FilterOptions>) {
        self.filters.finish_load(result);
    }

    // -- Selection -----------------------------------------------------------

    pub fn toggle_make(&mut self, make: &str) -> Option<TrendTicket> {
        let changed = self.filters.toggle_make(make);
        self.after_change(changed)
    }

    pub fn set_model(&mut self, model: Option<String>) -> Option<TrendTicket> {
        let changed = self.filters.set_model(model);
        self.after_change(changed)
    }

    pub fn set_year_min(&mut self, year: Option<i32>) -> Option<TrendTicket> {
        let changed = self.filters.set_year_min(year);
        self.after_change(changed)
    }

    pub fn set_year_max(&mut self, year: Option<i32>) -> Option<TrendTicket> {
        let changed = self.filters.set_year_max(year);
        self.after_change(changed)
    }

    fn after_change(&mut self, changed: bool) -> Option<TrendTicket> {
        if !changed {
            return None;
        }
        self.trends.on_selection(self.filters.selection())
    }

    /// Re-issue the current trend query.
    pub fn refresh(&mut self) -> Option<TrendTicket> {
        self.trends.refresh(self.filters.selection())
    }

    // -- Fetch results ---------------------------------------------------------

    /// Apply a trend result. Returns `false` if `ticket` was superseded.
    pub fn complete(&mut self, ticket: TrendTicket, result: Result<PriceTrendResponse>) -> bool {
        self.trends.complete(ticket, result)
    }

    /// Fetch `ticket` through `api` and apply the result.
    pub fn run<A: AuctionApi>(&mut self, api: &A, ticket: TrendTicket) -> bool {
        self.trends.run(api, ticket)
    }

    /// Trigger a server-side import, then reload the current trends.
    ///
    /// The import error is returned to the caller; the follow-up trend
    /// fetch degrades like any other.
    pub fn import<A: AuctionApi>(&mut self, api: &A, params: &ImportParams) -> Result<ImportResult> {
        let result = api.trigger_import(params)?;
        tracing::debug!(imported = result.imported, make = %result.make, "import finished");
        if let Some(ticket) = self.refresh() {
            self.trends.run(api, ticket);
        }
        Ok(result)
    }

    // -- Views -----------------------------------------------------------------

    pub fn filter_panel(&self) -> FilterPanelView {
        FilterPanelView::from_controller(&self.filters)
    }

    pub fn chart_panel(&self) -> ChartPanelView {
        ChartPanelView::from_pipeline(&self.trends)
    }
}
