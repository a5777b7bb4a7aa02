//! Turns filter selections into trend requests and trend responses into
//! chart data, keeping only the newest request's result.
//!
//! The pipeline does no I/O itself. [`on_selection`](TrendPipeline::on_selection)
//! hands out a [`TrendTicket`] whenever the effective query changes; whoever
//! performs the fetch passes the ticket back to
//! [`complete`](TrendPipeline::complete) together with the result. Tickets
//! carry a monotonically increasing sequence number, and a result whose
//! ticket is not the latest issued is dropped.

use crate::api::AuctionApi;
use crate::error::Result;
use crate::models::{FilterSelection, PriceTrendResponse};
use crate::queries::TrendParams;

use super::chart::TrendView;

/// Handle for one issued trend request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendTicket {
    seq: u64,
    params: TrendParams,
}

impl TrendTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn params(&self) -> &TrendParams {
        &self.params
    }
}

/// Where the latest query stands.
#[derive(Debug, Clone, PartialEq)]
pub enum TrendState {
    /// No make selected; nothing to fetch.
    Idle,
    Loading,
    Succeeded(PriceTrendResponse),
    Failed,
}

pub struct TrendPipeline {
    state: TrendState,
    issued: u64,
    last_params: Option<TrendParams>,
    view: TrendView,
}

impl Default for TrendPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendPipeline {
    pub fn new() -> Self {
        Self {
            state: TrendState::Idle,
            issued: 0,
            last_params: None,
            view: TrendView::default(),
        }
    }

    pub fn state(&self) -> &TrendState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, TrendState::Loading)
    }

    /// Chart data for the latest completed query. Empty unless it succeeded.
    pub fn view(&self) -> &TrendView {
        &self.view
    }

    /// Sequence number of the most recently issued ticket.
    pub fn latest_seq(&self) -> u64 {
        self.issued
    }

    /// React to the current selection.
    ///
    /// Returns a ticket to fetch when the effective query differs from the
    /// last one acted on, `None` otherwise. An empty make list clears the
    /// chart and supersedes any request still in flight.
    pub fn on_selection(&mut self, selection: &FilterSelection) -> Option<TrendTicket> {
        let params = TrendParams::from(selection);
        if self.last_params.as_ref() == Some(&params) {
            return None;
        }
        self.issue(params)
    }

    /// Re-issue the current query even if the selection did not change.
    pub fn refresh(&mut self, selection: &FilterSelection) -> Option<TrendTicket> {
        self.issue(TrendParams::from(selection))
    }

    fn issue(&mut self, params: TrendParams) -> Option<TrendTicket> {
        self.issued += 1;
        self.last_params = Some(params.clone());

        if params.makes.is_empty() {
            tracing::debug!(seq = self.issued, "no makes selected, skipping trend request");
            self.state = TrendState::Idle;
            self.view = TrendView::default();
            return None;
        }

        tracing::debug!(seq = self.issued, makes = ?params.makes, "issuing trend request");
        self.state = TrendState::Loading;
        Some(TrendTicket {
            seq: self.issued,
            params,
        })
    }

    /// Apply the result of a fetch.
    ///
    /// Returns `false` (and changes nothing) when `ticket` has been
    /// superseded. Failures are logged and shown as an empty chart.
    pub fn complete(&mut self, ticket: TrendTicket, result: Result<PriceTrendResponse>) -> bool {
        if ticket.seq != self.issued {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.issued,
                "discarding stale trend response"
            );
            return false;
        }

        match result {
            Ok(response) => {
                self.view = TrendView::from_response(&response);
                self.state = TrendState::Succeeded(response);
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load trends");
                self.view = TrendView::default();
                self.state = TrendState::Failed;
            }
        }
        true
    }

    /// Fetch `ticket` through `api` and apply the result.
    pub fn run<A: AuctionApi>(&mut self, api: &A, ticket: TrendTicket) -> bool {
        let result = api.price_trends(ticket.params());
        self.complete(ticket, result)
    }
}
