//! Filter selection and the vocabulary it is drawn from.

use crate::api::AuctionApi;
use crate::error::Result;
use crate::models::{FilterOptions, FilterSelection};

/// Owns the [`FilterSelection`] and the [`FilterOptions`] fetched at mount.
///
/// Options are fetched at most once. Until that fetch finishes the
/// controller is loading and every mutator is ignored.
pub struct FilterController {
    selection: FilterSelection,
    options: FilterOptions,
    requested: bool,
    loading: bool,
}

impl Default for FilterController {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterController {
    pub fn new() -> Self {
        Self {
            selection: FilterSelection::default(),
            options: FilterOptions::default(),
            requested: false,
            loading: true,
        }
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Mark the options fetch as started.
    ///
    /// Returns `false` if it was already requested, in which case the caller
    /// must not fetch again.
    pub fn begin_load(&mut self) -> bool {
        if self.requested {
            return false;
        }
        self.requested = true;
        true
    }

    /// Store the options fetch result. A failure is logged and leaves the
    /// vocabulary empty.
    pub fn finish_load(&mut self, result: Result<FilterOptions>) {
        match result {
            Ok(options) => self.options = options,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load filter options");
                self.options = FilterOptions::default();
            }
        }
        self.loading = false;
    }

    /// Fetch the options through `api` unless that already happened.
    pub fn load_options<A: AuctionApi>(&mut self, api: &A) {
        if self.begin_load() {
            let result = api.filter_options();
            self.finish_load(result);
        }
    }

    // -- Mutators ----------------------------------------------------------
    //
    // Each returns whether the selection was changed.

    pub fn toggle_make(&mut self, make: &str) -> bool {
        if self.loading {
            return false;
        }
        self.selection.toggle_make(make);
        true
    }

    pub fn set_model(&mut self, model: Option<String>) -> bool {
        if self.loading {
            return false;
        }
        let model = model.filter(|m| !m.is_empty());
        let changed = self.selection.selected_model != model;
        self.selection.selected_model = model;
        changed
    }

    pub fn set_year_min(&mut self, year: Option<i32>) -> bool {
        if self.loading {
            return false;
        }
        let changed = self.selection.year_min != year;
        self.selection.year_min = year;
        changed
    }

    pub fn set_year_max(&mut self, year: Option<i32>) -> bool {
        if self.loading {
            return false;
        }
        let changed = self.selection.year_max != year;
        self.selection.year_max = year;
        changed
    }
}
