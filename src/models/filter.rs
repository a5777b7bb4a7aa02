use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// FilterOptions — Vocabulary offered by the filter panel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilterOptions {
    #[serde(default)]
    pub makes: Vec<String>,
    #[serde(default)]
    pub models: Vec<String>,
    #[serde(default)]
    pub years: Vec<i32>,
}

impl FilterOptions {
    pub fn is_empty(&self) -> bool {
        self.makes.is_empty() && self.models.is_empty() && self.years.is_empty()
    }
}

// ---------------------------------------------------------------------------
// FilterSelection — What the user currently has selected
// ---------------------------------------------------------------------------

/// The current filter selection.
///
/// `selected_makes` keeps insertion order. `year_min <= year_max` is not
/// enforced; both bounds are passed through to the server as given.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub selected_makes: Vec<String>,
    pub selected_model: Option<String>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
}

impl FilterSelection {
    /// Remove `make` if selected, otherwise append it to the end.
    pub fn toggle_make(&mut self, make: &str) {
        if let Some(pos) = self.selected_makes.iter().position(|m| m == make) {
            self.selected_makes.remove(pos);
        } else {
            self.selected_makes.push(make.to_string());
        }
    }

    pub fn is_selected(&self, make: &str) -> bool {
        self.selected_makes.iter().any(|m| m == make)
    }

    pub fn has_makes(&self) -> bool {
        !self.selected_makes.is_empty()
    }
}
