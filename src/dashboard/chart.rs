//! Reshapes per-make trend series into chart rows and summary stats.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::config::PALETTE;
use crate::models::{PriceTrendResponse, PriceTrendSeries};

// ---------------------------------------------------------------------------
// ChartRow
// ---------------------------------------------------------------------------

/// One period of the merged chart table.
///
/// `values` only holds the makes that reported this period; a missing make
/// is a gap in its line, not a zero. Serializes flat as
/// `{"period": "2020", "Ford": 10000.0}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub period: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

impl ChartRow {
    fn new(period: &str) -> Self {
        Self {
            period: period.to_string(),
            values: BTreeMap::new(),
        }
    }

    /// Average price for `make` in this period, if it reported one.
    pub fn get(&self, make: &str) -> Option<f64> {
        self.values.get(make).copied()
    }
}

/// Merge all series into one row per distinct period.
///
/// Rows are sorted by ordinal string comparison of `period`, so `"10"` sorts
/// before `"9"`. A later series reporting the same make and period
/// overwrites an earlier one.
pub fn merge_series(series: &[PriceTrendSeries]) -> Vec<ChartRow> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<ChartRow> = Vec::new();

    for s in series {
        for point in &s.data {
            let i = *index.entry(point.period.as_str()).or_insert_with(|| {
                rows.push(ChartRow::new(&point.period));
                rows.len() - 1
            });
            rows[i].values.insert(s.make.clone(), point.avg_price);
        }
    }

    rows.sort_by(|a, b| a.period.cmp(&b.period));
    rows
}

// ---------------------------------------------------------------------------
// Colors and summaries
// ---------------------------------------------------------------------------

/// Palette color for the series at `index` in response order.
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Per-make summary card data, taken as-is from the server aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub make: String,
    pub avg_price: f64,
    pub total_count: i64,
    pub color: &'static str,
}

pub fn summarize(series: &[PriceTrendSeries]) -> Vec<SeriesSummary> {
    series
        .iter()
        .enumerate()
        .map(|(i, s)| SeriesSummary {
            make: s.make.clone(),
            avg_price: s.avg_price,
            total_count: s.total_count,
            color: color_for(i),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// TrendView
// ---------------------------------------------------------------------------

/// Everything the chart needs, derived from one trend response.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TrendView {
    pub rows: Vec<ChartRow>,
    pub summaries: Vec<SeriesSummary>,
}

impl TrendView {
    pub fn from_response(response: &PriceTrendResponse) -> Self {
        Self {
            rows: merge_series(&response.series),
            summaries: summarize(&response.series),
        }
    }

    /// True when there is no series to draw.
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Whole-dollar USD label with thousands separators, e.g. `$12,346`.
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return "$0".to_string();
    }
    let rounded = value.round();
    let digits = group_thousands(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("-${}", digits)
    } else {
        format!("${}", digits)
    }
}

/// Integer with thousands separators, e.g. `1,234`.
pub fn format_count(count: i64) -> String {
    let digits = group_thousands(count.unsigned_abs());
    if count < 0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

fn group_thousands(n: u64) -> String {
    let raw = n.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
