use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PriceTrendPoint — Aggregated prices for one make in one period
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTrendPoint {
    pub period: String,
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub count: i64,
}

// ---------------------------------------------------------------------------
// PriceTrendSeries — All periods for one make
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTrendSeries {
    pub make: String,
    #[serde(default)]
    pub data: Vec<PriceTrendPoint>,
    /// Server-side aggregate over the whole series.
    pub avg_price: f64,
    pub total_count: i64,
}

// ---------------------------------------------------------------------------
// PriceTrendResponse — Body of the trends endpoint
// ---------------------------------------------------------------------------

/// One series per requested make, in server order.
///
/// The `Default` value (no series) doubles as the empty-state sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PriceTrendResponse {
    #[serde(default)]
    pub series: Vec<PriceTrendSeries>,
}

impl PriceTrendResponse {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
