use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ImportResult — Response of the import trigger
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportResult {
    pub imported: i64,
    pub make: String,
    #[serde(default)]
    pub model: Option<String>,
}

// ---------------------------------------------------------------------------
// AuctionSaleCreate — A raw sale record submitted to the server
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AuctionSaleCreate {
    pub car_name: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub sale_price: Option<f64>,
    pub sale_date: Option<NaiveDate>,
    pub vin: Option<String>,
    pub mileage: Option<i64>,
    pub year: Option<i32>,
    pub source: Option<String>,
    pub url: Option<String>,
}

// ---------------------------------------------------------------------------
// AuctionSale — A stored sale record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionSale {
    pub id: i64,
    pub car_name: String,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub sale_price: Option<f64>,
    #[serde(default)]
    pub sale_date: Option<NaiveDate>,
    #[serde(default)]
    pub vin: Option<String>,
    #[serde(default)]
    pub mileage: Option<i64>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}
