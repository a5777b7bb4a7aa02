//! Shared test fixtures for the Classic Car Insights integration tests.
//!
//! Provides `spawn_mock_server()`, which serves a small canned auction-sales
//! API from an in-process axum server on a background Tokio runtime, and
//! `FakeApi`, a scripted in-memory `AuctionApi` for pipeline tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use classic_car_insights::models::{
    FilterOptions, ImportResult, PriceTrendPoint, PriceTrendResponse, PriceTrendSeries,
};
use classic_car_insights::{AuctionApi, AuctionClient, AuctionError, ImportParams, TrendParams};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Mock HTTP server
// ---------------------------------------------------------------------------

/// Raw query strings received by the mock server, per request, in order.
#[derive(Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<String>>>);

impl RequestLog {
    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    fn record(&self, entry: String) {
        self.0.lock().unwrap().push(entry);
    }
}

fn parse_query(raw: &Option<String>) -> Vec<(String, String)> {
    raw.as_deref()
        .map(|q| serde_urlencoded::from_str(q).unwrap())
        .unwrap_or_default()
}

fn values<'a>(pairs: &'a [(String, String)], key: &str) -> Vec<&'a str> {
    pairs
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .collect()
}

pub fn sample_points(make: &str) -> Vec<Value> {
    match make {
        "Ford" => vec![
            json!({"period": "2019", "avg_price": 9500.0, "min_price": 8000.0, "max_price": 11000.0, "count": 3}),
            json!({"period": "2020", "avg_price": 10000.0, "min_price": 9000.0, "max_price": 12000.0, "count": 4}),
        ],
        "Chevrolet" => vec![
            json!({"period": "2020", "avg_price": 15000.0, "min_price": 14000.0, "max_price": 16000.0, "count": 2}),
            json!({"period": "2021", "avg_price": 16500.5, "min_price": 15000.0, "max_price": 18000.0, "count": 5}),
        ],
        _ => vec![],
    }
}

async fn filters() -> Json<Value> {
    Json(json!({
        "makes": ["Chevrolet", "Ford", "Porsche"],
        "models": ["911", "Bel Air", "Mustang"],
        "years": [1957, 1965, 1969]
    }))
}

async fn trends(State(log): State<RequestLog>, RawQuery(raw): RawQuery) -> Response {
    log.record(raw.clone().unwrap_or_default());
    let pairs = parse_query(&raw);
    let makes = values(&pairs, "make");

    if makes.contains(&"Broken") {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }
    if makes.contains(&"Garbage") {
        return (StatusCode::OK, "this is not json").into_response();
    }

    let series: Vec<Value> = makes
        .iter()
        .map(|make| {
            let data = sample_points(make);
            let total: i64 = data.iter().map(|p| p["count"].as_i64().unwrap()).sum();
            json!({"make": make, "data": data, "avg_price": 12345.6, "total_count": total})
        })
        .collect();
    Json(json!({ "series": series })).into_response()
}

async fn import(State(log): State<RequestLog>, RawQuery(raw): RawQuery) -> Json<Value> {
    log.record(raw.clone().unwrap_or_default());
    let pairs = parse_query(&raw);
    let make = values(&pairs, "make").first().copied().unwrap_or("").to_string();
    let model = values(&pairs, "model").first().map(|m| m.to_string());
    let limit: i64 = values(&pairs, "limit")
        .first()
        .map(|l| l.parse().unwrap())
        .unwrap_or(50);
    Json(json!({"imported": limit, "make": make, "model": model}))
}

async fn list_sales(State(log): State<RequestLog>, RawQuery(raw): RawQuery) -> Json<Value> {
    log.record(raw.unwrap_or_default());
    Json(json!([
        {
            "id": 1,
            "car_name": "1965 Ford Mustang",
            "make": "Ford",
            "model": "Mustang",
            "sale_price": 42000.0,
            "sale_date": "2021-06-12",
            "vin": null,
            "mileage": 81000,
            "year": 1965,
            "source": "bat",
            "url": null
        }
    ]))
}

async fn create_sale(Json(mut body): Json<Value>) -> Json<Value> {
    body["id"] = json!(7);
    Json(body)
}

/// Start the mock API and return its base URL plus the request log.
pub fn spawn_mock_server() -> (String, RequestLog) {
    let log = RequestLog::default();
    let app = Router::new()
        .route("/api/auction-sales", get(list_sales).post(create_sale))
        .route("/api/auction-sales/filters", get(filters))
        .route("/api/auction-sales/trends", get(trends))
        .route("/api/auction-sales/import", post(import))
        .with_state(log.clone());
    (serve(app), log)
}

/// Start a server that answers every request with 503.
pub fn spawn_failing_server() -> String {
    let app = Router::new().fallback(|| async { StatusCode::SERVICE_UNAVAILABLE });
    serve(app)
}

fn serve(app: Router) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    listener.set_nonblocking(true).unwrap();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    format!("http://{}", addr)
}

pub fn client_for(base_url: &str) -> AuctionClient {
    AuctionClient::builder().base_url(base_url).build().unwrap()
}

// ---------------------------------------------------------------------------
// Fake API
// ---------------------------------------------------------------------------

pub fn point(period: &str, avg_price: f64) -> PriceTrendPoint {
    PriceTrendPoint {
        period: period.to_string(),
        avg_price,
        min_price: avg_price,
        max_price: avg_price,
        count: 1,
    }
}

pub fn series(make: &str, points: Vec<PriceTrendPoint>) -> PriceTrendSeries {
    let total_count = points.iter().map(|p| p.count).sum();
    let avg_price = if points.is_empty() {
        0.0
    } else {
        points.iter().map(|p| p.avg_price).sum::<f64>() / points.len() as f64
    };
    PriceTrendSeries {
        make: make.to_string(),
        data: points,
        avg_price,
        total_count,
    }
}

/// Scripted `AuctionApi`: answers from queues and records every call.
#[derive(Default)]
pub struct FakeApi {
    pub options: RefCell<Option<Result<FilterOptions, AuctionError>>>,
    pub trend_results: RefCell<VecDeque<Result<PriceTrendResponse, AuctionError>>>,
    pub trend_calls: RefCell<Vec<TrendParams>>,
    pub option_calls: RefCell<usize>,
    pub import_calls: RefCell<Vec<ImportParams>>,
}

impl FakeApi {
    pub fn with_options(options: FilterOptions) -> Self {
        let api = Self::default();
        *api.options.borrow_mut() = Some(Ok(options));
        api
    }

    pub fn push_trends(&self, result: Result<PriceTrendResponse, AuctionError>) {
        self.trend_results.borrow_mut().push_back(result);
    }
}

impl AuctionApi for FakeApi {
    fn filter_options(&self) -> classic_car_insights::Result<FilterOptions> {
        *self.option_calls.borrow_mut() += 1;
        self.options
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Ok(FilterOptions::default()))
    }

    fn price_trends(&self, params: &TrendParams) -> classic_car_insights::Result<PriceTrendResponse> {
        self.trend_calls.borrow_mut().push(params.clone());
        self.trend_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(PriceTrendResponse::default()))
    }

    fn trigger_import(&self, params: &ImportParams) -> classic_car_insights::Result<ImportResult> {
        self.import_calls.borrow_mut().push(params.clone());
        Ok(ImportResult {
            imported: params.limit as i64,
            make: params.make.clone(),
            model: params.model.clone(),
        })
    }
}

pub fn sample_options() -> FilterOptions {
    FilterOptions {
        makes: vec!["Chevrolet".into(), "Ford".into(), "GM".into()],
        models: vec!["Bel Air".into(), "Mustang".into()],
        years: vec![1957, 1965],
    }
}

pub fn status_error() -> AuctionError {
    AuctionError::Status {
        url: "http://test/api/auction-sales/trends".into(),
        status: 500,
    }
}
