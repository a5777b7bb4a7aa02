//! Query modules for the auction-sales API.
//!
//! Each module provides a query struct that borrows from a
//! [`Transport`](crate::transport::Transport) and exposes methods returning
//! `Result<T>` with typed payloads from [`models`](crate::models).

pub mod filters;
pub mod sales;
pub mod trends;

pub use filters::FilterQuery;
pub use sales::{ImportParams, SalesQuery};
pub use trends::{TrendParams, TrendQuery};
