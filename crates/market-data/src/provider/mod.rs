//! Ticker provider abstractions and implementations.
//!
//! This module contains:
//! - The `TickerProvider` trait the aggregation layer calls through
//! - The Polygon.io reference-data client

mod traits;

pub mod polygon;

pub use traits::TickerProvider;
