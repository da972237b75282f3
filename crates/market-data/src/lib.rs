//! Tickerdeck Market Data Crate
//!
//! This crate is the boundary between the gateway and the external
//! reference-data provider.
//!
//! # Overview
//!
//! - Typed ticker models that provider payloads are narrowed into
//! - A provider-agnostic [`TickerProvider`] trait
//! - A Polygon.io implementation ([`PolygonProvider`])
//!
//! # Core Types
//!
//! - [`Market`] - Market segment (stocks, crypto, ...)
//! - [`TickerSummary`] - One row of a ticker listing
//! - [`TickerDetail`] - Full reference record for a symbol
//! - [`Branding`] - Logo/icon links carried by a detail record
//! - [`ListTickersParams`] - Listing query filters

pub mod errors;
pub mod models;
pub mod provider;

pub use models::{
    Address, Branding, ListTickersParams, Market, ParseMarketError, SortField, SortOrder,
    TickerDetail, TickerSummary, COMMON_STOCK, MAX_LIST_LIMIT,
};

pub use provider::polygon::PolygonProvider;
pub use provider::TickerProvider;
