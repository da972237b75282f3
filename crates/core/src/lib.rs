//! Tickerdeck Core - aggregation services for the ticker gateway.
//!
//! This crate sits between the HTTP layer and the market-data crate. It fans
//! requests out to the provider, merges the answers and decides which
//! provider failures degrade and which surface.

pub mod constants;
pub mod errors;
pub mod tickers;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
