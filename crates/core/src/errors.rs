//! Core error types for the Tickerdeck gateway.
//!
//! Provider failures are normally absorbed by [`crate::utils::fallback::safe`];
//! the variants here are what remains visible to callers.

use thiserror::Error;
use tickerdeck_market_data::Market;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for gateway operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// No detail record exists for the symbol, or the lookup failed.
    #[error("Ticker not found: {0}")]
    NotFound(String),

    /// The symbol belongs to a market the detail endpoint does not serve.
    #[error("Details for {0} tickers not implemented")]
    UnsupportedAssetClass(Market),

    #[error("Input validation failed: {0}")]
    Validation(String),

    /// Every provider sub-call of an aggregate request failed.
    #[error("Market data provider unavailable: {0}")]
    ProviderUnavailable(String),
}
