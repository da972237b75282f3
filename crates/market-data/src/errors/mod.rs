//! Error types for the market data crate.
//!
//! [`MarketDataError`] covers every way a provider call can fail. Callers in
//! the aggregation layer never propagate these to clients directly; they log
//! them and degrade to a fallback value.

use thiserror::Error;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider (HTTP 404).
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered with a non-success status, or the request
    /// could not be sent at all.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// HTTP status, when the provider answered
        status: Option<u16>,
        /// The error message from the provider
        message: String,
    },

    /// The provider answered 2xx but the body did not match the expected shape.
    #[error("Malformed response: {provider} - {message}")]
    MalformedResponse {
        /// The provider that returned the payload
        provider: String,
        /// Decoder error description
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// HTTP-like status associated with the failure, if there is one.
    ///
    /// Used for diagnostics only; the aggregation layer treats every
    /// variant the same way.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::SymbolNotFound(_) => Some(404),
            Self::RateLimited { .. } => Some(429),
            Self::ProviderError { status, .. } => *status,
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::Timeout { .. } | Self::MalformedResponse { .. } => None,
        }
    }
}
