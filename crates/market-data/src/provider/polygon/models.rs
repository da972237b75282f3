//! Polygon.io API response envelopes.

use serde::Deserialize;
use serde_json::Value;

use crate::models::TickerSummary;

/// Response from /v3/reference/tickers
#[derive(Debug, Deserialize)]
pub(super) struct ListResponse {
    #[serde(default)]
    pub results: Option<Vec<TickerSummary>>,
    #[serde(default)]
    pub count: Option<u32>,
}

/// Response from /v3/reference/tickers/{ticker}
///
/// `results` is kept untyped so an empty object can be told apart from a
/// malformed one.
#[derive(Debug, Deserialize)]
pub(super) struct DetailResponse {
    #[serde(default)]
    pub results: Option<Value>,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// `error` wins over `message`; Polygon uses either depending on the failure.
    pub fn into_message(self) -> Option<String> {
        self.error
            .or(self.message)
            .filter(|m| !m.trim().is_empty())
    }
}
