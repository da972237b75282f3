//! Polygon.io reference-data provider implementation.
//!
//! This module talks to two Polygon endpoints:
//! - Ticker listing and search via /v3/reference/tickers
//! - Per-symbol details (including branding) via /v3/reference/tickers/{ticker}
//!
//! The free tier is limited to 5 API calls per minute; no throttling is done
//! here.
//! API documentation: https://polygon.io/docs/stocks/get_v3_reference_tickers

mod models;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{ListTickersParams, TickerDetail, TickerSummary};
use crate::provider::TickerProvider;

use models::{DetailResponse, ErrorResponse, ListResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.polygon.io";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const PROVIDER_ID: &str = "POLYGON";
const TICKERS_PATH: &str = "/v3/reference/tickers";

/// Polygon.io reference-data provider.
///
/// Holds one pooled HTTP client for the life of the process.
pub struct PolygonProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl PolygonProvider {
    /// Create a provider against the public Polygon API.
    pub fn new(api_key: String) -> Self {
        Self::with_options(api_key, DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Create a provider with an explicit base URL and request timeout.
    pub fn with_options(api_key: String, base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Make a GET request to the Polygon API and return the raw body.
    ///
    /// `subject` names what was asked for and is used for 404 errors.
    async fn fetch(
        &self,
        path: &str,
        params: &[(&str, String)],
        subject: &str,
    ) -> Result<String, MarketDataError> {
        let url = format!("{}{}", self.base_url, path);

        debug!("Polygon request: {} with {} params", path, params.len());

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MarketDataError::Timeout {
                        provider: PROVIDER_ID.to_string(),
                    }
                } else {
                    MarketDataError::Network(e)
                }
            })?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(MarketDataError::SymbolNotFound(subject.to_string()));
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(ErrorResponse::into_message)
                .unwrap_or_else(|| match status {
                    StatusCode::UNAUTHORIZED => "Invalid or missing API key".to_string(),
                    _ => format!("HTTP {} - {}", status, body),
                });

            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                status: Some(status.as_u16()),
                message,
            });
        }

        response.text().await.map_err(MarketDataError::Network)
    }

    fn malformed(context: &str, err: serde_json::Error) -> MarketDataError {
        MarketDataError::MalformedResponse {
            provider: PROVIDER_ID.to_string(),
            message: format!("Failed to parse {} response: {}", context, err),
        }
    }
}

/// Build the listing query string.
fn list_query(params: &ListTickersParams) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("market", params.market.as_str().to_string()),
        ("active", params.active.to_string()),
        ("limit", params.limit.to_string()),
    ];
    if let Some(search) = &params.search {
        query.push(("search", search.clone()));
    }
    if let Some((field, order)) = params.sort {
        query.push(("sort", field.as_str().to_string()));
        query.push(("order", order.as_str().to_string()));
    }
    query
}

#[async_trait]
impl TickerProvider for PolygonProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn list_tickers(
        &self,
        params: &ListTickersParams,
    ) -> Result<Vec<TickerSummary>, MarketDataError> {
        let query = list_query(params);
        let text = self
            .fetch(TICKERS_PATH, &query, params.market.as_str())
            .await?;

        let response: ListResponse =
            serde_json::from_str(&text).map_err(|e| Self::malformed("tickers", e))?;

        let mut rows = response.results.unwrap_or_default();
        rows.truncate(params.limit as usize);

        debug!(
            "Polygon: {} {} tickers (count={:?})",
            rows.len(),
            params.market,
            response.count
        );

        Ok(rows)
    }

    async fn get_ticker_detail(
        &self,
        symbol: &str,
    ) -> Result<Option<TickerDetail>, MarketDataError> {
        let path = format!("{}/{}", TICKERS_PATH, urlencoding::encode(symbol));
        let text = self.fetch(&path, &[], symbol).await?;

        let response: DetailResponse =
            serde_json::from_str(&text).map_err(|e| Self::malformed("ticker details", e))?;

        let results = match response.results {
            None | Some(serde_json::Value::Null) => return Ok(None),
            Some(serde_json::Value::Object(map)) if map.is_empty() => return Ok(None),
            Some(value) => value,
        };

        let detail: TickerDetail =
            serde_json::from_value(results).map_err(|e| Self::malformed("ticker details", e))?;

        Ok(Some(detail))
    }
}
