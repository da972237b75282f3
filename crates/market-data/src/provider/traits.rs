//! Ticker provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{ListTickersParams, TickerDetail, TickerSummary};

/// Source of ticker reference data.
///
/// Implement this trait to put a new reference-data API behind the gateway.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use tickerdeck_market_data::provider::TickerProvider;
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl TickerProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     // ... implement list_tickers and get_ticker_detail
/// }
/// ```
#[async_trait]
pub trait TickerProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs.
    fn id(&self) -> &'static str;

    /// List tickers matching `params`.
    ///
    /// Returns at most `params.limit` rows in the order the provider sent them.
    async fn list_tickers(
        &self,
        params: &ListTickersParams,
    ) -> Result<Vec<TickerSummary>, MarketDataError>;

    /// Fetch the detail record for one symbol.
    ///
    /// `Ok(None)` means the provider answered successfully but without a
    /// result body.
    async fn get_ticker_detail(
        &self,
        symbol: &str,
    ) -> Result<Option<TickerDetail>, MarketDataError>;
}
