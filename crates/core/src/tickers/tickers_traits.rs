use async_trait::async_trait;
use tickerdeck_market_data::{Market, TickerDetail, TickerSummary};

use crate::errors::Result;
use crate::tickers::tickers_model::EnrichedRow;

/// Trait for ticker aggregation operations
#[async_trait]
pub trait TickerServiceTrait: Send + Sync {
    /// Active tickers of one market sorted by symbol; empty if the provider fails.
    async fn fetch_top_tickers(&self, market: Market, limit: u32) -> Vec<TickerSummary>;

    /// Top tickers of every configured market, crypto first, stocks last and enriched.
    async fn fetch_samples(&self) -> Result<Vec<EnrichedRow>>;

    /// Search every configured market for `query` and enrich the combined rows.
    async fn search_tickers(&self, query: &str) -> Result<Vec<EnrichedRow>>;

    /// Merge branding into common-stock rows, keeping input order.
    async fn enrich_rows(&self, rows: Vec<TickerSummary>) -> Vec<EnrichedRow>;

    /// Detail record for an equity symbol.
    async fn get_ticker_detail(&self, symbol: &str) -> Result<TickerDetail>;
}
