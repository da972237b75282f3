use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use log::debug;
use tickerdeck_market_data::{
    ListTickersParams, Market, TickerDetail, TickerProvider, TickerSummary,
};

use crate::errors::{Error, Result};
use crate::tickers::tickers_model::{EnrichedRow, TickerSettings};
use crate::tickers::tickers_traits::TickerServiceTrait;
use crate::utils::fallback::{safe, safe_tracked, Recovered};

/// Aggregates provider listing and detail calls into frontend payloads.
pub struct TickerService {
    provider: Arc<dyn TickerProvider>,
    settings: TickerSettings,
}

impl TickerService {
    pub fn new(provider: Arc<dyn TickerProvider>, settings: TickerSettings) -> Self {
        let TickerSettings {
            markets: configured,
            sample_limit,
            search_limit,
        } = settings;

        let mut markets = Vec::with_capacity(configured.len());
        for market in configured {
            if !markets.contains(&market) {
                markets.push(market);
            }
        }

        Self {
            provider,
            settings: TickerSettings {
                markets,
                sample_limit,
                search_limit,
            },
        }
    }

    pub fn settings(&self) -> &TickerSettings {
        &self.settings
    }

    async fn list_guarded(&self, params: ListTickersParams) -> Recovered<Vec<TickerSummary>> {
        let context = format!("{} listing", params.market);
        safe_tracked(&context, self.provider.list_tickers(&params), Vec::new()).await
    }

    async fn enrich_row(&self, row: TickerSummary) -> EnrichedRow {
        if !row.is_common_stock() {
            return EnrichedRow::from(row);
        }

        let context = format!("{} details", row.ticker);
        let detail = safe(&context, self.provider.get_ticker_detail(&row.ticker), None).await;

        match detail.and_then(|d| d.branding) {
            Some(branding) => EnrichedRow::with_branding(row, branding),
            None => EnrichedRow::from(row),
        }
    }

    /// Flatten per-market outcomes in order, failing only if every market failed.
    fn collect_markets(
        &self,
        outcomes: Vec<Recovered<Vec<TickerSummary>>>,
        operation: &str,
    ) -> Result<Vec<TickerSummary>> {
        if !outcomes.is_empty() && outcomes.iter().all(|o| o.degraded) {
            return Err(Error::ProviderUnavailable(format!(
                "{} failed for every market",
                operation
            )));
        }
        Ok(outcomes.into_iter().flat_map(|o| o.value).collect())
    }
}

/// Crypto first, stocks last, anything else in between in configured order.
fn sample_order(markets: &[Market]) -> Vec<Market> {
    let mut ordered = markets.to_vec();
    ordered.sort_by_key(|m| match m {
        Market::Crypto => 0,
        Market::Stocks => 2,
        _ => 1,
    });
    ordered
}

#[async_trait]
impl TickerServiceTrait for TickerService {
    async fn fetch_top_tickers(&self, market: Market, limit: u32) -> Vec<TickerSummary> {
        self.list_guarded(ListTickersParams::top(market, limit))
            .await
            .value
    }

    async fn fetch_samples(&self) -> Result<Vec<EnrichedRow>> {
        let markets = sample_order(&self.settings.markets);
        let outcomes = join_all(markets.iter().map(|market| {
            self.list_guarded(ListTickersParams::top(*market, self.settings.sample_limit))
        }))
        .await;

        let rows = self.collect_markets(outcomes, "samples")?;
        debug!("Samples: {} rows across {} markets", rows.len(), markets.len());
        Ok(self.enrich_rows(rows).await)
    }

    async fn search_tickers(&self, query: &str) -> Result<Vec<EnrichedRow>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let outcomes = join_all(self.settings.markets.iter().map(|market| {
            self.list_guarded(ListTickersParams::search(
                *market,
                query,
                self.settings.search_limit,
            ))
        }))
        .await;

        let rows = self.collect_markets(outcomes, "search")?;
        debug!("Search '{}': {} rows", query, rows.len());
        Ok(self.enrich_rows(rows).await)
    }

    async fn enrich_rows(&self, rows: Vec<TickerSummary>) -> Vec<EnrichedRow> {
        join_all(rows.into_iter().map(|row| self.enrich_row(row))).await
    }

    async fn get_ticker_detail(&self, symbol: &str) -> Result<TickerDetail> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(Error::Validation("Missing ticker symbol".to_string()));
        }

        if Market::from_symbol_prefix(symbol) == Some(Market::Crypto) {
            return Err(Error::UnsupportedAssetClass(Market::Crypto));
        }

        let context = format!("{} details", symbol);
        safe(&context, self.provider.get_ticker_detail(symbol), None)
            .await
            .ok_or_else(|| Error::NotFound(symbol.to_string()))
    }
}
