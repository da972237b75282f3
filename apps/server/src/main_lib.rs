use std::sync::Arc;

use crate::config::Config;
use tickerdeck_core::tickers::{TickerService, TickerServiceTrait};
use tickerdeck_market_data::{PolygonProvider, TickerProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub ticker_service: Arc<dyn TickerServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("TD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Build application state backed by the Polygon provider.
pub fn build_state(config: &Config) -> Arc<AppState> {
    let provider = PolygonProvider::with_options(
        config.polygon_api_key.clone(),
        config.polygon_base_url.clone(),
        config.provider_timeout,
    );
    tracing::info!(
        "Market data provider: {} ({})",
        provider.id(),
        config.polygon_base_url
    );
    build_state_with_provider(Arc::new(provider), config)
}

/// Build application state around any provider implementation.
pub fn build_state_with_provider(
    provider: Arc<dyn TickerProvider>,
    config: &Config,
) -> Arc<AppState> {
    let ticker_service = Arc::new(TickerService::new(provider, config.tickers.clone()));
    Arc::new(AppState { ticker_service })
}
