use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{anyhow, bail, Context};
use tickerdeck_core::tickers::TickerSettings;
use tickerdeck_market_data::{provider::polygon::DEFAULT_BASE_URL, Market};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub polygon_api_key: String,
    pub polygon_base_url: String,
    pub provider_timeout: Duration,
    pub tickers: TickerSettings,
}

impl Config {
    /// Load `.env` (if present) and read configuration from the environment.
    ///
    /// Fails when `POLYGON_API_KEY` is missing or any value does not parse.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let polygon_api_key = lookup("POLYGON_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| anyhow!("POLYGON_API_KEY missing in environment"))?;

        let listen_addr: SocketAddr = var("TD_LISTEN_ADDR", "0.0.0.0:4000")
            .parse()
            .context("Invalid TD_LISTEN_ADDR")?;
        let cors_allow = var("TD_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let polygon_base_url = var("POLYGON_BASE_URL", DEFAULT_BASE_URL);
        let timeout_ms: u64 = parse_var(&var("TD_PROVIDER_TIMEOUT_MS", "30000"), "TD_PROVIDER_TIMEOUT_MS")?;
        let markets = parse_markets(&var("TD_MARKETS", "stocks,crypto"))?;
        let sample_limit: u32 = parse_var(&var("TD_SAMPLE_LIMIT", "5"), "TD_SAMPLE_LIMIT")?;
        let search_limit: u32 = parse_var(&var("TD_SEARCH_LIMIT", "5"), "TD_SEARCH_LIMIT")?;

        Ok(Self {
            listen_addr,
            cors_allow,
            polygon_api_key,
            polygon_base_url,
            provider_timeout: Duration::from_millis(timeout_ms),
            tickers: TickerSettings {
                markets,
                sample_limit,
                search_limit,
            },
        })
    }
}

fn parse_var<T>(raw: &str, key: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("Invalid {}: '{}'", key, raw))
}

fn parse_markets(raw: &str) -> anyhow::Result<Vec<Market>> {
    let markets = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Market::from_str)
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid TD_MARKETS")?;
    if markets.is_empty() {
        bail!("TD_MARKETS must name at least one market");
    }
    Ok(markets)
}
