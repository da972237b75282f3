//! Degrade provider failures to fallback values.
//!
//! Aggregate requests fan out to several provider calls. A failing call must
//! not fail the whole request, so each one is wrapped here: errors are logged
//! and replaced by a value the caller chooses.

use std::future::Future;

use log::warn;
use tickerdeck_market_data::errors::MarketDataError;

/// Result of a guarded call, noting whether the fallback was used.
#[derive(Debug, Clone, PartialEq)]
pub struct Recovered<T> {
    pub value: T,
    pub degraded: bool,
}

/// Await `call`; on error log it and return `fallback`.
///
/// `context` names the call in the log line (e.g. "stocks listing").
pub async fn safe<T, F>(context: &str, call: F, fallback: T) -> T
where
    F: Future<Output = Result<T, MarketDataError>>,
{
    safe_tracked(context, call, fallback).await.value
}

/// Same as [`safe`], but reports whether the fallback replaced the result.
pub async fn safe_tracked<T, F>(context: &str, call: F, fallback: T) -> Recovered<T>
where
    F: Future<Output = Result<T, MarketDataError>>,
{
    match call.await {
        Ok(value) => Recovered {
            value,
            degraded: false,
        },
        Err(err) => {
            let status = err
                .status()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "n/a".to_string());
            warn!("Provider call failed ({}): {} | HTTP {}", context, err, status);
            Recovered {
                value: fallback,
                degraded: true,
            }
        }
    }
}
