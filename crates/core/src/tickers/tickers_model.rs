use serde::Serialize;
use tickerdeck_market_data::{Branding, Market, TickerSummary};

use crate::constants::{DEFAULT_MARKETS, DEFAULT_SAMPLE_LIMIT, DEFAULT_SEARCH_LIMIT};

/// A listing row, optionally carrying branding merged in from its detail record.
///
/// Serializes as the summary's fields with `logo_url`/`icon_url` added at the
/// top level. Without branding it serializes exactly like the summary.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnrichedRow {
    #[serde(flatten)]
    pub summary: TickerSummary,

    #[serde(flatten)]
    pub branding: Branding,
}

impl EnrichedRow {
    /// Merge `branding` over `summary`. Branding keys replace same-named
    /// passthrough keys on the summary; everything else is kept.
    pub fn with_branding(mut summary: TickerSummary, branding: Branding) -> Self {
        if branding.logo_url.is_some() {
            summary.extra.remove("logo_url");
        }
        if branding.icon_url.is_some() {
            summary.extra.remove("icon_url");
        }
        Self { summary, branding }
    }
}

impl From<TickerSummary> for EnrichedRow {
    fn from(summary: TickerSummary) -> Self {
        Self {
            summary,
            branding: Branding::default(),
        }
    }
}

/// Tunables for the ticker service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickerSettings {
    /// Markets to query, in search order. Duplicates are ignored.
    pub markets: Vec<Market>,
    pub sample_limit: u32,
    pub search_limit: u32,
}

impl Default for TickerSettings {
    fn default() -> Self {
        Self {
            markets: DEFAULT_MARKETS.to_vec(),
            sample_limit: DEFAULT_SAMPLE_LIMIT,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}
