use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Market segment a ticker belongs to, as reported by the provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Market {
    Stocks,
    Crypto,
    Fx,
    Otc,
    Indices,
    /// Any market value this crate does not model yet.
    #[serde(other)]
    Unknown,
}

impl Market {
    pub const ALL: [Market; 5] = [
        Market::Stocks,
        Market::Crypto,
        Market::Fx,
        Market::Otc,
        Market::Indices,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Market::Stocks => "stocks",
            Market::Crypto => "crypto",
            Market::Fx => "fx",
            Market::Otc => "otc",
            Market::Indices => "indices",
            Market::Unknown => "unknown",
        }
    }

    /// Classify a symbol by its two-character market prefix.
    ///
    /// Returns `None` for unprefixed symbols (equities, OTC).
    ///
    /// ```
    /// use tickerdeck_market_data::Market;
    ///
    /// assert_eq!(Market::from_symbol_prefix("X:BTC-USD"), Some(Market::Crypto));
    /// assert_eq!(Market::from_symbol_prefix("C:EURUSD"), Some(Market::Fx));
    /// assert_eq!(Market::from_symbol_prefix("AAPL"), None);
    /// ```
    pub fn from_symbol_prefix(symbol: &str) -> Option<Market> {
        let prefix = symbol.get(..2)?;
        match prefix {
            "X:" => Some(Market::Crypto),
            "C:" => Some(Market::Fx),
            "I:" => Some(Market::Indices),
            _ => None,
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMarketError(pub String);

impl fmt::Display for ParseMarketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown market '{}'", self.0)
    }
}

impl std::error::Error for ParseMarketError {}

impl FromStr for Market {
    type Err = ParseMarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Market::ALL
            .into_iter()
            .find(|m| m.as_str() == needle)
            .ok_or_else(|| ParseMarketError(s.to_string()))
    }
}
