//! Ticker reference models.
//!
//! Provider payloads are narrowed into these structs at the boundary. Keys the
//! structs do not name are kept in `extra` so a row can be passed through to
//! clients without losing anything the provider sent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Market;

/// Provider type code for common stock.
pub const COMMON_STOCK: &str = "CS";

/// One row of the provider's ticker listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickerSummary {
    pub ticker: String,

    #[serde(default)]
    pub name: String,

    pub market: Market,

    /// Security type code (e.g., "CS", "ETF"). Absent for crypto and fx rows.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ticker_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_exchange: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_utc: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TickerSummary {
    pub fn new(ticker: impl Into<String>, name: impl Into<String>, market: Market) -> Self {
        Self {
            ticker: ticker.into(),
            name: name.into(),
            market,
            ticker_type: None,
            locale: None,
            primary_exchange: None,
            active: None,
            currency_name: None,
            last_updated_utc: None,
            extra: Map::new(),
        }
    }

    /// Set the security type code.
    pub fn with_type(mut self, ticker_type: impl Into<String>) -> Self {
        self.ticker_type = Some(ticker_type.into());
        self
    }

    /// True for common stock listed in the stocks market.
    pub fn is_common_stock(&self) -> bool {
        self.market == Market::Stocks && self.ticker_type.as_deref() == Some(COMMON_STOCK)
    }
}

/// Logo and icon links attached to a ticker detail.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Company headquarters address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Full reference record for a single ticker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickerDetail {
    pub ticker: String,

    #[serde(default)]
    pub name: String,

    pub market: Market,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ticker_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_exchange: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_employees: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sic_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sic_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branding: Option<Branding>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TickerDetail {
    pub fn new(ticker: impl Into<String>, name: impl Into<String>, market: Market) -> Self {
        Self {
            ticker: ticker.into(),
            name: name.into(),
            market,
            ticker_type: None,
            locale: None,
            primary_exchange: None,
            active: None,
            currency_name: None,
            description: None,
            homepage_url: None,
            market_cap: None,
            total_employees: None,
            list_date: None,
            sic_code: None,
            sic_description: None,
            phone_number: None,
            address: None,
            branding: None,
            extra: Map::new(),
        }
    }

    /// Set the branding block.
    pub fn with_branding(mut self, branding: Branding) -> Self {
        self.branding = Some(branding);
        self
    }
}
