//! Market data models
//!
//! - `market` - Market segment enum and symbol prefix classification
//! - `ticker` - Ticker listing rows and per-symbol detail records
//! - `params` - Listing query filters

mod market;
mod params;
mod ticker;

pub use market::{Market, ParseMarketError};
pub use params::{ListTickersParams, SortField, SortOrder, MAX_LIST_LIMIT};
pub use ticker::{Address, Branding, TickerDetail, TickerSummary, COMMON_STOCK};
