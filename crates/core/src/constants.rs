use tickerdeck_market_data::Market;

/// Rows fetched per market for the samples listing
pub const DEFAULT_SAMPLE_LIMIT: u32 = 5;

/// Rows fetched per market for a search
pub const DEFAULT_SEARCH_LIMIT: u32 = 5;

/// Markets queried when none are configured, in search order
pub const DEFAULT_MARKETS: [Market; 2] = [Market::Stocks, Market::Crypto];
