use super::Market;

/// Largest page size the listing endpoint accepts.
pub const MAX_LIST_LIMIT: u32 = 1000;

/// Field the listing is sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Ticker,
    Name,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Ticker => "ticker",
            SortField::Name => "name",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Filters for a ticker listing query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListTickersParams {
    pub market: Market,
    pub search: Option<String>,
    pub active: bool,
    pub limit: u32,
    pub sort: Option<(SortField, SortOrder)>,
}

impl ListTickersParams {
    /// Active tickers of a market, sorted ascending by symbol.
    pub fn top(market: Market, limit: u32) -> Self {
        Self {
            market,
            search: None,
            active: true,
            limit: clamp_limit(limit),
            sort: Some((SortField::Ticker, SortOrder::Asc)),
        }
    }

    /// Active tickers of a market matching `query`, in provider relevance order.
    pub fn search(market: Market, query: impl Into<String>, limit: u32) -> Self {
        Self {
            market,
            search: Some(query.into()),
            active: true,
            limit: clamp_limit(limit),
            sort: None,
        }
    }
}

fn clamp_limit(limit: u32) -> u32 {
    limit.clamp(1, MAX_LIST_LIMIT)
}
