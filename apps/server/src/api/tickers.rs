use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tickerdeck_core::tickers::EnrichedRow;
use tickerdeck_market_data::TickerDetail;

/// Top crypto rows followed by top (enriched) stock rows.
async fn get_samples(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<EnrichedRow>>> {
    let rows = state.ticker_service.fetch_samples().await?;
    Ok(Json(rows))
}

#[derive(serde::Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: Option<String>,
}

async fn search_tickers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<EnrichedRow>>> {
    let rows = state
        .ticker_service
        .search_tickers(query.q.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(rows))
}

async fn get_ticker(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TickerDetail>> {
    let detail = state.ticker_service.get_ticker_detail(&symbol).await?;
    Ok(Json(detail))
}

#[derive(serde::Deserialize)]
struct TickerQuery {
    #[serde(default)]
    id: Option<String>,
}

// Query-string form of the detail route, kept for clients built against `?id=`.
async fn get_ticker_by_query(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TickerQuery>,
) -> ApiResult<Json<TickerDetail>> {
    let symbol = query
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing ?id=".to_string()))?;
    let detail = state.ticker_service.get_ticker_detail(&symbol).await?;
    Ok(Json(detail))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/samples", get(get_samples))
        .route("/search", get(search_tickers))
        .route("/ticker", get(get_ticker_by_query))
        .route("/ticker/{symbol}", get(get_ticker))
}
