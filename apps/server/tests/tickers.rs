use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tickerdeck_market_data::{
    errors::MarketDataError, Branding, ListTickersParams, Market, TickerDetail, TickerProvider,
    TickerSummary,
};
use tickerdeck_server::{api::app_router, build_state_with_provider, config::Config};
use tower::ServiceExt;

#[derive(Default)]
struct FakePolygon {
    listings: HashMap<Market, Vec<TickerSummary>>,
    failing_markets: Vec<Market>,
    details: HashMap<String, TickerDetail>,
    list_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

#[async_trait]
impl TickerProvider for FakePolygon {
    fn id(&self) -> &'static str {
        "FAKE"
    }

    async fn list_tickers(
        &self,
        params: &ListTickersParams,
    ) -> Result<Vec<TickerSummary>, MarketDataError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_markets.contains(&params.market) {
            return Err(MarketDataError::ProviderError {
                provider: "FAKE".to_string(),
                status: Some(401),
                message: "Unknown API Key".to_string(),
            });
        }
        Ok(self
            .listings
            .get(&params.market)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_ticker_detail(
        &self,
        symbol: &str,
    ) -> Result<Option<TickerDetail>, MarketDataError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.details.get(symbol).cloned())
    }
}

fn apple_detail() -> TickerDetail {
    let mut detail = TickerDetail::new("AAPL", "Apple Inc.", Market::Stocks).with_branding(Branding {
        logo_url: Some("https://example.test/aapl/logo.svg".to_string()),
        icon_url: Some("https://example.test/aapl/icon.png".to_string()),
    });
    detail.ticker_type = Some("CS".to_string());
    detail.homepage_url = Some("https://www.apple.com".to_string());
    detail
}

fn populated() -> FakePolygon {
    let mut fake = FakePolygon::default();
    fake.listings.insert(
        Market::Stocks,
        vec![
            TickerSummary::new("AAPL", "Apple Inc.", Market::Stocks).with_type("CS"),
            TickerSummary::new("AAPU", "Direxion Daily AAPL Bull 2X", Market::Stocks)
                .with_type("ETF"),
        ],
    );
    fake.listings.insert(
        Market::Crypto,
        vec![TickerSummary::new("X:BTCUSD", "Bitcoin - United States dollar", Market::Crypto)],
    );
    fake.details.insert("AAPL".to_string(), apple_detail());
    fake
}

fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "POLYGON_API_KEY" => Some("test-key".to_string()),
        _ => None,
    })
    .unwrap()
}

fn build_test_router(fake: Arc<FakePolygon>) -> Router {
    let config = test_config();
    let state = build_state_with_provider(fake, &config);
    app_router(state, &config)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

#[tokio::test]
async fn healthz_works() {
    let app = build_test_router(Arc::new(FakePolygon::default()));
    let (status, body) = get(&app, "/api/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".to_string()));
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = build_test_router(Arc::new(FakePolygon::default()));
    let response = app
        .oneshot(Request::builder().uri("/api/readyz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn samples_list_crypto_then_enriched_stocks() {
    let app = build_test_router(Arc::new(populated()));
    let (status, body) = get(&app, "/api/samples").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"ticker": "X:BTCUSD", "name": "Bitcoin - United States dollar", "market": "crypto"},
            {
                "ticker": "AAPL",
                "name": "Apple Inc.",
                "market": "stocks",
                "type": "CS",
                "logo_url": "https://example.test/aapl/logo.svg",
                "icon_url": "https://example.test/aapl/icon.png"
            },
            {"ticker": "AAPU", "name": "Direxion Daily AAPL Bull 2X", "market": "stocks", "type": "ETF"}
        ])
    );
}

#[tokio::test]
async fn samples_fail_with_500_when_provider_is_down() {
    let fake = FakePolygon {
        failing_markets: vec![Market::Stocks, Market::Crypto],
        ..FakePolygon::default()
    };
    let app = build_test_router(Arc::new(fake));
    let (status, body) = get(&app, "/api/samples").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], 500);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn blank_search_returns_empty_without_provider_calls() {
    let fake = Arc::new(populated());
    let app = build_test_router(fake.clone());

    for uri in ["/api/search", "/api/search?q=", "/api/search?q=%20%20"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!([]), "{uri}");
    }
    assert_eq!(fake.list_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn search_merges_markets_in_order() {
    let fake = Arc::new(populated());
    let app = build_test_router(fake.clone());
    let (status, body) = get(&app, "/api/search?q=a").await;

    assert_eq!(status, StatusCode::OK);
    let tickers: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["ticker"].as_str().unwrap())
        .collect();
    assert_eq!(tickers, vec!["AAPL", "AAPU", "X:BTCUSD"]);
    assert_eq!(body[0]["logo_url"], "https://example.test/aapl/logo.svg");
    assert_eq!(fake.list_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn search_survives_one_failing_market() {
    let mut fake = populated();
    fake.failing_markets.push(Market::Stocks);
    let app = build_test_router(Arc::new(fake));

    let (status, body) = get(&app, "/api/search?q=btc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{"ticker": "X:BTCUSD", "name": "Bitcoin - United States dollar", "market": "crypto"}])
    );
}

#[tokio::test]
async fn search_fails_with_500_when_every_market_fails() {
    let fake = FakePolygon {
        failing_markets: vec![Market::Stocks, Market::Crypto],
        ..FakePolygon::default()
    };
    let app = build_test_router(Arc::new(fake));
    let (status, _) = get(&app, "/api/search?q=btc").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn crypto_ticker_detail_is_not_implemented() {
    let fake = Arc::new(populated());
    let app = build_test_router(fake.clone());

    for uri in ["/api/ticker/X:BTC-USD", "/api/ticker/X%3ABTC-USD", "/api/ticker?id=X:BTC-USD"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED, "{uri}");
        assert_eq!(body["error"], "Details for crypto tickers not implemented", "{uri}");
    }
    assert_eq!(fake.detail_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unknown_ticker_is_404() {
    let app = build_test_router(Arc::new(populated()));
    let (status, body) = get(&app, "/api/ticker/ZZZZ").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"code": 404, "error": "Ticker not found"}));
}

#[tokio::test]
async fn ticker_detail_is_returned() {
    let app = build_test_router(Arc::new(populated()));
    let (status, body) = get(&app, "/api/ticker/AAPL").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ticker"], "AAPL");
    assert_eq!(body["homepage_url"], "https://www.apple.com");
    assert_eq!(body["branding"]["icon_url"], "https://example.test/aapl/icon.png");
}

#[tokio::test]
async fn ticker_query_form_requires_id() {
    let app = build_test_router(Arc::new(populated()));

    let (status, body) = get(&app, "/api/ticker").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing ?id=");

    let (status, _) = get(&app, "/api/ticker?id=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get(&app, "/api/ticker?id=AAPL").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Apple Inc.");
}

#[tokio::test]
async fn index_and_fx_symbols_reach_the_provider() {
    let mut fake = populated();
    fake.details.insert(
        "I:SPX".to_string(),
        TickerDetail::new("I:SPX", "Standard & Poor's 500", Market::Indices),
    );
    let fake = Arc::new(fake);
    let app = build_test_router(fake.clone());

    let (status, body) = get(&app, "/api/ticker/I:SPX").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["market"], "indices");

    let (status, _) = get(&app, "/api/ticker/C:EURUSD").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(fake.detail_calls.load(Ordering::SeqCst), 2);
}
