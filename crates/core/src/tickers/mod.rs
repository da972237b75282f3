//! Tickers module - aggregation of provider listings and details.
//!
//! ```text
//! HTTP handler → TickerService → TickerProvider (market-data crate)
//!                     │
//!                     └─ safe(): provider failures become fallback values
//! ```

mod tickers_model;
mod tickers_service;
mod tickers_traits;


pub use tickers_model::{EnrichedRow, TickerSettings};
pub use tickers_service::TickerService;
pub use tickers_traits::TickerServiceTrait;
