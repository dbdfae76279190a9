// Re-export helpers so tests can `use helpers::*;`
#![allow(dead_code)]

pub mod mock_source;

pub use mock_source::MockSource;

use chrono::TimeZone;
use grafico_core::Ticker;

/// Common symbol constants used across tests.
pub const AAPL: &str = "AAPL";
pub const MSFT: &str = "MSFT";
pub const IBM: &str = "IBM";
#[allow(dead_code)]
pub const GOOGL: &str = "GOOGL";

/// Construct a `Ticker` for test usage with infallible expectations.
pub fn ticker(symbol: &str) -> Ticker {
    Ticker::new(symbol).expect("valid static test symbol")
}

/// Build a selection from static symbols.
pub fn selection(symbols: &[&str]) -> Vec<Ticker> {
    symbols.iter().map(|s| ticker(s)).collect()
}

/// A fixed UTC clock so resolved windows are reproducible.
pub fn now() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap()
}
