//! Grafico turns a symbol selection and a logical time range into a single
//! chart-ready table of close prices.
//!
//! Overview
//! - Resolves range labels ("5min" … "1month") into anchor-relative query
//!   windows against an explicit clock.
//! - Fans one fetch per selected symbol out to a [`PriceSource`], waits for
//!   all of them to settle, and joins the series into one ordered table with
//!   a column per symbol.
//! - Prepares axis labels and stable per-series color identities for an
//!   external rendering layer.
//! - Normalizes error handling into one domain error type from `grafico_core`.
//!
//! Key behaviors and trade-offs
//! - Loads are all-or-nothing: a single failed fetch aborts the load instead
//!   of rendering a partial chart. Nothing is retried.
//! - Fetches run concurrently, each bounded by a per-source timeout; an
//!   optional request-level deadline bounds the whole fan-out.
//! - The merged table is recomputed wholesale on every load; re-triggered
//!   loads are sequenced through [`ChartState`] so a slow, stale result can
//!   never overwrite a newer one.
//! - Missing cells mean "no observation at that time" and must render as
//!   gaps, never as zero.
//!
//! Examples
//! Building an engine and loading a comparison chart:
//! ```rust,ignore
//! use std::sync::Arc;
//! use grafico::{Grafico, Ticker};
//!
//! let grafico = Grafico::builder()
//!     .source(Arc::new(MyBackendSource::new(base_url)))
//!     .build()?;
//!
//! let selection = vec![Ticker::new("AAPL")?, Ticker::new("MSFT")?];
//! let chart = grafico.load(&selection, "1week", &chrono::Utc::now()).await?;
//! for row in &chart.rows {
//!     // one `time` key plus one optional close cell per symbol
//! }
//! ```
//!
//! Driving a chart surface through the explicit state snapshot:
//! ```rust,ignore
//! use grafico::ChartState;
//!
//! let mut state = ChartState::new();
//! state.toggle(Ticker::new("AAPL")?);
//! let token = state.begin_load();
//! let outcome = grafico.load(&state.selection.clone(), "1day", &now).await;
//! state.apply(token, outcome); // stale tokens are discarded
//! ```
//!
//! See `grafico/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod loader;
mod state;

pub use crate::core::{Grafico, GraficoBuilder};
pub use loader::ChartData;
pub use state::{ChartState, LoadToken};

// Re-export core types for convenience
pub use grafico_core::{
    // Foundational types
    ColorToken,
    GraficoError,
    Granularity,
    LoadConfig,
    MergedRow,
    Observation,
    PALETTE,
    PriceSource,
    QueryWindow,
    RangeLabel,
    RawObservation,
    SeriesSpec,
    Ticker,
    // Pure operations
    close_column,
    color_for,
    merge_series,
    resolve,
    series_specs,
    time_label,
    window_for,
};
