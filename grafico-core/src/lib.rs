//! grafico-core
//!
//! Core types, traits, and utilities shared across the grafico ecosystem.
//!
//! - `types`: common data structures (tickers, observations, merged rows).
//! - `source`: the `PriceSource` trait implemented by data backends.
//! - `window`: resolution of logical range labels into query windows.
//! - `timeseries`: joining independently keyed observation series.
//! - `present`: display labels and stable series identities for renderers.
//!
//! Everything in this crate is pure: the only async surface is the
//! `PriceSource` contract itself, and the resolver takes its clock as an
//! explicit parameter so callers (and tests) control time.
#![warn(missing_docs)]

/// Unified error type for the grafico workspace.
pub mod error;
/// Display labels and per-series color identities.
pub mod present;
/// The `PriceSource` contract implemented by data backends.
pub mod source;
/// Time-series utilities for joining per-symbol observation series.
pub mod timeseries;
pub mod types;
/// Range-label resolution into concrete query windows.
pub mod window;

pub use error::GraficoError;
pub use present::{ColorToken, PALETTE, SeriesSpec, color_for, series_specs, time_label};
pub use source::PriceSource;
pub use timeseries::merge::merge_series;
pub use types::*;
pub use window::{RangeLabel, resolve, window_for};
