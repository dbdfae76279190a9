//! Display labels and stable per-series identities for chart renderers.

use core::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::types::Ticker;

/// An opaque visual token a renderer maps to a stroke color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorToken(
    /// The underlying hex color literal.
    pub &'static str,
);

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The fixed series palette, cycled by selection position.
pub const PALETTE: [ColorToken; 6] = [
    ColorToken("#a78bfa"),
    ColorToken("#60a5fa"),
    ColorToken("#34d399"),
    ColorToken("#fbbf24"),
    ColorToken("#f87171"),
    ColorToken("#ec4899"),
];

/// Color for the series at `index` in the selection order.
///
/// `PALETTE[index % PALETTE.len()]`: deterministic for a given selection
/// order, so re-renders never shuffle colors.
#[must_use]
pub const fn color_for(index: usize) -> ColorToken {
    PALETTE[index % PALETTE.len()]
}

/// Render a row timestamp for the horizontal axis.
///
/// Values containing the `T` date-time separator are intraday and render as
/// an hour:minute display; calendar dates pass through unchanged. A value
/// that claims to be a datetime but does not parse falls back to the raw
/// string rather than failing the render.
#[must_use]
pub fn time_label(time: &str) -> String {
    if !time.contains('T') {
        return time.to_string();
    }
    match NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M:%S") {
        Ok(dt) => dt.format("%H:%M").to_string(),
        Err(_) => time.to_string(),
    }
}

/// Descriptor handed to the rendering collaborator for one plotted series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSpec {
    /// The symbol this series plots.
    pub ticker: Ticker,
    /// Stable color identity assigned from selection position.
    pub color: ColorToken,
    /// Legend text, e.g. "AAPL Close".
    pub display_name: String,
}

/// Build series descriptors for a selection, in selection order.
#[must_use]
pub fn series_specs(selection: &[Ticker]) -> Vec<SeriesSpec> {
    selection
        .iter()
        .enumerate()
        .map(|(index, ticker)| SeriesSpec {
            ticker: ticker.clone(),
            color: color_for(index),
            display_name: format!("{ticker} Close"),
        })
        .collect()
}
