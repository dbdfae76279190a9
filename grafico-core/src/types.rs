//! Common data structures shared across the grafico ecosystem.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::GraficoError;

/// A validated stock ticker symbol, e.g. `AAPL`.
///
/// Tickers are opaque identifiers: no exchange suffix handling or case
/// normalization is applied, only a structural check that the string is
/// non-empty and free of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Construct a ticker, rejecting empty or whitespace-bearing input.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the candidate is empty or contains whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, GraficoError> {
        let raw = raw.into();
        if raw.is_empty() || raw.chars().any(char::is_whitespace) {
            return Err(GraficoError::InvalidArg(format!(
                "invalid ticker: {raw:?}"
            )));
        }
        Ok(Self(raw))
    }

    /// Borrow the ticker as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ticker {
    type Err = GraficoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = GraficoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}

/// Data cadence class of a query window.
///
/// Determines both the timestamp format used in the window and which store
/// a [`crate::PriceSource`] targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Observations keyed by full date-time, sub-daily frequency.
    Intraday,
    /// Observations keyed by calendar date only.
    Daily,
}

impl Granularity {
    /// Whether this cadence carries full date-time keys.
    #[must_use]
    pub const fn is_intraday(self) -> bool {
        matches!(self, Self::Intraday)
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Intraday => "intraday",
            Self::Daily => "daily",
        })
    }
}

/// A concrete anchor-relative query window derived from a range label.
///
/// `since` is formatted per the window's granularity: intraday windows carry
/// a local wall-clock datetime (`YYYY-MM-DDTHH:MM:SS`, no timezone suffix),
/// daily windows a UTC calendar date (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryWindow {
    /// Inclusive lower bound of the window, formatted per `granularity`.
    pub since: String,
    /// Cadence class the window targets.
    pub granularity: Granularity,
}

/// A single observation as returned by a price source, before normalization.
///
/// Intraday stores key rows by `timestamp`, daily stores by `date`; both
/// shapes deserialize into this one struct so sources can hand back backend
/// rows untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    /// Full date-time key, present on intraday rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Calendar-date key, present on daily rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Closing price at this observation.
    pub close: f64,
}

impl RawObservation {
    /// Build an intraday row keyed by a full date-time string.
    pub fn intraday(timestamp: impl Into<String>, close: f64) -> Self {
        Self {
            timestamp: Some(timestamp.into()),
            date: None,
            close,
        }
    }

    /// Build a daily row keyed by a calendar-date string.
    pub fn daily(date: impl Into<String>, close: f64) -> Self {
        Self {
            timestamp: None,
            date: Some(date.into()),
            close,
        }
    }

    /// Collapse the heterogeneous key into a normalized [`Observation`].
    ///
    /// `timestamp` wins when both keys are present.
    ///
    /// # Errors
    /// Returns `Data` when the row carries neither key.
    pub fn normalize(self) -> Result<Observation, GraficoError> {
        let time = self.timestamp.or(self.date).ok_or_else(|| {
            GraficoError::Data("observation carries neither `timestamp` nor `date`".into())
        })?;
        Ok(Observation {
            time,
            close: self.close,
        })
    }
}

/// A normalized observation: one timestamp string, one close price.
///
/// Normalization happens once at the fetch boundary; the merger only ever
/// sees this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Timestamp key, either a full date-time or a calendar date.
    pub time: String,
    /// Closing price at `time`.
    pub close: f64,
}

impl Observation {
    /// Construct an observation from its parts.
    pub fn new(time: impl Into<String>, close: f64) -> Self {
        Self {
            time: time.into(),
            close,
        }
    }
}

/// One row of the merged chart table: a unique timestamp plus one optional
/// close cell per symbol, keyed `"{ticker}_close"`.
///
/// An absent cell means "no observation for that symbol at that time" and
/// must render as a gap, never as zero. Serializes flat, so a row reads as
/// `{"time": "...", "AAPL_close": 150.0}` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRow {
    /// The row's unique timestamp key.
    pub time: String,
    /// Per-symbol close cells, keyed by [`close_column`].
    #[serde(flatten)]
    pub cells: BTreeMap<String, f64>,
}

impl MergedRow {
    /// Look up the close cell for one symbol, if it observed this timestamp.
    #[must_use]
    pub fn close(&self, ticker: &Ticker) -> Option<f64> {
        self.cells.get(&close_column(ticker)).copied()
    }
}

/// The cell key a symbol's close values occupy in a [`MergedRow`].
#[must_use]
pub fn close_column(ticker: &Ticker) -> String {
    format!("{ticker}_close")
}

/// Timeout configuration applied by the load orchestrator.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Bound on each individual source fetch.
    pub source_timeout: Duration,
    /// Optional bound on the whole fan-out; `None` means unbounded.
    pub request_timeout: Option<Duration>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            source_timeout: Duration::from_secs(5),
            request_timeout: None,
        }
    }
}
