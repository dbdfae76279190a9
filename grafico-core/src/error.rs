use thiserror::Error;

/// Unified error type for the grafico workspace.
///
/// This wraps argument validation errors, source-tagged fetch failures,
/// timeout conditions, and the user-correctable states a chart surface
/// reports back (empty selection, empty result window).
#[derive(Debug, Error)]
pub enum GraficoError {
    /// A range label outside the recognized set was passed to the resolver.
    #[error("unrecognized range label: {label}")]
    InvalidRange {
        /// The offending label as received.
        label: String,
    },

    /// A load was requested with zero symbols selected.
    #[error("no symbols selected")]
    NoSelection,

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with returned or expected data (missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "series for AAPL".
        what: String,
    },

    /// A price source returned an error while fetching one symbol's series.
    #[error("{name} failed for {ticker}: {msg}")]
    Source {
        /// Source name that failed.
        name: String,
        /// Symbol whose fetch failed.
        ticker: String,
        /// Human-readable error message.
        msg: String,
    },

    /// An individual source call exceeded the configured timeout.
    #[error("source timed out: {name} while fetching {ticker}")]
    SourceTimeout {
        /// Source name that timed out.
        name: String,
        /// Symbol whose fetch timed out.
        ticker: String,
    },

    /// The overall load exceeded the configured deadline.
    #[error("load timed out before every series arrived")]
    RequestTimeout,

    /// Every fetch succeeded but the merged table came back empty.
    #[error("no rows for the selected range ({range}); try a coarser range such as 1week or 1month")]
    EmptyRange {
        /// The range label that produced no rows.
        range: String,
    },
}

impl GraficoError {
    /// Helper: build an `InvalidRange` error for an unrecognized label.
    pub fn invalid_range(label: impl Into<String>) -> Self {
        Self::InvalidRange {
            label: label.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `Source` error tagged with the source name and symbol.
    pub fn source(
        name: impl Into<String>,
        ticker: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self::Source {
            name: name.into(),
            ticker: ticker.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `SourceTimeout` error.
    pub fn source_timeout(name: impl Into<String>, ticker: impl Into<String>) -> Self {
        Self::SourceTimeout {
            name: name.into(),
            ticker: ticker.into(),
        }
    }

    /// Helper: build an `EmptyRange` error for the range label that produced no rows.
    pub fn empty_range(range: impl Into<String>) -> Self {
        Self::EmptyRange {
            range: range.into(),
        }
    }
}
