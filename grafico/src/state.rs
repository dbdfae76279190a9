use grafico_core::{GraficoError, MergedRow, SeriesSpec, Ticker};

use crate::ChartData;

/// Receipt for one in-flight load, handed out by [`ChartState::begin_load`].
///
/// Tokens are monotonically increasing per state; only the latest issued
/// token can apply its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// Explicit snapshot of a chart surface's mutable state.
///
/// Instead of ambient fields scattered through a UI layer, the selection,
/// loading flag, error message, and current table travel through this one
/// value. Load results re-enter via [`apply`](Self::apply), which discards
/// any outcome that is not from the latest issued load, so re-triggering a
/// load before the prior one settles can never leave a stale table behind.
#[derive(Debug, Clone, Default)]
pub struct ChartState {
    /// Selected symbols, in the order the user picked them. Selection order
    /// drives color assignment and legend order.
    pub selection: Vec<Ticker>,
    /// Whether a load is currently in flight.
    pub loading: bool,
    /// User-facing message from the last applied failure, if any.
    pub error: Option<String>,
    /// The current merged table; replaced wholesale on every applied load.
    pub rows: Vec<MergedRow>,
    /// Series descriptors matching `rows`.
    pub series: Vec<SeriesSpec>,
    issued: u64,
}

impl ChartState {
    /// Fresh state: nothing selected, nothing loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a symbol in the selection.
    ///
    /// A newly selected symbol appends at the end; deselecting removes it
    /// and shifts later symbols (and their colors) up, matching checkbox
    /// behavior.
    pub fn toggle(&mut self, ticker: Ticker) {
        if let Some(pos) = self.selection.iter().position(|t| *t == ticker) {
            self.selection.remove(pos);
        } else {
            self.selection.push(ticker);
        }
    }

    /// Mark a load as started and hand out its sequence token.
    ///
    /// Starting a new load supersedes every earlier token; their outcomes
    /// will be discarded on [`apply`](Self::apply).
    pub fn begin_load(&mut self) -> LoadToken {
        self.issued += 1;
        self.loading = true;
        self.error = None;
        LoadToken(self.issued)
    }

    /// Apply a settled load outcome.
    ///
    /// Returns `false` (leaving the state untouched) when `token` is not
    /// the latest issued, which is how a slow early load loses the race to
    /// a later one. An applied outcome always replaces the table wholesale:
    /// failures clear the previous rows rather than leaving them stale, and
    /// surface their message via `error`.
    pub fn apply(&mut self, token: LoadToken, outcome: Result<ChartData, GraficoError>) -> bool {
        if token.0 != self.issued {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(data) => {
                self.rows = data.rows;
                self.series = data.series;
                self.error = None;
            }
            Err(e) => {
                self.rows.clear();
                self.series.clear();
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// Whether the surface currently has rows to draw.
    #[must_use]
    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }
}
