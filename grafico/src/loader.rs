use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, TimeZone};
use grafico_core::{
    GraficoError, MergedRow, Observation, RawObservation, SeriesSpec, Ticker, merge_series,
    resolve, series_specs,
};

use crate::Grafico;
use crate::core::{tag_err, with_request_deadline};

/// The fully prepared chart payload: an ordered row table plus one series
/// descriptor per selected symbol, in selection order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// Merged rows in ascending lexical (= chronological) `time` order.
    pub rows: Vec<MergedRow>,
    /// Series descriptors for the rendering collaborator.
    pub series: Vec<SeriesSpec>,
}

impl Grafico {
    /// Load, join, and prepare the chart table for a selection.
    ///
    /// Behavior and trade-offs:
    /// - Pure in time: `now` is an explicit parameter, so a caller (or test)
    ///   fully determines the resolved window.
    /// - Fetches for all symbols are issued concurrently and the merge runs
    ///   only after every fetch has settled. The policy is all-or-nothing: a
    ///   single failed fetch aborts the load so a partial chart is never
    ///   produced.
    /// - Each fetch is bounded by the configured per-source timeout; the
    ///   optional request deadline bounds the whole fan-out.
    /// - Source rows are normalized (`timestamp` else `date`) immediately
    ///   after their fetch settles, so the merge only ever sees one shape.
    ///
    /// # Errors
    /// - `NoSelection` for an empty selection, before any fetch is issued.
    /// - `InvalidArg` for duplicate symbols in the selection.
    /// - `InvalidRange` for an unrecognized range label.
    /// - `Source` / `SourceTimeout` / `NotFound` when a fetch fails.
    /// - `RequestTimeout` when the overall deadline elapses.
    /// - `EmptyRange` when every fetch succeeds but the table has no rows.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "grafico::load",
            skip(self, selection, now),
            fields(symbols = selection.len(), range = range),
        )
    )]
    pub async fn load<Tz: TimeZone>(
        &self,
        selection: &[Ticker],
        range: &str,
        now: &DateTime<Tz>,
    ) -> Result<ChartData, GraficoError> {
        if selection.is_empty() {
            return Err(GraficoError::NoSelection);
        }

        let mut seen = HashSet::new();
        for ticker in selection {
            if !seen.insert(ticker.as_str()) {
                return Err(GraficoError::InvalidArg(format!(
                    "duplicate symbol '{ticker}' in selection"
                )));
            }
        }

        let window = resolve(range, now)?;

        let tasks = selection.iter().map(|ticker| {
            let source = Arc::clone(&self.source);
            let window = window.clone();
            let ticker = ticker.clone();
            let timeout = self.cfg.source_timeout;
            async move {
                let fetched =
                    match tokio::time::timeout(timeout, source.series(&ticker, &window)).await {
                        Ok(res) => res.map_err(|e| tag_err(source.name(), &ticker, e)),
                        Err(_) => Err(GraficoError::source_timeout(source.name(), ticker.as_str())),
                    };
                (ticker, fetched)
            }
        });

        let joined =
            with_request_deadline(self.cfg.request_timeout, futures::future::join_all(tasks))
                .await?;

        // Fan-in barrier has settled; all-or-nothing from here.
        let mut per_symbol: Vec<(Ticker, Vec<Observation>)> = Vec::with_capacity(joined.len());
        for (ticker, fetched) in joined {
            let raw = fetched?;
            let observations = raw
                .into_iter()
                .map(RawObservation::normalize)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| tag_err(self.source.name(), &ticker, e))?;
            per_symbol.push((ticker, observations));
        }

        let rows = merge_series(&per_symbol);
        if rows.is_empty() {
            return Err(GraficoError::empty_range(range));
        }

        Ok(ChartData {
            rows,
            series: series_specs(selection),
        })
    }
}
