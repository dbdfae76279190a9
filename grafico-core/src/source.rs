use async_trait::async_trait;

use crate::{GraficoError, QueryWindow, RawObservation, Ticker};

/// Contract implemented by price data backends.
///
/// A source resolves one symbol's observation series for a query window,
/// selecting its intraday or daily store from `window.granularity`. One
/// retrieval call per symbol; the orchestrator handles fan-out across a
/// selection, so implementations never batch.
///
/// Returned rows are the backend's native shape ([`RawObservation`], keyed
/// by `timestamp` or `date` depending on the store); normalization is the
/// caller's job, immediately after the fetch settles.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// A stable identifier used to tag errors, e.g. "grafico-mock".
    fn name(&self) -> &'static str;

    /// Fetch the observation series for `ticker` within `window`.
    ///
    /// An unknown symbol is a `NotFound` error; an empty series within a
    /// known symbol is an `Ok(vec![])`, not an error.
    async fn series(
        &self,
        ticker: &Ticker,
        window: &QueryWindow,
    ) -> Result<Vec<RawObservation>, GraficoError>;
}
