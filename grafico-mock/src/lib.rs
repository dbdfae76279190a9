use async_trait::async_trait;
use grafico_core::{Granularity, GraficoError, PriceSource, QueryWindow, RawObservation, Ticker};

mod fixtures;

/// Mock price source for CI-safe tests and examples. Serves deterministic
/// data from static fixtures.
///
/// The fixture stores are small, so `window.since` is not applied; only the
/// window's granularity selects between the intraday and daily stores.
/// Trigger symbols tailor behavior: `FAIL` forces a fetch failure, `SLOW`
/// adds latency so orchestrator timeouts can fire, `EMPTY` is a known
/// symbol with zero observations.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> GraficoError {
        GraficoError::not_found(what.to_string())
    }

    async fn maybe_fail_or_stall(ticker: &str) -> Result<(), GraficoError> {
        match ticker {
            "FAIL" => Err(GraficoError::source(
                "grafico-mock",
                ticker,
                "forced failure",
            )),
            "SLOW" => {
                // Brief latency; the engine may time out depending on config.
                // Keep short to avoid slowing tests excessively.
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl PriceSource for MockSource {
    fn name(&self) -> &'static str {
        "grafico-mock"
    }

    async fn series(
        &self,
        ticker: &Ticker,
        window: &QueryWindow,
    ) -> Result<Vec<RawObservation>, GraficoError> {
        let s = ticker.as_str();
        Self::maybe_fail_or_stall(s).await?;
        let rows = match window.granularity {
            Granularity::Intraday => fixtures::intraday::by_symbol(s),
            Granularity::Daily => fixtures::daily::by_symbol(s),
        };
        rows.ok_or_else(|| Self::not_found(&format!("series for {s}")))
    }
}
