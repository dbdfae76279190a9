#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use grafico_core::{GraficoError, PriceSource, QueryWindow, RawObservation, Ticker};
use tokio::time::{Duration, sleep};

type SeriesFn =
    dyn Fn(&Ticker, &QueryWindow) -> Result<Vec<RawObservation>, GraficoError> + Send + Sync;

/// Simple in-memory source used by integration tests.
/// Behavior is tailored per test via the closure below.
pub struct MockSource {
    pub name: &'static str,
    pub delay_ms: u64,
    pub series_fn: Option<Arc<SeriesFn>>,
    /// Counts every `series` call, so tests can assert short-circuits.
    pub calls: AtomicUsize,
}

impl Default for MockSource {
    fn default() -> Self {
        Self {
            name: "default_mock",
            delay_ms: 0,
            series_fn: None,
            calls: AtomicUsize::new(0),
        }
    }
}

impl MockSource {
    pub fn builder() -> MockSourceBuilder {
        MockSourceBuilder::new()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceSource for MockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn series(
        &self,
        ticker: &Ticker,
        window: &QueryWindow,
    ) -> Result<Vec<RawObservation>, GraficoError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        match &self.series_fn {
            Some(f) => (f)(ticker, window),
            None => Ok(vec![]),
        }
    }
}

/* ---------- Tiny builder helpers used by tests ---------- */

pub struct MockSourceBuilder {
    name: &'static str,
    delay_ms: u64,
    series_fn: Option<Arc<SeriesFn>>,
}

impl MockSourceBuilder {
    pub fn new() -> Self {
        Self {
            name: "mock",
            delay_ms: 0,
            series_fn: None,
        }
    }

    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn delay(mut self, d: Duration) -> Self {
        self.delay_ms = d.as_millis() as u64;
        self
    }

    pub fn with_series_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Ticker, &QueryWindow) -> Result<Vec<RawObservation>, GraficoError>
            + Send
            + Sync
            + 'static,
    {
        self.series_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_series_ok(mut self, rows: Vec<RawObservation>) -> Self {
        self.series_fn = Some(Arc::new(move |_t, _w| Ok(rows.clone())));
        self
    }

    pub fn build(self) -> Arc<MockSource> {
        Arc::new(MockSource {
            name: self.name,
            delay_ms: self.delay_ms,
            series_fn: self.series_fn,
            calls: AtomicUsize::new(0),
        })
    }
}
