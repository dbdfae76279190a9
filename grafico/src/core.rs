use std::sync::Arc;
use std::time::Duration;

use grafico_core::{GraficoError, LoadConfig, PriceSource, Ticker};

/// Engine that loads and joins per-symbol series from a registered source.
pub struct Grafico {
    pub(crate) source: Arc<dyn PriceSource>,
    pub(crate) cfg: LoadConfig,
}

/// Builder for constructing a `Grafico` engine with custom configuration.
pub struct GraficoBuilder {
    source: Option<Arc<dyn PriceSource>>,
    cfg: LoadConfig,
}

impl Default for GraficoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraficoBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no source; you must register one via [`source`](Self::source).
    /// - Defaults are conservative: 5s per-symbol fetch timeout, no overall
    ///   request deadline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: LoadConfig::default(),
        }
    }

    /// Register the price source every load fetches from.
    ///
    /// The source decides internally which of its stores (intraday vs daily)
    /// a window targets; the engine only hands it one resolved window per
    /// symbol.
    #[must_use]
    pub fn source(mut self, source: Arc<dyn PriceSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the per-symbol fetch timeout.
    ///
    /// Applied independently to each concurrent fetch; an elapsed timeout
    /// fails that symbol (and with it the whole load) as `SourceTimeout`.
    #[must_use]
    pub const fn source_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.source_timeout = timeout;
        self
    }

    /// Set an overall deadline for the whole fan-out.
    ///
    /// Bounds total latency even when many fetches run long. When exceeded,
    /// the load fails with `RequestTimeout`.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Build the `Grafico` engine.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no source has been registered via
    /// [`source`](Self::source).
    pub fn build(self) -> Result<Grafico, GraficoError> {
        let source = self.source.ok_or_else(|| {
            GraficoError::InvalidArg(
                "no price source registered; add one via source(...)".to_string(),
            )
        })?;
        Ok(Grafico {
            source,
            cfg: self.cfg,
        })
    }
}

impl Grafico {
    /// Start building a new `Grafico` instance.
    #[must_use]
    pub fn builder() -> GraficoBuilder {
        GraficoBuilder::new()
    }

    /// Name of the registered price source.
    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }
}

/// Keep already-tagged failures intact; wrap anything else as a fetch
/// failure attributed to the named source and symbol.
pub(crate) fn tag_err(name: &str, ticker: &Ticker, e: GraficoError) -> GraficoError {
    match e {
        e @ (GraficoError::NotFound { .. }
        | GraficoError::Source { .. }
        | GraficoError::SourceTimeout { .. }
        | GraficoError::RequestTimeout) => e,
        other => GraficoError::source(name, ticker.as_str(), other.to_string()),
    }
}

/// Run a future under an optional request-level deadline.
pub(crate) async fn with_request_deadline<F, T>(
    deadline: Option<Duration>,
    fut: F,
) -> Result<T, GraficoError>
where
    F: core::future::Future<Output = T>,
{
    match deadline {
        Some(d) => (tokio::time::timeout(d, fut).await).map_err(|_| GraficoError::RequestTimeout),
        None => Ok(fut.await),
    }
}
