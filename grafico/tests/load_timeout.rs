mod helpers;

use std::time::Duration;

use grafico::{Grafico, GraficoError};
use grafico_core::RawObservation;
use helpers::{AAPL, MSFT, MockSource, now, selection};

#[tokio::test(start_paused = true)]
async fn a_slow_source_times_out_per_symbol() {
    let source = MockSource::builder()
        .name("test-feed")
        .delay(Duration::from_secs(30))
        .returns_series_ok(vec![RawObservation::daily("2024-06-03", 1.0)])
        .build();
    let grafico = Grafico::builder()
        .source(source)
        .source_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let res = grafico.load(&selection(&[AAPL]), "1week", &now()).await;
    match res {
        Err(GraficoError::SourceTimeout { name, ticker }) => {
            assert_eq!(name, "test-feed");
            assert_eq!(ticker, "AAPL");
        }
        other => panic!("expected SourceTimeout, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn the_request_deadline_bounds_the_whole_fan_out() {
    let source = MockSource::builder()
        .name("test-feed")
        .delay(Duration::from_secs(2))
        .returns_series_ok(vec![RawObservation::daily("2024-06-03", 1.0)])
        .build();
    let grafico = Grafico::builder()
        .source(source)
        .source_timeout(Duration::from_secs(5))
        .request_timeout(Duration::from_millis(500))
        .build()
        .unwrap();

    let res = grafico.load(&selection(&[AAPL, MSFT]), "1week", &now()).await;
    assert!(matches!(res, Err(GraficoError::RequestTimeout)));
}

#[tokio::test(start_paused = true)]
async fn fast_sources_are_untouched_by_generous_timeouts() {
    let source = MockSource::builder()
        .name("test-feed")
        .delay(Duration::from_millis(10))
        .returns_series_ok(vec![RawObservation::daily("2024-06-03", 1.0)])
        .build();
    let grafico = Grafico::builder()
        .source(source)
        .source_timeout(Duration::from_secs(5))
        .request_timeout(Duration::from_secs(10))
        .build()
        .unwrap();

    let chart = grafico
        .load(&selection(&[AAPL, MSFT]), "1week", &now())
        .await
        .unwrap();
    assert_eq!(chart.rows.len(), 1);
}
