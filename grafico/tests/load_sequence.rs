mod helpers;

use grafico::{ChartState, Grafico};
use grafico_core::RawObservation;
use helpers::{AAPL, MSFT, MockSource, now, ticker};

fn feed_with_close(close: f64) -> std::sync::Arc<MockSource> {
    MockSource::builder()
        .name("test-feed")
        .returns_series_ok(vec![RawObservation::daily("2024-06-03", close)])
        .build()
}

#[tokio::test]
async fn a_stale_load_cannot_overwrite_a_newer_one() {
    let mut state = ChartState::new();
    state.toggle(ticker(AAPL));

    // Two loads race: the user re-triggered before the first settled.
    let first = Grafico::builder().source(feed_with_close(100.0)).build().unwrap();
    let second = Grafico::builder().source(feed_with_close(200.0)).build().unwrap();

    let stale_token = state.begin_load();
    let fresh_token = state.begin_load();

    let fresh = second.load(&state.selection.clone(), "1week", &now()).await;
    assert!(state.apply(fresh_token, fresh));
    assert_eq!(state.rows[0].close(&ticker(AAPL)), Some(200.0));

    // The earlier load resolves late; its outcome is discarded.
    let stale = first.load(&state.selection.clone(), "1week", &now()).await;
    assert!(!state.apply(stale_token, stale));
    assert_eq!(state.rows[0].close(&ticker(AAPL)), Some(200.0));
}

#[tokio::test]
async fn an_applied_failure_replaces_the_prior_table() {
    let mut state = ChartState::new();
    state.toggle(ticker(AAPL));
    state.toggle(ticker(MSFT));

    let grafico = Grafico::builder().source(feed_with_close(150.0)).build().unwrap();
    let token = state.begin_load();
    let outcome = grafico.load(&state.selection.clone(), "1week", &now()).await;
    assert!(state.apply(token, outcome));
    assert!(state.has_rows());

    // Next load comes back empty; prior rows must not linger.
    let empty_feed = MockSource::builder()
        .name("test-feed")
        .returns_series_ok(vec![])
        .build();
    let grafico = Grafico::builder().source(empty_feed).build().unwrap();
    let token = state.begin_load();
    let outcome = grafico.load(&state.selection.clone(), "5min", &now()).await;
    assert!(state.apply(token, outcome));
    assert!(!state.has_rows());
    assert!(state.error.as_deref().unwrap().contains("coarser"));
}
