use std::sync::Arc;

use chrono::Local;
use grafico::{Grafico, RangeLabel, Ticker, time_label, window_for};
use grafico_mock::MockSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Show how each selector label resolves against the current clock.
    // Intraday windows carry the local wall clock; daily windows a UTC date.
    let now = Local::now();
    println!("## Resolved windows at {}:", now.format("%Y-%m-%dT%H:%M:%S"));
    for label in RangeLabel::ALL {
        let window = window_for(label, &now)?;
        println!(
            " - {:>7} -> since {:<20} ({})",
            label, window.since, window.granularity
        );
    }

    // 2. Load an intraday comparison and render axis labels from row keys.
    let grafico = Grafico::builder()
        .source(Arc::new(MockSource::new()))
        .build()?;
    let selection = vec![Ticker::new("AAPL")?, Ticker::new("IBM")?];
    let chart = grafico.load(&selection, "1day", &now).await?;

    println!("\n## Intraday axis labels:");
    for row in &chart.rows {
        println!(" - {:<20} renders as {}", row.time, time_label(&row.time));
    }

    Ok(())
}
