use std::sync::Arc;

use chrono::Utc;
use grafico::{Grafico, Ticker, time_label};
use grafico_mock::MockSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // 1. Build the engine against the deterministic mock source.
    let source = Arc::new(MockSource::new());
    let grafico = Grafico::builder().source(source).build()?;

    // 2. Pick two symbols and a daily range, exactly as a chart surface would.
    let selection = vec![Ticker::new("AAPL")?, Ticker::new("MSFT")?];
    println!("Loading 1-week close comparison for AAPL and MSFT...");

    let chart = grafico.load(&selection, "1week", &Utc::now()).await?;

    // 3. Print the merged table: one row per timestamp, one cell per symbol.
    println!("\n## Merged table ({} rows):", chart.rows.len());
    for row in &chart.rows {
        let cells: Vec<String> = chart
            .series
            .iter()
            .map(|s| match row.close(&s.ticker) {
                Some(close) => format!("{}=${close:.2}", s.ticker),
                None => format!("{}=(gap)", s.ticker),
            })
            .collect();
        println!(" - {:>10}  {}", time_label(&row.time), cells.join("  "));
    }

    // 4. Print the series descriptors a renderer would consume.
    println!("\n## Series:");
    for s in &chart.series {
        println!(" - '{}' plotted in {}", s.display_name, s.color);
    }

    Ok(())
}
