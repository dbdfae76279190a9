use grafico_core::RawObservation;

// Timestamps are deliberately misaligned across symbols so merged tables
// exercise sparse rows.
pub fn by_symbol(s: &str) -> Option<Vec<RawObservation>> {
    match s {
        "AAPL" => Some(build(&[
            ("2024-06-10T09:30:00", 184.25),
            ("2024-06-10T09:31:00", 184.40),
            ("2024-06-10T09:32:00", 184.10),
        ])),
        "IBM" => Some(build(&[
            ("2024-06-10T09:30:00", 169.80),
            ("2024-06-10T09:32:00", 170.05),
        ])),
        "GOOGL" => Some(build(&[
            ("2024-06-10T09:31:00", 176.60),
            ("2024-06-10T09:32:00", 176.75),
        ])),
        "MSFT" => Some(build(&[
            ("2024-06-10T09:30:00", 425.10),
            ("2024-06-10T09:31:00", 425.60),
            ("2024-06-10T09:32:00", 425.35),
        ])),
        "EMPTY" | "SLOW" => Some(vec![]),
        _ => None,
    }
}

fn build(rows: &[(&str, f64)]) -> Vec<RawObservation> {
    rows.iter()
        .map(|&(timestamp, close)| RawObservation::intraday(timestamp, close))
        .collect()
}
