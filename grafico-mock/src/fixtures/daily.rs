use grafico_core::RawObservation;

pub fn by_symbol(s: &str) -> Option<Vec<RawObservation>> {
    match s {
        "AAPL" => Some(build(&[
            ("2024-06-03", 194.03),
            ("2024-06-04", 194.35),
            ("2024-06-05", 195.87),
            ("2024-06-06", 194.48),
            ("2024-06-07", 196.89),
        ])),
        "IBM" => Some(build(&[
            ("2024-06-03", 166.75),
            ("2024-06-04", 167.38),
            // no 2024-06-05 row; the merged table carries a gap here
            ("2024-06-06", 168.20),
            ("2024-06-07", 170.01),
        ])),
        "GOOGL" => Some(build(&[
            ("2024-06-03", 174.42),
            ("2024-06-04", 175.13),
            ("2024-06-05", 177.07),
            ("2024-06-06", 176.57),
            ("2024-06-07", 176.29),
        ])),
        "MSFT" => Some(build(&[
            ("2024-06-03", 413.52),
            ("2024-06-04", 416.07),
            ("2024-06-05", 424.01),
            ("2024-06-06", 424.52),
            ("2024-06-07", 423.85),
        ])),
        "EMPTY" | "SLOW" => Some(vec![]),
        _ => None,
    }
}

fn build(rows: &[(&str, f64)]) -> Vec<RawObservation> {
    rows.iter()
        .map(|&(date, close)| RawObservation::daily(date, close))
        .collect()
}
