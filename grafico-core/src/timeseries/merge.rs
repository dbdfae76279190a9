use std::collections::BTreeMap;

use crate::types::{MergedRow, Observation, Ticker, close_column};

/// Join independently keyed per-symbol series into one ordered table.
///
/// - Rows are keyed by the observation's timestamp string; one row per
///   distinct timestamp across all inputs.
/// - A symbol's cell is present on a row iff that symbol observed exactly
///   that timestamp string. No interpolation, no nearest-neighbor fill.
/// - Rows come back in ascending lexical order of `time`, which equals
///   chronological order for both ISO-8601 datetimes and ISO dates.
/// - Symbol fold order does not matter: cells land in per-symbol columns,
///   so the result is the same for any permutation of `series`.
/// - Empty input (or all-empty series) yields an empty table; surfacing a
///   "no data" condition is the caller's concern.
/// - Duplicate timestamps within one symbol's series: the last occurrence
///   wins.
#[must_use]
pub fn merge_series(series: &[(Ticker, Vec<Observation>)]) -> Vec<MergedRow> {
    let mut rows: BTreeMap<String, MergedRow> = BTreeMap::new();

    for (ticker, observations) in series {
        let column = close_column(ticker);
        for obs in observations {
            let row = rows.entry(obs.time.clone()).or_insert_with(|| MergedRow {
                time: obs.time.clone(),
                cells: BTreeMap::new(),
            });
            row.cells.insert(column.clone(), obs.close);
        }
    }

    rows.into_values().collect()
}

// Inline tests omitted; covered by integration/property tests in `grafico-core/tests/`.
