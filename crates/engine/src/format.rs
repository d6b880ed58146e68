use crate::aggregate::AggregateTable;
use serde::Serialize;
use std::fmt;

/// Round `value` up to one decimal place.
///
/// `13.04` becomes `13.1`, `13.0` stays `13.0`. A scaled value within `1e-9` of a whole
/// tenth is taken as that tenth, so summation noise never bumps an exact mean.
/// Negative zero is normalized.
#[must_use]
pub fn round_mean_up(value: f64) -> f64 {
    let scaled = value * 10.0;
    let nearest = scaled.round();
    let tenths = if (scaled - nearest).abs() < 1e-9 {
        nearest
    } else {
        scaled.ceil()
    };
    tenths / 10.0 + 0.0
}

/// Render the table as `{k1=min/mean/max, k2=...}` with keys in byte order.
#[must_use]
pub fn format_summary(table: &AggregateTable) -> String {
    Summary(table).to_string()
}

struct Summary<'a>(&'a AggregateTable);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, agg)) in self.0.sorted().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(
                f,
                "{key}={:.1}/{:.1}/{:.1}",
                agg.min(),
                round_mean_up(agg.mean()),
                agg.max()
            )?;
        }
        f.write_str("}")
    }
}

#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    key: &'a str,
    min: f64,
    mean: f64,
    max: f64,
    count: u64,
}

/// Render the table as a JSON array of per-key rows, sorted like [`format_summary`].
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_json(table: &AggregateTable) -> serde_json::Result<String> {
    let rows: Vec<SummaryRow<'_>> = table
        .sorted()
        .into_iter()
        .map(|(key, agg)| SummaryRow {
            key,
            min: agg.min(),
            mean: round_mean_up(agg.mean()),
            max: agg.max(),
            count: agg.count(),
        })
        .collect();
    serde_json::to_string_pretty(&rows)
}
