// File: crates/report-core/src/aggregate.rs
// Summary: Mean execution time per (series label, size) group.

use std::collections::BTreeMap;

use crate::record::Record;

/// Mean time of all records sharing one (label, size) pair.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregatedPoint {
    pub series_label: String,
    pub size: u64,
    pub mean_time_ms: f64,
    /// Number of records averaged into this point.
    pub count: usize,
}

/// Group by exact (label, size) and average `time_ms`.
/// Output is sorted by (label, size); an empty input gives an empty output.
pub fn aggregate<'a, I>(records: I) -> Vec<AggregatedPoint>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut groups: BTreeMap<(&'a str, u64), (f64, usize)> = BTreeMap::new();
    for r in records {
        let acc = groups.entry((r.series_label.as_str(), r.size)).or_insert((0.0, 0));
        acc.0 += r.time_ms;
        acc.1 += 1;
    }
    groups
        .into_iter()
        .map(|((label, size), (sum, count))| AggregatedPoint {
            series_label: label.to_string(),
            size,
            mean_time_ms: sum / count as f64,
            count,
        })
        .collect()
}

/// (size, mean) pairs of one label, ascending by size.
pub fn points_for(points: &[AggregatedPoint], label: &str) -> Vec<(f64, f64)> {
    points
        .iter()
        .filter(|p| p.series_label == label)
        .map(|p| (p.size as f64, p.mean_time_ms))
        .collect()
}
