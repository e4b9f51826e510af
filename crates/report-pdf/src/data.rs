// File: crates/report-pdf/src/data.rs
// Summary: Built-in path-search measurements (tree and Euler graphs, one run per size).

use report_core::{Dataset, Record, Schema};

pub const TREE: &str = "Tree";
pub const EULER: &str = "Euler";

/// Columns shown on the table pages, left to right.
pub const TABLE_COLUMNS: [&str; 4] = ["V", "Time (ms)", "Weight", "Edges"];

pub fn schema() -> Schema {
    Schema::new("Type", "V", "Time (ms)")
}

fn run(label: &str, v: u64, time_ms: f64, weight: i64, edges: i64) -> Record {
    Record::new(label, v, time_ms).with("Weight", weight).with("Edges", edges)
}

pub fn builtin() -> Dataset {
    Dataset::new(
        schema(),
        vec![
            run(TREE, 1_000, 0.977229, 27, 5),
            run(TREE, 10_000, 0.576937, 27, 4),
            run(TREE, 100_000, 11.357670, 25, 5),
            run(TREE, 500_000, 14.956662, 36, 7),
            run(EULER, 1_000, 3.360708, 15, 6),
            run(EULER, 10_000, 4.279502, 27, 9),
            run(EULER, 100_000, 45.528802, 31, 8),
            run(EULER, 500_000, 284.472843, 50, 16),
        ],
    )
}
