// File: crates/report-summary/src/data.rs
// Summary: Built-in edge-disjoint path measurements (Euler and layered graphs, repeated runs).

use report_core::{Dataset, Record, Schema};

pub const EULER: &str = "Euler";
pub const LAYERED: &str = "Layered";

/// Columns of the per-type console tables.
pub const TABLE_COLUMNS: [&str; 3] = ["Vertices", "Time_ms", "Paths"];

pub fn schema() -> Schema {
    Schema::new("Type", "Vertices", "Time_ms")
}

fn run(label: &str, vertices: u64, time_ms: f64, paths: i64) -> Record {
    Record::new(label, vertices, time_ms).with("Paths", paths)
}

pub fn builtin() -> Dataset {
    Dataset::new(
        schema(),
        vec![
            run(EULER, 1_000, 2.8266, 5),
            run(EULER, 10_000, 14.2222, 4),
            run(EULER, 10_000, 2.0314, 2),
            run(EULER, 100_000, 133.5850, 6),
            run(EULER, 100_000, 63.6544, 3),
            run(EULER, 500_000, 148.8526, 3),
            run(EULER, 500_000, 34.9336, 1),
            run(LAYERED, 1_000, 0.6661, 1),
            run(LAYERED, 1_000, 2.5718, 1),
            run(LAYERED, 10_000, 0.3668, 1),
            run(LAYERED, 10_000, 6.4089, 1),
            run(LAYERED, 100_000, 51.2026, 3),
            run(LAYERED, 100_000, 41.5861, 3),
            run(LAYERED, 500_000, 281.7062, 4),
            run(LAYERED, 500_000, 136.7737, 4),
        ],
    )
}
