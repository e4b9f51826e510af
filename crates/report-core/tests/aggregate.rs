// File: crates/report-core/tests/aggregate.rs
// Purpose: Grouping and mean properties of the aggregator.

use report_core::{aggregate, Record};

fn sample() -> Vec<Record> {
    vec![
        Record::new("Euler", 1_000, 2.8266),
        Record::new("Euler", 10_000, 14.2222),
        Record::new("Layered", 10_000, 0.3668),
        Record::new("Euler", 10_000, 2.0314),
        Record::new("Layered", 10_000, 6.4089),
        Record::new("Layered", 1_000, 0.6661),
    ]
}

#[test]
fn one_point_per_label_and_size() {
    let points = aggregate(&sample());
    let keys: Vec<(&str, u64)> = points.iter().map(|p| (p.series_label.as_str(), p.size)).collect();
    assert_eq!(keys, vec![("Euler", 1_000), ("Euler", 10_000), ("Layered", 1_000), ("Layered", 10_000)]);
}

#[test]
fn mean_times_count_recovers_group_sum() {
    let records = sample();
    for p in aggregate(&records) {
        let raw: f64 = records
            .iter()
            .filter(|r| r.series_label == p.series_label && r.size == p.size)
            .map(|r| r.time_ms)
            .sum();
        assert!((p.mean_time_ms * p.count as f64 - raw).abs() < 1e-9, "{p:?}");
    }
}

#[test]
fn euler_mean_at_ten_thousand() {
    let points = aggregate(&sample());
    let p = points.iter().find(|p| p.series_label == "Euler" && p.size == 10_000).expect("group");
    assert_eq!(p.count, 2);
    assert!((p.mean_time_ms - 8.1268).abs() < 1e-9);
}

#[test]
fn labels_are_never_merged() {
    let records = vec![Record::new("A", 5, 1.0), Record::new("B", 5, 3.0)];
    let points = aggregate(&records);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].mean_time_ms, 1.0);
    assert_eq!(points[1].mean_time_ms, 3.0);
}

#[test]
fn empty_input_gives_empty_output() {
    let records: Vec<Record> = Vec::new();
    assert!(aggregate(&records).is_empty());
}

#[test]
fn output_is_independent_of_input_order() {
    let mut records = sample();
    let a = aggregate(&records);
    records.reverse();
    let b = aggregate(&records);
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!((&x.series_label, x.size), (&y.series_label, y.size));
        assert!((x.mean_time_ms - y.mean_time_ms).abs() < 1e-12);
    }
}
