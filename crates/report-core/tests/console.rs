// File: crates/report-core/tests/console.rs
// Purpose: Pivoted mean summary and console section output.

use report_core::{aggregate, ConsoleReport, Pivot, Record, ReportError};

fn records() -> Vec<Record> {
    vec![
        Record::new("Euler", 1_000, 2.8266),
        Record::new("Euler", 10_000, 14.2222),
        Record::new("Euler", 10_000, 2.0314),
        Record::new("Layered", 1_000, 0.6661),
        Record::new("Layered", 1_000, 2.5718),
        Record::new("Layered", 10_000, 0.3668),
        Record::new("Layered", 10_000, 6.4089),
    ]
}

#[test]
fn pivot_cell_is_group_mean() {
    let pivot = Pivot::from_points(&aggregate(&records()));
    assert_eq!(pivot.sizes, vec![1_000, 10_000]);
    assert_eq!(pivot.labels, vec!["Euler", "Layered"]);
    let cell = pivot.get(10_000, "Euler").expect("cell");
    assert!((cell - (14.2222 + 2.0314) / 2.0).abs() < 1e-12);
    assert!((cell - 8.1268).abs() < 1e-9);
    assert!(pivot.missing().is_empty());
    assert!(pivot.require_complete().is_ok());
}

#[test]
fn missing_cells_are_reported_not_invented() {
    let mut rs = records();
    rs.push(Record::new("Euler", 500_000, 148.8526));
    let pivot = Pivot::from_points(&aggregate(&rs));
    assert_eq!(pivot.get(500_000, "Layered"), None);
    assert_eq!(pivot.missing(), vec![("Layered".to_string(), 500_000)]);
    let err = pivot.require_complete().expect_err("incomplete");
    assert!(matches!(err, ReportError::MissingCell { ref label, size: 500_000 } if label == "Layered"));

    let text = pivot.to_text("Vertices", "Type");
    let row = text.lines().find(|l| l.starts_with("500000")).expect("row");
    assert!(row.trim_end().ends_with("n/a"), "{row}");
}

#[test]
fn pivot_text_layout() {
    let pivot = Pivot::from_points(&aggregate(&records()));
    let text = pivot.to_text("Vertices", "Type");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Type"));
    assert!(lines[0].contains("Euler") && lines[0].contains("Layered"));
    assert_eq!(lines[1], "Vertices");
    assert!(lines[2].starts_with("1000 "));
    assert!(lines[3].starts_with("10000 ") && lines[3].contains("8.1268"));
}

#[test]
fn console_sections() {
    let mut console = ConsoleReport::new(Vec::new());
    console.heading("MEANS").expect("heading");
    console.pivot(&Pivot::from_points(&aggregate(&records())), "Vertices", "Type").expect("pivot");
    console.line("done").expect("line");
    let text = String::from_utf8(console.into_inner()).expect("utf8");
    assert!(text.starts_with("\n=== MEANS ===\n"));
    assert!(text.ends_with("done\n"));
}
