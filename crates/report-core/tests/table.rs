// File: crates/report-core/tests/table.rs
// Purpose: Column projection, row order and failure modes of the table renderer.

use report_core::{render_table, Dataset, Record, ReportError, Schema, Value};

fn schema() -> Schema {
    Schema::new("Type", "V", "Time (ms)")
}

#[test]
fn single_record_two_columns() {
    let records = vec![Record::new("Tree", 1000, 0.977229).with("Weight", 27)];
    let page = render_table(&schema(), &records, &["V", "Time (ms)"], "Tree").expect("table");
    let table = page.as_table().expect("table page");
    assert_eq!(table.columns, vec!["V", "Time (ms)"]);
    assert_eq!(table.rows, vec![vec![Some(Value::Int(1000)), Some(Value::Float(0.977229))]]);
}

#[test]
fn rows_follow_input_order_and_column_order() {
    let records = vec![
        Record::new("Tree", 10_000, 0.576937).with("Weight", 27).with("Edges", 4),
        Record::new("Tree", 1_000, 0.977229).with("Weight", 27).with("Edges", 5),
    ];
    let page = render_table(&schema(), &records, &["Edges", "V"], "t").expect("table");
    let table = page.as_table().expect("table page");
    assert_eq!(table.rows[0], vec![Some(Value::Int(4)), Some(Value::Int(10_000))]);
    assert_eq!(table.rows[1], vec![Some(Value::Int(5)), Some(Value::Int(1_000))]);
}

#[test]
fn unknown_column_is_rejected() {
    let records = vec![Record::new("Tree", 1000, 1.0)];
    let err = render_table(&schema(), &records, &["V", "Colour"], "t").expect_err("unknown column");
    assert!(matches!(err, ReportError::UnknownColumn(ref c) if c == "Colour"));
}

#[test]
fn empty_series_is_rejected() {
    let ds = Dataset::new(schema(), vec![Record::new("Tree", 1000, 1.0)]);
    let euler = ds.series("Euler");
    assert!(euler.is_empty());
    let err = render_table(&ds.schema, euler.records.iter().copied(), &["V"], "Euler").expect_err("empty");
    assert!(matches!(err, ReportError::EmptyDataset(_)));
    assert!(ds.require_series("Euler").is_err());
}

#[test]
fn text_form_aligns_float_column() {
    let records = vec![
        Record::new("Euler", 1_000, 2.8266).with("Paths", 5),
        Record::new("Euler", 100_000, 133.585).with("Paths", 6),
    ];
    let s = Schema::new("Type", "Vertices", "Time_ms");
    let page = render_table(&s, &records, &["Vertices", "Time_ms", "Paths"], "Euler").expect("table");
    let text = page.as_table().expect("table").to_text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Vertices   Time_ms  Paths");
    assert_eq!(lines[1], "    1000    2.8266      5");
    assert_eq!(lines[2], "  100000  133.5850      6");
}
