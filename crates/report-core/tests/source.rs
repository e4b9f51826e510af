// File: crates/report-core/tests/source.rs
// Purpose: CSV loading through the data source collaborator.

use report_core::source::load_csv;
use report_core::{DataSource, Dataset, Record, ReportError, Schema, Value};

fn schema() -> Schema {
    Schema::new("Type", "Vertices", "Time_ms")
}

#[test]
fn loads_records_and_aux_columns() {
    let csv = "Type,Vertices,Time_ms,Paths\nEuler,1000,2.8266,5\nLayered, 10000 ,0.3668,1\n";
    let ds = load_csv(csv.as_bytes(), schema()).expect("load");
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.labels(), vec!["Euler", "Layered"]);
    let r = &ds.records()[1];
    assert_eq!(r.size, 10_000);
    assert_eq!(r.field(&ds.schema, "Paths"), Some(Value::Int(1)));
    assert_eq!(r.field(&ds.schema, "Time_ms"), Some(Value::Float(0.3668)));
}

#[test]
fn missing_required_column() {
    let csv = "Type,Time_ms\nEuler,2.0\n";
    let err = load_csv(csv.as_bytes(), schema()).expect_err("no size column");
    assert!(matches!(err, ReportError::UnknownColumn(ref c) if c == "Vertices"));
}

#[test]
fn bad_number_names_row_and_column() {
    let csv = "Type,Vertices,Time_ms\nEuler,1000,2.0\nEuler,1000,fast\n";
    let err = load_csv(csv.as_bytes(), schema()).expect_err("bad time");
    match err {
        ReportError::Parse { row, column, value } => {
            assert_eq!(row, 3);
            assert_eq!(column, "Time_ms");
            assert_eq!(value, "fast");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn negative_time_is_rejected() {
    let csv = "Type,Vertices,Time_ms\nEuler,1000,-1.0\n";
    assert!(matches!(load_csv(csv.as_bytes(), schema()), Err(ReportError::Parse { .. })));
}

#[test]
fn embedded_source_passes_through() {
    let ds = Dataset::new(schema(), vec![Record::new("Euler", 1000, 1.0)]);
    let loaded = DataSource::Embedded(ds).load().expect("load");
    assert_eq!(loaded.len(), 1);
}

#[test]
fn csv_file_source() {
    let path = std::path::PathBuf::from("target/test_out/source.csv");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "Type,Vertices,Time_ms\nEuler,500000,148.8526\n").unwrap();
    let ds = DataSource::Csv { path, schema: schema() }.load().expect("load file");
    assert_eq!(ds.records()[0].time_ms, 148.8526);

    let missing = DataSource::Csv { path: "target/test_out/does_not_exist.csv".into(), schema: schema() };
    assert!(matches!(missing.load(), Err(ReportError::Io(_))));
}

#[test]
fn oversized_vertex_count_is_rejected() {
    let csv = "Type,Vertices,Time_ms\nTree,18446744073709551615,1.0\n";
    match load_csv(csv.as_bytes(), schema()).expect_err("size beyond i64") {
        ReportError::Parse { row, column, .. } => {
            assert_eq!(row, 2);
            assert_eq!(column, "Vertices");
        }
        other => panic!("unexpected error: {other}"),
    }
    // built in code, the cell never shows a negative count
    assert_eq!(Value::from(u64::MAX), Value::Float(u64::MAX as f64));
    assert_eq!(Value::from(500_000u64), Value::Int(500_000));
}

#[test]
fn blank_aux_cell_leaves_attribute_absent() {
    let csv = "Type,Vertices,Time_ms,Paths\nEuler,1000,2.8266,\nEuler,10000,8.1268,3\n";
    let ds = load_csv(csv.as_bytes(), schema()).expect("load");
    assert_eq!(ds.records()[0].field(&ds.schema, "Paths"), None);
    assert_eq!(ds.records()[1].field(&ds.schema, "Paths"), Some(Value::Int(3)));

    let page = report_core::render_table(&ds.schema, ds.records(), &["Vertices", "Paths"], "Euler").expect("table");
    let text = page.as_table().expect("table page").to_text();
    assert!(text.lines().nth(1).expect("first row").ends_with("n/a"), "{text}");
}
