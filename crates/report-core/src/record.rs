// File: crates/report-core/src/record.rs
// Summary: Measurement records, column schema, datasets and per-label series views.
// Notes:
// - Records are immutable input; every stage borrows them.
// - Series iterate in input order; nothing here sorts by size.

use std::fmt;

use crate::error::{ReportError, Result};

/// A single table cell value. Integral attributes stay integral so they
/// print without a fractional part.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl Value {
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Int(v) => v as f64,
            Value::Float(v) => v,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self { Value::Int(v) }
}

impl From<u64> for Value {
    /// Sizes beyond `i64::MAX` fall back to a float rather than wrapping.
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or(Value::Float(v as f64), Value::Int)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self { Value::Int(v as i64) }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self { Value::Float(v) }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Value::Int(v) => write!(f, "{v}"),
            // keep a visible decimal for whole floats ("2.0", not "2")
            Value::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Value::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Display names of the mandatory attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    /// Column holding the series label (only used when loading delimited files).
    pub label: String,
    /// Column holding the independent variable (e.g. vertex count).
    pub size: String,
    /// Column holding the measured duration in milliseconds.
    pub time: String,
}

impl Schema {
    pub fn new(label: impl Into<String>, size: impl Into<String>, time: impl Into<String>) -> Self {
        Self { label: label.into(), size: size.into(), time: time.into() }
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new("series", "size", "time_ms")
    }
}

/// One measurement observation.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub series_label: String,
    pub size: u64,
    pub time_ms: f64,
    /// Auxiliary attributes in declaration order (weight, edge count, ...).
    pub aux: Vec<(String, Value)>,
}

impl Record {
    pub fn new(series_label: impl Into<String>, size: u64, time_ms: f64) -> Self {
        Self { series_label: series_label.into(), size, time_ms, aux: Vec::new() }
    }

    /// Builder-style auxiliary attribute.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.aux.push((name.into(), value.into()));
        self
    }

    /// Resolve `column` against the schema's size/time names, then the
    /// auxiliary attributes.
    pub fn field(&self, schema: &Schema, column: &str) -> Option<Value> {
        if column == schema.size {
            return Some(Value::from(self.size));
        }
        if column == schema.time {
            return Some(Value::Float(self.time_ms));
        }
        self.aux.iter().find(|(name, _)| name == column).map(|&(_, v)| v)
    }
}

/// Records sharing one label, borrowed from a dataset in input order.
#[derive(Clone, Debug)]
pub struct Series<'a> {
    pub label: &'a str,
    pub records: Vec<&'a Record>,
}

impl<'a> Series<'a> {
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn len(&self) -> usize { self.records.len() }

    /// (size, time_ms) pairs in input order.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.records.iter().map(|r| (r.size as f64, r.time_ms)).collect()
    }
}

/// Ordered record set plus the names its columns are displayed under.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub schema: Schema,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(schema: Schema, records: Vec<Record>) -> Self {
        Self { schema, records }
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[Record] { &self.records }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Distinct labels in order of first appearance.
    pub fn labels(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for r in &self.records {
            if !out.contains(&r.series_label.as_str()) {
                out.push(&r.series_label);
            }
        }
        out
    }

    /// All records carrying `label`; may be empty.
    pub fn series<'a>(&'a self, label: &'a str) -> Series<'a> {
        let records = self.records.iter().filter(|r| r.series_label == label).collect();
        Series { label, records }
    }

    /// Like [`Dataset::series`] but a series without records is an error.
    pub fn require_series<'a>(&'a self, label: &'a str) -> Result<Series<'a>> {
        let s = self.series(label);
        if s.is_empty() {
            return Err(ReportError::empty(format!("series '{label}' has no records")));
        }
        Ok(s)
    }
}
