// File: crates/report-core/src/source.rs
// Summary: Data-loading collaborator: embedded datasets or delimited files read with `csv`.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ReportError, Result};
use crate::record::{Dataset, Record, Schema, Value};

/// Where a pipeline gets its records from.
pub enum DataSource {
    /// Records built by the caller (the binaries' built-in measurements).
    Embedded(Dataset),
    /// A header-first CSV file whose label/size/time columns follow `schema`.
    Csv { path: PathBuf, schema: Schema },
}

impl DataSource {
    pub fn load(self) -> Result<Dataset> {
        match self {
            DataSource::Embedded(ds) => Ok(ds),
            DataSource::Csv { path, schema } => load_csv_path(&path, schema),
        }
    }
}

pub fn load_csv_path(path: &Path, schema: Schema) -> Result<Dataset> {
    let file = std::fs::File::open(path)?;
    let ds = load_csv(file, schema)?;
    debug!(path = %path.display(), records = ds.len(), "loaded csv dataset");
    Ok(ds)
}

/// Read records from CSV. The label, size and time columns are required;
/// every other column becomes an auxiliary attribute, absent where blank.
pub fn load_csv<R: Read>(reader: R, schema: Schema) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    let idx = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ReportError::UnknownColumn(name.to_string()))
    };
    let i_label = idx(&schema.label)?;
    let i_size = idx(&schema.size)?;
    let i_time = idx(&schema.time)?;

    let mut ds = Dataset::new(schema, Vec::new());
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        // row numbers as shown in a spreadsheet: header is row 1
        let row = row + 2;
        let cell = |i: usize| rec.get(i).unwrap_or("");
        let bad = |i: usize| ReportError::Parse {
            row,
            column: headers[i].clone(),
            value: cell(i).to_string(),
        };

        // sizes must also fit a signed table cell
        let size = cell(i_size)
            .parse::<u64>()
            .ok()
            .filter(|&v| v > 0 && i64::try_from(v).is_ok())
            .ok_or_else(|| bad(i_size))?;
        let time_ms = cell(i_time)
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .ok_or_else(|| bad(i_time))?;

        let mut record = Record::new(cell(i_label), size, time_ms);
        for (i, name) in headers.iter().enumerate() {
            if i == i_label || i == i_size || i == i_time {
                continue;
            }
            let raw = cell(i);
            if raw.is_empty() {
                continue;
            }
            let value = if let Ok(v) = raw.parse::<i64>() {
                Value::Int(v)
            } else if let Ok(v) = raw.parse::<f64>() {
                Value::Float(v)
            } else {
                return Err(bad(i));
            };
            record = record.with(name.clone(), value);
        }
        ds.push(record);
    }
    Ok(ds)
}
