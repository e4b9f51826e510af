// File: crates/report-core/src/console.rs
// Summary: Plain-text reporting: section headings, record tables and the size x label mean pivot.

use std::io::Write;

use tracing::warn;

use crate::aggregate::AggregatedPoint;
use crate::error::{ReportError, Result};
use crate::record::Value;
use crate::table::{column_precision, format_cell, TablePage};

/// Mean time per size (rows, ascending) and label (columns, ascending).
#[derive(Clone, Debug, PartialEq)]
pub struct Pivot {
    pub sizes: Vec<u64>,
    pub labels: Vec<String>,
    /// `cells[row][col]`, `None` where no record had that (label, size).
    pub cells: Vec<Vec<Option<f64>>>,
}

impl Pivot {
    pub fn from_points(points: &[AggregatedPoint]) -> Self {
        let mut sizes: Vec<u64> = points.iter().map(|p| p.size).collect();
        sizes.sort_unstable();
        sizes.dedup();
        let mut labels: Vec<String> = points.iter().map(|p| p.series_label.clone()).collect();
        labels.sort();
        labels.dedup();

        let mut cells = vec![vec![None; labels.len()]; sizes.len()];
        for p in points {
            // both searches succeed: the axes were built from these points
            if let (Ok(r), Ok(c)) = (sizes.binary_search(&p.size), labels.binary_search(&p.series_label)) {
                cells[r][c] = Some(p.mean_time_ms);
            }
        }
        Self { sizes, labels, cells }
    }

    pub fn get(&self, size: u64, label: &str) -> Option<f64> {
        let r = self.sizes.binary_search(&size).ok()?;
        let c = self.labels.iter().position(|l| l == label)?;
        self.cells[r][c]
    }

    /// Every (label, size) pair of the cross-product without data.
    pub fn missing(&self) -> Vec<(String, u64)> {
        let mut out = Vec::new();
        for (r, &size) in self.sizes.iter().enumerate() {
            for (c, label) in self.labels.iter().enumerate() {
                if self.cells[r][c].is_none() {
                    out.push((label.clone(), size));
                }
            }
        }
        out
    }

    /// Fails on the first missing cell.
    pub fn require_complete(&self) -> Result<()> {
        match self.missing().into_iter().next() {
            Some((label, size)) => Err(ReportError::MissingCell { label, size }),
            None => Ok(()),
        }
    }

    /// Dataframe-style layout: column-name line, row-name line, then one
    /// line per size. Missing cells print as `n/a`.
    pub fn to_text(&self, row_name: &str, col_name: &str) -> String {
        let columns: Vec<Vec<String>> = (0..self.labels.len())
            .map(|c| {
                let values = self.cells.iter().map(|row| row[c].map(Value::Float));
                let precision = column_precision(values.clone());
                values.map(|v| format_cell(v, precision)).collect()
            })
            .collect();
        let size_text: Vec<String> = self.sizes.iter().map(u64::to_string).collect();

        let first_w = size_text
            .iter()
            .map(String::len)
            .chain([row_name.chars().count(), col_name.chars().count()])
            .max()
            .unwrap_or(0);
        let widths: Vec<usize> = columns
            .iter()
            .zip(&self.labels)
            .map(|(cells, label)| cells.iter().map(String::len).chain([label.chars().count()]).max().unwrap_or(0))
            .collect();

        let mut out = String::new();
        out.push_str(&format!("{col_name:<first_w$}"));
        for (label, &w) in self.labels.iter().zip(&widths) {
            out.push_str(&format!("  {label:>w$}"));
        }
        out.push('\n');
        out.push_str(row_name);
        out.push('\n');
        for (r, size) in size_text.iter().enumerate() {
            out.push_str(&format!("{size:<first_w$}"));
            for (c, &w) in widths.iter().enumerate() {
                out.push_str(&format!("  {:>w$}", columns[c][r]));
            }
            out.push('\n');
        }
        out
    }
}

/// Writes the text half of the summary pipeline to any writer.
pub struct ConsoleReport<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self { Self { out } }

    pub fn heading(&mut self, text: &str) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "=== {text} ===")?;
        Ok(())
    }

    pub fn table(&mut self, table: &TablePage) -> Result<()> {
        self.out.write_all(table.to_text().as_bytes())?;
        Ok(())
    }

    /// Print the pivot; gaps are shown as `n/a` and logged.
    pub fn pivot(&mut self, pivot: &Pivot, row_name: &str, col_name: &str) -> Result<()> {
        for (label, size) in pivot.missing() {
            warn!(%label, size, "no measurements for pivot cell");
        }
        self.out.write_all(pivot.to_text(row_name, col_name).as_bytes())?;
        Ok(())
    }

    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    pub fn into_inner(self) -> W { self.out }
}
