// File: crates/report-core/src/error.rs
// Summary: Error type shared by loading, aggregation, rendering and report writing.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum ReportError {
    /// A series (or the whole dataset) that must hold records has none.
    #[error("empty dataset: {0}")]
    EmptyDataset(String),

    /// A requested table column is not an attribute of the records.
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    /// A chart point cannot be placed on the requested axes.
    #[error("invalid point ({x}, {y}) in series '{series}': {reason}")]
    InvalidPoint {
        series: String,
        x: f64,
        y: f64,
        reason: &'static str,
    },

    /// `render_chart` was called without any series.
    #[error("chart '{0}' has no series to plot")]
    NoSeries(String),

    /// A pivot cell required by the label x size cross-product is absent.
    #[error("no data for series '{label}' at size {size}")]
    MissingCell { label: String, size: u64 },

    /// A delimited input field could not be parsed.
    #[error("parse error at row {row}, column '{column}': {value:?}")]
    Parse {
        row: usize,
        column: String,
        value: String,
    },

    /// Skia could not produce a surface, document or encoded image.
    #[error("render failed: {0}")]
    Render(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
}

impl ReportError {
    pub fn empty(what: impl Into<String>) -> Self {
        Self::EmptyDataset(what.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}
