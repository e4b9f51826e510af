// File: crates/report-core/src/axis.rs
// Summary: Axis model with labels, ranges, scale kind and tick labelling.

use crate::grid::{linear_ticks, log_ticks};
use crate::scale::AxisScale;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

/// How linear tick values are printed. Log axes always print decades.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Whole numbers with thousands separators: `100,000`.
    Thousands,
    /// Two fixed decimals: `12.50`.
    Fixed2,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    pub format: TickFormat,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear, format: TickFormat::Fixed2 }
    }

    pub fn with_kind(mut self, kind: ScaleKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    /// Map this axis onto a pixel interval; `start_px` receives `min`.
    pub fn scale(&self, start_px: f32, end_px: f32) -> AxisScale {
        match self.kind {
            ScaleKind::Linear => AxisScale::new_linear(start_px, end_px, self.min, self.max),
            ScaleKind::Log10 => AxisScale::new_log10(start_px, end_px, self.min, self.max),
        }
    }

    pub fn major_ticks(&self) -> Vec<f64> {
        match self.kind {
            ScaleKind::Linear => linear_ticks(self.min, self.max, 6),
            ScaleKind::Log10 => log_ticks(self.min, self.max).0,
        }
    }

    /// Unlabelled ticks between majors (log axes only).
    pub fn minor_ticks(&self) -> Vec<f64> {
        match self.kind {
            ScaleKind::Linear => Vec::new(),
            ScaleKind::Log10 => log_ticks(self.min, self.max).1,
        }
    }

    pub fn tick_label(&self, v: f64) -> String {
        match (self.kind, self.format) {
            (ScaleKind::Log10, _) => format_decade(v),
            (ScaleKind::Linear, TickFormat::Thousands) => format_thousands(v),
            (ScaleKind::Linear, TickFormat::Fixed2) => format!("{v:.2}"),
        }
    }
}

/// `1234567.8` -> `1,234,568`.
pub fn format_thousands(v: f64) -> String {
    let n = v.round() as i64;
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `1000.0` -> `10^3`.
pub fn format_decade(v: f64) -> String {
    format!("10^{}", v.log10().round() as i32)
}
