// File: crates/report-core/src/view.rs
// Data extent of a set of series and the padded axis ranges derived from it.

use crate::axis::ScaleKind;
use crate::series::PlotSeries;

/// Fraction of the data span added on each side of an axis.
const MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Bounding box of every point; `None` when there are no points.
    pub fn from_series(series: &[PlotSeries]) -> Option<Self> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in series {
            for &(x, y) in &s.points {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return None;
        }
        Some(Self { x_min, x_max, y_min, y_max })
    }

    /// Widen both ranges by the margin, in log space for log axes.
    pub fn padded(&self, x_kind: ScaleKind, y_kind: ScaleKind) -> Self {
        let (x_min, x_max) = pad(self.x_min, self.x_max, x_kind);
        let (y_min, y_max) = pad(self.y_min, self.y_max, y_kind);
        Self { x_min, x_max, y_min, y_max }
    }
}

fn pad(min: f64, max: f64, kind: ScaleKind) -> (f64, f64) {
    match kind {
        ScaleKind::Linear => {
            let (min, max) = if (max - min).abs() < 1e-9 { (min - 0.5, max + 0.5) } else { (min, max) };
            let m = (max - min) * MARGIN;
            (min - m, max + m)
        }
        ScaleKind::Log10 => {
            let (lo, hi) = (min.log10(), max.log10());
            let (lo, hi) = if (hi - lo).abs() < 1e-9 { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
            let m = (hi - lo) * MARGIN;
            (10f64.powf(lo - m), 10f64.powf(hi + m))
        }
    }
}
