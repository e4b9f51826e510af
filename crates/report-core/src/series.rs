// File: crates/report-core/src/series.rs
// Summary: Labelled (x, y) line series handed to the chart renderer.

/// Point marker drawn at every data point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Marker {
    #[default]
    Circle,
    Square,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotSeries {
    pub label: String,
    /// Points in caller order; the chart renderer sorts by x before connecting.
    pub points: Vec<(f64, f64)>,
    pub marker: Marker,
    pub line_width: f32,
}

impl PlotSeries {
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), points, marker: Marker::Circle, line_width: 1.5 }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width.max(0.1);
        self
    }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Copy with points ordered by ascending x (stable for equal x).
    pub fn sorted_by_x(&self) -> Self {
        let mut points = self.points.clone();
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { label: self.label.clone(), points, marker: self.marker, line_width: self.line_width }
    }
}
