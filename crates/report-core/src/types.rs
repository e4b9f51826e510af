// File: crates/report-core/src/types.rs
// Summary: Shared types and constants (page sizes, raster density, plot insets).

/// PDF user units per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Table page size in points (11 x 4 in, landscape strip).
pub const TABLE_PAGE: (f32, f32) = (11.0 * POINTS_PER_INCH, 4.0 * POINTS_PER_INCH);
/// Chart page size in points (10 x 6 in).
pub const CHART_PAGE: (f32, f32) = (10.0 * POINTS_PER_INCH, 6.0 * POINTS_PER_INCH);

/// Default raster density; a chart page becomes 1000 x 600 px.
pub const DEFAULT_DPI: f32 = 100.0;

/// Page margins around the plot area, in points.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // room for y tick labels + rotated axis label, title above, x labels below
        Self::new(84, 24, 56, 56)
    }
}
