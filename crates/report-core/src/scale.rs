// File: crates/report-core/src/scale.rs
// Summary: Data-to-pixel transforms for linear and log10 axes.

/// Maps a data interval onto a pixel interval. Works for either axis:
/// for Y pass the bottom pixel as `start_px` so values grow upwards.
#[derive(Clone, Copy, Debug)]
pub struct AxisScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: f64,
    pub vmax: f64,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl AxisScale {
    pub fn new_linear(start_px: f32, end_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { start_px, end_px, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn new_log10(start_px: f32, end_px: f32, mut vmin: f64, mut vmax: f64) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-12;
        vmin = if vmin <= eps { eps } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        let log_min = vmin.log10();
        let log_max = vmax.log10();
        Self { start_px, end_px, vmin, vmax, log: true, log_min, log_max }
    }

    #[inline]
    fn fraction(&self, v: f64) -> f64 {
        if self.log {
            let span = (self.log_max - self.log_min).max(1e-12);
            (v.max(1e-12).log10() - self.log_min) / span
        } else {
            let span = (self.vmax - self.vmin).max(1e-12);
            (v - self.vmin) / span
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.start_px + self.fraction(v) as f32 * (self.end_px - self.start_px)
    }

    /// Whether `v` lies inside the visible data range (inclusive).
    pub fn contains(&self, v: f64) -> bool {
        let f = self.fraction(v);
        (-1e-9..=1.0 + 1e-9).contains(&f)
    }
}
