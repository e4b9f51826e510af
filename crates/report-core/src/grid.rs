// File: crates/report-core/src/grid.rs
// Summary: Tick layout helpers for linear and decade (log10) axes.

/// Step of the form {1, 2, 5} x 10^k giving roughly `target` intervals over `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span.abs().max(1e-12) / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Multiples of a nice step that fall inside [min, max].
pub fn linear_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max <= min {
        return Vec::new();
    }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last)
        .map(|k| k as f64 * step)
        // snap away accumulated float noise like 0.30000000000000004
        .map(|v| if v.abs() < step * 1e-9 { 0.0 } else { v })
        .collect()
}

/// Decades (majors) and 2..9 x decade (minors) inside [min, max]; both bounds must be > 0.
pub fn log_ticks(min: f64, max: f64) -> (Vec<f64>, Vec<f64>) {
    let mut majors = Vec::new();
    let mut minors = Vec::new();
    if !(min > 0.0 && max > min && max.is_finite()) {
        return (majors, minors);
    }
    let lo = min.log10().floor() as i32;
    let hi = max.log10().ceil() as i32;
    for e in lo..=hi {
        let decade = 10f64.powi(e);
        if decade >= min && decade <= max {
            majors.push(decade);
        }
        for m in 2..=9 {
            let v = decade * m as f64;
            if v >= min && v <= max {
                minors.push(v);
            }
        }
    }
    (majors, minors)
}
