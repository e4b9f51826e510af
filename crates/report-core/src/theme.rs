// File: crates/report-core/src/theme.rs
// Summary: Report colors for chart and table pages.

use skia_safe as skia;

/// Categorical palette used for series, in series order (0xAARRGGBB).
const PALETTE: [u32; 10] = [
    0xff1f77b4,
    0xffff7f0e,
    0xff2ca02c,
    0xffd62728,
    0xff9467bd,
    0xff8c564b,
    0xffe377c2,
    0xff7f7f7f,
    0xffbcbd22,
    0xff17becf,
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
    pub header_fill: skia::Color,
    pub header_text: skia::Color,
    pub cell_fill: skia::Color,
    pub cell_text: skia::Color,
    pub cell_border: skia::Color,
    pub palette: [skia::Color; 10],
}

impl Theme {
    /// White paper theme used by both report binaries.
    pub fn report() -> Self {
        Self {
            background: skia::Color::WHITE,
            grid: skia::Color::from_argb(255, 179, 179, 179),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 30, 30, 30),
            title: skia::Color::from_argb(255, 0, 0, 0),
            legend_fill: skia::Color::from_argb(230, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
            header_fill: skia::Color::from_argb(255, 0x40, 0x46, 0x6e),
            header_text: skia::Color::WHITE,
            cell_fill: skia::Color::WHITE,
            cell_text: skia::Color::from_argb(255, 0, 0, 0),
            cell_border: skia::Color::from_argb(255, 0, 0, 0),
            palette: PALETTE.map(skia::Color::new),
        }
    }

    /// Color of the `index`-th plotted series (wraps around).
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::report() }
}
