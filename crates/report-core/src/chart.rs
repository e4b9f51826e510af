// File: crates/report-core/src/chart.rs
// Summary: Line chart pages: validation, axis fitting and Skia drawing of grid, axes, series and legend.

use skia_safe as skia;

use crate::axis::{Axis, ScaleKind, TickFormat};
use crate::error::{ReportError, Result};
use crate::page::{Page, RenderOptions};
use crate::scale::AxisScale;
use crate::series::{Marker, PlotSeries};
use crate::text::TextShaper;
use crate::types::CHART_PAGE;
use crate::view::ViewState;

/// Which axes are log10-scaled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScaleMode {
    #[default]
    Linear,
    /// Log x, linear y.
    LogX,
    /// Both axes log.
    LogLog,
}

impl ScaleMode {
    pub fn kinds(self) -> (ScaleKind, ScaleKind) {
        match self {
            ScaleMode::Linear => (ScaleKind::Linear, ScaleKind::Linear),
            ScaleMode::LogX => (ScaleKind::Log10, ScaleKind::Linear),
            ScaleMode::LogLog => (ScaleKind::Log10, ScaleKind::Log10),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GridStyle {
    #[default]
    Dashed,
    /// Light continuous lines.
    Solid,
}

#[derive(Clone, Debug)]
pub struct ChartOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub scale: ScaleMode,
    pub grid: GridStyle,
}

impl ChartOptions {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            scale: ScaleMode::Linear,
            grid: GridStyle::Dashed,
        }
    }

    pub fn with_scale(mut self, scale: ScaleMode) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_grid(mut self, grid: GridStyle) -> Self {
        self.grid = grid;
        self
    }
}

/// A validated chart: only non-empty series, each sorted by x.
#[derive(Clone, Debug)]
pub struct ChartPage {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub series: Vec<PlotSeries>,
    pub legend: bool,
    pub grid: GridStyle,
}

/// Plot `series` as polylines; `log_scale` switches both axes to log10.
pub fn render_chart(series: &[PlotSeries], title: &str, axis_labels: (&str, &str), log_scale: bool) -> Result<Page> {
    let scale = if log_scale { ScaleMode::LogLog } else { ScaleMode::Linear };
    render_chart_with(series, &ChartOptions::new(title, axis_labels.0, axis_labels.1).with_scale(scale))
}

/// Validate, sort and fit axes. Empty series are skipped; a legend is
/// shown iff two or more series remain.
pub fn render_chart_with(series: &[PlotSeries], opts: &ChartOptions) -> Result<Page> {
    if series.is_empty() {
        return Err(ReportError::NoSeries(opts.title.clone()));
    }
    let (x_kind, y_kind) = opts.scale.kinds();
    for s in series {
        for &(x, y) in &s.points {
            check_point(s, x, y, x_kind, y_kind)?;
        }
    }

    let plotted: Vec<PlotSeries> = series.iter().filter(|s| !s.is_empty()).map(PlotSeries::sorted_by_x).collect();
    let view = ViewState::from_series(&plotted)
        .ok_or_else(|| ReportError::NoSeries(opts.title.clone()))?
        .padded(x_kind, y_kind);

    let x_axis = Axis::new(&opts.x_label, view.x_min, view.x_max)
        .with_kind(x_kind)
        .with_format(TickFormat::Thousands);
    let y_axis = Axis::new(&opts.y_label, view.y_min, view.y_max)
        .with_kind(y_kind)
        .with_format(TickFormat::Fixed2);

    Ok(Page::Chart(ChartPage {
        title: opts.title.clone(),
        x_axis,
        y_axis,
        legend: plotted.len() > 1,
        series: plotted,
        grid: opts.grid,
    }))
}

fn check_point(s: &PlotSeries, x: f64, y: f64, x_kind: ScaleKind, y_kind: ScaleKind) -> Result<()> {
    let invalid = |reason| ReportError::InvalidPoint { series: s.label.clone(), x, y, reason };
    if !x.is_finite() || !y.is_finite() {
        return Err(invalid("coordinates must be finite"));
    }
    if (x_kind == ScaleKind::Log10 && x <= 0.0) || (y_kind == ScaleKind::Log10 && y <= 0.0) {
        return Err(invalid("log axes need strictly positive values"));
    }
    Ok(())
}

impl ChartPage {
    pub fn size(&self) -> (f32, f32) { CHART_PAGE }

    pub fn draw(&self, canvas: &skia::Canvas, shaper: &TextShaper, opts: &RenderOptions) {
        let (w, h) = self.size();
        let l = opts.insets.left as f32;
        let t = opts.insets.top as f32;
        let r = w - opts.insets.right as f32;
        let b = h - opts.insets.bottom as f32;

        let sx = self.x_axis.scale(l, r);
        let sy = self.y_axis.scale(b, t);

        draw_grid(canvas, opts, self.grid, (l, t, r, b), &self.x_axis, &self.y_axis, &sx, &sy);
        draw_axes(canvas, shaper, opts, (l, t, r, b), &self.x_axis, &self.y_axis, &sx, &sy);

        let title_h = shaper.measure_height(&self.title, opts.title_font_size, false);
        shaper.draw_centered(canvas, &self.title, (l + r) * 0.5, (t - title_h - 8.0).max(4.0), opts.title_font_size, opts.theme.title, false);

        canvas.save();
        canvas.clip_rect(skia::Rect::from_ltrb(l, t, r, b), skia::ClipOp::Intersect, true);
        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(canvas, &sx, &sy, s, opts.theme.series_color(i));
        }
        canvas.restore();

        if self.legend {
            draw_legend(canvas, shaper, opts, (l, t), &self.series);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn draw_grid(
    canvas: &skia::Canvas,
    opts: &RenderOptions,
    style: GridStyle,
    (l, t, r, b): (f32, f32, f32, f32),
    x: &Axis,
    y: &Axis,
    sx: &AxisScale,
    sy: &AxisScale,
) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(0.6);
    match style {
        GridStyle::Dashed => {
            paint.set_color(opts.theme.grid);
            paint.set_path_effect(skia::PathEffect::dash(&[3.0, 2.0], 0.0));
        }
        GridStyle::Solid => {
            paint.set_color(opts.theme.grid.with_a(102));
        }
    }

    let xs = x.major_ticks().into_iter().chain(x.minor_ticks());
    for v in xs.filter(|&v| sx.contains(v)) {
        let px = sx.to_px(v);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    let ys = y.major_ticks().into_iter().chain(y.minor_ticks());
    for v in ys.filter(|&v| sy.contains(v)) {
        let py = sy.to_px(v);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_axes(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    opts: &RenderOptions,
    (l, t, r, b): (f32, f32, f32, f32),
    x: &Axis,
    y: &Axis,
    sx: &AxisScale,
    sy: &AxisScale,
) {
    let theme = &opts.theme;
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(0.8);

    // Frame around the plot area
    canvas.draw_rect(skia::Rect::from_ltrb(l, t, r, b), &axis_paint);

    let font = opts.tick_font_size;
    let major = 3.5;
    let minor = 2.0;

    for v in x.major_ticks().into_iter().filter(|&v| sx.contains(v)) {
        let px = sx.to_px(v);
        canvas.draw_line((px, b), (px, b + major), &axis_paint);
        shaper.draw_centered(canvas, &x.tick_label(v), px, b + major + 2.0, font, theme.tick, false);
    }
    for v in x.minor_ticks().into_iter().filter(|&v| sx.contains(v)) {
        let px = sx.to_px(v);
        canvas.draw_line((px, b), (px, b + minor), &axis_paint);
    }
    for v in y.major_ticks().into_iter().filter(|&v| sy.contains(v)) {
        let py = sy.to_px(v);
        canvas.draw_line((l - major, py), (l, py), &axis_paint);
        shaper.draw_right(canvas, &y.tick_label(v), l - major - 3.0, py, font, theme.tick);
    }
    for v in y.minor_ticks().into_iter().filter(|&v| sy.contains(v)) {
        let py = sy.to_px(v);
        canvas.draw_line((l - minor, py), (l, py), &axis_paint);
    }

    // Axis titles
    let label = opts.label_font_size;
    shaper.draw_centered(canvas, &x.label, (l + r) * 0.5, b + major + font + 10.0, label, theme.axis_label, false);
    shaper.draw_rotated(canvas, &y.label, label, (t + b) * 0.5, label, theme.axis_label);
}

fn draw_line_series(canvas: &skia::Canvas, sx: &AxisScale, sy: &AxisScale, series: &PlotSeries, color: skia::Color) {
    let data = &series.points;
    let Some(&(x0, y0)) = data.first() else { return };

    let mut path = skia::Path::new();
    path.move_to((sx.to_px(x0), sy.to_px(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((sx.to_px(x), sy.to_px(y)));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(series.line_width);
    stroke.set_color(color);
    canvas.draw_path(&path, &stroke);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color);
    for &(x, y) in data {
        draw_marker(canvas, series.marker, sx.to_px(x), sy.to_px(y), &fill);
    }
}

fn draw_marker(canvas: &skia::Canvas, marker: Marker, cx: f32, cy: f32, paint: &skia::Paint) {
    match marker {
        Marker::Circle => {
            canvas.draw_circle((cx, cy), 3.5, paint);
        }
        Marker::Square => {
            canvas.draw_rect(skia::Rect::from_xywh(cx - 3.5, cy - 3.5, 7.0, 7.0), paint);
        }
    }
}

/// Boxed legend in the upper-left corner of the plot area.
fn draw_legend(canvas: &skia::Canvas, shaper: &TextShaper, opts: &RenderOptions, (l, t): (f32, f32), series: &[PlotSeries]) {
    let theme = &opts.theme;
    let font = opts.tick_font_size;
    let row_h = font * 1.6;
    let swatch = 22.0;
    let pad = 6.0;
    let text_w = series
        .iter()
        .map(|s| shaper.measure_width(&s.label, font, false))
        .fold(0.0f32, f32::max);
    let box_w = pad * 3.0 + swatch + text_w;
    let box_h = pad * 2.0 + row_h * series.len() as f32;
    let rect = skia::Rect::from_xywh(l + 8.0, t + 8.0, box_w, box_h);

    let mut fill = skia::Paint::default();
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.legend_fill);
    canvas.draw_rect(rect, &fill);
    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(0.8);
    border.set_color(theme.legend_border);
    canvas.draw_rect(rect, &border);

    for (i, s) in series.iter().enumerate() {
        let color = theme.series_color(i);
        let cy = rect.top + pad + row_h * (i as f32 + 0.5);
        let x0 = rect.left + pad;

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(s.line_width);
        stroke.set_color(color);
        canvas.draw_line((x0, cy), (x0 + swatch, cy), &stroke);

        let mut marker = skia::Paint::default();
        marker.set_anti_alias(true);
        marker.set_color(color);
        draw_marker(canvas, s.marker, x0 + swatch * 0.5, cy, &marker);

        let text_h = shaper.measure_height(&s.label, font, false);
        shaper.draw_left(canvas, &s.label, x0 + swatch + pad, cy - text_h * 0.5, font, theme.axis_label);
    }
}
