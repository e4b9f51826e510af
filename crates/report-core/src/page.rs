// File: crates/report-core/src/page.rs
// Summary: Opaque report page (table or chart), render options and headless PNG export.

use std::path::Path;

use skia_safe as skia;
use tracing::info;

use crate::chart::ChartPage;
use crate::error::{ReportError, Result};
use crate::table::TablePage;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, DEFAULT_DPI, POINTS_PER_INCH};

pub struct RenderOptions {
    /// Raster density for PNG export; PDF output is resolution independent.
    pub dpi: f32,
    pub insets: Insets,
    pub theme: Theme,
    pub title_font_size: f32,
    pub label_font_size: f32,
    pub tick_font_size: f32,
    pub table_font_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            insets: Insets::default(),
            theme: Theme::report(),
            title_font_size: 16.0,
            label_font_size: 11.0,
            tick_font_size: 9.0,
            table_font_size: 10.0,
        }
    }
}

/// One renderable unit of a report. Produced by `render_table` /
/// `render_chart`, consumed by the assembler and the PNG writer.
#[derive(Clone, Debug)]
pub enum Page {
    Table(TablePage),
    Chart(ChartPage),
}

impl Page {
    pub fn title(&self) -> &str {
        match self {
            Page::Table(t) => &t.title,
            Page::Chart(c) => &c.title,
        }
    }

    /// Page size in points.
    pub fn size(&self) -> (f32, f32) {
        match self {
            Page::Table(t) => t.size(),
            Page::Chart(c) => c.size(),
        }
    }

    pub fn as_table(&self) -> Option<&TablePage> {
        match self {
            Page::Table(t) => Some(t),
            Page::Chart(_) => None,
        }
    }

    pub fn as_chart(&self) -> Option<&ChartPage> {
        match self {
            Page::Chart(c) => Some(c),
            Page::Table(_) => None,
        }
    }

    /// Paint background and content in point coordinates.
    pub fn draw(&self, canvas: &skia::Canvas, shaper: &TextShaper, opts: &RenderOptions) {
        canvas.clear(opts.theme.background);
        match self {
            Page::Table(t) => t.draw(canvas, shaper, opts),
            Page::Chart(c) => c.draw(canvas, shaper, opts),
        }
    }

    /// Pixel dimensions at `opts.dpi`.
    pub fn pixel_size(&self, opts: &RenderOptions) -> (i32, i32) {
        let (w, h) = self.size();
        let k = opts.dpi / POINTS_PER_INCH;
        ((w * k).round() as i32, (h * k).round() as i32)
    }

    /// Render to PNG bytes using a CPU raster surface.
    pub fn render_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pw, ph) = self.pixel_size(opts);
        let mut surface = skia::surfaces::raster_n32_premul((pw, ph))
            .ok_or_else(|| ReportError::render("failed to create raster surface"))?;
        let canvas = surface.canvas();
        let k = opts.dpi / POINTS_PER_INCH;
        canvas.scale((k, k));
        self.draw(canvas, &TextShaper::new(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ReportError::render("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render and write a PNG file, creating parent directories.
    pub fn write_png(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.render_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        info!(path = %path.display(), title = self.title(), "wrote chart image");
        Ok(())
    }
}
