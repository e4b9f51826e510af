// File: crates/report-core/src/text.rs
// Summary: Text shaping/drawing via Skia textlayout: titles, cell text, tick and axis labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

/// Paragraph width used when the caller does not constrain layout.
const UNBOUNDED: f32 = 10_000.0;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    /// Lay out `text` (may contain newlines) within `width`.
    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool, align: TextAlign, width: f32) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(align);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(width);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, bold: bool) -> f32 {
        let p = self.layout(text, size, skia::Color::TRANSPARENT, bold, TextAlign::Left, UNBOUNDED);
        // width of the longest line
        p.longest_line()
    }

    /// Height of the laid-out block (all lines).
    pub fn measure_height(&self, text: &str, size: f32, bold: bool) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT, bold, TextAlign::Left, UNBOUNDED).height()
    }

    /// Top-left anchored text.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, top: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color, false, TextAlign::Left, UNBOUNDED);
        p.paint(canvas, (x, top));
    }

    /// Right edge at `right`, vertically centered on `cy`.
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, right: f32, cy: f32, size: f32, color: skia::Color) {
        let w = self.measure_width(text, size, false);
        let mut p = self.layout(text, size, color, false, TextAlign::Left, UNBOUNDED);
        let h = p.height();
        p.paint(canvas, (right - w, cy - h * 0.5));
    }

    /// Each line centered on `cx`, block top at `top`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, top: f32, size: f32, color: skia::Color, bold: bool) {
        let w = self.measure_width(text, size, bold).ceil() + 2.0;
        let mut p = self.layout(text, size, color, bold, TextAlign::Center, w);
        p.paint(canvas, (cx - w * 0.5, top));
    }

    /// Centered on (cx, cy) in both directions.
    pub fn draw_middle(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, size: f32, color: skia::Color, bold: bool) {
        let h = self.measure_height(text, size, bold);
        self.draw_centered(canvas, text, cx, cy - h * 0.5, size, color, bold);
    }

    /// Text reading bottom-to-top, centered on (cx, cy); used for Y axis titles.
    pub fn draw_rotated(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, size: f32, color: skia::Color) {
        canvas.save();
        canvas.translate((cx, cy));
        canvas.rotate(-90.0, None);
        self.draw_middle(canvas, text, 0.0, 0.0, size, color, false);
        canvas.restore();
    }
}
