// File: crates/report-core/src/table.rs
// Summary: Table projection of records onto a column list, drawn as a page or printed as text.

use skia_safe as skia;

use crate::error::{ReportError, Result};
use crate::page::{Page, RenderOptions};
use crate::record::{Record, Schema, Value};
use crate::text::TextShaper;
use crate::types::TABLE_PAGE;

/// Most decimals a float column prints with in text form.
const MAX_DECIMALS: usize = 6;

/// One record per row, in input order; `None` where a record lacks a column.
#[derive(Clone, Debug, PartialEq)]
pub struct TablePage {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<Value>>>,
}

/// Project `records` onto `columns` (subset and order) as a table page.
///
/// Fails with `EmptyDataset` when there are no records, and with
/// `UnknownColumn` when a column is absent from every record.
pub fn render_table<'a, I>(schema: &Schema, records: I, columns: &[&str], title: &str) -> Result<Page>
where
    I: IntoIterator<Item = &'a Record>,
{
    let records: Vec<&Record> = records.into_iter().collect();
    if records.is_empty() {
        return Err(ReportError::empty(format!("table '{}' has no records", first_line(title))));
    }
    let rows: Vec<Vec<Option<Value>>> = records
        .iter()
        .map(|r| columns.iter().map(|c| r.field(schema, c)).collect())
        .collect();
    for (i, c) in columns.iter().enumerate() {
        if rows.iter().all(|row| row[i].is_none()) {
            return Err(ReportError::UnknownColumn(c.to_string()));
        }
    }
    Ok(Page::Table(TablePage {
        title: title.to_string(),
        columns: columns.iter().map(|c| c.to_string()).collect(),
        rows,
    }))
}

fn first_line(s: &str) -> &str {
    s.lines().next().unwrap_or("")
}

impl TablePage {
    pub fn size(&self) -> (f32, f32) { TABLE_PAGE }

    pub fn draw(&self, canvas: &skia::Canvas, shaper: &TextShaper, opts: &RenderOptions) {
        let theme = &opts.theme;
        let (w, h) = self.size();
        let font = opts.table_font_size;
        let row_h = (font * 2.2).round();
        let pad = font * 1.5;

        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|v| v.map(|v| v.to_string()).unwrap_or_default()).collect())
            .collect();

        // Equal-width columns, wide enough for the widest cell.
        let mut col_w = 84.0f32;
        for (i, name) in self.columns.iter().enumerate() {
            col_w = col_w.max(shaper.measure_width(name, font, true) + pad * 2.0);
            for row in &cells {
                col_w = col_w.max(shaper.measure_width(&row[i], font, false) + pad * 2.0);
            }
        }
        let table_w = col_w * self.columns.len() as f32;
        let table_h = row_h * (cells.len() + 1) as f32;
        let title_h = shaper.measure_height(&self.title, opts.title_font_size, false);
        let gap = 18.0;

        let left = (w - table_w) * 0.5;
        let top = ((h - title_h - gap - table_h) * 0.5).max(8.0);
        shaper.draw_centered(canvas, &self.title, w * 0.5, top, opts.title_font_size, theme.title, false);

        let table_top = top + title_h + gap;
        let mut fill = skia::Paint::default();
        fill.set_style(skia::paint::Style::Fill);
        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(0.8);
        border.set_color(theme.cell_border);

        let header = self.columns.iter().map(String::as_str);
        let body = cells.iter().map(|r| r.iter().map(String::as_str).collect::<Vec<_>>());
        let rows = std::iter::once(header.collect::<Vec<_>>()).chain(body);
        for (ri, row) in rows.enumerate() {
            let is_header = ri == 0;
            let y = table_top + row_h * ri as f32;
            for (ci, text) in row.iter().enumerate() {
                let x = left + col_w * ci as f32;
                let rect = skia::Rect::from_xywh(x, y, col_w, row_h);
                fill.set_color(if is_header { theme.header_fill } else { theme.cell_fill });
                canvas.draw_rect(rect, &fill);
                canvas.draw_rect(rect, &border);
                let color = if is_header { theme.header_text } else { theme.cell_text };
                shaper.draw_middle(canvas, text, x + col_w * 0.5, y + row_h * 0.5, font, color, is_header);
            }
        }
    }

    /// Right-aligned plain-text rendering without a row index. Float
    /// columns share one precision so decimal points line up.
    pub fn to_text(&self) -> String {
        let ncols = self.columns.len();
        let mut formatted: Vec<Vec<String>> = vec![Vec::with_capacity(self.rows.len()); ncols];
        for (ci, column) in formatted.iter_mut().enumerate() {
            let values = self.rows.iter().map(|r| r[ci]);
            let precision = column_precision(values.clone());
            column.extend(values.map(|v| format_cell(v, precision)));
        }

        let widths: Vec<usize> = (0..ncols)
            .map(|ci| {
                formatted[ci]
                    .iter()
                    .map(|s| s.chars().count())
                    .chain(std::iter::once(self.columns[ci].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        let header = (0..ncols).map(|ci| format!("{:>w$}", self.columns[ci], w = widths[ci]));
        out.push_str(&header.collect::<Vec<_>>().join("  "));
        out.push('\n');
        for ri in 0..self.rows.len() {
            let line = (0..ncols).map(|ci| format!("{:>w$}", formatted[ci][ri], w = widths[ci]));
            out.push_str(&line.collect::<Vec<_>>().join("  "));
            out.push('\n');
        }
        out
    }
}

/// Shared decimals for a column: `None` for all-integer columns.
pub(crate) fn column_precision<I>(values: I) -> Option<usize>
where
    I: IntoIterator<Item = Option<Value>>,
{
    let mut any_float = false;
    let mut decimals = 1;
    for v in values.into_iter().flatten() {
        if let Value::Float(f) = v {
            any_float = true;
            decimals = decimals.max(float_decimals(f));
        }
    }
    any_float.then_some(decimals.min(MAX_DECIMALS))
}

/// Digits after the decimal point in the shortest round-trip form.
fn float_decimals(v: f64) -> usize {
    if !v.is_finite() {
        return 0;
    }
    let s = v.to_string();
    s.split_once('.').map(|(_, frac)| frac.len()).unwrap_or(0)
}

pub(crate) fn format_cell(v: Option<Value>, precision: Option<usize>) -> String {
    match (v, precision) {
        (None, _) => "n/a".to_string(),
        (Some(v), Some(p)) => format!("{:.p$}", v.as_f64()),
        (Some(v), None) => v.to_string(),
    }
}
