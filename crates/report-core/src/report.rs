// File: crates/report-core/src/report.rs
// Summary: Report assembler: ordered pages drawn into one multi-page PDF via skia_safe::pdf.

use std::path::Path;

use skia_safe as skia;
use tracing::{debug, info};

use crate::error::{ReportError, Result};
use crate::page::{Page, RenderOptions};
use crate::text::TextShaper;

/// Ordered page sequence, persisted once as a single document.
#[derive(Clone, Debug, Default)]
pub struct Report {
    pages: Vec<Page>,
}

impl Report {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, page: Page) {
        debug!(index = self.pages.len(), title = page.title(), "page added");
        self.pages.push(page);
    }

    pub fn pages(&self) -> &[Page] { &self.pages }

    pub fn len(&self) -> usize { self.pages.len() }

    pub fn is_empty(&self) -> bool { self.pages.is_empty() }

    /// Build the whole PDF in memory, one document page per report page.
    pub fn render_pdf_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        if self.pages.is_empty() {
            return Err(ReportError::empty("report has no pages"));
        }
        let shaper = TextShaper::new();
        let mut bytes: Vec<u8> = Vec::new();
        {
            let mut doc = skia::pdf::new_document(&mut bytes, None);
            for (i, page) in self.pages.iter().enumerate() {
                let (w, h) = page.size();
                let mut on_page = doc.begin_page((w, h), None);
                page.draw(on_page.canvas(), &shaper, opts);
                doc = on_page.end_page();
                debug!(index = i, title = page.title(), "page drawn");
            }
            doc.close();
        }
        if bytes.is_empty() {
            return Err(ReportError::render("PDF backend produced no output"));
        }
        Ok(bytes)
    }

    /// Write the document to `path`. Nothing is created on disk unless
    /// every page rendered.
    pub fn write_pdf(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.render_pdf_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        info!(path = %path.display(), pages = self.pages.len(), bytes = bytes.len(), "wrote report");
        Ok(())
    }
}
