//! Document assembly.
//!
//! [`Document`] owns a [`Canvas`], the [`LayoutConfig`] and the page
//! counters, and exposes every layout operation as a method. Callers keep
//! their own [`Cursor`] and lend it to each call; operations advance it in
//! place.
//!
//! ## Architecture
//!
//! ```text
//! Document<C: Canvas>
//!   ├── text / watermark / page lifecycle   (this module)
//!   ├── add_page_if_needed                  (page.rs)
//!   ├── draw_cell, draw_cell_borders        (cell.rs)
//!   ├── print_table                         (table.rs)
//!   └── print_input*, print_label_and_value (input.rs)
//!         ↓
//!   Canvas (PdfCanvas | RecordingCanvas)
//! ```
//!
//! ## Example
//!
//! ```
//! use pdf_formkit::{Cursor, Document, TextInputField};
//!
//! let mut doc = Document::new();
//! let mut pos = Cursor::new(doc.margin(), doc.margin());
//! doc.print_text(&mut pos, &["Delivery note"]);
//! doc.print_input_text(&mut pos, &TextInputField::new(200.0).label("Name").value("Ada"));
//! let pdf = doc.finish().unwrap();
//! assert!(pdf.starts_with(b"%PDF-"));
//! ```

mod cell;
mod input;
mod page;
mod table;

pub use table::{flatten_columns, Column, TableStyle};

use crate::canvas::{Canvas, PdfCanvas};
use crate::config::LayoutConfig;
use crate::error::Result;
use crate::layout::{resolve_gap, wrap_text, Align, Cursor};
use crate::writer::PdfWriterConfig;
use std::path::Path;

const WATERMARK_FONT_SIZE: f32 = 48.0;
const WATERMARK_OPACITY: f32 = 0.2;
const WATERMARK_ANGLE: f32 = -90.0;
const WATERMARK_ORIGIN: (f32, f32) = (250.0, 421.0);
const WATERMARK_POSITION: (f32, f32) = (72.0, 400.0);

/// A paginated document being laid out.
///
/// The first page exists from construction, so both page counters start
/// at 1. Finishing consumes the document: nothing can be drawn afterwards.
pub struct Document<C: Canvas = PdfCanvas> {
    canvas: C,
    config: LayoutConfig,
    current_page_number: usize,
    total_page_number: usize,
    watermark: Option<String>,
}

impl Document<PdfCanvas> {
    /// A4 document with a 12pt margin.
    pub fn new() -> Self {
        let config = LayoutConfig::default();
        let canvas = PdfCanvas::new(config.page_size);
        Self::from_parts(canvas, config)
    }

    /// PDF document with custom layout constants.
    pub fn with_config(config: LayoutConfig) -> Result<Self> {
        Self::with_writer_config(config, PdfWriterConfig::default())
    }

    /// PDF document with custom layout constants and PDF settings.
    pub fn with_writer_config(config: LayoutConfig, writer: PdfWriterConfig) -> Result<Self> {
        config.validate()?;
        let canvas = PdfCanvas::with_writer_config(config.page_size, writer);
        Ok(Self::from_parts(canvas, config))
    }
}

impl Default for Document<PdfCanvas> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Canvas> Document<C> {
    /// Document drawing onto an existing canvas.
    pub fn with_canvas(canvas: C, config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(canvas, config))
    }

    fn from_parts(canvas: C, config: LayoutConfig) -> Self {
        let mut doc = Self {
            canvas,
            config,
            current_page_number: 1,
            total_page_number: 1,
            watermark: None,
        };
        doc.set_normal_font_style();
        doc.set_normal_font_size();
        doc
    }

    /// Layout constants in use.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Margin on every side.
    pub fn margin(&self) -> f32 {
        self.config.margin
    }

    /// Usable page width.
    pub fn page_width(&self) -> f32 {
        self.config.page_width()
    }

    /// Usable page height.
    pub fn page_height(&self) -> f32 {
        self.config.page_height()
    }

    /// Number of the page being drawn, starting at 1.
    pub fn current_page_number(&self) -> usize {
        self.current_page_number
    }

    /// Number of pages created so far, starting at 1.
    pub fn total_page_number(&self) -> usize {
        self.total_page_number
    }

    /// Underlying canvas, read-only.
    ///
    /// Pages are only ever added through the document, so the canvas page
    /// count and the watermark always follow [`Document::total_page_number`].
    /// There is no public mutable access:
    ///
    /// ```compile_fail
    /// use pdf_formkit::canvas::Canvas;
    /// use pdf_formkit::Document;
    ///
    /// let mut doc = Document::new();
    /// doc.canvas_mut().add_page();
    /// ```
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    #[cfg(test)]
    pub(crate) fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Switch to the big font size.
    pub fn set_big_font_size(&mut self) -> &mut Self {
        self.canvas.font_size(self.config.big_font_size);
        self
    }

    /// Switch to the normal font size.
    pub fn set_normal_font_size(&mut self) -> &mut Self {
        self.canvas.font_size(self.config.normal_font_size);
        self
    }

    /// Switch to the small font size.
    pub fn set_small_font_size(&mut self) -> &mut Self {
        self.canvas.font_size(self.config.small_font_size);
        self
    }

    /// Switch to the regular font.
    pub fn set_normal_font_style(&mut self) -> &mut Self {
        self.canvas.font(&self.config.regular_font);
        self
    }

    /// Switch to the bold font.
    pub fn set_bold_font_style(&mut self) -> &mut Self {
        self.canvas.font(&self.config.bold_font);
        self
    }

    /// Horizontal offset of `text` inside `width`, measured in the current font.
    pub fn gap_by_align(&self, text: &str, width: f32, gap: f32, align: Align) -> f32 {
        resolve_gap(text, width, gap, align, |s| self.canvas.width_of_string(s))
    }

    /// Wrap `text` to `max_width` in the current font.
    pub fn split_text_to_lines(&self, text: &str, max_width: f32) -> Vec<String> {
        wrap_text(text, max_width, |s| self.canvas.width_of_string(s))
    }

    /// Draw each string on its own line, separated by the small gap.
    pub fn print_text<S: AsRef<str>>(&mut self, pos: &mut Cursor, texts: &[S]) -> &mut Self {
        let gap = self.config.small_gap;
        self.print_text_with_gap(pos, texts, gap)
    }

    /// Draw each string at the cursor, advancing `pos.y` by the normal
    /// font size plus `gap` after each one.
    ///
    /// The step does not depend on the current font size.
    pub fn print_text_with_gap<S: AsRef<str>>(
        &mut self,
        pos: &mut Cursor,
        texts: &[S],
        gap: f32,
    ) -> &mut Self {
        for text in texts {
            self.canvas.text(text.as_ref(), pos.x, pos.y);
            pos.y += self.config.normal_font_size + gap;
        }
        self
    }

    /// Set the text stamped on every page.
    pub fn set_watermark(&mut self, text: impl Into<String>) -> &mut Self {
        self.watermark = Some(text.into());
        self
    }

    /// Current watermark text.
    pub fn watermark(&self) -> Option<&str> {
        self.watermark.as_deref()
    }

    /// Stamp the watermark on the current page, if one is set.
    ///
    /// The text is drawn faded and rotated a quarter turn counter-clockwise.
    /// Afterwards the normal font size and style are active.
    pub fn print_watermark(&mut self) -> &mut Self {
        let Some(text) = self.watermark.clone() else {
            return self;
        };

        self.canvas.save_state();
        self.canvas.font_size(WATERMARK_FONT_SIZE);
        self.canvas.fill_opacity(WATERMARK_OPACITY);
        self.canvas
            .rotate(WATERMARK_ANGLE, WATERMARK_ORIGIN.0, WATERMARK_ORIGIN.1);
        self.canvas
            .text(&text, WATERMARK_POSITION.0, WATERMARK_POSITION.1);
        self.canvas.restore_state();

        self.set_normal_font_size();
        self.set_normal_font_style()
    }

    /// Finish the current page and start a new one.
    ///
    /// The watermark is stamped on the page being left. The new page starts
    /// with the normal font and size.
    pub fn add_page(&mut self) -> &mut Self {
        self.print_watermark();
        self.canvas.add_page();
        self.current_page_number += 1;
        self.total_page_number += 1;
        log::debug!("Started page {}", self.current_page_number);

        self.set_normal_font_style();
        self.set_normal_font_size()
    }

    /// Stamp the watermark on the last page and return the canvas output.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        self.print_watermark();
        let pages = self.total_page_number;
        let bytes = self.canvas.finish()?;
        log::debug!("Finished document: {} pages, {} bytes", pages, bytes.len());
        Ok(bytes)
    }

    /// Finish the document and write it to `path`.
    pub fn save(self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.finish()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
