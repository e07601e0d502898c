//! Canvas backed by the PDF writer.

use super::{line_count, Canvas};
use crate::config::PageSize;
use crate::error::Result;
use crate::writer::{ContentStreamBuilder, ExtGStateBuilder, FontManager, PdfWriter, PdfWriterConfig};
use std::collections::HashSet;

const DEFAULT_FONT: &str = "Helvetica";
const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Canvas producing a PDF document.
///
/// Translates top-down layout coordinates into PDF user space (origin at
/// the bottom-left). The first page is created together with the canvas.
pub struct PdfCanvas {
    writer: PdfWriter,
    width: f32,
    height: f32,
    page: usize,
    font_name: String,
    font_size: f32,
    fonts: FontManager,
    warned_fonts: HashSet<String>,
    /// Current point in PDF space, needed to raise quadratic curves to cubic
    current_point: (f32, f32),
}

impl PdfCanvas {
    /// Create a canvas with one empty page of `page_size`.
    pub fn new(page_size: PageSize) -> Self {
        Self::with_writer_config(page_size, PdfWriterConfig::default())
    }

    /// Create a canvas with custom PDF metadata and compression settings.
    pub fn with_writer_config(page_size: PageSize, config: PdfWriterConfig) -> Self {
        let (width, height) = page_size.dimensions();
        let mut writer = PdfWriter::with_config(config);
        let page = writer.add_page(width, height);

        Self {
            writer,
            width,
            height,
            page,
            font_name: DEFAULT_FONT.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            fonts: FontManager::new(),
            warned_fonts: HashSet::new(),
            current_point: (0.0, 0.0),
        }
    }

    /// Page dimensions in points (width, height).
    pub fn page_dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn content(&mut self) -> Option<&mut ContentStreamBuilder> {
        self.writer.page_content(self.page)
    }

    fn flip(&self, y: f32) -> f32 {
        self.height - y
    }

    fn set_alpha(&mut self, state: ExtGStateBuilder) {
        let name = self.writer.register_ext_gstate(&state);
        if let Some(content) = self.content() {
            content.set_ext_gstate(&name);
        }
    }
}

impl Canvas for PdfCanvas {
    fn font(&mut self, name: &str) {
        if !self.fonts.is_known(name) && self.warned_fonts.insert(name.to_string()) {
            log::warn!("No metrics for font '{}', measuring with Helvetica", name);
        }
        self.font_name = name.to_string();
    }

    fn font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    fn current_font(&self) -> &str {
        &self.font_name
    }

    fn current_font_size(&self) -> f32 {
        self.font_size
    }

    fn width_of_string(&self, text: &str) -> f32 {
        self.fonts.text_width(text, &self.font_name, self.font_size)
    }

    fn height_of_string(&self, text: &str) -> f32 {
        line_count(text) as f32 * self.fonts.line_height(&self.font_name, self.font_size)
    }

    fn text(&mut self, text: &str, x: f32, y: f32) {
        let baseline = self.flip(y)
            - self
                .fonts
                .get_font_or_default(&self.font_name)
                .ascent(self.font_size);
        self.writer.register_font(&self.font_name);

        let font_name = self.font_name.clone();
        let font_size = self.font_size;
        if let Some(content) = self.content() {
            content.set_font(&font_name, font_size).text(text, x, baseline);
        }
    }

    fn move_to(&mut self, x: f32, y: f32) {
        let y = self.flip(y);
        self.current_point = (x, y);
        if let Some(content) = self.content() {
            content.move_to(x, y);
        }
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let y = self.flip(y);
        self.current_point = (x, y);
        if let Some(content) = self.content() {
            content.line_to(x, y);
        }
    }

    fn quadratic_curve_to(&mut self, cpx: f32, cpy: f32, x: f32, y: f32) {
        let (x0, y0) = self.current_point;
        let (qx, qy) = (cpx, self.flip(cpy));
        let y = self.flip(y);

        // Degree elevation: both cubic controls sit 2/3 of the way to the quadratic one
        let c1 = (x0 + 2.0 / 3.0 * (qx - x0), y0 + 2.0 / 3.0 * (qy - y0));
        let c2 = (x + 2.0 / 3.0 * (qx - x), y + 2.0 / 3.0 * (qy - y));

        self.current_point = (x, y);
        if let Some(content) = self.content() {
            content.curve_to(c1.0, c1.1, c2.0, c2.1, x, y);
        }
    }

    fn close_path(&mut self) {
        if let Some(content) = self.content() {
            content.close_path();
        }
    }

    fn line_width(&mut self, width: f32) {
        if let Some(content) = self.content() {
            content.set_line_width(width);
        }
    }

    fn undash(&mut self) {
        if let Some(content) = self.content() {
            content.set_solid_line();
        }
    }

    fn stroke(&mut self) {
        if let Some(content) = self.content() {
            content.stroke();
        }
    }

    fn fill_opacity(&mut self, opacity: f32) {
        self.set_alpha(ExtGStateBuilder::new().fill_alpha(opacity));
    }

    fn stroke_opacity(&mut self, opacity: f32) {
        self.set_alpha(ExtGStateBuilder::new().stroke_alpha(opacity));
    }

    fn save_state(&mut self) {
        if let Some(content) = self.content() {
            content.save_state();
        }
    }

    fn restore_state(&mut self) {
        if let Some(content) = self.content() {
            content.restore_state();
        }
    }

    fn rotate(&mut self, degrees: f32, origin_x: f32, origin_y: f32) {
        // Clockwise on a top-down page is counter-clockwise in PDF space
        let oy = self.flip(origin_y);
        if let Some(content) = self.content() {
            content.rotate_about(-degrees, origin_x, oy);
        }
    }

    fn add_page(&mut self) {
        self.page = self.writer.add_page(self.width, self.height);
        log::debug!("Added page {}", self.page + 1);
    }

    fn page_count(&self) -> usize {
        self.writer.page_count()
    }

    fn finish(self) -> Result<Vec<u8>> {
        self.writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finish_to_string(canvas: PdfCanvas) -> String {
        String::from_utf8_lossy(&canvas.finish().unwrap()).into_owned()
    }

    #[test]
    fn test_first_page_exists() {
        let canvas = PdfCanvas::new(PageSize::A4);
        assert_eq!(canvas.page_count(), 1);
        assert_eq!(canvas.page_dimensions(), (595.28, 841.89));
    }

    #[test]
    fn test_text_baseline_is_flipped() {
        let mut canvas = PdfCanvas::new(PageSize::Custom {
            width: 200.0,
            height: 100.0,
        });
        canvas.font("Helvetica");
        canvas.font_size(10.0);
        canvas.text("Hi", 10.0, 20.0);

        // baseline = 100 - 20 - 7.18
        let pdf = finish_to_string(canvas);
        assert!(pdf.contains("/Helvetica 10 Tf"));
        assert!(pdf.contains("1 0 0 1 10 72.82 Tm"));
        assert!(pdf.contains("(Hi) Tj"));
    }

    #[test]
    fn test_quadratic_curve_becomes_cubic() {
        let mut canvas = PdfCanvas::new(PageSize::Custom {
            width: 100.0,
            height: 100.0,
        });
        canvas.move_to(0.0, 100.0);
        canvas.quadratic_curve_to(30.0, 100.0, 30.0, 70.0);
        canvas.stroke();

        let pdf = finish_to_string(canvas);
        assert!(pdf.contains("0 0 m"));
        assert!(pdf.contains("20 0 30 10 30 30 c"));
    }

    #[test]
    fn test_opacity_uses_ext_gstate() {
        let mut canvas = PdfCanvas::new(PageSize::A4);
        canvas.fill_opacity(0.2);
        canvas.stroke_opacity(1.0);

        let pdf = finish_to_string(canvas);
        assert!(pdf.contains("/GSf20 gs"));
        assert!(pdf.contains("/GSs100 gs"));
        assert!(pdf.contains("/ca 0.2"));
    }

    #[test]
    fn test_close_opacities_keep_their_own_state() {
        let mut canvas = PdfCanvas::new(PageSize::A4);
        canvas.stroke_opacity(0.504);
        canvas.stroke_opacity(0.496);

        let pdf = finish_to_string(canvas);
        assert!(pdf.contains(&format!("/GSsx{:08x} gs", 0.504f32.to_bits())));
        assert!(pdf.contains(&format!("/GSsx{:08x} gs", 0.496f32.to_bits())));
        assert!(pdf.contains("/CA 0.504"));
        assert!(pdf.contains("/CA 0.496"));
    }

    #[test]
    fn test_add_page() {
        let mut canvas = PdfCanvas::new(PageSize::A4);
        canvas.add_page();
        canvas.add_page();
        assert_eq!(canvas.page_count(), 3);
        assert!(finish_to_string(canvas).contains("/Count 3"));
    }

    #[test]
    fn test_measurement_follows_font_state() {
        let mut canvas = PdfCanvas::new(PageSize::A4);
        canvas.font_size(10.0);
        let regular = canvas.width_of_string("Total");
        canvas.font("Helvetica-Bold");
        assert!(canvas.width_of_string("Total") > regular);
        assert_eq!(canvas.height_of_string(""), 0.0);
        assert!((canvas.height_of_string("A\nB") - 23.8).abs() < 1e-3);
    }
}
