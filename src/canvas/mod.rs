//! Drawing surfaces.
//!
//! Layout code draws through the [`Canvas`] trait and never touches PDF
//! operators. All coordinates are in points with the origin at the top-left
//! corner of the page and y growing downward.
//!
//! ## Backends
//!
//! - [`PdfCanvas`]: writes a real PDF through [`crate::writer::PdfWriter`]
//! - [`RecordingCanvas`]: records every primitive as a [`DrawOp`], for dry
//!   runs and tests

mod pdf;
mod recording;

pub use pdf::PdfCanvas;
pub use recording::{DrawOp, RecordingCanvas, TextRun};

use crate::error::Result;

/// Drawing primitives required by the layout engine.
///
/// The current font and font size are canvas state: text drawing and
/// measurement both use them.
pub trait Canvas {
    /// Select the font used by subsequent text and measurements.
    fn font(&mut self, name: &str);

    /// Set the font size used by subsequent text and measurements.
    fn font_size(&mut self, size: f32);

    /// Name of the current font.
    fn current_font(&self) -> &str;

    /// Current font size.
    fn current_font_size(&self) -> f32;

    /// Width of `text` in the current font and size.
    fn width_of_string(&self, text: &str) -> f32;

    /// Height of `text` in the current font and size: one line height per
    /// line, zero for empty text.
    fn height_of_string(&self, text: &str) -> f32;

    /// Draw a single line of text whose top edge is at `y`.
    fn text(&mut self, text: &str, x: f32, y: f32);

    /// Begin a new subpath at `(x, y)`.
    fn move_to(&mut self, x: f32, y: f32);

    /// Straight segment to `(x, y)`.
    fn line_to(&mut self, x: f32, y: f32);

    /// Quadratic Bézier segment with control point `(cpx, cpy)` ending at `(x, y)`.
    fn quadratic_curve_to(&mut self, cpx: f32, cpy: f32, x: f32, y: f32);

    /// Close the current subpath.
    fn close_path(&mut self);

    /// Set the stroke line width.
    fn line_width(&mut self, width: f32);

    /// Switch to solid strokes.
    fn undash(&mut self);

    /// Stroke the current path.
    fn stroke(&mut self);

    /// Set the opacity of fills and text, 0.0 to 1.0.
    fn fill_opacity(&mut self, opacity: f32);

    /// Set the opacity of strokes, 0.0 to 1.0.
    fn stroke_opacity(&mut self, opacity: f32);

    /// Push the graphics state.
    fn save_state(&mut self);

    /// Pop the graphics state.
    fn restore_state(&mut self);

    /// Rotate subsequent drawing by `degrees` about `(origin_x, origin_y)`.
    ///
    /// Positive angles turn clockwise on the page.
    fn rotate(&mut self, degrees: f32, origin_x: f32, origin_y: f32);

    /// Start a new page; drawing continues on it.
    fn add_page(&mut self);

    /// Number of pages, including the current one.
    fn page_count(&self) -> usize;

    /// Close the canvas and return the produced bytes.
    fn finish(self) -> Result<Vec<u8>>
    where
        Self: Sized;
}

/// Number of lines `height_of_string` counts for `text`.
pub(crate) fn line_count(text: &str) -> usize {
    text.lines().count()
}
