//! Canvas that records drawing primitives instead of rendering them.
//!
//! Useful for dry runs (how many pages will this form take?) and for
//! asserting exactly what the layout engine drew.

use super::{line_count, Canvas};
use crate::error::Result;
use crate::writer::FontManager;
use serde::Serialize;

/// A line of text as it was drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    /// Drawn string
    pub text: String,
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Font active when drawing
    pub font: String,
    /// Font size active when drawing
    pub size: f32,
    /// Zero-based page index
    pub page: usize,
}

/// One recorded drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawOp {
    /// Font selection
    Font {
        /// Font name
        name: String,
    },
    /// Font size change
    FontSize {
        /// Size in points
        size: f32,
    },
    /// Text drawing
    Text(TextRun),
    /// Subpath start
    MoveTo {
        /// x
        x: f32,
        /// y
        y: f32,
    },
    /// Straight segment
    LineTo {
        /// x
        x: f32,
        /// y
        y: f32,
    },
    /// Quadratic curve segment
    QuadraticCurveTo {
        /// Control point x
        cpx: f32,
        /// Control point y
        cpy: f32,
        /// End point x
        x: f32,
        /// End point y
        y: f32,
    },
    /// Subpath close
    ClosePath,
    /// Line width change
    LineWidth {
        /// Width in points
        width: f32,
    },
    /// Dash reset
    Undash,
    /// Path stroke
    Stroke,
    /// Fill opacity change
    FillOpacity {
        /// Opacity 0.0 to 1.0
        opacity: f32,
    },
    /// Stroke opacity change
    StrokeOpacity {
        /// Opacity 0.0 to 1.0
        opacity: f32,
    },
    /// Graphics state push
    SaveState,
    /// Graphics state pop
    RestoreState,
    /// Rotation
    Rotate {
        /// Angle, clockwise on the page
        degrees: f32,
        /// Origin x
        x: f32,
        /// Origin y
        y: f32,
    },
    /// New page
    AddPage,
}

#[derive(Debug, Clone)]
enum Metrics {
    Afm(FontManager),
    Fixed { char_width: f32, line_height: f32 },
}

/// Canvas that keeps a log of [`DrawOp`]s.
///
/// By default strings are measured with the same Base-14 metrics as
/// [`PdfCanvas`](super::PdfCanvas), so a recorded layout matches the PDF
/// layout exactly. [`RecordingCanvas::with_fixed_metrics`] swaps in a
/// monospace model that keeps test arithmetic simple.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
    metrics: Metrics,
    font_name: String,
    font_size: f32,
    pages: usize,
}

impl RecordingCanvas {
    /// Recording canvas measuring with Base-14 font metrics.
    pub fn new() -> Self {
        Self::with_metrics(Metrics::Afm(FontManager::new()))
    }

    /// Recording canvas where every character is `char_width` wide and
    /// every line `line_height` tall, regardless of font and size.
    pub fn with_fixed_metrics(char_width: f32, line_height: f32) -> Self {
        Self::with_metrics(Metrics::Fixed {
            char_width,
            line_height,
        })
    }

    fn with_metrics(metrics: Metrics) -> Self {
        Self {
            ops: Vec::new(),
            metrics,
            font_name: "Helvetica".to_string(),
            font_size: 12.0,
            pages: 1,
        }
    }

    /// Every recorded operation in drawing order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Recorded text runs in drawing order.
    pub fn texts(&self) -> Vec<&TextRun> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text(run) => Some(run),
                _ => None,
            })
            .collect()
    }

    /// First text run drawing exactly `text`.
    pub fn find_text(&self, text: &str) -> Option<&TextRun> {
        self.texts().into_iter().find(|run| run.text == text)
    }

    /// Number of recorded operations matching `predicate`.
    pub fn count<P>(&self, predicate: P) -> usize
    where
        P: Fn(&DrawOp) -> bool,
    {
        self.ops.iter().filter(|op| predicate(op)).count()
    }

    /// Forget every recorded operation, keeping font state and page count.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    fn record(&mut self, op: DrawOp) {
        self.ops.push(op);
    }
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for RecordingCanvas {
    fn font(&mut self, name: &str) {
        self.font_name = name.to_string();
        self.record(DrawOp::Font {
            name: name.to_string(),
        });
    }

    fn font_size(&mut self, size: f32) {
        self.font_size = size;
        self.record(DrawOp::FontSize { size });
    }

    fn current_font(&self) -> &str {
        &self.font_name
    }

    fn current_font_size(&self) -> f32 {
        self.font_size
    }

    fn width_of_string(&self, text: &str) -> f32 {
        match &self.metrics {
            Metrics::Afm(fonts) => fonts.text_width(text, &self.font_name, self.font_size),
            Metrics::Fixed { char_width, .. } => text.chars().count() as f32 * char_width,
        }
    }

    fn height_of_string(&self, text: &str) -> f32 {
        let line_height = match &self.metrics {
            Metrics::Afm(fonts) => fonts.line_height(&self.font_name, self.font_size),
            Metrics::Fixed { line_height, .. } => *line_height,
        };
        line_count(text) as f32 * line_height
    }

    fn text(&mut self, text: &str, x: f32, y: f32) {
        let run = TextRun {
            text: text.to_string(),
            x,
            y,
            font: self.font_name.clone(),
            size: self.font_size,
            page: self.pages - 1,
        };
        self.record(DrawOp::Text(run));
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.record(DrawOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.record(DrawOp::LineTo { x, y });
    }

    fn quadratic_curve_to(&mut self, cpx: f32, cpy: f32, x: f32, y: f32) {
        self.record(DrawOp::QuadraticCurveTo { cpx, cpy, x, y });
    }

    fn close_path(&mut self) {
        self.record(DrawOp::ClosePath);
    }

    fn line_width(&mut self, width: f32) {
        self.record(DrawOp::LineWidth { width });
    }

    fn undash(&mut self) {
        self.record(DrawOp::Undash);
    }

    fn stroke(&mut self) {
        self.record(DrawOp::Stroke);
    }

    fn fill_opacity(&mut self, opacity: f32) {
        self.record(DrawOp::FillOpacity { opacity });
    }

    fn stroke_opacity(&mut self, opacity: f32) {
        self.record(DrawOp::StrokeOpacity { opacity });
    }

    fn save_state(&mut self) {
        self.record(DrawOp::SaveState);
    }

    fn restore_state(&mut self) {
        self.record(DrawOp::RestoreState);
    }

    fn rotate(&mut self, degrees: f32, origin_x: f32, origin_y: f32) {
        self.record(DrawOp::Rotate {
            degrees,
            x: origin_x,
            y: origin_y,
        });
    }

    fn add_page(&mut self) {
        self.pages += 1;
        self.record(DrawOp::AddPage);
    }

    fn page_count(&self) -> usize {
        self.pages
    }

    fn finish(self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.ops)?)
    }
}
