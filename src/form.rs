//! Declarative form descriptions.
//!
//! A [`FormDescription`] is a JSON document listing layout blocks that are
//! rendered top to bottom with one shared cursor:
//!
//! ```json
//! {
//!   "watermark": "DRAFT",
//!   "blocks": [
//!     {"type": "text", "lines": ["Delivery note"]},
//!     {"type": "inputs", "rows": [[{"label": "Name", "value": "Ada", "width": 200}]]},
//!     {"type": "table",
//!      "headers": [{"text": "Item", "width": 120}],
//!      "rows": [[{"text": "Widget"}]]},
//!     {"type": "pageBreak"}
//!   ]
//! }
//! ```

use crate::canvas::Canvas;
use crate::config::LayoutConfig;
use crate::document::{Document, TableStyle};
use crate::error::Result;
use crate::layout::{Cursor, DataCell, HeaderSpec, TextInputField};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A whole form: layout settings plus blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormDescription {
    /// Layout constants, defaults when absent
    pub config: Option<LayoutConfig>,
    /// Text stamped on every page
    pub watermark: Option<String>,
    /// Blocks in drawing order
    pub blocks: Vec<Block>,
}

/// One layout block of a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    /// Lines of plain text
    #[serde(rename_all = "camelCase")]
    Text {
        /// One entry per line
        lines: Vec<String>,
        /// Gap between lines, the small gap when absent
        #[serde(default)]
        gap: Option<f32>,
        /// Move the cursor here before drawing
        #[serde(default)]
        x: Option<f32>,
        /// Move the cursor here before drawing
        #[serde(default)]
        y: Option<f32>,
    },
    /// Grid of input fields
    Inputs {
        /// Rows of fields, each row left to right
        rows: Vec<Vec<TextInputField>>,
    },
    /// Table with header and data rows
    #[serde(rename_all = "camelCase")]
    Table {
        /// Header columns
        headers: Vec<HeaderSpec>,
        /// Data rows
        #[serde(default)]
        rows: Vec<Vec<DataCell>>,
        /// Row height, 13 when absent
        #[serde(default)]
        row_height: Option<f32>,
        /// Closing border, on when absent
        #[serde(default)]
        final_border: Option<bool>,
    },
    /// Vertical space, breaking the page if it does not fit
    Spacer {
        /// Height of the space
        height: f32,
    },
    /// Unconditional page break
    PageBreak,
}

impl FormDescription {
    /// Parse a form from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let form: Self = serde_json::from_str(json)?;
        if let Some(config) = &form.config {
            config.validate()?;
        }
        Ok(form)
    }

    /// Read and parse a form file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Layout constants of the form.
    pub fn layout_config(&self) -> LayoutConfig {
        self.config.clone().unwrap_or_default()
    }

    /// Render the form to PDF bytes.
    pub fn render(&self) -> Result<Vec<u8>> {
        let mut doc = Document::with_config(self.layout_config())?;
        let margin = doc.margin();
        let mut pos = Cursor::new(margin, margin);
        self.render_into(&mut doc, &mut pos);
        doc.finish()
    }

    /// Draw every block onto `doc`, starting at `pos`.
    ///
    /// Sets the form watermark on the document when one is given.
    pub fn render_into<C: Canvas>(&self, doc: &mut Document<C>, pos: &mut Cursor) {
        if let Some(watermark) = &self.watermark {
            doc.set_watermark(watermark.clone());
        }

        for (index, block) in self.blocks.iter().enumerate() {
            log::trace!("Rendering block {} at y {}", index, pos.y);
            render_block(doc, pos, block);
        }
    }
}

fn render_block<C: Canvas>(doc: &mut Document<C>, pos: &mut Cursor, block: &Block) {
    match block {
        Block::Text { lines, gap, x, y } => {
            if let Some(x) = x {
                pos.x = *x;
            }
            if let Some(y) = y {
                pos.y = *y;
            }
            let gap = gap.unwrap_or(doc.config().small_gap);
            doc.print_text_with_gap(pos, lines.as_slice(), gap);
        },
        Block::Inputs { rows } => {
            doc.print_multiple_input_text(pos, rows);
        },
        Block::Table {
            headers,
            rows,
            row_height,
            final_border,
        } => {
            let defaults = TableStyle::default();
            let style = TableStyle {
                row_height: row_height.unwrap_or(defaults.row_height),
                final_border: final_border.unwrap_or(defaults.final_border),
            };
            doc.print_table_with(pos, headers, rows, style);
        },
        Block::Spacer { height } => {
            if !doc.add_page_if_needed(pos, *height) {
                pos.y += *height;
            }
        },
        Block::PageBreak => {
            doc.add_page();
            pos.x = doc.margin();
            pos.y = doc.margin();
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;

    const SAMPLE: &str = r#"{
        "watermark": "DRAFT",
        "blocks": [
            {"type": "text", "lines": ["Delivery note", "No. 42"]},
            {"type": "inputs", "rows": [[{"label": "Name", "value": "Ada", "width": 200}]]},
            {"type": "table", "rowHeight": 10,
             "headers": [{"text": "Item", "width": 120},
                         {"text": "Price", "width": 40, "children": ["Net", "Gross"]}],
             "rows": [[{"text": "Widget"}, {"text": "10"}, {"text": "12"}]]},
            {"type": "spacer", "height": 20},
            {"type": "pageBreak"}
        ]
    }"#;

    #[test]
    fn test_parse_blocks() {
        let form = FormDescription::from_json(SAMPLE).unwrap();
        assert_eq!(form.blocks.len(), 5);
        assert_eq!(form.watermark.as_deref(), Some("DRAFT"));
        assert!(matches!(form.blocks[4], Block::PageBreak));
        match &form.blocks[2] {
            Block::Table {
                headers,
                row_height,
                final_border,
                ..
            } => {
                assert_eq!(headers[1].children.len(), 2);
                assert_eq!(*row_height, Some(10.0));
                assert_eq!(*final_border, None);
            },
            other => panic!("expected table, got {:?}", other),
        }
    }

    #[test]
    fn test_render_into_recording() {
        let form = FormDescription::from_json(SAMPLE).unwrap();
        let mut doc = Document::with_canvas(RecordingCanvas::new(), form.layout_config()).unwrap();
        let mut pos = Cursor::new(12.0, 12.0);
        form.render_into(&mut doc, &mut pos);

        // text: 12 + 2 * 9.5 = 31, inputs: +23 = 54, table: +20 = 74, spacer: 94
        assert_eq!(doc.total_page_number(), 2);
        assert_eq!(pos, Cursor::new(12.0, 12.0));
        assert_eq!(doc.canvas().find_text("Widget").unwrap().page, 0);
        assert_eq!(doc.canvas().find_text("DRAFT").unwrap().page, 0);
    }

    #[test]
    fn test_text_block_moves_cursor() {
        let form = FormDescription::from_json(
            r#"{"blocks": [{"type": "text", "lines": ["A"], "x": 100, "y": 200, "gap": 5}]}"#,
        )
        .unwrap();
        let mut doc = Document::with_canvas(RecordingCanvas::new(), LayoutConfig::default()).unwrap();
        let mut pos = Cursor::new(12.0, 12.0);
        form.render_into(&mut doc, &mut pos);

        let run = doc.canvas().find_text("A").unwrap();
        assert_eq!((run.x, run.y), (100.0, 200.0));
        assert_eq!(pos.y, 212.0);
    }

    #[test]
    fn test_spacer_breaks_page() {
        let form = FormDescription::from_json(r#"{"blocks": [{"type": "spacer", "height": 50}]}"#).unwrap();
        let mut doc = Document::with_canvas(RecordingCanvas::new(), LayoutConfig::default()).unwrap();
        let mut pos = Cursor::new(12.0, 790.0);
        form.render_into(&mut doc, &mut pos);
        assert_eq!(doc.total_page_number(), 2);
        assert_eq!(pos.y, 12.0);
    }

    #[test]
    fn test_render_pdf() {
        let bytes = FormDescription::from_json(SAMPLE).unwrap().render().unwrap();
        let content = String::from_utf8_lossy(&bytes);
        assert!(content.starts_with("%PDF-"));
        assert!(content.contains("/Count 2"));
        assert!(content.contains("(Widget) Tj"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = FormDescription::from_json(r#"{"config": {"margin": -3}, "blocks": []}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_unknown_block_type_rejected() {
        assert!(FormDescription::from_json(r#"{"blocks": [{"type": "chart"}]}"#).is_err());
    }
}
