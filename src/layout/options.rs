//! Declarative descriptions of cells, table headers and input fields.
//!
//! All types deserialize from camelCase JSON so form descriptions can be
//! written by hand or produced by other services.

use serde::{Deserialize, Serialize};

/// Horizontal alignment of text inside a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Text starts at the gap (default)
    #[default]
    Left,
    /// Text is centered, shifted right by the gap
    Center,
    /// Text ends one gap before the right edge
    Right,
}

/// Font style of a cell or field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Regular weight (default)
    #[default]
    Normal,
    /// Bold weight
    Bold,
}

/// Per-call styling of a cell or input field.
///
/// Every field is optional; the accessors resolve the documented default,
/// so a renderer reads each option exactly once per draw call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CellOptions {
    /// Font style, normal when unset
    pub font_style: Option<FontStyle>,
    /// Draw top and bottom borders, true when unset
    pub horizontal_border: Option<bool>,
    /// Draw left and right borders, true when unset
    pub vertical_border: Option<bool>,
    /// Text alignment, left when unset
    pub align: Option<Align>,
    /// Font size of the text, renderer default when unset
    pub input_font_size: Option<f32>,
    /// Horizontal gap passed to alignment, 0 when unset
    pub gap: Option<f32>,
    /// Grow an input field to fit its wrapped value
    pub fit_overflow: bool,
}

impl CellOptions {
    /// Options with every default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the bold font.
    pub fn bold(mut self) -> Self {
        self.font_style = Some(FontStyle::Bold);
        self
    }

    /// Set the alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Set the alignment gap.
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Set the text font size.
    pub fn font_size(mut self, size: f32) -> Self {
        self.input_font_size = Some(size);
        self
    }

    /// Choose which border axes are drawn.
    pub fn borders(mut self, horizontal: bool, vertical: bool) -> Self {
        self.horizontal_border = Some(horizontal);
        self.vertical_border = Some(vertical);
        self
    }

    /// Let an input field grow to fit its value.
    pub fn fit_overflow(mut self) -> Self {
        self.fit_overflow = true;
        self
    }

    /// Whether the bold font is requested.
    pub fn is_bold(&self) -> bool {
        self.font_style == Some(FontStyle::Bold)
    }

    /// Whether top and bottom borders are drawn.
    pub fn draws_horizontal_border(&self) -> bool {
        self.horizontal_border != Some(false)
    }

    /// Whether left and right borders are drawn.
    pub fn draws_vertical_border(&self) -> bool {
        self.vertical_border != Some(false)
    }

    /// Resolved alignment.
    pub fn alignment(&self) -> Align {
        self.align.unwrap_or_default()
    }

    /// Resolved alignment gap.
    pub fn resolved_gap(&self) -> f32 {
        self.gap.unwrap_or(0.0)
    }
}

/// A table header column.
///
/// A header with `k` children renders as a top half-height cell spanning
/// `k * width` and `k` bottom half-height sub-cells of `width` each.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderSpec {
    /// Header text
    pub text: String,
    /// Sub-column titles; empty means a plain column
    pub children: Vec<String>,
    /// Width of the column, or of each sub-column
    pub width: f32,
    /// Styling of the header cell
    pub options: CellOptions,
}

impl HeaderSpec {
    /// Plain header column.
    pub fn new(text: impl Into<String>, width: f32) -> Self {
        Self {
            text: text.into(),
            width,
            ..Self::default()
        }
    }

    /// Split the header into sub-columns.
    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    /// Set the header styling.
    pub fn with_options(mut self, options: CellOptions) -> Self {
        self.options = options;
        self
    }

    /// Number of data columns this header spans (at least one).
    pub fn span(&self) -> usize {
        self.children.len().max(1)
    }

    /// Total horizontal space taken by the header.
    pub fn total_width(&self) -> f32 {
        self.width * self.span() as f32
    }
}

/// One cell of a table data row, positioned by its index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataCell {
    /// Cell text
    pub text: String,
    /// Styling of the cell
    pub options: CellOptions,
}

impl DataCell {
    /// Cell with default styling.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: CellOptions::default(),
        }
    }

    /// Set the cell styling.
    pub fn with_options(mut self, options: CellOptions) -> Self {
        self.options = options;
        self
    }
}

/// A labeled input box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextInputField {
    /// Small caption in the top-left corner
    pub label: Option<String>,
    /// Field content, wrapped inside the box
    pub value: Option<String>,
    /// Box width; 0 draws a degenerate box and disables wrapping inset
    pub width: f32,
    /// Box height, the configured input height when unset
    pub height: Option<f32>,
    /// Styling of the field
    pub options: CellOptions,
}

impl TextInputField {
    /// Empty field of the given width.
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Set the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set an explicit height.
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the field styling.
    pub fn with_options(mut self, options: CellOptions) -> Self {
        self.options = options;
        self
    }
}
