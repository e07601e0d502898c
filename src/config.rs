//! Layout configuration.
//!
//! Every constant the layout engine uses (page size, margin, font sizes,
//! gaps, fonts) lives in [`LayoutConfig`]. The defaults describe an A4 form
//! with a 12pt margin. Configurations can be loaded from JSON with camelCase
//! keys, and any key may be omitted.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Page dimensions in points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageSize {
    /// ISO A4 (210mm x 297mm)
    #[default]
    A4,
    /// ISO A3 (297mm x 420mm)
    A3,
    /// US Letter (8.5" x 11")
    Letter,
    /// US Legal (8.5" x 14")
    Legal,
    /// Custom size in points
    Custom {
        /// Page width
        width: f32,
        /// Page height
        height: f32,
    },
}

impl PageSize {
    /// Get dimensions in points (width, height).
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::A3 => (841.89, 1190.55),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

/// Layout constants for a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Physical page size
    pub page_size: PageSize,
    /// Margin on every side; also the cursor's reset position after a page break
    pub margin: f32,
    /// Default height of an input field box
    pub input_height: f32,
    /// Font size of input field values
    pub input_font_size: f32,
    /// Font size of input field labels and of table cells
    pub label_font_size: f32,
    /// Small font size (table headers, text after a page break)
    pub small_font_size: f32,
    /// Document default font size
    pub normal_font_size: f32,
    /// Medium font size
    pub medium_font_size: f32,
    /// Big font size
    pub big_font_size: f32,
    /// Small gap (label inset, default line gap of `print_text`)
    pub small_gap: f32,
    /// Medium gap
    pub medium_gap: f32,
    /// Large gap, also the width of table cells without a header column
    pub large_gap: f32,
    /// Regular font name
    pub regular_font: String,
    /// Bold font name
    pub bold_font: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margin: 12.0,
            input_height: 23.0,
            input_font_size: 9.0,
            label_font_size: 5.0,
            small_font_size: 5.0,
            normal_font_size: 7.0,
            medium_font_size: 6.0,
            big_font_size: 10.0,
            small_gap: 2.5,
            medium_gap: 5.0,
            large_gap: 15.0,
            regular_font: "Helvetica".to_string(),
            bold_font: "Helvetica-Bold".to_string(),
        }
    }
}

impl LayoutConfig {
    /// Create configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the margin.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the regular and bold font names.
    pub fn with_fonts(mut self, regular: impl Into<String>, bold: impl Into<String>) -> Self {
        self.regular_font = regular.into();
        self.bold_font = bold.into();
        self
    }

    /// Usable page width: page width minus both side margins.
    pub fn page_width(&self) -> f32 {
        self.page_size.dimensions().0 - self.margin * 2.0
    }

    /// Usable page height: page height minus top and bottom margins.
    pub fn page_height(&self) -> f32 {
        self.page_size.dimensions().1 - self.margin * 2.0
    }

    /// Check that the values describe a drawable page.
    pub fn validate(&self) -> Result<()> {
        if !(self.margin >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "margin must not be negative, got {}",
                self.margin
            )));
        }

        let (width, height) = self.page_size.dimensions();
        if !(width > 0.0 && height > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "page size must be positive, got {}x{}",
                width, height
            )));
        }
        if self.page_width() <= 0.0 || self.page_height() - self.margin <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "margin {} leaves no room on a {}x{} page",
                self.margin, width, height
            )));
        }

        let sizes = [
            ("inputFontSize", self.input_font_size),
            ("labelFontSize", self.label_font_size),
            ("smallFontSize", self.small_font_size),
            ("normalFontSize", self.normal_font_size),
            ("mediumFontSize", self.medium_font_size),
            ("bigFontSize", self.big_font_size),
            ("inputHeight", self.input_height),
        ];
        for (name, value) in sizes {
            if !(value > 0.0) {
                return Err(Error::InvalidConfig(format!("{} must be positive, got {}", name, value)));
            }
        }

        if self.regular_font.is_empty() || self.bold_font.is_empty() {
            return Err(Error::InvalidConfig("font names must not be empty".to_string()));
        }

        Ok(())
    }
}
