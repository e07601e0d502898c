//! Font metrics for layout.
//!
//! Layout needs two answers from a font: how wide a string is and how tall
//! a line is. Both come from the standard Adobe Font Metrics of the Base-14
//! Helvetica family, which every PDF reader ships, so nothing is embedded.

use std::collections::HashMap;

/// Helvetica advance widths for the printable ASCII range 0x20..=0x7E.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Helvetica-Bold advance widths for the printable ASCII range 0x20..=0x7E.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    333, 333, 584, 584, 584, 611, 975, // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    333, 278, 333, 584, 556, 333, // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // 'a'..'m'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'n'..'z'
    389, 280, 389, 584, // '{'..'~'
];

/// Width used for characters outside the table.
const DEFAULT_WIDTH: f32 = 500.0;

/// Metrics for a single Base-14 font.
#[derive(Debug, Clone)]
pub struct FontInfo {
    /// Font name (e.g., "Helvetica-Bold")
    pub name: String,
    /// Ascender height (above baseline), 1/1000 em
    pub ascender: f32,
    /// Descender depth (below baseline, negative), 1/1000 em
    pub descender: f32,
    /// Extra space between lines: font bbox height minus (ascender - descender)
    pub line_gap: f32,
    widths: &'static [u16; 95],
}

impl FontInfo {
    fn helvetica(name: &str) -> Self {
        // FontBBox -166 -225 1000 931
        Self {
            name: name.to_string(),
            ascender: 718.0,
            descender: -207.0,
            line_gap: 231.0,
            widths: &HELVETICA_WIDTHS,
        }
    }

    fn helvetica_bold(name: &str) -> Self {
        // FontBBox -170 -228 1003 962
        Self {
            name: name.to_string(),
            ascender: 718.0,
            descender: -207.0,
            line_gap: 265.0,
            widths: &HELVETICA_BOLD_WIDTHS,
        }
    }

    /// Get the width of a single character in font units (1/1000 of em).
    pub fn char_width(&self, ch: char) -> f32 {
        let code = ch as u32;
        if (0x20..=0x7E).contains(&code) {
            self.widths[(code - 0x20) as usize] as f32
        } else {
            DEFAULT_WIDTH
        }
    }

    /// Width of `text` in points at `font_size`.
    pub fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let width_units: f32 = text.chars().map(|c| self.char_width(c)).sum();
        width_units * font_size / 1000.0
    }

    /// Height of one line at `font_size`, including the line gap.
    pub fn line_height(&self, font_size: f32) -> f32 {
        (self.ascender - self.descender + self.line_gap) * font_size / 1000.0
    }

    /// Distance from the top of a line to its baseline at `font_size`.
    pub fn ascent(&self, font_size: f32) -> f32 {
        self.ascender * font_size / 1000.0
    }
}

/// Registry of the fonts layout can measure.
///
/// Unknown names fall back to Helvetica metrics.
#[derive(Debug, Clone)]
pub struct FontManager {
    fonts: HashMap<String, FontInfo>,
    fallback: FontInfo,
}

impl FontManager {
    /// Create a font manager with the Helvetica family registered.
    pub fn new() -> Self {
        let mut fonts = HashMap::new();
        for name in ["Helvetica", "Helvetica-Oblique"] {
            fonts.insert(name.to_string(), FontInfo::helvetica(name));
        }
        for name in ["Helvetica-Bold", "Helvetica-BoldOblique"] {
            fonts.insert(name.to_string(), FontInfo::helvetica_bold(name));
        }

        Self {
            fonts,
            fallback: FontInfo::helvetica("Helvetica"),
        }
    }

    /// Whether metrics for `name` are registered.
    pub fn is_known(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }

    /// Get font info, falling back to Helvetica if not found.
    pub fn get_font_or_default(&self, name: &str) -> &FontInfo {
        self.fonts.get(name).unwrap_or(&self.fallback)
    }

    /// Calculate the width of a string in the given font at the given size.
    pub fn text_width(&self, text: &str, font_name: &str, font_size: f32) -> f32 {
        self.get_font_or_default(font_name)
            .text_width(text, font_size)
    }

    /// Line height of the given font at the given size.
    pub fn line_height(&self, font_name: &str, font_size: f32) -> f32 {
        self.get_font_or_default(font_name).line_height(font_size)
    }
}

impl Default for FontManager {
    fn default() -> Self {
        Self::new()
    }
}
