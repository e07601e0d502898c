//! PDF content stream builder.
//!
//! Builds PDF content streams containing graphics and text operators
//! according to PDF specification ISO 32000-1:2008 Section 8-9.

use super::object_serializer::write_escaped_bytes;
use crate::error::Result;
use std::fmt;
use std::io::Write;

/// Operations that can be added to a content stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentStreamOp {
    /// Save graphics state (q)
    SaveState,
    /// Restore graphics state (Q)
    RestoreState,
    /// Set transformation matrix (cm)
    Transform(f32, f32, f32, f32, f32, f32),
    /// Begin text object (BT)
    BeginText,
    /// End text object (ET)
    EndText,
    /// Set font and size (Tf)
    SetFont(String, f32),
    /// Set text matrix (Tm)
    SetTextMatrix(f32, f32, f32, f32, f32, f32),
    /// Show text (Tj), already encoded to single-byte WinAnsi
    ShowText(Vec<u8>),
    /// Set line width (w)
    SetLineWidth(f32),
    /// Move to (m)
    MoveTo(f32, f32),
    /// Line to (l)
    LineTo(f32, f32),
    /// Curve to (c)
    CurveTo(f32, f32, f32, f32, f32, f32),
    /// Close path (h)
    ClosePath,
    /// Stroke (S)
    Stroke,
    /// Set graphics state from ExtGState dictionary (gs)
    SetExtGState(String),
    /// Set dash pattern (d)
    SetDashPattern(Vec<f32>, f32),
}

/// Builder for PDF content streams.
///
/// Tracks the selected font so repeated `Tf` operators are not emitted,
/// and forgets it again when a saved graphics state is restored.
#[derive(Debug, Default)]
pub struct ContentStreamBuilder {
    /// Operations in the stream
    operations: Vec<ContentStreamOp>,
    /// Current font name
    current_font: Option<String>,
    /// Current font size
    current_font_size: f32,
    /// Whether we're in a text object
    in_text_object: bool,
}

impl ContentStreamBuilder {
    /// Create a new content stream builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an operation to the stream.
    pub fn op(&mut self, op: ContentStreamOp) -> &mut Self {
        self.operations.push(op);
        self
    }

    /// Operations recorded so far.
    pub fn operations(&self) -> &[ContentStreamOp] {
        &self.operations
    }

    /// Begin a text object.
    pub fn begin_text(&mut self) -> &mut Self {
        if !self.in_text_object {
            self.op(ContentStreamOp::BeginText);
            self.in_text_object = true;
        }
        self
    }

    /// End a text object.
    pub fn end_text(&mut self) -> &mut Self {
        if self.in_text_object {
            self.op(ContentStreamOp::EndText);
            self.in_text_object = false;
        }
        self
    }

    /// Set font for text operations.
    pub fn set_font(&mut self, font_name: &str, size: f32) -> &mut Self {
        if self.current_font.as_deref() != Some(font_name) || self.current_font_size != size {
            self.op(ContentStreamOp::SetFont(font_name.to_string(), size));
            self.current_font = Some(font_name.to_string());
            self.current_font_size = size;
        }
        self
    }

    /// Add text with its baseline at (x, y).
    pub fn text(&mut self, text: &str, x: f32, y: f32) -> &mut Self {
        self.begin_text();
        self.op(ContentStreamOp::SetTextMatrix(1.0, 0.0, 0.0, 1.0, x, y));
        self.op(ContentStreamOp::ShowText(encode_win_ansi(text)))
    }

    /// Set line width.
    pub fn set_line_width(&mut self, width: f32) -> &mut Self {
        self.end_text();
        self.op(ContentStreamOp::SetLineWidth(width))
    }

    /// Move to a point (start a new subpath).
    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.end_text();
        self.op(ContentStreamOp::MoveTo(x, y))
    }

    /// Draw a line to a point.
    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.op(ContentStreamOp::LineTo(x, y))
    }

    /// Draw a cubic Bézier curve.
    pub fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) -> &mut Self {
        self.op(ContentStreamOp::CurveTo(x1, y1, x2, y2, x3, y3))
    }

    /// Close path.
    pub fn close_path(&mut self) -> &mut Self {
        self.op(ContentStreamOp::ClosePath)
    }

    /// Stroke the current path.
    pub fn stroke(&mut self) -> &mut Self {
        self.op(ContentStreamOp::Stroke)
    }

    /// Save the current graphics state.
    pub fn save_state(&mut self) -> &mut Self {
        self.end_text();
        self.op(ContentStreamOp::SaveState)
    }

    /// Restore the previous graphics state.
    ///
    /// `Q` also restores the text state, so the cached font is dropped and
    /// the next `set_font` call always emits `Tf`.
    pub fn restore_state(&mut self) -> &mut Self {
        self.end_text();
        self.current_font = None;
        self.current_font_size = 0.0;
        self.op(ContentStreamOp::RestoreState)
    }

    /// Set extended graphics state (for transparency).
    ///
    /// The `gs_name` should reference an ExtGState resource defined in the page.
    pub fn set_ext_gstate(&mut self, gs_name: &str) -> &mut Self {
        self.op(ContentStreamOp::SetExtGState(gs_name.to_string()))
    }

    /// Apply a transformation matrix `[a b c d e f]`.
    pub fn transform(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> &mut Self {
        self.end_text();
        self.op(ContentStreamOp::Transform(a, b, c, d, e, f))
    }

    /// Rotate the coordinate system by `degrees` (counter-clockwise) around `(ox, oy)`.
    pub fn rotate_about(&mut self, degrees: f32, ox: f32, oy: f32) -> &mut Self {
        let angle = degrees.to_radians();
        let (sin, cos) = angle.sin_cos();
        self.transform(cos, sin, -sin, cos, ox - ox * cos + oy * sin, oy - ox * sin - oy * cos)
    }

    /// Set dash pattern.
    pub fn set_dash_pattern(&mut self, pattern: Vec<f32>, phase: f32) -> &mut Self {
        self.op(ContentStreamOp::SetDashPattern(pattern, phase))
    }

    /// Set solid line (no dashing).
    pub fn set_solid_line(&mut self) -> &mut Self {
        self.set_dash_pattern(vec![], 0.0)
    }

    /// Build the content stream to bytes.
    pub fn build(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();

        for op in &self.operations {
            write_op(&mut buf, op)?;
            writeln!(buf)?;
        }
        if self.in_text_object {
            writeln!(buf, "ET")?;
        }

        Ok(buf)
    }
}

/// Operand formatting: at most four decimals, no trailing zeros, no `-0`.
struct Num(f32);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = format!("{:.4}", self.0);
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "-0" {
            write!(f, "0")
        } else {
            write!(f, "{}", trimmed)
        }
    }
}

/// Write a single operation to the buffer.
fn write_op<W: Write>(w: &mut W, op: &ContentStreamOp) -> std::io::Result<()> {
    match op {
        ContentStreamOp::SaveState => write!(w, "q"),
        ContentStreamOp::RestoreState => write!(w, "Q"),
        ContentStreamOp::Transform(a, b, c, d, e, f) => write!(
            w,
            "{} {} {} {} {} {} cm",
            Num(*a),
            Num(*b),
            Num(*c),
            Num(*d),
            Num(*e),
            Num(*f)
        ),
        ContentStreamOp::BeginText => write!(w, "BT"),
        ContentStreamOp::EndText => write!(w, "ET"),
        ContentStreamOp::SetFont(name, size) => write!(w, "/{} {} Tf", name, Num(*size)),
        ContentStreamOp::SetTextMatrix(a, b, c, d, e, f) => write!(
            w,
            "{} {} {} {} {} {} Tm",
            Num(*a),
            Num(*b),
            Num(*c),
            Num(*d),
            Num(*e),
            Num(*f)
        ),
        ContentStreamOp::ShowText(text) => {
            write!(w, "(")?;
            write_escaped_bytes(w, text)?;
            write!(w, ") Tj")
        },
        ContentStreamOp::SetLineWidth(width) => write!(w, "{} w", Num(*width)),
        ContentStreamOp::MoveTo(x, y) => write!(w, "{} {} m", Num(*x), Num(*y)),
        ContentStreamOp::LineTo(x, y) => write!(w, "{} {} l", Num(*x), Num(*y)),
        ContentStreamOp::CurveTo(x1, y1, x2, y2, x3, y3) => write!(
            w,
            "{} {} {} {} {} {} c",
            Num(*x1),
            Num(*y1),
            Num(*x2),
            Num(*y2),
            Num(*x3),
            Num(*y3)
        ),
        ContentStreamOp::ClosePath => write!(w, "h"),
        ContentStreamOp::Stroke => write!(w, "S"),
        ContentStreamOp::SetExtGState(name) => write!(w, "/{} gs", name),
        ContentStreamOp::SetDashPattern(pattern, phase) => {
            write!(w, "[")?;
            for (i, p) in pattern.iter().enumerate() {
                if i > 0 {
                    write!(w, " ")?;
                }
                write!(w, "{}", Num(*p))?;
            }
            write!(w, "] {} d", Num(*phase))
        },
    }
}

/// Encode text for a Base-14 font using WinAnsiEncoding.
///
/// Latin-1 maps directly; the typographic characters WinAnsi places in
/// 0x80..0x9F are translated; everything else becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            '\u{20AC}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(builder: &ContentStreamBuilder) -> String {
        String::from_utf8_lossy(&builder.build().unwrap()).into_owned()
    }

    #[test]
    fn test_simple_text() {
        let mut builder = ContentStreamBuilder::new();
        builder
            .set_font("Helvetica", 7.0)
            .text("Total", 12.0, 800.0)
            .end_text();

        let content = render(&builder);
        assert!(content.contains("/Helvetica 7 Tf"));
        assert!(content.contains("BT\n1 0 0 1 12 800 Tm\n(Total) Tj\nET"));
    }

    #[test]
    fn test_font_dedup_and_reset_after_restore() {
        let mut builder = ContentStreamBuilder::new();
        builder.set_font("Helvetica", 5.0).set_font("Helvetica", 5.0);
        assert_eq!(builder.operations().len(), 1);

        builder.save_state().restore_state().set_font("Helvetica", 5.0);
        let fonts = builder
            .operations()
            .iter()
            .filter(|op| matches!(op, ContentStreamOp::SetFont(..)))
            .count();
        assert_eq!(fonts, 2);
    }

    #[test]
    fn test_path_operations_close_text_object() {
        let mut builder = ContentStreamBuilder::new();
        builder
            .text("A", 0.0, 0.0)
            .set_line_width(0.1)
            .move_to(10.0, 20.0)
            .line_to(110.0, 20.0)
            .stroke();

        let content = render(&builder);
        assert!(content.contains("(A) Tj\nET\n0.1 w\n10 20 m\n110 20 l\nS"));
    }

    #[test]
    fn test_escaped_text() {
        let mut builder = ContentStreamBuilder::new();
        builder.text("Net (EUR) \\ gross", 0.0, 0.0);
        let content = render(&builder);
        assert!(content.contains("(Net \\(EUR\\) \\\\ gross) Tj"));
    }

    #[test]
    fn test_unterminated_text_is_closed_on_build() {
        let mut builder = ContentStreamBuilder::new();
        builder.text("open", 1.0, 1.0);
        assert!(render(&builder).trim_end().ends_with("ET"));
    }

    #[test]
    fn test_solid_line_and_ext_gstate() {
        let mut builder = ContentStreamBuilder::new();
        builder.set_solid_line().set_ext_gstate("GSa20");
        let content = render(&builder);
        assert!(content.contains("[] 0 d"));
        assert!(content.contains("/GSa20 gs"));
    }

    #[test]
    fn test_rotate_about_origin_keeps_origin_fixed() {
        let mut builder = ContentStreamBuilder::new();
        builder.rotate_about(90.0, 250.0, 420.0);
        match &builder.operations()[0] {
            ContentStreamOp::Transform(a, b, c, d, e, f) => {
                // The origin maps onto itself
                let x = a * 250.0 + c * 420.0 + e;
                let y = b * 250.0 + d * 420.0 + f;
                assert!((x - 250.0).abs() < 1e-3);
                assert!((y - 420.0).abs() < 1e-3);
            },
            other => panic!("unexpected op {:?}", other),
        }
    }

    #[test]
    fn test_operands_are_rounded() {
        assert_eq!(Num(72.82).to_string(), "72.82");
        assert_eq!(Num(9.999_998).to_string(), "10");
        assert_eq!(Num(-0.000_01).to_string(), "0");
        assert_eq!(Num(0.1).to_string(), "0.1");
        assert_eq!(Num(-12.5).to_string(), "-12.5");
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("Abc"), b"Abc".to_vec());
        assert_eq!(encode_win_ansi("é€"), vec![0xE9, 0x80]);
        assert_eq!(encode_win_ansi("日"), vec![b'?']);
    }
}
