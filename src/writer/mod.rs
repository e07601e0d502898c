//! PDF writing module.
//!
//! Low-level PDF production used by [`crate::canvas::PdfCanvas`]. Layout code
//! never talks to this module directly; it draws through the
//! [`Canvas`](crate::canvas::Canvas) trait.
//!
//! ## Architecture
//!
//! ```text
//! Document (layout operations, top-down coordinates)
//!     ↓
//! [PdfCanvas] (y flip, quadratic → cubic, opacity → ExtGState)
//!     ↓
//! [ContentStreamBuilder] (operators per page)
//!     ↓
//! [PdfWriter] (catalog, pages, resources, xref, trailer)
//!     ↓
//! [ObjectSerializer] (serializes PDF objects)
//!     ↓
//! PDF bytes
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use pdf_formkit::writer::PdfWriter;
//!
//! let mut writer = PdfWriter::new();
//! let page = writer.add_page(595.28, 841.89);
//! writer.register_font("Helvetica");
//! if let Some(content) = writer.page_content(page) {
//!     content.set_font("Helvetica", 12.0).text("Hello", 72.0, 720.0);
//! }
//! let bytes = writer.finish()?;
//! ```

mod content_stream;
mod font_manager;
mod graphics_state;
mod object_serializer;
mod pdf_writer;

pub use content_stream::{encode_win_ansi, ContentStreamBuilder, ContentStreamOp};
pub use font_manager::{FontInfo, FontManager};
pub use graphics_state::ExtGStateBuilder;
pub use object_serializer::ObjectSerializer;
pub use pdf_writer::{PdfWriter, PdfWriterConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        let _builder = ContentStreamBuilder::new();
        let _fonts = FontManager::new();
        let _gs = ExtGStateBuilder::new();
        let _serializer = ObjectSerializer::new();
        let _writer = PdfWriter::new();
    }
}
