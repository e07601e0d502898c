// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # PDF Formkit
//!
//! Layout and pagination engine for business forms: labeled input boxes,
//! bordered tables with split headers, wrapped text and watermarks, laid
//! out top to bottom with automatic page breaks.
//!
//! ## Core Features
//!
//! - **Word wrapping**: greedy wrap that honors explicit line breaks
//! - **Alignment**: left, center and right offsets that never go negative
//! - **Pagination**: page breaks before rows and value lines that do not fit
//! - **Tables**: headers with sub-columns, per-cell borders, closing border
//! - **Input fields**: rounded boxes with a label and a wrapped value
//! - **Watermarks**: faded, rotated text stamped on every page
//! - **Bundling**: several finished PDFs packed into one zip archive
//!
//! ## Architecture
//!
//! ```text
//! FormDescription (JSON)          caller code
//!          ↓                           ↓
//!     Document<C: Canvas>  ←── Cursor (owned by the caller)
//!          │  wrap_text, resolve_gap (layout)
//!          ↓
//!   Canvas: PdfCanvas → writer::PdfWriter → PDF bytes
//!           RecordingCanvas → DrawOp log
//!          ↓
//!     OutputMerger → zip archive
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use pdf_formkit::{CellOptions, Cursor, DataCell, Document, HeaderSpec, TextInputField};
//!
//! # fn main() -> pdf_formkit::Result<()> {
//! let mut doc = Document::new();
//! doc.set_watermark("DRAFT");
//!
//! let mut pos = Cursor::new(doc.margin(), doc.margin());
//! doc.print_text(&mut pos, &["Delivery note"]);
//! doc.print_multiple_input_text(
//!     &mut pos,
//!     &[vec![
//!         TextInputField::new(200.0).label("Customer").value("Ada Lovelace"),
//!         TextInputField::new(100.0).label("Date").value("2024-03-01"),
//!     ]],
//! );
//!
//! let headers = vec![
//!     HeaderSpec::new("Item", 200.0),
//!     HeaderSpec::new("Price", 50.0).with_children(["Net", "Gross"]),
//! ];
//! let rows = vec![vec![
//!     DataCell::new("Widget"),
//!     DataCell::new("10.00").with_options(CellOptions::new().gap(2.0)),
//!     DataCell::new("11.90"),
//! ]];
//! doc.print_table(&mut pos, &headers, &rows);
//!
//! let pdf = doc.finish()?;
//! assert!(pdf.starts_with(b"%PDF-"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// PDF production
pub mod object;
pub mod writer;

// Drawing surfaces
pub mod canvas;

// Layout primitives and the document engine
pub mod document;
pub mod layout;

// Output bundling
pub mod merge;

// Declarative forms
pub mod form;

// Re-exports
pub use canvas::{Canvas, DrawOp, PdfCanvas, RecordingCanvas};
pub use config::{LayoutConfig, PageSize};
pub use document::{Document, TableStyle};
pub use error::{Error, Result};
pub use layout::{Align, CellOptions, Cursor, DataCell, FontStyle, HeaderSpec, TextInputField};
pub use merge::{zip_documents, NamedBuffer, OutputMerger};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
