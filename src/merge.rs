//! Bundling finished documents into one archive.
//!
//! Each document becomes a Deflate-compressed zip entry, in the order it
//! was added.
//!
//! ## Example
//!
//! ```
//! use pdf_formkit::{Document, OutputMerger};
//!
//! let mut merger = OutputMerger::new();
//! merger.add("first.pdf", Document::new().finish().unwrap());
//! merger.add("second.pdf", Document::new().finish().unwrap());
//! let archive = merger.finish().unwrap();
//! assert!(archive.starts_with(b"PK"));
//! ```

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A finished document and its archive entry name.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedBuffer {
    /// Entry name inside the archive
    pub name: String,
    /// Document bytes
    pub buffer: Vec<u8>,
}

impl NamedBuffer {
    /// Pair a document with its entry name.
    pub fn new(name: impl Into<String>, buffer: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            buffer,
        }
    }
}

/// Collects finished documents and writes them as one zip archive.
#[derive(Debug, Default)]
pub struct OutputMerger {
    entries: Vec<NamedBuffer>,
}

impl OutputMerger {
    /// Empty merger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a document under `name`.
    pub fn add(&mut self, name: impl Into<String>, buffer: Vec<u8>) -> &mut Self {
        self.entries.push(NamedBuffer::new(name, buffer));
        self
    }

    /// Number of queued documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no document is queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the archive.
    ///
    /// Fails with [`Error::EmptyArchive`] when nothing was added and with
    /// [`Error::DuplicateEntry`] when two documents share a name.
    pub fn finish(&self) -> Result<Vec<u8>> {
        zip_documents(&self.entries)
    }
}

/// Write `documents` into a zip archive, one entry each.
pub fn zip_documents(documents: &[NamedBuffer]) -> Result<Vec<u8>> {
    if documents.is_empty() {
        return Err(Error::EmptyArchive);
    }

    let mut seen = HashSet::new();
    for doc in documents {
        if !seen.insert(doc.name.as_str()) {
            return Err(Error::DuplicateEntry(doc.name.clone()));
        }
    }

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for doc in documents {
        zip.start_file(doc.name.as_str(), options)?;
        zip.write_all(&doc.buffer)?;
    }

    let bytes = zip.finish()?.into_inner();
    log::debug!("Archived {} documents into {} bytes", documents.len(), bytes.len());
    Ok(bytes)
}
