//! PDF document writer.
//!
//! Assembles complete PDF documents with proper structure:
//! header, body, xref table, and trailer.

use super::content_stream::ContentStreamBuilder;
use super::graphics_state::ExtGStateBuilder;
use super::object_serializer::ObjectSerializer;
use crate::error::Result;
use crate::object::{Object, ObjectRef};
use std::collections::{BTreeMap, HashMap};
use std::io::Write;

/// Configuration for PDF generation.
#[derive(Debug, Clone)]
pub struct PdfWriterConfig {
    /// PDF version (e.g., "1.7")
    pub version: String,
    /// Document title
    pub title: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Creator application
    pub creator: Option<String>,
    /// Whether to compress content streams with FlateDecode
    pub compress: bool,
}

impl Default for PdfWriterConfig {
    fn default() -> Self {
        Self {
            version: "1.7".to_string(),
            title: None,
            author: None,
            subject: None,
            creator: Some("pdf_formkit".to_string()),
            compress: false,
        }
    }
}

impl PdfWriterConfig {
    /// Set document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set document author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set document subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Enable or disable stream compression.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

/// Compress data using Flate/Deflate compression.
fn compress_data(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Internal page data.
struct PageData {
    width: f32,
    height: f32,
    content: ContentStreamBuilder,
}

/// PDF document writer.
///
/// Pages are appended in order and drawn into through their
/// [`ContentStreamBuilder`]. Fonts and graphics states are registered on
/// first use and shared by every page's resource dictionary.
pub struct PdfWriter {
    config: PdfWriterConfig,
    pages: Vec<PageData>,
    /// Base-14 font names in registration order
    fonts: Vec<String>,
    /// ExtGState resources keyed by resource name
    ext_gstates: BTreeMap<String, Object>,
}

impl PdfWriter {
    /// Create a new PDF writer with default config.
    pub fn new() -> Self {
        Self::with_config(PdfWriterConfig::default())
    }

    /// Create a PDF writer with custom config.
    pub fn with_config(config: PdfWriterConfig) -> Self {
        Self {
            config,
            pages: Vec::new(),
            fonts: Vec::new(),
            ext_gstates: BTreeMap::new(),
        }
    }

    /// Add a page with the given dimensions, returning its index.
    pub fn add_page(&mut self, width: f32, height: f32) -> usize {
        self.pages.push(PageData {
            width,
            height,
            content: ContentStreamBuilder::new(),
        });
        self.pages.len() - 1
    }

    /// Number of pages added so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Content stream of the page at `index`.
    pub fn page_content(&mut self, index: usize) -> Option<&mut ContentStreamBuilder> {
        self.pages.get_mut(index).map(|page| &mut page.content)
    }

    /// Register a Base-14 font so pages can select it by name.
    pub fn register_font(&mut self, font_name: &str) {
        if !self.fonts.iter().any(|f| f == font_name) {
            self.fonts.push(font_name.to_string());
        }
    }

    /// Register a graphics state, returning the resource name to use with `gs`.
    pub fn register_ext_gstate(&mut self, state: &ExtGStateBuilder) -> String {
        let name = state.resource_name();
        self.ext_gstates
            .entry(name.clone())
            .or_insert_with(|| state.build());
        name
    }

    /// Build the complete PDF document.
    pub fn finish(self) -> Result<Vec<u8>> {
        let serializer = ObjectSerializer::compact();
        let mut output = Vec::new();
        let mut xref_offsets: Vec<(u32, usize)> = Vec::new();

        writeln!(output, "%PDF-{}", self.config.version)?;
        // Binary marker (recommended for binary content)
        output.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

        // Object numbering: catalog, pages, fonts, graphics states, then
        // a (page, content) pair per page, and info last
        let mut next_id = 1u32;
        let mut alloc = || {
            let id = next_id;
            next_id += 1;
            id
        };

        let catalog_id = alloc();
        let pages_id = alloc();

        let font_objects: Vec<(u32, &String)> =
            self.fonts.iter().map(|name| (alloc(), name)).collect();
        let gstate_objects: Vec<(u32, &String, &Object)> = self
            .ext_gstates
            .iter()
            .map(|(name, obj)| (alloc(), name, obj))
            .collect();
        let page_ids: Vec<(u32, u32)> = self.pages.iter().map(|_| (alloc(), alloc())).collect();
        let info_id = alloc();
        let size = next_id;

        let font_resources: HashMap<String, Object> = font_objects
            .iter()
            .map(|(id, name)| ((*name).clone(), Object::Reference(ObjectRef::new(*id, 0))))
            .collect();
        let gstate_resources: HashMap<String, Object> = gstate_objects
            .iter()
            .map(|(id, name, _)| ((*name).clone(), Object::Reference(ObjectRef::new(*id, 0))))
            .collect();

        let mut resources = vec![("Font", Object::Dictionary(font_resources))];
        if !gstate_resources.is_empty() {
            resources.push(("ExtGState", Object::Dictionary(gstate_resources)));
        }
        let resources = ObjectSerializer::dict(resources);

        let catalog_obj = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Catalog")),
            ("Pages", ObjectSerializer::reference(pages_id, 0)),
        ]);
        xref_offsets.push((catalog_id, output.len()));
        serializer.serialize_indirect(&mut output, catalog_id, 0, &catalog_obj)?;

        let page_refs: Vec<Object> = page_ids
            .iter()
            .map(|(page_id, _)| ObjectSerializer::reference(*page_id, 0))
            .collect();
        let pages_obj = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Pages")),
            ("Kids", Object::Array(page_refs)),
            ("Count", ObjectSerializer::integer(self.pages.len() as i64)),
        ]);
        xref_offsets.push((pages_id, output.len()));
        serializer.serialize_indirect(&mut output, pages_id, 0, &pages_obj)?;

        for (font_id, font_name) in &font_objects {
            let font_obj = ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Font")),
                ("Subtype", ObjectSerializer::name("Type1")),
                ("BaseFont", ObjectSerializer::name(font_name)),
                ("Encoding", ObjectSerializer::name("WinAnsiEncoding")),
            ]);
            xref_offsets.push((*font_id, output.len()));
            serializer.serialize_indirect(&mut output, *font_id, 0, &font_obj)?;
        }

        for (gs_id, _, gs_obj) in &gstate_objects {
            xref_offsets.push((*gs_id, output.len()));
            serializer.serialize_indirect(&mut output, *gs_id, 0, gs_obj)?;
        }

        for (page_data, (page_id, content_id)) in self.pages.iter().zip(&page_ids) {
            let raw_content = page_data.content.build()?;

            let (content_bytes, is_compressed) = if self.config.compress {
                match compress_data(&raw_content) {
                    Ok(compressed) => (compressed, true),
                    Err(e) => {
                        log::warn!("content stream compression failed, writing it raw: {}", e);
                        (raw_content, false)
                    },
                }
            } else {
                (raw_content, false)
            };

            let mut content_dict = HashMap::new();
            content_dict.insert("Length".to_string(), Object::Integer(content_bytes.len() as i64));
            if is_compressed {
                content_dict.insert("Filter".to_string(), Object::Name("FlateDecode".to_string()));
            }

            let page_obj = ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Page")),
                ("Parent", ObjectSerializer::reference(pages_id, 0)),
                (
                    "MediaBox",
                    ObjectSerializer::rect(
                        0.0,
                        0.0,
                        page_data.width as f64,
                        page_data.height as f64,
                    ),
                ),
                ("Contents", ObjectSerializer::reference(*content_id, 0)),
                ("Resources", resources.clone()),
            ]);
            xref_offsets.push((*page_id, output.len()));
            serializer.serialize_indirect(&mut output, *page_id, 0, &page_obj)?;

            let content_obj = Object::Stream {
                dict: content_dict,
                data: bytes::Bytes::from(content_bytes),
            };
            xref_offsets.push((*content_id, output.len()));
            serializer.serialize_indirect(&mut output, *content_id, 0, &content_obj)?;
        }

        let mut info_entries = Vec::new();
        if let Some(title) = &self.config.title {
            info_entries.push(("Title", ObjectSerializer::string(title)));
        }
        if let Some(author) = &self.config.author {
            info_entries.push(("Author", ObjectSerializer::string(author)));
        }
        if let Some(subject) = &self.config.subject {
            info_entries.push(("Subject", ObjectSerializer::string(subject)));
        }
        if let Some(creator) = &self.config.creator {
            info_entries.push(("Creator", ObjectSerializer::string(creator)));
        }
        let info_obj = ObjectSerializer::dict(info_entries);
        xref_offsets.push((info_id, output.len()));
        serializer.serialize_indirect(&mut output, info_id, 0, &info_obj)?;

        let xref_start = output.len();
        writeln!(output, "xref")?;
        writeln!(output, "0 {}", size)?;
        // Object 0 is always free
        writeln!(output, "0000000000 65535 f ")?;

        xref_offsets.sort_by_key(|(id, _)| *id);
        for (_, offset) in &xref_offsets {
            writeln!(output, "{:010} 00000 n ", offset)?;
        }

        let trailer = ObjectSerializer::dict(vec![
            ("Size", ObjectSerializer::integer(size as i64)),
            ("Root", ObjectSerializer::reference(catalog_id, 0)),
            ("Info", ObjectSerializer::reference(info_id, 0)),
        ]);

        writeln!(output, "trailer")?;
        serializer.serialize_into(&mut output, &trailer)?;
        writeln!(output)?;
        writeln!(output, "startxref")?;
        writeln!(output, "{}", xref_start)?;
        write!(output, "%%EOF")?;

        Ok(output)
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}
