//! EPUB assembly: build the in-memory book from extracted text.
//!
//! The document model is deliberately small: one XHTML chapter holding one
//! `<p>` per extracted line, a fixed stylesheet, an inline table of contents,
//! and an optional cover. `epub-builder` supplies the container plumbing
//! (mimetype, manifest, spine, nav documents); this module only decides what
//! goes into it and in which spine order.

use crate::error::Pdf2EpubError;
use crate::request::Metadata;
use epub_builder::{EpubBuilder, EpubContent, ReferenceType, ZipLibrary};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Chapter body used when the PDF yields no extractable text.
pub const PLACEHOLDER_TEXT: &str = "No textual content could be extracted from this PDF.";

/// Stylesheet shipped with every generated EPUB.
const STYLESHEET: &str = "body { font-family: Arial, sans-serif; margin: 10px; }\n\
p { text-align: justify; margin-bottom: 1em; }\n";

/// An assembled, not-yet-serialised EPUB.
///
/// Created by [`EpubDocument::from_text`]; consumed by
/// [`EpubDocument::into_bytes`] (or [`crate::pipeline::write::write_epub`],
/// which does the serialisation and the disk I/O in one step).
#[derive(Debug)]
pub struct EpubDocument {
    builder: EpubBuilder<ZipLibrary>,
    title: String,
    author: String,
    chapter_html: String,
    cover: Option<PathBuf>,
}

impl EpubDocument {
    /// Assemble an EPUB from extracted text.
    ///
    /// * `text` — chapter source; one paragraph per line, XML-escaped. Blank
    ///   text is replaced by [`PLACEHOLDER_TEXT`] so the chapter is never
    ///   empty.
    /// * `cover_image` — path to a raster cover. A path that does not exist
    ///   is silently omitted; a path that exists but cannot be read is an
    ///   error.
    /// * `metadata` — extra Dublin Core fields, attached in order with
    ///   duplicates preserved. Keys outside the EPUB vocabulary fail with
    ///   [`Pdf2EpubError::InvalidMetadata`].
    pub fn from_text(
        text: &str,
        cover_image: Option<&Path>,
        title: &str,
        author: &str,
        metadata: &Metadata,
    ) -> Result<Self, Pdf2EpubError> {
        let mut builder =
            EpubBuilder::new(ZipLibrary::new().map_err(assembly_err)?).map_err(assembly_err)?;

        builder.metadata("title", title).map_err(assembly_err)?;
        builder.metadata("lang", "en").map_err(assembly_err)?;
        builder.metadata("author", author).map_err(assembly_err)?;

        for (key, value) in metadata.iter() {
            builder
                .metadata(key, value)
                .map_err(|e| Pdf2EpubError::InvalidMetadata {
                    key: key.to_string(),
                    detail: e.to_string(),
                })?;
        }

        let text = if text.trim().is_empty() {
            warn!("No text content extracted. Adding placeholder paragraph.");
            PLACEHOLDER_TEXT
        } else {
            text
        };
        let chapter_html = chapter_html(text);

        builder
            .stylesheet(STYLESHEET.as_bytes())
            .map_err(assembly_err)?;

        // The inline TOC page comes first in the spine, then the chapter.
        builder.inline_toc();

        let mut cover = None;
        if let Some(cover_path) = cover_image {
            if cover_path.exists() {
                let bytes =
                    fs::read(cover_path).map_err(|e| Pdf2EpubError::CoverReadFailed {
                        path: cover_path.to_path_buf(),
                        source: e,
                    })?;
                let name = cover_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "cover.jpg".to_string());
                let mime = mime_guess::from_path(cover_path).first_or_octet_stream();
                builder
                    .add_cover_image(&name, bytes.as_slice(), mime.as_ref())
                    .map_err(assembly_err)?;
                cover = Some(cover_path.to_path_buf());
            }
            // A missing cover file is not an error; the EPUB just has none.
        }

        builder
            .add_content(
                EpubContent::new("content.xhtml", chapter_html.as_bytes())
                    .title("Content")
                    .reftype(ReferenceType::Text),
            )
            .map_err(assembly_err)?;

        Ok(Self {
            builder,
            title: title.to_string(),
            author: author.to_string(),
            chapter_html,
            cover,
        })
    }

    /// Book title as attached to the package metadata.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Book author as attached to the package metadata.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Full XHTML source of the single chapter.
    pub fn chapter_html(&self) -> &str {
        &self.chapter_html
    }

    /// Path of the cover that was actually attached, if any.
    pub fn cover(&self) -> Option<&Path> {
        self.cover.as_deref()
    }

    /// Serialise the EPUB container to a byte buffer.
    ///
    /// Each call produces a fresh package identifier, so two serialisations
    /// of the same document differ in their manifest but not their content.
    pub fn into_bytes(mut self) -> Result<Vec<u8>, Pdf2EpubError> {
        let mut buffer = Vec::new();
        self.builder.generate(&mut buffer).map_err(assembly_err)?;
        Ok(buffer)
    }
}

fn assembly_err<E: std::fmt::Display>(e: E) -> Pdf2EpubError {
    Pdf2EpubError::AssemblyFailed {
        detail: e.to_string(),
    }
}

/// One `<p>` per line of `text`, wrapped in a full XHTML document.
///
/// Blank lines become empty paragraphs, which keeps vertical rhythm from
/// the source without inventing structure the extractor never saw.
fn chapter_html(text: &str) -> String {
    let mut paragraphs = String::new();
    for line in text.lines() {
        paragraphs.push_str("  <p>");
        paragraphs.push_str(&escape_text(line));
        paragraphs.push_str("</p>\n");
    }
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<html xmlns="http://www.w3.org/1999/xhtml">
<head>
  <title>Content</title>
  <link rel="stylesheet" type="text/css" href="stylesheet.css"/>
</head>
<body>
{paragraphs}</body>
</html>
"#
    )
}

/// Escape text for use inside an XML text node.
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
