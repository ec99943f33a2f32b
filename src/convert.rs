//! Conversion entry points: one PDF in, one EPUB out.
//!
//! [`convert`] runs the full pipeline for a single request and returns the
//! output path or the first fatal error. [`convert_batch`] wraps it for many
//! requests: every failure is logged and skipped, so one bad file cannot
//! sink the rest of the batch.

use crate::error::Pdf2EpubError;
use crate::pipeline::assemble::EpubDocument;
use crate::pipeline::{cover, input, text, write};
use crate::request::ConversionRequest;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Convert a single PDF to an EPUB.
///
/// # Returns
/// The path of the written EPUB.
///
/// # Errors
/// Fatal failures only: invalid input file, invalid metadata key, assembly
/// or write errors. A failing cover or text stage is not fatal — the EPUB
/// is produced without a cover, or with a placeholder chapter.
pub fn convert(request: &ConversionRequest) -> Result<PathBuf, Pdf2EpubError> {
    info!("Starting conversion: {}", request.input.display());

    // ── Step 1: Validate input ───────────────────────────────────────────
    input::validate(&request.input)?;

    // ── Step 2: Resolve output path ──────────────────────────────────────
    let output = request
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&request.input));

    // ── Step 3: Cover image ──────────────────────────────────────────────
    let cover_image = resolve_cover(request);

    // ── Step 4: Extract text ─────────────────────────────────────────────
    let text_content = match text::extract(&request.input, request.password.as_deref()) {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to extract text from '{}': {}",
                request.input.display(),
                e
            );
            String::new()
        }
    };

    // ── Step 5: Title and author ─────────────────────────────────────────
    let title = derive_title(request);
    let author = derive_author(request);

    // ── Step 6: Assemble and write ───────────────────────────────────────
    let document = EpubDocument::from_text(
        &text_content,
        cover_image.as_deref(),
        &title,
        &author,
        &request.metadata,
    )?;
    write::write_epub(document, &output)?;

    Ok(output)
}

/// Convert many PDFs, one after the other.
///
/// Failures are logged and skipped; the returned paths are the EPUBs that
/// were actually written. Never fails as a whole.
pub fn convert_batch(requests: &[ConversionRequest]) -> Vec<PathBuf> {
    let mut outputs = Vec::with_capacity(requests.len());
    for request in requests {
        match convert(request) {
            Ok(path) => outputs.push(path),
            Err(e) => {
                error!(
                    "Failed to convert '{}' to EPUB: {}",
                    request.input.display(),
                    e
                );
            }
        }
    }
    outputs
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// Derive the output path by swapping the input's extension for `.epub`.
fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("epub")
}

/// Custom cover when given and present on disk, else a generated one.
fn resolve_cover(request: &ConversionRequest) -> Option<PathBuf> {
    if let Some(custom) = &request.custom_cover {
        if custom.exists() {
            info!("Using custom cover image: {}", custom.display());
            return Some(custom.clone());
        }
    }
    cover::generate(&request.input, &request.cover_output, request.dpi)
}

/// Metadata `title` when present, else the input's file name (extension kept).
fn derive_title(request: &ConversionRequest) -> String {
    if let Some(title) = request.metadata.get("title") {
        return title.to_string();
    }
    request
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Untitled".to_string())
}

/// Metadata `author` when present, else `"Unknown"`.
fn derive_author(request: &ConversionRequest) -> String {
    request
        .metadata
        .get("author")
        .unwrap_or("Unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Metadata;

    #[test]
    fn output_path_swaps_extension() {
        assert_eq!(
            default_output_path(Path::new("dir/report.pdf")),
            Path::new("dir/report.epub")
        );
        assert_eq!(
            default_output_path(Path::new("a.b.pdf")),
            Path::new("a.b.epub")
        );
    }

    #[test]
    fn output_path_appends_extension_when_input_has_none() {
        assert_eq!(
            default_output_path(Path::new("README")),
            Path::new("README.epub")
        );
    }

    #[test]
    fn title_prefers_metadata_then_file_name() {
        let mut request = ConversionRequest::new("dir/report.pdf");
        assert_eq!(derive_title(&request), "report.pdf");
        request.metadata = Metadata::from_pairs(["title=Moby Dick"]);
        assert_eq!(derive_title(&request), "Moby Dick");
    }

    #[test]
    fn author_prefers_metadata_then_unknown() {
        let mut request = ConversionRequest::new("report.pdf");
        assert_eq!(derive_author(&request), "Unknown");
        request.metadata = Metadata::from_pairs(["author=Melville"]);
        assert_eq!(derive_author(&request), "Melville");
    }

    #[test]
    fn batch_skips_invalid_inputs_without_writing_output() {
        let dir = tempfile::tempdir().expect("tempdir");
        let bad = dir.path().join("bad.pdf");
        std::fs::write(&bad, b"garbage, not a pdf").expect("write");

        let outputs = convert_batch(&[ConversionRequest::new(&bad)]);

        assert!(outputs.is_empty());
        assert!(!bad.with_extension("epub").exists());
    }
}
