//! Text extraction: pull per-page text out of the PDF in reading order.
//!
//! Extraction is best-effort by design. A page with no text layer (scanned
//! image, vector-only art) contributes nothing rather than failing, and the
//! orchestrator downgrades a whole-document failure to empty text so a
//! damaged PDF still produces an EPUB.

use crate::error::Pdf2EpubError;
use crate::pipeline::pdfium;
use std::path::Path;
use tracing::info;

/// Extract the text of every page of `pdf_path`, joined with `"\n"` in page
/// order. `password` decrypts the document when given.
pub fn extract(pdf_path: &Path, password: Option<&str>) -> Result<String, Pdf2EpubError> {
    let pdfium = pdfium::bind()?;
    let document = pdfium::load_document(&pdfium, pdf_path, password)?;

    let pages = document.pages();
    let mut pages_text: Vec<String> = Vec::with_capacity(pages.len() as usize);
    for page in pages.iter() {
        let text = page
            .text()
            .map_err(|e| Pdf2EpubError::TextExtractionFailed {
                detail: format!("{:?}", e),
            })?
            .all();
        if !text.is_empty() {
            pages_text.push(text);
        }
    }

    let joined = pages_text.join("\n");
    info!(
        "Extracted text from '{}' (length: {} chars).",
        pdf_path.display(),
        joined.chars().count()
    );
    Ok(joined)
}
