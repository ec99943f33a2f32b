//! EPUB serialisation: put the assembled container on disk.
//!
//! Uses atomic write (temp file + rename) so a failed run never leaves a
//! truncated EPUB at the destination. The parent directory is not created;
//! a bad output path is that file's fatal error, not something to paper
//! over.

use crate::error::Pdf2EpubError;
use crate::pipeline::assemble::EpubDocument;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Serialise `document` to an EPUB file at `path`, overwriting if present.
pub fn write_epub(document: EpubDocument, path: &Path) -> Result<(), Pdf2EpubError> {
    debug!("Attempting to write EPUB file to: {}", path.display());

    let bytes = document.into_bytes()?;

    // Atomic write: write to temp, then rename
    let tmp_path = path.with_extension("epub.tmp");
    fs::write(&tmp_path, &bytes).map_err(|e| Pdf2EpubError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    fs::rename(&tmp_path, path).map_err(|e| Pdf2EpubError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!("EPUB successfully saved: {}", path.display());
    Ok(())
}
