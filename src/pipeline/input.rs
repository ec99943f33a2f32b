//! Input validation: pre-flight checks on a user-supplied PDF path.
//!
//! pdfium reports corrupt input only once a stage is already under way, and
//! the pipeline writes its cover artifact before text extraction runs. A
//! doomed file therefore has to be rejected before any artifact exists.
//! Checking the PDF magic bytes (`%PDF`) up front turns "garbage in" into a
//! meaningful error instead of a half-written output tree.

use crate::error::Pdf2EpubError;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Validate that `path` exists, is readable, and starts with the PDF magic.
pub fn validate(path: &Path) -> Result<(), Pdf2EpubError> {
    if !path.exists() {
        return Err(Pdf2EpubError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    // Check read permission by attempting to open
    match std::fs::File::open(path) {
        Ok(mut f) => {
            let mut magic = [0u8; 4];
            // A file too short to hold the magic is not a PDF either.
            if f.read_exact(&mut magic).is_err() || &magic != b"%PDF" {
                return Err(Pdf2EpubError::NotAPdf {
                    path: path.to_path_buf(),
                    magic,
                });
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(Pdf2EpubError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(_) => {
            return Err(Pdf2EpubError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
    }

    debug!("Validated input PDF: {}", path.display());
    Ok(())
}
