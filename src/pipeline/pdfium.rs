//! Shared pdfium access: library binding and document loading.
//!
//! pdfium is a shared library loaded at runtime, not a compiled-in
//! dependency. Resolution order: the `PDFIUM_LIB_PATH` environment variable
//! (pointing at the library file itself), then a platform-named library in
//! the current working directory, then the system library. Both the cover
//! and text stages bind through here so the resolution rules stay in one
//! place.

use crate::error::Pdf2EpubError;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};

/// Bind to a pdfium library.
pub fn bind() -> Result<Pdfium, Pdf2EpubError> {
    // 1. Environment variable override.
    if let Ok(env_path) = std::env::var("PDFIUM_LIB_PATH") {
        let p = PathBuf::from(env_path);
        if p.exists() {
            return Pdfium::bind_to_library(&p)
                .map(Pdfium::new)
                .map_err(|e| Pdf2EpubError::PdfiumBindingFailed(e.to_string()));
        }
        // Env var set but file missing: fall through to the other locations.
    }

    // 2. Library in the working directory, then the system library.
    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map(Pdfium::new)
        .map_err(|e| Pdf2EpubError::PdfiumBindingFailed(e.to_string()))
}

/// Load a PDF document, classifying password failures.
///
/// pdfium reports a wrong password and a missing password with the same
/// error code; which one the caller sees depends on whether a password was
/// supplied at all.
pub fn load_document<'a>(
    pdfium: &'a Pdfium,
    path: &Path,
    password: Option<&'a str>,
) -> Result<PdfDocument<'a>, Pdf2EpubError> {
    pdfium.load_pdf_from_file(path, password).map_err(|e| {
        let err_str = format!("{:?}", e);
        if err_str.contains("Password") || err_str.contains("password") {
            if password.is_some() {
                Pdf2EpubError::WrongPassword {
                    path: path.to_path_buf(),
                }
            } else {
                Pdf2EpubError::PasswordRequired {
                    path: path.to_path_buf(),
                }
            }
        } else {
            Pdf2EpubError::CorruptPdf {
                path: path.to_path_buf(),
                detail: err_str,
            }
        }
    })
}
