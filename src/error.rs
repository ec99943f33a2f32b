//! Error types for the pdf2epub library.
//!
//! One enum covers every failure the pipeline can produce, but not every
//! variant is fatal to a conversion:
//!
//! * **Fatal** — input validation, EPUB assembly, and output writing
//!   (e.g. [`Pdf2EpubError::FileNotFound`], [`Pdf2EpubError::InvalidMetadata`],
//!   [`Pdf2EpubError::OutputWriteFailed`]). Returned as `Err` from
//!   [`crate::convert`].
//!
//! * **Soft** — cover generation and text extraction. The stages return
//!   them, but the orchestrator absorbs them at the stage boundary (no
//!   cover / empty text) after logging, so a scanned or damaged PDF still
//!   yields an EPUB.
//!
//! [`crate::convert_batch`] absorbs the fatal class as well: it logs each
//! failed file and moves on, so one bad input cannot sink a batch.

use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the pdf2epub library.
#[derive(Debug, Error)]
pub enum Pdf2EpubError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// PDF header/trailer/xref is corrupt and cannot be parsed.
    #[error("PDF '{path}' is corrupt: {detail}\nTry repairing with: qpdf --decrypt input.pdf output.pdf")]
    CorruptPdf { path: PathBuf, detail: String },

    /// PDF requires a password but none was provided.
    #[error("PDF '{path}' is encrypted and requires a password.\nProvide it with --password <PASSWORD>.")]
    PasswordRequired { path: PathBuf },

    /// A password was provided but it is wrong.
    #[error("Wrong password for PDF '{path}'")]
    WrongPassword { path: PathBuf },

    /// pdfium-render returned an error while rasterising a page.
    #[error("Rendering failed for page {page}: {detail}")]
    RenderFailed { page: usize, detail: String },

    /// pdfium-render returned an error while reading page text.
    #[error("Text extraction failed: {detail}")]
    TextExtractionFailed { detail: String },

    // ── Cover errors ──────────────────────────────────────────────────────
    /// Could not encode or save the rendered cover image.
    #[error("Failed to encode cover image '{path}': {source}")]
    CoverEncodeFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A custom cover file exists but could not be read.
    #[error("Failed to read cover image '{path}': {source}")]
    CoverReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Assembly & output errors ──────────────────────────────────────────
    /// A metadata key is not part of the EPUB metadata vocabulary.
    #[error(
        "Invalid metadata key '{key}': {detail}\n\
Supported keys: author, title, lang, generator, description, subject, license, toc_name."
    )]
    InvalidMetadata { key: String, detail: String },

    /// The EPUB container could not be assembled or serialised.
    #[error("EPUB assembly failed: {detail}")]
    AssemblyFailed { detail: String },

    /// Could not create or write the output EPUB file.
    #[error("Failed to write EPUB file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Setup errors ──────────────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\n\
pdfium is loaded at runtime, not compiled in. You can:\n\
  • Set PDFIUM_LIB_PATH=/path/to/libpdfium to use an existing copy.\n\
  • Place the pdfium library next to the executable or in the working directory.\n\
  • Install pdfium as a system library.\n"
    )]
    PdfiumBindingFailed(String),

    /// Could not create the log file or install the subscriber.
    #[error("Failed to initialise logging: {0}")]
    LoggingInitFailed(String),
}
