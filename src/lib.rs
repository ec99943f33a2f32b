//! # pdf2epub
//!
//! Convert PDF documents to EPUB publications, with a cover thumbnail
//! rendered from the first page and the extracted text embedded as a single
//! formatted chapter.
//!
//! ## Why this crate?
//!
//! Reading a PDF on an e-reader is miserable: fixed layout, no reflow, no
//! font scaling. This crate trades layout fidelity for reflowable text — it
//! extracts the text layer via pdfium, renders page 1 as the book cover,
//! and packages both as a standard EPUB any reader app accepts. Scanned or
//! encrypted documents degrade gracefully: you still get a valid EPUB, with
//! a placeholder chapter or without a cover.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input     validate path and %PDF magic
//!  ├─ 2. Cover     render page 1 → JPEG via pdfium (soft failure)
//!  ├─ 3. Text      per-page extraction, newline-joined (soft failure)
//!  ├─ 4. Assemble  single-chapter EPUB: nav, stylesheet, metadata, cover
//!  └─ 5. Write     atomic serialisation to <input>.epub
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2epub::{convert, ConversionRequest, Metadata};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let request = ConversionRequest::builder("document.pdf")
//!         .metadata(Metadata::from_pairs(["author=Jane Doe", "subject=Essays"]))
//!         .build();
//!     let output = convert(&request)?;
//!     println!("wrote {}", output.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2epub` binary (clap + anyhow + tracing-subscriber + chrono) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! pdf2epub = { version = "0.1", default-features = false }
//! ```
//!
//! ## pdfium
//!
//! Rendering and text extraction bind to the pdfium shared library at
//! runtime. Resolution order: `PDFIUM_LIB_PATH` (path to the library file),
//! a platform-named library in the working directory, then the system
//! library. Without a usable pdfium the tool still produces EPUBs — with
//! placeholder chapters and no covers.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod convert;
pub mod error;
#[cfg(feature = "cli")]
pub mod logging;
pub mod pipeline;
pub mod request;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use convert::{convert, convert_batch};
pub use error::Pdf2EpubError;
pub use pipeline::assemble::EpubDocument;
pub use request::{ConversionRequest, ConversionRequestBuilder, Metadata};
