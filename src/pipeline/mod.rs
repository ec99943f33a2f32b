//! Pipeline stages for PDF-to-EPUB conversion.
//!
//! Each submodule implements exactly one transformation step. Keeping the
//! stages separate makes each independently testable and lets the soft
//! stages (cover, text) fail without dragging the rest down.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ {cover, text} ──▶ assemble ──▶ write
//! (%PDF)     (pdfium)         (epub-builder) (atomic rename)
//! ```
//!
//! 1. [`input`]    — validate the user-supplied path (exists, readable, `%PDF`)
//! 2. [`cover`]    — render page 1 to a JPEG thumbnail; failure means "no cover"
//! 3. [`text`]     — extract per-page text, newline-joined; failure means "no text"
//! 4. [`assemble`] — build the in-memory EPUB (chapter, nav, stylesheet, cover)
//! 5. [`write`]    — serialise to disk via temp file + rename
//!
//! [`pdfium`] is not a stage of its own: it holds the shared-library binding
//! and document loading used by [`cover`] and [`text`].

pub mod assemble;
pub mod cover;
pub mod input;
pub mod pdfium;
pub mod text;
pub mod write;
