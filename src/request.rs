//! Request types for PDF-to-EPUB conversion.
//!
//! Everything a single conversion needs travels in one [`ConversionRequest`],
//! built via its [`ConversionRequestBuilder`]. Keeping every knob on one
//! struct makes batch runs trivial (clone the shared settings, swap the
//! input) and keeps the orchestrator signature stable as knobs are added.

use std::path::PathBuf;

/// A single PDF-to-EPUB conversion job.
///
/// Built via [`ConversionRequest::new`] for the all-defaults case or
/// [`ConversionRequest::builder`] to override individual fields.
///
/// # Example
/// ```rust
/// use pdf2epub::ConversionRequest;
///
/// let request = ConversionRequest::builder("report.pdf")
///     .output("out/report.epub")
///     .password("hunter2")
///     .build();
/// assert_eq!(request.input.as_os_str(), "report.pdf");
/// ```
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// Path of the PDF to convert.
    pub input: PathBuf,

    /// Explicit output path. Default: None (derived from `input` by
    /// swapping the extension for `.epub`).
    pub output: Option<PathBuf>,

    /// User password for encrypted PDFs. Default: None.
    ///
    /// Only text extraction decrypts; cover generation always opens the
    /// document without a password, so encrypted PDFs get no generated cover.
    pub password: Option<String>,

    /// Custom cover image to embed instead of rendering page 1.
    /// Default: None. A path that does not exist falls back to generation.
    pub custom_cover: Option<PathBuf>,

    /// Dublin Core metadata attached to the EPUB. Default: empty.
    pub metadata: Metadata,

    /// Where the generated cover JPEG is written. Default: `./data/cover.jpg`.
    ///
    /// The path is shared between requests, so in a batch each conversion
    /// overwrites the previous cover file. Point this somewhere unique per
    /// request if the intermediate files matter to you. The parent directory
    /// must already exist.
    pub cover_output: PathBuf,

    /// Rendering DPI for the generated cover. Range: 72–400. Default: 150.
    ///
    /// 150 DPI gives a sharp thumbnail at reasonable file size. E-reader
    /// cover slots rarely reward anything above 200.
    pub dpi: u32,
}

impl ConversionRequest {
    /// Create a request for `input` with every other field at its default.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            password: None,
            custom_cover: None,
            metadata: Metadata::default(),
            cover_output: PathBuf::from("./data/cover.jpg"),
            dpi: 150,
        }
    }

    /// Create a new builder for a conversion of `input`.
    pub fn builder(input: impl Into<PathBuf>) -> ConversionRequestBuilder {
        ConversionRequestBuilder {
            request: Self::new(input),
        }
    }
}

/// Builder for [`ConversionRequest`].
#[derive(Debug)]
pub struct ConversionRequestBuilder {
    request: ConversionRequest,
}

impl ConversionRequestBuilder {
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.request.output = Some(path.into());
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.request.password = Some(pwd.into());
        self
    }

    pub fn custom_cover(mut self, path: impl Into<PathBuf>) -> Self {
        self.request.custom_cover = Some(path.into());
        self
    }

    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.request.metadata = metadata;
        self
    }

    pub fn cover_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.request.cover_output = path.into();
        self
    }

    pub fn dpi(mut self, dpi: u32) -> Self {
        self.request.dpi = dpi.clamp(72, 400);
        self
    }

    /// Build the request. Infallible: the setters already keep every field
    /// in range and there are no cross-field constraints.
    pub fn build(self) -> ConversionRequest {
        self.request
    }
}

/// Ordered Dublin Core metadata: a list of `(key, value)` pairs.
///
/// Order and duplicates are preserved because the EPUB package format
/// allows repeated elements (several `dc:subject` entries, say). Keys are
/// stored lowercase. [`Metadata::get`] returns the LAST value for a key,
/// so later pairs on a command line override earlier ones for the fields
/// that are looked up singly (title, author).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata(Vec<(String, String)>);

impl Metadata {
    /// Parse `key=value` pairs as passed on the command line.
    ///
    /// Each entry is split on the first `=`; the key is lowercased. Entries
    /// without a `=` are silently ignored.
    ///
    /// # Example
    /// ```rust
    /// use pdf2epub::Metadata;
    ///
    /// let meta = Metadata::from_pairs(["title=Moby Dick", "author=Melville"]);
    /// assert_eq!(meta.get("title"), Some("Moby Dick"));
    /// assert_eq!(meta.get("isbn"), None);
    /// ```
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = pairs
            .into_iter()
            .filter_map(|pair| {
                let (key, value) = pair.as_ref().split_once('=')?;
                Some((key.to_lowercase(), value.to_string()))
            })
            .collect();
        Self(entries)
    }

    /// Append one entry. The key is lowercased.
    pub fn push(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.0.push((key.as_ref().to_lowercase(), value.into()));
    }

    /// Last value recorded for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_splits_on_first_equals() {
        let meta = Metadata::from_pairs(["description=a=b=c"]);
        assert_eq!(meta.get("description"), Some("a=b=c"));
    }

    #[test]
    fn from_pairs_lowercases_keys() {
        let meta = Metadata::from_pairs(["TITLE=Moby Dick"]);
        assert_eq!(meta.get("title"), Some("Moby Dick"));
        assert_eq!(meta.get("TITLE"), None);
    }

    #[test]
    fn from_pairs_ignores_entries_without_equals() {
        let meta = Metadata::from_pairs(["title=Moby Dick", "garbage", "author=Melville"]);
        assert_eq!(meta.len(), 2);
        assert_eq!(meta.get("author"), Some("Melville"));
    }

    #[test]
    fn from_pairs_keeps_empty_keys_and_values() {
        let meta = Metadata::from_pairs(["=orphan", "subject="]);
        assert_eq!(meta.get(""), Some("orphan"));
        assert_eq!(meta.get("subject"), Some(""));
    }

    #[test]
    fn get_returns_last_occurrence() {
        let meta = Metadata::from_pairs(["title=First", "title=Second"]);
        assert_eq!(meta.get("title"), Some("Second"));
        assert_eq!(meta.len(), 2, "duplicates are preserved");
    }

    #[test]
    fn iter_preserves_insertion_order() {
        let meta = Metadata::from_pairs(["subject=Fiction", "subject=Whaling"]);
        let values: Vec<&str> = meta.iter().map(|(_, v)| v).collect();
        assert_eq!(values, ["Fiction", "Whaling"]);
    }

    #[test]
    fn request_defaults() {
        let request = ConversionRequest::new("book.pdf");
        assert_eq!(request.dpi, 150);
        assert_eq!(request.cover_output, PathBuf::from("./data/cover.jpg"));
        assert!(request.output.is_none());
        assert!(request.metadata.is_empty());
    }

    #[test]
    fn builder_clamps_dpi() {
        assert_eq!(ConversionRequest::builder("a.pdf").dpi(10).build().dpi, 72);
        assert_eq!(ConversionRequest::builder("a.pdf").dpi(9999).build().dpi, 400);
        assert_eq!(ConversionRequest::builder("a.pdf").dpi(300).build().dpi, 300);
    }
}
