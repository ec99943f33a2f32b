//! CLI binary for pdf2epub.
//!
//! A thin shim over the library crate that maps CLI flags to
//! [`ConversionRequest`]s and dispatches single-file or batch conversion.

use anyhow::Result;
use clap::Parser;
use pdf2epub::{
    convert_batch, logging, ConversionRequest, ConversionRequestBuilder, Metadata,
};
use std::path::{Path, PathBuf};
use tracing::debug;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Basic conversion (writes document.epub next to the input)
  pdf2epub document.pdf

  # Explicit output path (single input only)
  pdf2epub document.pdf -o out/book.epub

  # Batch conversion; each input gets a derived .epub name
  pdf2epub -b chapter1.pdf chapter2.pdf chapter3.pdf

  # Encrypted PDF
  pdf2epub secret.pdf -p hunter2

  # Custom cover image instead of a rendered first page
  pdf2epub document.pdf -t art/cover.jpg

  # Dublin Core metadata (keys are lowercased; later pairs win)
  pdf2epub document.pdf -m title="Moby Dick" author=Melville subject=Whaling

EXIT STATUS:
  Conversion failures are logged and skipped; the process still exits 0.
  Only argument errors and logging-setup failures exit nonzero.

ENVIRONMENT VARIABLES:
  PDFIUM_LIB_PATH  Path to an existing pdfium library file. Without it the
                   library is looked up in the working directory, then as a
                   system library.
  RUST_LOG         Console log filter (default: info). The log file always
                   records at debug level.

LOGS:
  Each run writes .log/<year>/<month-day>/<timestamp>.log in the working
  directory.
"#;

/// Convert PDF files to EPUB publications.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2epub",
    version,
    about = "Convert PDF files to EPUB publications",
    long_about = "Convert PDF documents to EPUB publications. The first page is rendered as \
the cover image, the extracted text becomes a single reflowable chapter, and optional \
Dublin Core metadata is attached to the package.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// PDF files to convert.
    #[arg(value_name = "PDF", required = true)]
    input_files: Vec<PathBuf>,

    /// Output EPUB path (honoured only when exactly one input is given).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Convert every input independently, deriving each output name.
    #[arg(short, long)]
    batch: bool,

    /// PDF user password for encrypted documents.
    #[arg(short, long)]
    password: Option<String>,

    /// Custom cover image; bypasses first-page rendering when the file exists.
    #[arg(short, long, value_name = "IMAGE")]
    thumbnail: Option<PathBuf>,

    /// Metadata pairs. Entries without '=' are ignored.
    #[arg(short, long, value_name = "KEY=VALUE", num_args = 1..)]
    metadata: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let log_path = logging::init(Path::new(".log"))?;
    debug!("Logging to {}", log_path.display());

    // ── Build requests and convert ───────────────────────────────────────
    let metadata = Metadata::from_pairs(&cli.metadata);
    let requests = build_requests(&cli, &metadata);
    convert_batch(&requests);

    Ok(())
}

/// Map parsed flags onto per-file conversion requests.
///
/// `--batch` with several inputs converts every file independently and
/// ignores `--output` (one flag cannot name several outputs). A single
/// input with `--output` goes to exactly that path. Everything else gets
/// derived `.epub` names, one per input.
fn build_requests(cli: &Cli, metadata: &Metadata) -> Vec<ConversionRequest> {
    if cli.batch && cli.input_files.len() > 1 {
        derived_requests(cli, metadata)
    } else if let ([input], Some(output)) = (cli.input_files.as_slice(), &cli.output) {
        vec![request_for(cli, metadata, input)
            .output(output.clone())
            .build()]
    } else {
        derived_requests(cli, metadata)
    }
}

fn derived_requests(cli: &Cli, metadata: &Metadata) -> Vec<ConversionRequest> {
    cli.input_files
        .iter()
        .map(|input| request_for(cli, metadata, input).build())
        .collect()
}

/// Per-file request with the settings every input shares.
fn request_for(cli: &Cli, metadata: &Metadata, input: &Path) -> ConversionRequestBuilder {
    let mut builder = ConversionRequest::builder(input).metadata(metadata.clone());
    if let Some(pwd) = &cli.password {
        builder = builder.password(pwd.clone());
    }
    if let Some(cover) = &cli.thumbnail {
        builder = builder.custom_cover(cover.clone());
    }
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("args parse")
    }

    #[test]
    fn single_input_with_output_is_honoured() {
        let cli = parse(&["pdf2epub", "a.pdf", "-o", "custom.epub"]);
        let requests = build_requests(&cli, &Metadata::default());
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].output.as_deref(),
            Some(Path::new("custom.epub"))
        );
    }

    #[test]
    fn multiple_inputs_ignore_explicit_output() {
        let cli = parse(&["pdf2epub", "a.pdf", "b.pdf", "-o", "custom.epub"]);
        let requests = build_requests(&cli, &Metadata::default());
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| r.output.is_none()));
    }

    #[test]
    fn batch_flag_converts_every_input_independently() {
        let cli = parse(&["pdf2epub", "-b", "a.pdf", "b.pdf", "c.pdf", "-o", "x.epub"]);
        let requests = build_requests(&cli, &Metadata::default());
        assert_eq!(requests.len(), 3);
        assert!(requests.iter().all(|r| r.output.is_none()));
    }

    #[test]
    fn shared_flags_reach_every_request() {
        let cli = parse(&[
            "pdf2epub", "a.pdf", "b.pdf", "-p", "pw", "-t", "cover.jpg", "-m", "author=Jane",
        ]);
        let metadata = Metadata::from_pairs(&cli.metadata);
        let requests = build_requests(&cli, &metadata);
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| {
            r.password.as_deref() == Some("pw")
                && r.custom_cover.as_deref() == Some(Path::new("cover.jpg"))
                && r.metadata.get("author") == Some("Jane")
        }));
    }
}
