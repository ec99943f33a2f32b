//! Cover generation: render page 1 of the PDF to a JPEG thumbnail.
//!
//! This is a soft stage. Any failure (no pdfium library, corrupt or
//! encrypted document, encode error) is logged and reported as `None`, and
//! the EPUB is assembled without a cover. The caller decides where the
//! JPEG lands; the parent directory must already exist.

use crate::error::Pdf2EpubError;
use crate::pipeline::pdfium;
use image::{DynamicImage, ImageFormat};
use pdfium_render::prelude::*;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Render the first page of `pdf_path` to a JPEG at `output_path`.
///
/// Returns the output path on success, `None` on any failure. Overwrites an
/// existing file at `output_path`.
pub fn generate(pdf_path: &Path, output_path: &Path, dpi: u32) -> Option<PathBuf> {
    match render_first_page(pdf_path, output_path, dpi) {
        Ok(path) => {
            info!("Cover image generated at: {}", path.display());
            Some(path)
        }
        Err(e) => {
            error!(
                "Failed to generate cover image for '{}': {}",
                pdf_path.display(),
                e
            );
            None
        }
    }
}

fn render_first_page(
    pdf_path: &Path,
    output_path: &Path,
    dpi: u32,
) -> Result<PathBuf, Pdf2EpubError> {
    let pdfium = pdfium::bind()?;
    // The cover never decrypts: an encrypted PDF simply gets no generated cover.
    let document = pdfium::load_document(&pdfium, pdf_path, None)?;

    let pages = document.pages();
    let page = pages.get(0).map_err(|e| Pdf2EpubError::RenderFailed {
        page: 1,
        detail: format!("{:?}", e),
    })?;

    // Pixel width = page width in points × dpi / 72 (a point is 1/72 inch).
    let target_width = (page.width().value * dpi as f32 / 72.0).round().max(1.0) as i32;
    let render_config = PdfRenderConfig::new().set_target_width(target_width);

    let bitmap = page
        .render_with_config(&render_config)
        .map_err(|e| Pdf2EpubError::RenderFailed {
            page: 1,
            detail: format!("{:?}", e),
        })?;

    let image = bitmap.as_image();
    debug!("Rendered cover page → {}x{} px", image.width(), image.height());

    // JPEG stores no alpha; flatten RGBA renders before encoding.
    let image = if image.color().has_alpha() {
        DynamicImage::ImageRgb8(image.to_rgb8())
    } else {
        image
    };

    save_jpeg(&image, output_path)
}

/// Encode `image` as JPEG and place it at `output_path`.
///
/// Encodes to memory first and writes via temp file + rename, so an encode
/// or I/O failure never leaves a truncated file at the destination.
fn save_jpeg(image: &DynamicImage, output_path: &Path) -> Result<PathBuf, Pdf2EpubError> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
        .map_err(|e| Pdf2EpubError::CoverEncodeFailed {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    let tmp_path = output_path.with_extension("jpg.tmp");
    fs::write(&tmp_path, &bytes)
        .and_then(|_| fs::rename(&tmp_path, output_path))
        .map_err(|e| Pdf2EpubError::CoverEncodeFailed {
            path: output_path.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?;

    Ok(output_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn missing_pdf_yields_none() {
        // Fails at bind or at load; either way the soft API reports None.
        let out = std::env::temp_dir().join("pdf2epub-cover-none.jpg");
        assert!(generate(Path::new("/no/such/file.pdf"), &out, 150).is_none());
        assert!(!out.exists());
    }

    #[test]
    fn save_jpeg_writes_jpeg_magic_and_no_temp_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("cover.jpg");
        let image = DynamicImage::ImageRgb8(RgbImage::new(4, 4));

        let saved = save_jpeg(&image, &out).expect("save");

        assert_eq!(saved, out);
        let bytes = fs::read(&out).expect("read cover");
        assert_eq!(&bytes[..2], [0xFF, 0xD8], "JPEG magic expected");
        assert!(!dir.path().join("cover.jpg.tmp").exists());
    }

    #[test]
    fn save_jpeg_failure_leaves_no_file_at_the_destination() {
        let out = Path::new("/no/such/dir/cover.jpg");
        let image = DynamicImage::ImageRgb8(RgbImage::new(4, 4));

        let err = save_jpeg(&image, out).unwrap_err();

        assert!(matches!(err, Pdf2EpubError::CoverEncodeFailed { .. }));
        assert!(!out.exists());
    }
}
