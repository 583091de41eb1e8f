//! On-disk backend — pure Rust encoders from the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, GIF, BMP, TIFF, WebP, ICO) | `image::ImageReader` with content sniffing |
//! | Encode → PNG | `image::codecs::png::PngEncoder`, best compression, adaptive filtering |
//! | Encode → ICO | `image::codecs::ico::IcoEncoder`, one PNG-compressed frame per size |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` at the requested quality |
//! | SVG | written verbatim |
//!
//! Every encoder writes into memory first and the finished bytes go to disk in
//! one `fs::write`, so the reported size is exact.

use super::backend::{AssetBackend, BackendError};
use super::params::Quality;
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::{DynamicImage, ExtendedColorType, ImageError, ImageReader, RgbImage, RgbaImage};
use std::path::Path;

/// Load and decode an image from disk, sniffing the format from its content.
pub fn load_image(path: &Path) -> Result<DynamicImage, ImageError> {
    ImageReader::open(path)
        .map_err(ImageError::IoError)?
        .with_guessed_format()
        .map_err(ImageError::IoError)?
        .decode()
}

/// Backend that encodes and writes real files.
pub struct FsBackend;

impl FsBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FsBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<u64, BackendError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    log::debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes.len() as u64)
}

fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, BackendError> {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilter::Adaptive);
    image.write_with_encoder(encoder)?;
    Ok(buf)
}

impl AssetBackend for FsBackend {
    fn write_png(&self, path: &Path, image: &RgbaImage) -> Result<u64, BackendError> {
        let bytes = encode_png(image)?;
        write_bytes(path, &bytes)
    }

    fn write_ico(&self, path: &Path, frames: &[RgbaImage]) -> Result<u64, BackendError> {
        let frames = frames
            .iter()
            .map(|f| IcoFrame::as_png(f.as_raw(), f.width(), f.height(), ExtendedColorType::Rgba8))
            .collect::<Result<Vec<_>, _>>()?;
        let mut buf = Vec::new();
        IcoEncoder::new(&mut buf).encode_images(&frames)?;
        write_bytes(path, &buf)
    }

    fn write_jpeg(
        &self,
        path: &Path,
        image: &RgbImage,
        quality: Quality,
    ) -> Result<u64, BackendError> {
        let mut buf = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut buf, quality.value() as u8);
        image.write_with_encoder(encoder)?;
        write_bytes(path, &buf)
    }

    fn write_svg(&self, path: &Path, markup: &str) -> Result<u64, BackendError> {
        write_bytes(path, markup.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::checkerboard;
    use image::{GenericImageView, ImageFormat, Rgb};

    #[test]
    fn png_roundtrip_is_lossless() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("logo.png");
        let mut img = checkerboard(33, 17, 4);
        img.put_pixel(5, 5, image::Rgba([12, 34, 56, 78]));

        let size = FsBackend::new().write_png(&path, &img).unwrap();
        assert_eq!(size, std::fs::metadata(&path).unwrap().len());

        let decoded = load_image(&path).unwrap().to_rgba8();
        assert_eq!(decoded, img);
    }

    #[test]
    fn write_creates_parent_directories() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("nested/deeper/logo.png");
        FsBackend::new()
            .write_png(&path, &RgbaImage::new(4, 4))
            .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn ico_bundles_every_frame() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("favicon.ico");
        let frames: Vec<RgbaImage> = [16, 32, 48].iter().map(|&s| checkerboard(s, s, 4)).collect();

        FsBackend::new().write_ico(&path, &frames).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // ICONDIR: reserved 0, type 1 (icon), image count
        assert_eq!(&bytes[0..4], &[0, 0, 1, 0]);
        assert_eq!(u16::from_le_bytes([bytes[4], bytes[5]]), 3);
        // First directory entry width/height bytes
        assert_eq!((bytes[6], bytes[7]), (16, 16));

        let decoded = load_image(&path).unwrap();
        assert_eq!(decoded.dimensions(), (48, 48));
    }

    #[test]
    fn jpeg_written_at_requested_size() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("card.jpg");
        let img = RgbImage::from_pixel(120, 63, Rgb([67, 56, 202]));

        FsBackend::new()
            .write_jpeg(&path, &img, Quality::new(90))
            .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
        assert_eq!(load_image(&path).unwrap().dimensions(), (120, 63));
    }

    #[test]
    fn svg_written_verbatim() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("favicon.svg");
        let markup = "<svg xmlns=\"http://www.w3.org/2000/svg\"/>";

        let size = FsBackend::new().write_svg(&path, markup).unwrap();
        assert_eq!(size, markup.len() as u64);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), markup);
    }

    #[test]
    fn write_under_a_file_is_io_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();

        let result = FsBackend::new().write_svg(&blocker.join("favicon.svg"), "<svg/>");
        assert!(matches!(result, Err(BackendError::Io(_))));
    }

    #[test]
    fn load_image_sniffs_content_not_extension() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("actually-a-png.jpg");
        FsBackend::new()
            .write_png(&path, &checkerboard(8, 8, 2))
            .unwrap();
        assert_eq!(load_image(&path).unwrap().dimensions(), (8, 8));
    }

    #[test]
    fn load_image_rejects_garbage() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("broken.png");
        std::fs::write(&path, b"not an image at all").unwrap();
        assert!(load_image(&path).is_err());
    }

    #[test]
    fn load_image_missing_file_is_io_error() {
        let result = load_image(Path::new("/nonexistent/logo.png"));
        assert!(matches!(result, Err(ImageError::IoError(_))));
    }
}
