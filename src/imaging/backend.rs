//! Asset output backend trait and shared types.
//!
//! The [`AssetBackend`] trait defines the four encodings the generator emits:
//! PNG, multi-size ICO, JPEG and SVG text. Each write returns the number of
//! bytes that ended up on disk, which feeds the summary output.
//!
//! The production implementation is
//! [`FsBackend`](super::fs_backend::FsBackend). Tests use the recording
//! `MockBackend` below so generator logic can be checked without encoding.

use super::params::Quality;
use image::{RgbImage, RgbaImage};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Trait for asset writers.
///
/// Implementations create missing parent directories themselves.
pub trait AssetBackend {
    /// Write a lossless PNG.
    fn write_png(&self, path: &Path, image: &RgbaImage) -> Result<u64, BackendError>;

    /// Write one ICO file bundling every frame.
    fn write_ico(&self, path: &Path, frames: &[RgbaImage]) -> Result<u64, BackendError>;

    /// Write an opaque JPEG at the given quality.
    fn write_jpeg(&self, path: &Path, image: &RgbImage, quality: Quality)
    -> Result<u64, BackendError>;

    /// Write SVG markup verbatim.
    fn write_svg(&self, path: &Path, markup: &str) -> Result<u64, BackendError>;
}
