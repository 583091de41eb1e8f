//! Shared test utilities for the logo-forge test suite.
//!
//! Synthetic rasters for the imaging tests and a source-file fixture for the
//! generator tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let (_tmp, source) = write_source_png(1024, 1024);
//! let generator = LogoGenerator::open(&source, out, options, style).unwrap();
//! ```

use image::{Rgba, RgbaImage};
use std::path::PathBuf;
use tempfile::TempDir;

use crate::config::StyleConfig;

// =========================================================================
// Synthetic rasters
// =========================================================================

/// A single-color raster.
pub fn solid_rgba(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color)
}

/// An opaque black/white checkerboard with `cell`-pixel squares.
pub fn checkerboard(width: u32, height: u32, cell: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    })
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Write an opaque gradient PNG into a fresh temp directory.
///
/// Returns the directory guard (keep it alive) and the file path.
pub fn write_source_png(width: u32, height: u32) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("logo.png");
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    img.save(&path).unwrap();
    (tmp, path)
}

/// Stock style with no system fonts, so cards always use the bitmap font.
pub fn test_style() -> StyleConfig {
    let mut style = StyleConfig::default();
    style.social.font_paths.clear();
    style
}
