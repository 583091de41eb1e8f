//! Image processing — pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` (format sniffed from content) |
//! | **Resize** | `imageops::resize` with Lanczos3, centered on a padded canvas |
//! | **Rounded corners / circle** | `imageproc` filled ellipse, rect and circle masks copied into alpha |
//! | **Social card** | gradient fill + `imageops::overlay` flattening + `imageproc` text |
//! | **Encode** | PNG, ICO, JPEG encoders from `image` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for geometry (unit testable)
//! - **Parameters**: Data structures describing a variant
//! - **Operations**: Raster transforms built on calculations
//! - **Font**: Ordered font resolution and text drawing
//! - **Backend**: [`AssetBackend`] trait + [`FsBackend`]

pub mod backend;
mod calculations;
pub mod font;
pub mod fs_backend;
pub mod operations;
mod params;

pub use backend::{AssetBackend, BackendError};
pub use calculations::calculate_fit_dimensions;
pub use font::{FontError, FontSource, TitleFont, font_sources, resolve_font};
pub use fs_backend::{FsBackend, load_image};
pub use operations::{compose_social_card, flatten_onto, resize, round_corners, to_circle};
pub use params::{CardStyle, Descriptor, Quality};
