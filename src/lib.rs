//! # Logo Forge
//!
//! Generates a complete set of logo derivatives for the web from one source
//! image: favicons, header logos, social share cards, app icons and brand
//! assets.
//!
//! # Pipeline
//!
//! ```text
//! logo.png ──decode──▶ RGBA raster ──▶ favicon/ header/ social/ app-icons/ brand/
//! ```
//!
//! The source is decoded once and shared read-only by every category. Each
//! category is a fixed list of descriptors (size, shape, background) planned
//! in [`catalog`]; the [`generate`] module renders each plan through the
//! [`imaging`] operations and writes it with an
//! [`AssetBackend`](imaging::AssetBackend). Everything runs sequentially and
//! the first error aborts the run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Static size tables and per-category asset plans |
//! | [`generate`] | `LogoGenerator`: loads the source and writes every planned asset |
//! | [`imaging`] | Pure-Rust raster operations: resize, masks, social cards, encoders |
//! | [`config`] | Optional `logo-forge.toml` style overrides: colours, title, quality, fonts |
//! | [`output`] | CLI output formatting: the written file tree with sizes |
//!
//! # Design Decisions
//!
//! ## Plans Before Pixels
//!
//! Every output path is a pure function of (category, descriptor), computed
//! before any image work. The whole tree can be listed and checked for
//! collisions in a unit test, and the generator loop is a plain map over
//! plans.
//!
//! ## Absolute Masks
//!
//! Rounded and circular variants replace the alpha channel outright rather
//! than multiplying it. A partially transparent source therefore becomes
//! opaque inside the mask; this matches what icon consumers expect from a
//! "shape" variant.
//!
//! ## Fonts Degrade, They Don't Fail
//!
//! Social cards try a list of system font files and fall back to a small
//! built-in bitmap font. A missing font is a warning, never an error.

pub mod catalog;
pub mod config;
pub mod generate;
pub mod imaging;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
