//! Parameter types for image operations.
//!
//! These structs describe *what* to produce, not *how* to produce it. They are
//! the interface between the [`catalog`](crate::catalog) (which decides which
//! variants exist) and the [`operations`](super::operations) module (which does
//! the actual pixel work).
//!
//! ## Types
//!
//! - [`Quality`] — Lossy encoding quality (1–100, default 90). Clamped on construction.
//! - [`Descriptor`] — One output variant: target box, aspect handling, background,
//!   corner radius and circular crop.
//! - [`CardStyle`] — Gradient and text settings for composed social cards.

use image::{Rgb, Rgba};

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Full description of a single raster variant.
///
/// The pipeline is: fit (or stretch) into `width`×`height`, fill the padding
/// with `background`, round the corners by `radius`, then crop to a circle if
/// `circle` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub width: u32,
    pub height: u32,
    /// Fit inside the box and center, instead of stretching to it.
    pub keep_aspect: bool,
    /// Padding colour. `None` leaves the padding fully transparent.
    pub background: Option<Rgba<u8>>,
    /// Corner radius in pixels, 0 for square corners.
    pub radius: u32,
    pub circle: bool,
}

impl Descriptor {
    /// A plain, aspect-preserving square variant on a transparent background.
    pub fn square(size: u32) -> Self {
        Self {
            width: size,
            height: size,
            keep_aspect: true,
            background: None,
            radius: 0,
            circle: false,
        }
    }

    pub fn rounded(self, radius: u32) -> Self {
        Self { radius, ..self }
    }

    pub fn circle(self) -> Self {
        Self {
            circle: true,
            ..self
        }
    }

    pub fn with_background(self, color: Rgba<u8>) -> Self {
        Self {
            background: Some(color),
            ..self
        }
    }

    pub fn stretched(self) -> Self {
        Self {
            keep_aspect: false,
            ..self
        }
    }
}

/// Look of a composed social card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    /// Color of the first scanline.
    pub gradient_top: Rgb<u8>,
    /// Color the gradient approaches at the last scanline.
    pub gradient_bottom: Rgb<u8>,
    pub text_color: Rgb<u8>,
    /// Title height in pixels.
    pub font_size: f32,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            gradient_top: Rgb([67, 56, 202]),
            gradient_bottom: Rgb([99, 102, 241]),
            text_color: Rgb([255, 255, 255]),
            font_size: 60.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(50).value(), 50);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_default_is_90() {
        assert_eq!(Quality::default().value(), 90);
    }

    #[test]
    fn square_descriptor_defaults() {
        let d = Descriptor::square(64);
        assert_eq!((d.width, d.height), (64, 64));
        assert!(d.keep_aspect);
        assert_eq!(d.background, None);
        assert_eq!(d.radius, 0);
        assert!(!d.circle);
    }

    #[test]
    fn builders_compose() {
        let bg = Rgba([1, 2, 3, 255]);
        let d = Descriptor::square(128).rounded(28).with_background(bg);
        assert_eq!(d.radius, 28);
        assert_eq!(d.background, Some(bg));
        assert!(!d.circle);
        assert!(Descriptor::square(32).circle().circle);
        assert!(!Descriptor::square(32).stretched().keep_aspect);
    }
}
