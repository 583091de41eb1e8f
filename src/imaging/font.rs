//! Font resolution and text drawing for the social cards.
//!
//! Fonts are resolved from an ordered list of [`FontSource`]s, first success
//! wins. The last strategy is always the built-in 5×7 bitmap font, so
//! resolution never fails: a missing or corrupt system font only costs a
//! warning in the log.

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FontError {
    #[error("No font at {}", path.display())]
    Missing { path: PathBuf },
    #[error("Font unavailable at {}: {reason}", path.display())]
    Unavailable { path: PathBuf, reason: String },
}

impl FontError {
    /// Absent candidates are expected on most hosts; a font that exists but
    /// will not load is worth a warning.
    pub fn log_level(&self) -> log::Level {
        match self {
            FontError::Missing { .. } => log::Level::Debug,
            FontError::Unavailable { .. } => log::Level::Warn,
        }
    }
}

/// Where to look for the title font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A TrueType/OpenType file on disk.
    File(PathBuf),
    /// The embedded bitmap font. Always loads.
    Builtin,
}

impl FontSource {
    pub fn load(&self) -> Result<TitleFont, FontError> {
        match self {
            FontSource::File(path) => {
                let data = std::fs::read(path).map_err(|e| match e.kind() {
                    std::io::ErrorKind::NotFound => FontError::Missing { path: path.clone() },
                    _ => FontError::Unavailable {
                        path: path.clone(),
                        reason: e.to_string(),
                    },
                })?;
                let font = FontVec::try_from_vec(data).map_err(|e| FontError::Unavailable {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
                Ok(TitleFont::Outline(font))
            }
            FontSource::Builtin => Ok(TitleFont::Bitmap),
        }
    }
}

/// A loaded font ready to draw with.
pub enum TitleFont {
    Outline(FontVec),
    Bitmap,
}

impl fmt::Debug for TitleFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitleFont::Outline(_) => f.write_str("TitleFont::Outline"),
            TitleFont::Bitmap => f.write_str("TitleFont::Bitmap"),
        }
    }
}

/// Build the strategy list: each candidate file in order, then the built-in font.
pub fn font_sources<I, P>(paths: I) -> Vec<FontSource>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    paths
        .into_iter()
        .map(|p| FontSource::File(p.into()))
        .chain(std::iter::once(FontSource::Builtin))
        .collect()
}

/// Try each source in order and return the first font that loads.
pub fn resolve_font(sources: &[FontSource]) -> TitleFont {
    for source in sources {
        match source.load() {
            Ok(TitleFont::Bitmap) => {
                log::warn!("No system font found, using the built-in bitmap font");
                return TitleFont::Bitmap;
            }
            Ok(font) => {
                log::debug!("Using title font {:?}", source);
                return font;
            }
            Err(e) => log::log!(e.log_level(), "{e}"),
        }
    }
    log::warn!("No font source succeeded, using the built-in bitmap font");
    TitleFont::Bitmap
}

/// Draw `text` with its top-left corner at `(x, y)`.
pub fn draw_text(
    canvas: &mut RgbImage,
    font: &TitleFont,
    text: &str,
    (x, y): (i32, i32),
    size: f32,
    color: Rgb<u8>,
) {
    match font {
        TitleFont::Outline(font) => draw_text_mut(canvas, color, x, y, PxScale::from(size), font, text),
        TitleFont::Bitmap => draw_bitmap_text(canvas, text, (x, y), size, color),
    }
}

// ============================================================================
// Built-in bitmap font
// ============================================================================

const GLYPH_COLUMNS: i32 = 5;
const GLYPH_ROWS: usize = 7;
/// Glyph cell plus one column of spacing.
const GLYPH_ADVANCE: i32 = GLYPH_COLUMNS + 1;

/// Rows top to bottom, bit 4 is the leftmost column.
const GLYPHS: &[(char, [u8; GLYPH_ROWS])] = &[
    ('A', [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('B', [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
    ('C', [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
    ('D', [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110]),
    ('E', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
    ('F', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('G', [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111]),
    ('H', [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('I', [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('J', [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
    ('K', [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
    ('L', [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
    ('M', [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
    ('N', [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001]),
    ('O', [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('P', [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('Q', [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
    ('R', [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
    ('S', [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
    ('T', [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('U', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('V', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
    ('W', [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010]),
    ('X', [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]),
    ('Y', [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('Z', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
    ('0', [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
    ('1', [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('2', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
    ('3', [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
    ('4', [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
    ('5', [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
    ('6', [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
    ('7', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
    ('8', [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
    ('9', [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
    ('.', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100]),
    (',', [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000]),
    ('-', [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000]),
    ('!', [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100]),
    ('?', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100]),
    ('&', [0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101]),
    ('\'', [0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000]),
    (':', [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000]),
    ('/', [0b00000, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000]),
];

/// Drawn for characters the bitmap font has no glyph for.
const MISSING_GLYPH: [u8; GLYPH_ROWS] = [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111];

fn glyph(c: char) -> Option<[u8; GLYPH_ROWS]> {
    if c.is_whitespace() {
        return None;
    }
    let upper = c.to_ascii_uppercase();
    Some(
        GLYPHS
            .iter()
            .find(|(g, _)| *g == upper)
            .map(|(_, rows)| *rows)
            .unwrap_or(MISSING_GLYPH),
    )
}

/// Side of one font "dot" in pixels for a requested text height.
fn dot_size(size: f32) -> u32 {
    ((size / (GLYPH_ROWS as f32 + 1.0)).round() as u32).max(1)
}

fn draw_bitmap_text(canvas: &mut RgbImage, text: &str, (x, y): (i32, i32), size: f32, color: Rgb<u8>) {
    let dot = dot_size(size);
    let step = dot as i32;
    for (i, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else { continue };
        let origin_x = x + i as i32 * GLYPH_ADVANCE * step;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_COLUMNS {
                if bits & (1 << (GLYPH_COLUMNS - 1 - col)) != 0 {
                    let rect = Rect::at(origin_x + col * step, y + row as i32 * step).of_size(dot, dot);
                    draw_filled_rect_mut(canvas, rect, color);
                }
            }
        }
    }
}
