//! Raster transforms.
//!
//! Every function takes its input by reference and returns a new raster; the
//! source logo is never mutated. Geometry comes from
//! [`calculations`](super::calculations), resampling from `image::imageops`
//! (Lanczos3), text from [`font`](super::font).

use super::calculations::{
    calculate_fit_dimensions, centered_offset, centered_square, corner_arc_centers,
    gradient_row_color, inscribed_ellipse, radius_collapses_to_ellipse,
};
use super::font::{TitleFont, draw_text};
use super::params::{CardStyle, Descriptor};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_ellipse_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const MASK_ON: Luma<u8> = Luma([255]);

/// Largest edge of the logo pasted on a social card.
const CARD_LOGO_MAX: u32 = 200;
/// Gap between the card logo and the title.
const CARD_TEXT_GAP: u32 = 50;
/// How far above the vertical center the title starts.
const CARD_TEXT_RISE: i32 = 30;

/// Produce the raster described by `descriptor` from `source`.
///
/// With `keep_aspect`, the source is scaled to fit (never enlarged) and
/// centered on a canvas of exactly the requested size, filled with the
/// descriptor's background or fully transparent. Otherwise it is stretched
/// to the requested size. Corner rounding, then circular crop, come last.
pub fn resize(source: &RgbaImage, descriptor: &Descriptor) -> RgbaImage {
    let target = (descriptor.width, descriptor.height);

    let resized = if descriptor.keep_aspect {
        let (w, h) = calculate_fit_dimensions(source.dimensions(), target);
        let scaled = if (w, h) == source.dimensions() {
            source.clone()
        } else {
            imageops::resize(source, w, h, FilterType::Lanczos3)
        };
        let fill = descriptor.background.unwrap_or(TRANSPARENT);
        let mut canvas = RgbaImage::from_pixel(target.0, target.1, fill);
        let (x, y) = centered_offset(target, (w, h));
        imageops::overlay(&mut canvas, &scaled, x, y);
        canvas
    } else {
        imageops::resize(source, target.0, target.1, FilterType::Lanczos3)
    };

    let rounded = round_corners(&resized, descriptor.radius);
    if descriptor.circle {
        to_circle(&rounded)
    } else {
        rounded
    }
}

/// Replace the alpha channel with a rounded-rectangle mask.
///
/// Masking is absolute: covered pixels become opaque, the rest fully
/// transparent, whatever their previous alpha. A radius of 0 returns an
/// unchanged copy.
pub fn round_corners(raster: &RgbaImage, radius: u32) -> RgbaImage {
    if radius == 0 {
        return raster.clone();
    }
    let (width, height) = raster.dimensions();
    apply_mask(raster, &rounded_rect_mask(width, height, radius))
}

/// Center-crop to a square on the shorter edge, then mask to the inscribed circle.
pub fn to_circle(raster: &RgbaImage) -> RgbaImage {
    let (left, top, side) = centered_square(raster.width(), raster.height());
    let square = imageops::crop_imm(raster, left, top, side, side).to_image();
    apply_mask(&square, &ellipse_mask(side, side))
}

/// Filled inscribed ellipse, 255 inside and 0 outside.
fn ellipse_mask(width: u32, height: u32) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    if width > 0 && height > 0 {
        let (center, rx, ry) = inscribed_ellipse(width, height);
        draw_filled_ellipse_mut(&mut mask, center, rx, ry, MASK_ON);
    }
    mask
}

/// Filled rounded rectangle: a cross of two rectangles plus four corner discs.
fn rounded_rect_mask(width: u32, height: u32, radius: u32) -> GrayImage {
    if radius_collapses_to_ellipse(width, height, radius) {
        return ellipse_mask(width, height);
    }
    let mut mask = GrayImage::new(width, height);
    let r = radius as i32;
    draw_filled_rect_mut(
        &mut mask,
        Rect::at(r, 0).of_size(width - 2 * radius, height),
        MASK_ON,
    );
    draw_filled_rect_mut(
        &mut mask,
        Rect::at(0, r).of_size(width, height - 2 * radius),
        MASK_ON,
    );
    for center in corner_arc_centers(width, height, radius) {
        draw_filled_circle_mut(&mut mask, center, r, MASK_ON);
    }
    mask
}

/// Keep the color channels of `raster` and take alpha from `mask`.
fn apply_mask(raster: &RgbaImage, mask: &GrayImage) -> RgbaImage {
    RgbaImage::from_fn(raster.width(), raster.height(), |x, y| {
        let Rgba([r, g, b, _]) = *raster.get_pixel(x, y);
        Rgba([r, g, b, mask.get_pixel(x, y)[0]])
    })
}

/// Composite `raster` over an opaque `background`, dropping the alpha channel.
pub fn flatten_onto(raster: &RgbaImage, background: Rgb<u8>) -> RgbImage {
    let Rgb([r, g, b]) = background;
    let mut canvas = RgbaImage::from_pixel(raster.width(), raster.height(), Rgba([r, g, b, 255]));
    imageops::overlay(&mut canvas, raster, 0, 0);
    DynamicImage::ImageRgba8(canvas).to_rgb8()
}

/// Build an opaque share card: vertical gradient, the logo flattened on white
/// a quarter of the way in, and the title to its right.
///
/// Always returns exactly `width`×`height`, whichever font is supplied.
pub fn compose_social_card(
    source: &RgbaImage,
    font: &TitleFont,
    style: &CardStyle,
    (width, height): (u32, u32),
    title: &str,
) -> RgbImage {
    let mut canvas = RgbImage::from_fn(width, height, |_, y| {
        gradient_row_color(style.gradient_top, style.gradient_bottom, y, height)
    });

    let logo_size = CARD_LOGO_MAX.min(height / 3);
    let logo = flatten_onto(&resize(source, &Descriptor::square(logo_size)), WHITE);
    let logo_x = width / 4;
    let logo_y = (height - logo_size) / 2;
    imageops::replace(&mut canvas, &logo, logo_x as i64, logo_y as i64);

    let text_x = (logo_x + logo_size + CARD_TEXT_GAP) as i32;
    let text_y = (height / 2) as i32 - CARD_TEXT_RISE;
    draw_text(
        &mut canvas,
        font,
        title,
        (text_x, text_y),
        style.font_size,
        style.text_color,
    );

    canvas
}
