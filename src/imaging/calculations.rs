//! Pure calculation functions for image geometry.
//!
//! All functions here are pure and testable without any I/O or images.

use image::Rgb;

/// Calculate the size of a source scaled to fit inside a target box.
///
/// Aspect ratio is preserved and the source is never enlarged: a source that
/// already fits is returned unchanged. Both edges are at least 1px.
///
/// # Examples
/// ```
/// # use logo_forge::imaging::calculate_fit_dimensions;
/// // 1000x500 landscape into a 200x200 box → 200x100
/// assert_eq!(calculate_fit_dimensions((1000, 500), (200, 200)), (200, 100));
///
/// // Already small enough → unchanged
/// assert_eq!(calculate_fit_dimensions((40, 30), (64, 64)), (40, 30));
/// ```
pub fn calculate_fit_dimensions(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    if src_w <= tgt_w && src_h <= tgt_h {
        return (src_w.max(1), src_h.max(1));
    }

    let scale = f64::min(tgt_w as f64 / src_w as f64, tgt_h as f64 / src_h as f64);
    let w = ((src_w as f64 * scale).round() as u32).clamp(1, tgt_w.max(1));
    let h = ((src_h as f64 * scale).round() as u32).clamp(1, tgt_h.max(1));
    (w, h)
}

/// Top-left offset that centers `inner` inside `outer` (floor division).
pub fn centered_offset(outer: (u32, u32), inner: (u32, u32)) -> (i64, i64) {
    (
        (outer.0 as i64 - inner.0 as i64) / 2,
        (outer.1 as i64 - inner.1 as i64) / 2,
    )
}

/// The largest centered square inside a `width`×`height` rectangle.
///
/// Returns `(left, top, side)`.
pub fn centered_square(width: u32, height: u32) -> (u32, u32, u32) {
    let side = width.min(height);
    ((width - side) / 2, (height - side) / 2, side)
}

/// Center and radii of the ellipse inscribed in a `width`×`height` box,
/// as the integer arguments `imageproc`'s ellipse rasterizer takes.
///
/// Radii are at least 1 so one-pixel edges still produce a shape.
pub fn inscribed_ellipse(width: u32, height: u32) -> ((i32, i32), i32, i32) {
    let (w, h) = (width as i32, height as i32);
    ((w / 2, h / 2), (w / 2).max(1), (h / 2).max(1))
}

/// Whether rounding corners by `radius` leaves no straight edge, in which
/// case the mask is the inscribed ellipse.
pub fn radius_collapses_to_ellipse(width: u32, height: u32, radius: u32) -> bool {
    radius.saturating_mul(2) >= width.min(height)
}

/// Centers of the four corner arcs of a rounded rectangle, clockwise from
/// the top-left. Each arc of `radius` touches the two edges of its corner.
pub fn corner_arc_centers(width: u32, height: u32, radius: u32) -> [(i32, i32); 4] {
    let r = radius as i32;
    let right = width as i32 - 1 - r;
    let bottom = height as i32 - 1 - r;
    [(r, r), (right, r), (right, bottom), (r, bottom)]
}

/// Color of scanline `row` in a vertical gradient of `height` rows
/// from `top` to `bottom`. Channels are truncated, not rounded.
pub fn gradient_row_color(top: Rgb<u8>, bottom: Rgb<u8>, row: u32, height: u32) -> Rgb<u8> {
    let t = if height == 0 {
        0.0
    } else {
        row as f64 / height as f64
    };
    let lerp = |a: u8, b: u8| (a as f64 + t * (b as f64 - a as f64)) as u8;
    Rgb([
        lerp(top[0], bottom[0]),
        lerp(top[1], bottom[1]),
        lerp(top[2], bottom[2]),
    ])
}
