//! Rectangle fill with subpixel edge coverage, plus a diagnostic gradient

use crate::framebuffer::FrameBuffer;
use drift_core::{composite, PackedColor};

/// Round half-up to the nearest pixel boundary.
#[inline]
fn round_to_i64(d: f64) -> i64 {
    (d + 0.5).floor() as i64
}

/// Fill an axis-aligned rectangle with antialiased edges.
///
/// Continuous bounds are rounded to pixel bounds; the fractional coverage
/// lost at each edge is folded into the blend for that edge's row/column
/// of pixels, which antialiases the rectangle without supersampling.
/// Bounds are clamped to the framebuffer (a clamped edge is fully inside,
/// so its coverage is forced to 1), and fully off-screen or degenerate
/// rectangles write nothing. Per-pixel coverage is `src.a / 255` times the
/// applicable edge fractions; coverage 1 skips the read-blend-write and
/// stores `src` directly.
pub fn fill_rect(
    fb: &mut FrameBuffer,
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    src: PackedColor,
) {
    let mut min_x = round_to_i64(start_x);
    let mut min_y = round_to_i64(start_y);
    let mut max_x = round_to_i64(end_x);
    let mut max_y = round_to_i64(end_y);

    let mut min_x_fill = (start_x - min_x as f64).abs();
    let mut min_y_fill = (start_y - min_y as f64).abs();
    let mut max_x_fill = (end_x - max_x as f64).abs();
    let mut max_y_fill = (end_y - max_y as f64).abs();

    // Clamp to the buffer; a clamped edge lies fully inside the rect
    if min_x <= 0 {
        min_x = 0;
        min_x_fill = 1.0;
    }
    if min_y <= 0 {
        min_y = 0;
        min_y_fill = 1.0;
    }
    if max_x >= fb.width() as i64 {
        max_x = fb.width() as i64;
        max_x_fill = 1.0;
    }
    if max_y >= fb.height() as i64 {
        max_y = fb.height() as i64;
        max_y_fill = 1.0;
    }

    if min_x >= max_x || min_y >= max_y {
        return;
    }

    let alpha = src.a() as f64 / 255.0;

    for y in min_y..max_y {
        for x in min_x..max_x {
            let mut fill_ratio = 1.0;
            if y == min_y {
                fill_ratio *= min_y_fill;
            }
            if x == min_x {
                fill_ratio *= min_x_fill;
            }
            if y == max_y - 1 {
                fill_ratio *= max_y_fill;
            }
            if x == max_x - 1 {
                fill_ratio *= max_x_fill;
            }

            let coverage = alpha * fill_ratio;
            if coverage == 1.0 {
                // Opaque overwrite: skip the destination read entirely
                fb.set_pixel(x as u32, y as u32, src);
            } else {
                let dst = fb.pixel(x as u32, y as u32);
                fb.set_pixel(x as u32, y as u32, composite(src, dst, coverage));
            }
        }
    }
}

/// Diagnostic tiled gradient driven by pixel coordinates plus a moving
/// offset. Handy for eyeballing framebuffer addressing and channel order;
/// not part of the simulation.
pub fn render_gradient(fb: &mut FrameBuffer, offset: u32) {
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let red = offset as u8;
            let green = (y.wrapping_add(offset)) as u8;
            let blue = (x.wrapping_add(offset)) as u8;
            fb.set_pixel(x, y, PackedColor::new(0, red, green, blue));
        }
    }
}
