//! Packed pixel color and normalized double color math
//!
//! `PackedColor` is the 8-bit-per-channel form stored in the framebuffer;
//! `DoubleColor` is the normalized [0, 1] form used for all simulation
//! math, where interpolation and alpha blending are precision-sensitive
//! and the packed channel order is easy to get backwards.

use bytemuck::{Pod, Zeroable};

/// Packed 32-bit pixel, byte order low → high: blue, green, red, alpha.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct PackedColor(pub u32);

impl PackedColor {
    pub fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    #[inline]
    pub fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub fn b(self) -> u8 {
        self.0 as u8
    }

    /// Unpack to normalized channels (each 8-bit channel / 255).
    pub fn to_double(self) -> DoubleColor {
        DoubleColor {
            a: self.a() as f64 / 255.0,
            r: self.r() as f64 / 255.0,
            g: self.g() as f64 / 255.0,
            b: self.b() as f64 / 255.0,
        }
    }
}

/// Normalized per-channel color, each channel nominally in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DoubleColor {
    pub a: f64,
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl DoubleColor {
    pub fn new(a: f64, r: f64, g: f64, b: f64) -> Self {
        Self { a, r, g, b }
    }

    /// Pack to 8-bit channels, rounding half-up per channel.
    ///
    /// Inputs outside [0, 1] are not clamped; out-of-range channels wrap
    /// to the low 8 bits, so callers must keep channels normalized.
    pub fn to_packed(self) -> PackedColor {
        PackedColor::new(
            round_channel(self.a),
            round_channel(self.r),
            round_channel(self.g),
            round_channel(self.b),
        )
    }
}

#[inline]
fn round_channel(c: f64) -> u8 {
    (c * 255.0 + 0.5) as u32 as u8
}

/// Channel-space linear interpolation, `b + t*(a - b)`.
///
/// Argument order is reversed from conventional lerp: t = 0 yields `b`,
/// t = 1 yields `a`. Kept this way because compositing and the velocity
/// retargeting code both depend on it.
#[inline]
pub fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    (b as f64 + t * (a as f64 - b as f64)) as u8
}

/// Double-space linear interpolation with the same reversed argument
/// order as [`lerp_u8`]: t = 0 yields `b`, t = 1 yields `a`.
#[inline]
pub fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    b + t * (a - b)
}

/// Blend `src` over `dst` by an externally computed coverage × alpha
/// product in [0, 1]. Coverage 1 returns `src` unchanged (overwrite fast
/// path); otherwise alpha is taken from `src` and each of R/G/B is lerped
/// toward `dst` as coverage falls. Straight blend, not premultiplied.
pub fn composite(src: PackedColor, dst: PackedColor, coverage: f64) -> PackedColor {
    if coverage == 1.0 {
        return src;
    }
    PackedColor::new(
        src.a(),
        lerp_u8(src.r(), dst.r(), coverage),
        lerp_u8(src.g(), dst.g(), coverage),
        lerp_u8(src.b(), dst.b(), coverage),
    )
}
