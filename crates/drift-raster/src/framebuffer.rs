//! Borrowed framebuffer view with checked pixel access

use drift_core::{DriftError, PackedColor, Result};

const BYTES_PER_PIXEL: usize = 4;

/// A rectangular bitmap view over host-owned pixel storage.
///
/// Pixels are packed 32-bit values, byte order low → high B, G, R, A.
/// `pitch` is the byte stride between rows and may exceed `width * 4`
/// when the host pads rows. The storage is borrowed for the duration of
/// one call chain only; the view never outlives the host's buffer.
pub struct FrameBuffer<'a> {
    pixels: &'a mut [u8],
    width: u32,
    height: u32,
    pitch: usize,
}

impl<'a> FrameBuffer<'a> {
    /// Wrap host storage, validating the descriptor up front so that all
    /// later pixel access can rely on in-bounds rows.
    pub fn new(pixels: &'a mut [u8], width: u32, height: u32, pitch: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(DriftError::EmptyFrameBuffer { width, height });
        }
        if pitch < width as usize * BYTES_PER_PIXEL {
            return Err(DriftError::PitchTooSmall { pitch, width });
        }
        let needed = height as usize * pitch;
        if pixels.len() < needed {
            return Err(DriftError::StorageTooSmall {
                needed,
                len: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
            pitch,
        })
    }

    /// Wrap tightly packed storage (`pitch == width * 4`).
    pub fn new_packed(pixels: &'a mut [u8], width: u32, height: u32) -> Result<Self> {
        Self::new(pixels, width, height, width as usize * BYTES_PER_PIXEL)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.pitch + x as usize * BYTES_PER_PIXEL
    }

    /// Read the pixel at (x, y). Coordinates must be in bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> PackedColor {
        let off = self.offset(x, y);
        let bytes: [u8; 4] = self.pixels[off..off + BYTES_PER_PIXEL].try_into().unwrap();
        PackedColor(u32::from_le_bytes(bytes))
    }

    /// Write the pixel at (x, y). Coordinates must be in bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: PackedColor) {
        let off = self.offset(x, y);
        self.pixels[off..off + BYTES_PER_PIXEL].copy_from_slice(&color.0.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_undersized_storage() {
        let mut buf = vec![0u8; 10];
        assert!(matches!(
            FrameBuffer::new_packed(&mut buf, 4, 4),
            Err(DriftError::StorageTooSmall { needed: 64, len: 10 })
        ));
    }

    #[test]
    fn rejects_pitch_below_row_bytes() {
        let mut buf = vec![0u8; 256];
        assert!(matches!(
            FrameBuffer::new(&mut buf, 4, 4, 8),
            Err(DriftError::PitchTooSmall { pitch: 8, width: 4 })
        ));
    }

    #[test]
    fn rejects_zero_dimensions() {
        let mut buf = vec![0u8; 64];
        assert!(FrameBuffer::new_packed(&mut buf, 0, 4).is_err());
        assert!(FrameBuffer::new_packed(&mut buf, 4, 0).is_err());
    }

    #[test]
    fn pixel_round_trip_honors_pitch() {
        // 2x2 with 4 bytes of row padding
        let mut buf = vec![0u8; 2 * 12];
        let mut fb = FrameBuffer::new(&mut buf, 2, 2, 12).unwrap();
        let c = PackedColor::new(0xAA, 0xBB, 0xCC, 0xDD);
        fb.set_pixel(1, 1, c);
        assert_eq!(fb.pixel(1, 1), c);
        // Second row starts at byte 12, second pixel at 16
        assert_eq!(&buf[16..20], &[0xDD, 0xCC, 0xBB, 0xAA]);
    }
}
