//! Intensity to ramp index mapping.

use super::charset::{glyph, RAMP_LEN};
use super::grayscale::luminance;
use crate::frame::Pixel;

/// Map an intensity in `[0, 255]` to an index into a ramp of `ramp_len` glyphs.
///
/// `index = (L-1) - floor(intensity / 255 * (L-1))`, so intensity 255 picks
/// the first (densest) glyph and intensity 0 picks the last (blank) one.
/// The result is clamped to `[0, L-1]`; out-of-range intensities are clamped
/// first. An empty ramp always yields 0.
#[inline]
pub fn ramp_index(intensity: f32, ramp_len: usize) -> usize {
    if ramp_len == 0 {
        return 0;
    }
    let last = (ramp_len - 1) as f32;
    let intensity = intensity.clamp(0.0, 255.0);
    let step = (intensity / 255.0 * last).floor();
    let index = (last - step).clamp(0.0, last);
    index as usize
}

/// Ramp index for a pixel against the built-in ramp.
#[inline]
pub fn pixel_index(pixel: Pixel) -> usize {
    ramp_index(luminance(pixel), RAMP_LEN)
}

/// Glyph for a pixel against the built-in ramp.
#[inline]
pub fn pixel_glyph(pixel: Pixel) -> char {
    glyph(pixel_index(pixel))
}
