//! Luminance using the ITU-R BT.601 weights.

use crate::frame::{Frame, FrameFormat, Pixel};

/// Red weight in Y = 0.299*R + 0.587*G + 0.114*B
pub const RED_WEIGHT: f32 = 0.299;
/// Green weight
pub const GREEN_WEIGHT: f32 = 0.587;
/// Blue weight
pub const BLUE_WEIGHT: f32 = 0.114;

/// Intensity of a pixel in `[0.0, 255.0]`.
///
/// Single-channel pixels are used as-is. RGB pixels use the BT.601 weighted
/// sum, which tracks perceived brightness far better than a plain average.
#[inline]
pub fn luminance(pixel: Pixel) -> f32 {
    match pixel {
        Pixel::Gray(v) => v as f32,
        Pixel::Rgb { r, g, b } => {
            RED_WEIGHT * r as f32 + GREEN_WEIGHT * g as f32 + BLUE_WEIGHT * b as f32
        }
    }
}

/// Convert a frame to single-channel grayscale.
///
/// Uses integer math for speed. The coefficients are scaled by 1000:
/// 299 + 587 + 114 = 1000, so white stays 255.
/// Gray frames are returned unchanged. The renderer maps glyphs from
/// [`luminance`] directly, so this is only for callers that want a gray frame.
pub fn to_grayscale(frame: &Frame) -> Frame {
    if frame.format() == FrameFormat::Gray {
        return frame.clone();
    }

    let mut gray = Vec::with_capacity(frame.width() as usize * frame.height() as usize);
    for rgb in frame.data().chunks_exact(3) {
        let r = rgb[0] as u32;
        let g = rgb[1] as u32;
        let b = rgb[2] as u32;
        gray.push(((299 * r + 587 * g + 114 * b) / 1000) as u8);
    }

    Frame::from_raw_parts(gray, frame.width(), frame.height(), FrameFormat::Gray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_gray_passthrough() {
        assert_eq!(luminance(Pixel::Gray(0)), 0.0);
        assert_eq!(luminance(Pixel::Gray(128)), 128.0);
        assert_eq!(luminance(Pixel::Gray(255)), 255.0);
    }

    #[test]
    fn test_luminance_weights_follow_channel_meaning() {
        let red = luminance(Pixel::Rgb { r: 255, g: 0, b: 0 });
        let green = luminance(Pixel::Rgb { r: 0, g: 255, b: 0 });
        let blue = luminance(Pixel::Rgb { r: 0, g: 0, b: 255 });
        assert!((red - 76.245).abs() < 0.01);
        assert!((green - 149.685).abs() < 0.01);
        assert!((blue - 29.07).abs() < 0.01);
        assert!(green > red && red > blue);
    }

    #[test]
    fn test_luminance_white_is_full_scale() {
        let white = luminance(Pixel::Rgb {
            r: 255,
            g: 255,
            b: 255,
        });
        assert!((white - 255.0).abs() < 0.01);
    }

    #[test]
    fn test_to_grayscale_rgb() {
        let frame = Frame::rgb(vec![255, 0, 0, 0, 255, 0, 255, 255, 255], 3, 1).unwrap();
        let gray = to_grayscale(&frame);
        assert_eq!(gray.format(), FrameFormat::Gray);
        assert_eq!(gray.data(), &[76, 149, 255]);
    }

    #[test]
    fn test_to_grayscale_gray_is_identity() {
        let frame = Frame::gray(vec![1, 2, 3, 4], 2, 2).unwrap();
        assert_eq!(to_grayscale(&frame), frame);
    }
}
