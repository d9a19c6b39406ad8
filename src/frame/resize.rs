//! Geometric resizing through `image::imageops`.

use image::imageops::{self, FilterType};
use image::{GrayImage, RgbImage};

use super::{Frame, FrameError, FrameFormat};

/// Bilinear filtering, matching the usual default of video pipelines.
const FILTER: FilterType = FilterType::Triangle;

/// Resize a frame to exactly `width` x `height` pixels.
///
/// The pixel format is preserved.
///
/// # Errors
/// * `FrameError::Empty` - If either target dimension is zero
pub fn resize(frame: &Frame, width: u32, height: u32) -> Result<Frame, FrameError> {
    if width == 0 || height == 0 {
        return Err(FrameError::Empty);
    }
    if frame.width() == width && frame.height() == height {
        return Ok(frame.clone());
    }

    let buffer_error = || FrameError::BufferSize {
        expected: frame.width() as usize
            * frame.height() as usize
            * frame.format().bytes_per_pixel(),
        actual: frame.data().len(),
    };

    match frame.format() {
        FrameFormat::Rgb => {
            let src = RgbImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
                .ok_or_else(buffer_error)?;
            let out = imageops::resize(&src, width, height, FILTER);
            Frame::rgb(out.into_raw(), width, height)
        }
        FrameFormat::Gray => {
            let src = GrayImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
                .ok_or_else(buffer_error)?;
            let out = imageops::resize(&src, width, height, FILTER);
            Frame::gray(out.into_raw(), width, height)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_dimensions() {
        let frame = Frame::rgb(vec![128; 8 * 4 * 3], 8, 4).unwrap();
        let out = resize(&frame, 4, 2).unwrap();
        assert_eq!(out.width(), 4);
        assert_eq!(out.height(), 2);
        assert_eq!(out.data().len(), 4 * 2 * 3);
        assert_eq!(out.format(), FrameFormat::Rgb);
    }

    #[test]
    fn test_resize_uniform_color_preserved() {
        let frame = Frame::gray(vec![200; 10 * 10], 10, 10).unwrap();
        let out = resize(&frame, 3, 3).unwrap();
        assert!(out.data().iter().all(|&v| v == 200));
    }

    #[test]
    fn test_resize_zero_target() {
        let frame = Frame::gray(vec![0; 4], 2, 2).unwrap();
        assert!(matches!(resize(&frame, 0, 1), Err(FrameError::Empty)));
    }
}
