//! Still image decoding through the `image` crate.

use image::DynamicImage;
use std::path::Path;

use super::{Frame, FrameError};

/// Decode an image file into an RGB frame.
///
/// Any format the `image` crate was built with is accepted. Alpha is dropped.
///
/// # Errors
/// * `FrameError::Decode` - If the file cannot be read or decoded
/// * `FrameError::Empty` - If the decoded image has no pixels
pub fn decode(path: &Path) -> Result<Frame, FrameError> {
    let img = image::open(path).map_err(|source| FrameError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "Decoded {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    from_dynamic(img)
}

/// Convert an already-decoded image into an RGB frame.
pub fn from_dynamic(img: DynamicImage) -> Result<Frame, FrameError> {
    let rgb = img.into_rgb8();
    let (width, height) = rgb.dimensions();
    Frame::rgb(rgb.into_raw(), width, height)
}
