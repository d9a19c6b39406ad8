//! Live frame acquisition.
//!
//! The live loop pulls frames through the [`FrameSource`] trait. The webcam
//! implementation, [`CameraCapture`], wraps nokhwa and is only built with the
//! `camera` feature.

#[cfg(feature = "camera")]
mod capture;
mod frame_utils;
mod source;
mod types;

#[cfg(feature = "camera")]
pub use capture::CameraCapture;
pub use frame_utils::mirror_horizontal;
pub use source::FrameSource;
pub use types::{CameraError, CameraSettings, Resolution};

/// Open the webcam described by `settings`.
///
/// # Errors
/// Returns the camera's open error, or `CameraError::Unsupported` when the
/// crate was built without the `camera` feature.
pub fn open(settings: CameraSettings) -> Result<Box<dyn FrameSource>, CameraError> {
    #[cfg(feature = "camera")]
    {
        Ok(Box::new(CameraCapture::open(settings)?))
    }
    #[cfg(not(feature = "camera"))]
    {
        let _ = settings;
        Err(CameraError::Unsupported)
    }
}
