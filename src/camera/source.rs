//! Frame source abstraction.

use super::types::CameraError;
use crate::frame::Frame;

/// Something that produces frames on demand, one at a time.
pub trait FrameSource {
    /// Block until the next frame is available.
    ///
    /// Returns `Ok(None)` when the source has no more frames (end of stream
    /// or an empty frame).
    ///
    /// # Errors
    /// Returns a `CameraError` if the device fails while capturing.
    fn next_frame(&mut self) -> Result<Option<Frame>, CameraError>;
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    fn next_frame(&mut self) -> Result<Option<Frame>, CameraError> {
        (**self).next_frame()
    }
}

impl<S: FrameSource + ?Sized> FrameSource for &mut S {
    fn next_frame(&mut self) -> Result<Option<Frame>, CameraError> {
        (**self).next_frame()
    }
}
