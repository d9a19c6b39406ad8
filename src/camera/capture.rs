//! Webcam frame source backed by nokhwa.

use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{
    CameraFormat, CameraIndex, FrameFormat as NokhwaFrameFormat, RequestedFormat,
    RequestedFormatType,
};
use nokhwa::Camera;

use super::frame_utils::mirror_horizontal;
use super::source::FrameSource;
use super::types::{CameraError, CameraSettings};
use crate::frame::{Frame, FrameError};

/// Camera capture handle.
///
/// Opens the device and its stream up front; every call to
/// [`FrameSource::next_frame`] blocks on the device until a frame arrives.
/// There is no timeout, so a stalled camera stalls the caller.
pub struct CameraCapture {
    camera: Camera,
    settings: CameraSettings,
}

impl std::fmt::Debug for CameraCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraCapture")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl CameraCapture {
    /// Open a camera and start its stream.
    ///
    /// # Errors
    /// * `CameraError::PermissionDenied` - If camera access is denied
    /// * `CameraError::OpenFailed` - If no format strategy could open the device
    /// * `CameraError::StreamFailed` - If the stream fails to start
    pub fn open(settings: CameraSettings) -> Result<Self, CameraError> {
        let index = CameraIndex::Index(settings.device_index);
        let mut camera = open_camera_with_fallback(&index, &settings)?;

        camera
            .open_stream()
            .map_err(|e| CameraError::StreamFailed(e.to_string()))?;

        let res = camera.resolution();
        log::debug!(
            "Camera {} streaming at {}x{} @ {} fps (requested {}x{})",
            settings.device_index,
            res.width(),
            res.height(),
            camera.frame_rate(),
            settings.resolution.width,
            settings.resolution.height
        );

        Ok(Self { camera, settings })
    }
}

impl FrameSource for CameraCapture {
    fn next_frame(&mut self) -> Result<Option<Frame>, CameraError> {
        let raw = self
            .camera
            .frame()
            .map_err(|e| CameraError::CaptureFailed(e.to_string()))?;
        // Handles MJPEG, YUYV, NV12 and friends
        let decoded = raw
            .decode_image::<RgbFormat>()
            .map_err(|e| CameraError::CaptureFailed(e.to_string()))?;
        let (width, height) = decoded.dimensions();

        let mut frame = match Frame::rgb(decoded.into_raw(), width, height) {
            Ok(frame) => frame,
            Err(FrameError::Empty) => return Ok(None),
            Err(e) => return Err(CameraError::CaptureFailed(e.to_string())),
        };
        if self.settings.mirror {
            mirror_horizontal(&mut frame);
        }
        Ok(Some(frame))
    }
}

impl Drop for CameraCapture {
    fn drop(&mut self) {
        let _ = self.camera.stop_stream();
    }
}

/// Try to open a camera with multiple format fallback strategies.
fn open_camera_with_fallback(
    index: &CameraIndex,
    settings: &CameraSettings,
) -> Result<Camera, CameraError> {
    // In order of preference:
    // 1. Closest match with NV12 (native on macOS)
    // 2. Closest match with MJPEG (widely supported)
    // 3. Whatever the camera picks at its highest resolution
    let closest = |format| {
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(CameraFormat::new(
            nokhwa::utils::Resolution::new(settings.resolution.width, settings.resolution.height),
            format,
            settings.fps,
        )))
    };
    let format_attempts = [
        closest(NokhwaFrameFormat::NV12),
        closest(NokhwaFrameFormat::MJPEG),
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution),
    ];

    let mut last_error = None;
    for requested in format_attempts {
        match Camera::new(index.clone(), requested) {
            Ok(cam) => return Ok(cam),
            Err(e) => {
                log::debug!("Camera format attempt failed: {}", e);
                last_error = Some(e);
            }
        }
    }

    let msg = last_error
        .map(|e| e.to_string())
        .unwrap_or_else(|| "no format could be negotiated".to_string());
    let lower = msg.to_lowercase();
    if lower.contains("permission") || lower.contains("denied") || lower.contains("authorization")
    {
        Err(CameraError::PermissionDenied)
    } else {
        Err(CameraError::OpenFailed(msg))
    }
}
