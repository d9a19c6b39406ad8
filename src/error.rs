//! Top-level error type and exit codes.

use std::io;
use std::path::PathBuf;

use crate::ascii::DimensionError;
use crate::camera::CameraError;
use crate::config::ConfigError;
use crate::frame::FrameError;
use crate::live::LiveError;

/// Every failure that ends the process, one variant per class.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing command-line arguments
    #[error("{0}")]
    InvalidArgument(String),
    /// Source image could not be decoded, or a frame was unusable
    #[error(transparent)]
    InvalidInput(#[from] FrameError),
    /// Output file could not be written
    #[error("Error while writing to file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Terminal or stdout I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Camera(#[from] CameraError),
}

impl AppError {
    /// Process exit code for this error class.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::InvalidArgument(_) => 2,
            AppError::InvalidInput(_) => 3,
            AppError::Write { .. } | AppError::Io(_) => 4,
            AppError::Config(_) => 5,
            AppError::Camera(_) => 6,
        }
    }
}

impl From<DimensionError> for AppError {
    fn from(e: DimensionError) -> Self {
        AppError::InvalidArgument(e.to_string())
    }
}

impl From<LiveError> for AppError {
    fn from(e: LiveError) -> Self {
        match e {
            LiveError::Io(e) => AppError::Io(e),
            LiveError::ZeroColumns => {
                AppError::InvalidArgument(LiveError::ZeroColumns.to_string())
            }
            LiveError::Dimension(e) => e.into(),
            LiveError::Frame(e) => AppError::InvalidInput(e),
        }
    }
}
