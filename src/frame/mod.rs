//! Pixel grid type shared by every rendering stage.
//!
//! A [`Frame`] is a decoded image or a captured camera frame. Decoding and
//! geometric resizing are delegated to the `image` crate through the
//! [`decode`] and [`resize`] adapters.

mod decode;
mod resize;

pub use decode::{decode, from_dynamic};
pub use resize::resize;

use std::path::PathBuf;

/// Pixel layout of a [`Frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFormat {
    /// Single intensity channel (1 byte per pixel)
    Gray,
    /// Red, green, blue (3 bytes per pixel)
    Rgb,
}

impl FrameFormat {
    /// Number of bytes per pixel for this layout.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            FrameFormat::Gray => 1,
            FrameFormat::Rgb => 3,
        }
    }
}

/// A single pixel read out of a [`Frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pixel {
    Gray(u8),
    Rgb { r: u8, g: u8, b: u8 },
}

impl Pixel {
    /// The pixel as an RGB triple. Gray pixels expand to `(v, v, v)`.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            Pixel::Gray(v) => (v, v, v),
            Pixel::Rgb { r, g, b } => (r, g, b),
        }
    }
}

/// Rectangular pixel grid in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Raw pixel data, `width * height * bytes_per_pixel` bytes
    data: Vec<u8>,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel layout
    format: FrameFormat,
}

impl Frame {
    /// Build a frame from raw bytes, checking the buffer matches the dimensions.
    ///
    /// # Errors
    /// * `FrameError::Empty` - If either dimension is zero
    /// * `FrameError::BufferSize` - If `data` has the wrong length
    pub fn new(
        data: Vec<u8>,
        width: u32,
        height: u32,
        format: FrameFormat,
    ) -> Result<Self, FrameError> {
        if width == 0 || height == 0 {
            return Err(FrameError::Empty);
        }
        let expected = width as usize * height as usize * format.bytes_per_pixel();
        if data.len() != expected {
            return Err(FrameError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            format,
        })
    }

    /// Build a frame whose buffer length the caller already guarantees.
    pub(crate) fn from_raw_parts(
        data: Vec<u8>,
        width: u32,
        height: u32,
        format: FrameFormat,
    ) -> Self {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize * format.bytes_per_pixel()
        );
        Self {
            data,
            width,
            height,
            format,
        }
    }

    /// Build an RGB frame.
    pub fn rgb(data: Vec<u8>, width: u32, height: u32) -> Result<Self, FrameError> {
        Self::new(data, width, height, FrameFormat::Rgb)
    }

    /// Build a single-channel frame.
    pub fn gray(data: Vec<u8>, width: u32, height: u32) -> Result<Self, FrameError> {
        Self::new(data, width, height, FrameFormat::Gray)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> FrameFormat {
        self.format
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the raw bytes. The length cannot change.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Iterate over rows, top to bottom, each row yielding its pixels left to right.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Pixel> + '_> + '_ {
        let bpp = self.format.bytes_per_pixel();
        let format = self.format;
        self.data
            .chunks_exact(self.width as usize * bpp)
            .map(move |row| {
                row.chunks_exact(bpp).map(move |px| match format {
                    FrameFormat::Gray => Pixel::Gray(px[0]),
                    FrameFormat::Rgb => Pixel::Rgb {
                        r: px[0],
                        g: px[1],
                        b: px[2],
                    },
                })
            })
    }
}

/// Errors produced while decoding or transforming a frame.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The image file could not be opened or decoded
    #[error("Invalid input file '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// The frame has no pixels
    #[error("Frame is empty")]
    Empty,
    /// Raw buffer length does not match the dimensions
    #[error("Frame buffer has {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}
