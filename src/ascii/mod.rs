//! Character-art rendering pipeline.
//!
//! Turns a [`Frame`](crate::frame::Frame) into terminal text:
//!
//! 1. **Target size** - rows from columns and source aspect ([`target_rows`])
//! 2. **Luminance** - gray value or BT.601 weighted RGB ([`luminance`])
//! 3. **Mapping** - luminance to a glyph of [`CHAR_RAMP`] ([`ramp_index`])
//! 4. **Color** - optional 24-bit foreground escape per glyph ([`encode`])
//! 5. **Render** - rows joined into one string ([`render`])

mod charset;
mod color;
mod dimensions;
mod grayscale;
mod mapping;
mod render;

pub use charset::{glyph, CHAR_RAMP, RAMP_LEN};
pub use color::{encode, encode_into, RESET};
pub use dimensions::{target_rows, DimensionError, CHAR_ASPECT_RATIO};
pub use grayscale::{luminance, to_grayscale, BLUE_WEIGHT, GREEN_WEIGHT, RED_WEIGHT};
pub use mapping::{pixel_glyph, pixel_index, ramp_index};
pub use render::{line_count, render, RenderConfig};
