//! Frame to text rendering.

use super::color::{encode_into, RESET};
use super::mapping::pixel_glyph;
use crate::frame::Frame;

/// Rendering options fixed for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Output width in characters
    pub columns: u32,
    /// Emit true-color escapes around each glyph
    pub color: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            columns: 70,
            color: true,
        }
    }
}

/// Render a frame that has already been resized to the output grid.
///
/// One `\n`-terminated line per row. In color mode every glyph carries its
/// pixel's own RGB, and a single [`RESET`] follows the last line.
pub fn render(frame: &Frame, config: &RenderConfig) -> String {
    if config.color {
        render_color(frame)
    } else {
        render_gray(frame)
    }
}

// Glyphs come from the pixels' own luminance so both modes pick the same ones.
fn render_gray(frame: &Frame) -> String {
    let mut text =
        String::with_capacity((frame.width() as usize + 1) * frame.height() as usize);
    for row in frame.rows() {
        text.extend(row.map(pixel_glyph));
        text.push('\n');
    }
    text
}

fn render_color(frame: &Frame) -> String {
    // Escape plus glyph is at most 20 bytes
    let mut text = String::with_capacity(
        frame.width() as usize * frame.height() as usize * 20 + frame.height() as usize + RESET.len(),
    );
    for row in frame.rows() {
        for pixel in row {
            let (r, g, b) = pixel.to_rgb();
            encode_into(&mut text, r, g, b, pixel_glyph(pixel));
        }
        text.push('\n');
    }
    text.push_str(RESET);
    text
}

/// Number of line breaks in a rendered frame.
pub fn line_count(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}
