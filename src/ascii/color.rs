//! 24-bit foreground color escapes.

use std::fmt::Write;

/// Resets all SGR attributes. Written once at the end of a color frame.
pub const RESET: &str = "\x1b[0m";

/// Wrap `glyph` in a true-color foreground escape: `ESC[38;2;R;G;Bm` + glyph.
pub fn encode(r: u8, g: u8, b: u8, glyph: char) -> String {
    let mut out = String::with_capacity(20);
    encode_into(&mut out, r, g, b, glyph);
    out
}

/// Append the escape and glyph to an existing buffer.
#[inline]
pub fn encode_into(out: &mut String, r: u8, g: u8, b: u8, glyph: char) {
    // Writing to a String cannot fail
    let _ = write!(out, "\x1b[38;2;{};{};{}m{}", r, g, b, glyph);
}
