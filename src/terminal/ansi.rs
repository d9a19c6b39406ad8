//! Escape sequences used by the in-place redraw.

use std::io::{self, Write};

/// Clear the whole screen and home the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Move the cursor up `lines` rows. Writes nothing for zero, since `ESC[0A`
/// moves one row on most terminals.
pub fn cursor_up<W: Write + ?Sized>(out: &mut W, lines: usize) -> io::Result<()> {
    if lines > 0 {
        write!(out, "\x1b[{}A", lines)?;
    }
    Ok(())
}
