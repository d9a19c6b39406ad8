//! Terminal management: raw input mode, key polling and redraw escapes.

pub mod ansi;
mod input;
mod raw_mode;
#[cfg(unix)]
mod termios;

#[cfg(unix)]
pub use input::StdinKeys;
pub use input::{is_quit_key, KeyInput};
pub use raw_mode::{RawModeGuard, TerminalMode};
#[cfg(unix)]
pub use termios::{attributes, set_attributes, TermiosMode};
