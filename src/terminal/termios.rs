//! termios-backed [`TerminalMode`] for Unix terminals.

use std::io;

use rustix::fd::AsFd;
use rustix::termios::{self, LocalModes, OptionalActions, Termios};

use super::raw_mode::TerminalMode;

/// Read the terminal attributes of `fd`.
///
/// # Errors
/// Returns the OS error, e.g. `ENOTTY` when `fd` is not a terminal.
pub fn attributes<Fd: AsFd>(fd: Fd) -> io::Result<Termios> {
    Ok(termios::tcgetattr(fd)?)
}

/// Apply terminal attributes to `fd` immediately.
///
/// # Errors
/// Returns the OS error if `tcsetattr` fails.
pub fn set_attributes<Fd: AsFd>(fd: Fd, attrs: &Termios) -> io::Result<()> {
    Ok(termios::tcsetattr(fd, OptionalActions::Now, attrs)?)
}

/// Raw mode over a terminal file descriptor.
///
/// Only canonical mode and echo are turned off; signals (Ctrl-C) and output
/// processing keep working.
#[derive(Debug)]
pub struct TermiosMode<F = io::Stdin> {
    fd: F,
    /// Attributes captured by `enable_raw`
    saved: Option<Termios>,
}

impl TermiosMode {
    /// Raw mode on the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin())
    }
}

impl<F: AsFd> TermiosMode<F> {
    pub fn new(fd: F) -> Self {
        Self { fd, saved: None }
    }

    /// Whether a snapshot is currently held.
    pub fn is_raw(&self) -> bool {
        self.saved.is_some()
    }
}

impl<F: AsFd> TerminalMode for TermiosMode<F> {
    fn enable_raw(&mut self) -> io::Result<()> {
        // Keep the first snapshot if enabled twice
        if self.saved.is_some() {
            return Ok(());
        }
        let original = attributes(&self.fd)?;
        let mut raw = original.clone();
        raw.local_modes.remove(LocalModes::ICANON | LocalModes::ECHO);
        set_attributes(&self.fd, &raw)?;
        self.saved = Some(original);
        log::debug!("Raw mode enabled on {:?}", self.fd.as_fd());
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        if let Some(saved) = self.saved.take() {
            set_attributes(&self.fd, &saved)?;
            log::debug!("Terminal attributes restored on {:?}", self.fd.as_fd());
        }
        Ok(())
    }
}
