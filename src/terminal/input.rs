//! Non-blocking keyboard polling.

use std::io;

/// Source of single key bytes that never blocks.
pub trait KeyInput {
    /// Return the next pending byte, or `None` if nothing is waiting.
    ///
    /// # Errors
    /// Returns an error if the underlying read fails.
    fn poll_key(&mut self) -> io::Result<Option<u8>>;
}

impl<K: KeyInput + ?Sized> KeyInput for &mut K {
    fn poll_key(&mut self) -> io::Result<Option<u8>> {
        (**self).poll_key()
    }
}

/// Whether `key` asks the live view to quit.
pub fn is_quit_key(key: u8) -> bool {
    matches!(key, b'q' | b'Q')
}

/// Polls a file descriptor (stdin by default) with a zero timeout.
#[cfg(unix)]
#[derive(Debug)]
pub struct StdinKeys<F = io::Stdin> {
    fd: F,
}

#[cfg(unix)]
impl StdinKeys {
    pub fn new() -> Self {
        Self::from_fd(io::stdin())
    }
}

#[cfg(unix)]
impl<F: rustix::fd::AsFd> StdinKeys<F> {
    pub fn from_fd(fd: F) -> Self {
        Self { fd }
    }
}

#[cfg(unix)]
impl Default for StdinKeys {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
impl<F: rustix::fd::AsFd> KeyInput for StdinKeys<F> {
    fn poll_key(&mut self) -> io::Result<Option<u8>> {
        use rustix::event::{poll, PollFd, PollFlags, Timespec};
        use rustix::io::Errno;

        let mut fds = [PollFd::new(&self.fd, PollFlags::IN)];
        let zero = Timespec {
            tv_sec: 0,
            tv_nsec: 0,
        };
        match poll(&mut fds, Some(&zero)) {
            Ok(0) => return Ok(None),
            Ok(_) => {}
            Err(e) if e == Errno::INTR => return Ok(None),
            Err(e) => return Err(e.into()),
        }
        if !fds[0].revents().contains(PollFlags::IN) {
            return Ok(None);
        }

        let mut byte = [0u8; 1];
        match rustix::io::read(&self.fd, &mut byte[..]) {
            Ok(1) => Ok(Some(byte[0])),
            // EOF
            Ok(_) => Ok(None),
            Err(e) if e == Errno::INTR || e == Errno::AGAIN => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
