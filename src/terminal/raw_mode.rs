//! Raw terminal mode with guaranteed restoration.

use std::fmt;
use std::io;

/// A terminal whose input mode can be switched to raw and back.
pub trait TerminalMode {
    /// Snapshot the current attributes, then turn off canonical line
    /// buffering and echo.
    ///
    /// # Errors
    /// Returns an error if the attributes cannot be read or applied.
    fn enable_raw(&mut self) -> io::Result<()>;

    /// Reapply the snapshot taken by the matching [`enable_raw`](Self::enable_raw).
    /// A no-op if raw mode is not active.
    ///
    /// # Errors
    /// Returns an error if the attributes cannot be applied.
    fn restore(&mut self) -> io::Result<()>;
}

impl<T: TerminalMode + ?Sized> TerminalMode for &mut T {
    fn enable_raw(&mut self) -> io::Result<()> {
        (**self).enable_raw()
    }

    fn restore(&mut self) -> io::Result<()> {
        (**self).restore()
    }
}

/// Guard that ensures the terminal is restored to its previous mode on drop.
/// This handles normal exits, early returns through `?`, and panics.
pub struct RawModeGuard<'a, M: TerminalMode + ?Sized> {
    mode: &'a mut M,
    /// Whether this guard is responsible for cleanup
    active: bool,
}

impl<'a, M: TerminalMode + ?Sized> RawModeGuard<'a, M> {
    /// Enter raw mode and return a guard that will restore it on drop.
    ///
    /// # Errors
    /// Returns an error if enabling raw mode fails. Nothing needs restoring
    /// in that case.
    pub fn enter(mode: &'a mut M) -> io::Result<Self> {
        mode.enable_raw()?;
        Ok(Self { mode, active: true })
    }

    /// Restore the terminal now, reporting any error.
    /// After calling this, the guard's drop is a no-op.
    pub fn exit(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            self.mode.restore()?;
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl<M: TerminalMode + ?Sized> Drop for RawModeGuard<'_, M> {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            // Best-effort cleanup - nowhere to report errors during drop
            let _ = self.mode.restore();
        }
    }
}

impl<M: TerminalMode + ?Sized> fmt::Debug for RawModeGuard<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawModeGuard")
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
