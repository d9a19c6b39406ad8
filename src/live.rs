//! Live camera loop with in-place redraw.
//!
//! Each iteration polls for a quit key, grabs one frame, renders it and
//! writes it over the previous one by moving the cursor back up. The whole
//! loop runs on one thread and blocks on frame acquisition.

use std::fmt;
use std::io::{self, Write};

use crate::ascii::{line_count, render, target_rows, DimensionError, RenderConfig};
use crate::camera::{CameraError, FrameSource};
use crate::frame::{resize, Frame, FrameError};
use crate::terminal::ansi::{cursor_up, CLEAR_SCREEN};
use crate::terminal::{is_quit_key, KeyInput, RawModeGuard, TerminalMode};

/// Lifecycle of a [`LiveRenderLoop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Created, terminal untouched
    Idle,
    /// Raw mode on, drawing frames
    Running,
    /// Stop requested, restoring the terminal
    Draining,
    /// Terminal restored and screen cleared
    Stopped,
}

/// Why the loop stopped drawing.
#[derive(Debug)]
pub enum StopReason {
    /// The user pressed `q` or `Q`
    QuitKey,
    /// The source reported no more frames
    EndOfStream,
    /// The source failed; treated as end of stream
    CaptureFailed(CameraError),
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::QuitKey => write!(f, "quit key pressed"),
            StopReason::EndOfStream => write!(f, "camera stopped producing frames"),
            StopReason::CaptureFailed(e) => write!(f, "{}", e),
        }
    }
}

/// Result of a completed live session.
#[derive(Debug)]
pub struct LiveSummary {
    /// Number of frames written to the output
    pub frames_drawn: usize,
    pub reason: StopReason,
}

/// Errors that abort the loop. The terminal is still restored.
#[derive(Debug, thiserror::Error)]
pub enum LiveError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("Width must be a positive integer")]
    ZeroColumns,
    #[error(transparent)]
    Dimension(#[from] DimensionError),
    #[error(transparent)]
    Frame(#[from] FrameError),
}

/// Repeatedly captures, renders and redraws frames in place.
pub struct LiveRenderLoop<S, K, W> {
    source: S,
    keys: K,
    out: W,
    config: RenderConfig,
    state: LoopState,
    /// Line breaks in the last frame drawn
    prev_lines: usize,
    frames_drawn: usize,
}

impl<S, K, W> fmt::Debug for LiveRenderLoop<S, K, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveRenderLoop")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("prev_lines", &self.prev_lines)
            .field("frames_drawn", &self.frames_drawn)
            .finish_non_exhaustive()
    }
}

impl<S: FrameSource, K: KeyInput, W: Write> LiveRenderLoop<S, K, W> {
    /// Create an idle loop.
    ///
    /// # Errors
    /// Returns `LiveError::ZeroColumns` if `config.columns` is zero.
    pub fn new(source: S, keys: K, out: W, config: RenderConfig) -> Result<Self, LiveError> {
        if config.columns == 0 {
            return Err(LiveError::ZeroColumns);
        }
        Ok(Self {
            source,
            keys,
            out,
            config,
            state: LoopState::Idle,
            prev_lines: 0,
            frames_drawn: 0,
        })
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }

    /// Consume the loop and hand back the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run until a quit key, end of stream, or capture failure.
    ///
    /// Raw mode is held by a [`RawModeGuard`] for the whole run, so the
    /// terminal is restored on every exit path, including errors.
    ///
    /// # Errors
    /// Returns `LiveError` if reading keys or writing output fails, or if a
    /// frame cannot be resized.
    pub fn run<M: TerminalMode + ?Sized>(&mut self, mode: &mut M) -> Result<LiveSummary, LiveError> {
        let mut guard = RawModeGuard::enter(mode)?;
        self.set_state(LoopState::Running);
        self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        self.out.flush()?;

        let reason = loop {
            if let Some(reason) = self.step()? {
                break reason;
            }
        };

        self.set_state(LoopState::Draining);
        guard.exit()?;
        self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        self.out.flush()?;
        self.set_state(LoopState::Stopped);

        Ok(LiveSummary {
            frames_drawn: self.frames_drawn,
            reason,
        })
    }

    /// One iteration: poll keys, acquire, render, draw.
    fn step(&mut self) -> Result<Option<StopReason>, LiveError> {
        if let Some(key) = self.keys.poll_key()? {
            if is_quit_key(key) {
                return Ok(Some(StopReason::QuitKey));
            }
        }

        let frame = match self.source.next_frame() {
            Ok(Some(frame)) => frame,
            Ok(None) => return Ok(Some(StopReason::EndOfStream)),
            Err(e) => {
                log::warn!("Frame capture failed: {}", e);
                return Ok(Some(StopReason::CaptureFailed(e)));
            }
        };

        let text = self.render_frame(&frame)?;
        self.draw(&text)?;
        Ok(None)
    }

    /// Resize a captured frame to the configured grid and render it.
    fn render_frame(&self, frame: &Frame) -> Result<String, LiveError> {
        let rows = target_rows(frame.height(), frame.width(), self.config.columns)?;
        let resized = resize(frame, self.config.columns, rows)?;
        Ok(render(&resized, &self.config))
    }

    /// Overwrite the previous frame with `text`.
    fn draw(&mut self, text: &str) -> io::Result<()> {
        cursor_up(&mut self.out, self.prev_lines)?;
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        self.prev_lines = line_count(text);
        self.frames_drawn += 1;
        Ok(())
    }

    fn set_state(&mut self, state: LoopState) {
        log::debug!("Live loop {:?} -> {:?}", self.state, state);
        self.state = state;
    }
}
