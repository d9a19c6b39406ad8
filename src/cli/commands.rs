//! Command handlers: single-shot rendering and the live camera view.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::args::Args;
use crate::ascii::{render, target_rows, RenderConfig};
use crate::camera::CameraSettings;
use crate::config::Config;
use crate::error::AppError;
use crate::frame::{decode, resize};

/// Settings resolved from flags, config file and built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub render: RenderConfig,
    pub camera: CameraSettings,
}

impl Settings {
    /// Merge command-line flags over the config file.
    ///
    /// # Errors
    /// Returns `AppError::InvalidArgument` if the width is zero.
    pub fn resolve(args: &Args, config: &Config) -> Result<Self, AppError> {
        let columns = args.width.unwrap_or(config.render.width);
        if columns == 0 {
            return Err(AppError::InvalidArgument(
                "Width must be a positive integer".to_string(),
            ));
        }

        Ok(Self {
            render: RenderConfig {
                columns,
                color: config.render.color && !args.no_color,
            },
            camera: CameraSettings {
                device_index: args.camera.unwrap_or(config.camera.device),
                mirror: args.mirror || config.camera.mirror,
                ..CameraSettings::default()
            },
        })
    }
}

/// Run the command described by `args`.
///
/// # Errors
/// Any failure is returned to `main`, which maps it to an exit code.
pub fn run(args: Args) -> Result<(), AppError> {
    let config = Config::load(args.config.as_deref())?;
    let settings = Settings::resolve(&args, &config)?;
    log::debug!("Resolved settings: {:?}", settings);

    if args.live {
        if args.save_file {
            log::warn!("--save-file is ignored in live mode");
        }
        return run_live(settings);
    }

    let input = args
        .input
        .as_deref()
        .ok_or_else(|| AppError::InvalidArgument("No input file specified".to_string()))?;
    let text = render_image(input, &settings.render)?;

    if args.save_file {
        let path = output_path(input);
        save_ascii(&text, &path)?;
        println!("Output successfully written to {}", path.display());
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
    }
    Ok(())
}

/// Decode, resize and render an image file.
///
/// # Errors
/// * `AppError::InvalidInput` - If the file cannot be decoded
/// * `AppError::InvalidArgument` - If the target size is invalid
pub fn render_image(path: &Path, config: &RenderConfig) -> Result<String, AppError> {
    let frame = decode(path)?;
    let rows = target_rows(frame.height(), frame.width(), config.columns)?;
    log::debug!(
        "Rendering {}x{} source as {}x{} characters",
        frame.width(),
        frame.height(),
        config.columns,
        rows
    );
    let resized = resize(&frame, config.columns, rows)?;
    Ok(render(&resized, config))
}

/// `<stem>_ascii.txt` in the current directory.
pub fn output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    PathBuf::from(format!("{}_ascii.txt", stem))
}

/// Write rendered text to `path`, replacing any existing file.
///
/// # Errors
/// Returns `AppError::Write` if the file cannot be created or written.
pub fn save_ascii(text: &str, path: &Path) -> Result<(), AppError> {
    std::fs::write(path, text).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

#[cfg(unix)]
fn run_live(settings: Settings) -> Result<(), AppError> {
    use crate::live::{LiveRenderLoop, StopReason};
    use crate::terminal::{StdinKeys, TermiosMode};

    let source = crate::camera::open(settings.camera)?;
    let mut mode = TermiosMode::stdin();
    let mut live = LiveRenderLoop::new(source, StdinKeys::new(), io::stdout(), settings.render)?;
    let summary = live.run(&mut mode)?;
    log::info!(
        "Live view stopped after {} frames: {}",
        summary.frames_drawn,
        summary.reason
    );

    match summary.reason {
        StopReason::QuitKey => {}
        StopReason::EndOfStream => eprintln!("Camera stopped producing frames"),
        StopReason::CaptureFailed(e) => eprintln!("Error: {}", e),
    }
    Ok(())
}

#[cfg(not(unix))]
fn run_live(_settings: Settings) -> Result<(), AppError> {
    Err(AppError::InvalidArgument(
        "Live mode requires a Unix terminal".to_string(),
    ))
}
