//! CLI argument parsing with clap.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Image to ASCII art converter
#[derive(Parser, Debug)]
#[command(name = "iascii")]
#[command(version, about = "Image to ASCII art converter", long_about = None)]
#[command(after_help = "EXAMPLES:
    iascii photo.jpg               # Colored output, 70 columns
    iascii -nc -w 120 photo.jpg    # Grayscale, 120 columns
    iascii -s photo.jpg            # Write photo_ascii.txt
    iascii --live                  # Webcam, press q to quit")]
pub struct Args {
    /// Input image (not needed with --live)
    #[arg(required_unless_present = "live")]
    pub input: Option<PathBuf>,

    /// Output in grayscale (also accepted as -nc)
    #[arg(long)]
    pub no_color: bool,

    /// Save to <name>_ascii.txt instead of stdout
    #[arg(short, long)]
    pub save_file: bool,

    /// Output width in characters [default: 70]
    #[arg(short, long, value_name = "WIDTH")]
    pub width: Option<u32>,

    /// Render the webcam live in place (press q to quit)
    #[arg(short, long)]
    pub live: bool,

    /// Camera device index for --live
    #[arg(long, value_name = "INDEX")]
    pub camera: Option<u32>,

    /// Mirror the camera horizontally
    #[arg(long)]
    pub mirror: bool,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Rewrite the two-letter short flag `-nc` to `--no-color`.
///
/// clap only supports single-character short flags. Arguments after a bare
/// `--` are left alone so a file literally named `-nc` still works.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_separator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if after_separator {
                return arg;
            }
            if arg == "--" {
                after_separator = true;
                arg
            } else if arg == "-nc" {
                OsString::from("--no-color")
            } else {
                arg
            }
        })
        .collect()
}
