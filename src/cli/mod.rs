//! Command-line interface definitions and handlers.

mod args;
mod commands;

pub use args::{normalize_args, Args};
pub use commands::{output_path, render_image, run, save_ascii, Settings};
