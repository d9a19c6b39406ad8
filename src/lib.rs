//! iascii library crate.
//!
//! Renders images and live webcam frames as character art for the terminal.
//! The binary is a thin wrapper around [`cli::run`]; the modules are exposed
//! for integration testing.

pub mod ascii;
pub mod camera;
pub mod cli;
pub mod config;
pub mod error;
pub mod frame;
pub mod live;
pub mod terminal;
