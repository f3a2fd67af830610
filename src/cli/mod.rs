//! CLI module for toolshelf - command-line interface and output rendering.
//!
//! Provides the main entry point with subcommands for listing, showing and
//! checking catalog tools.

pub mod commands;
pub mod render;

pub use commands::{Cli, OutputFormat};
