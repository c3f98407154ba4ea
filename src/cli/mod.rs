//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Command flow implementations.
pub mod commands;

pub use args::{Args, Command};
