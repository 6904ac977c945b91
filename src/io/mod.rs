//! Command-line handling, constants, errors and progress display

/// Argument parsing and run orchestration for both tools
pub mod cli;
/// Fixed constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Timing spinner
pub mod progress;
