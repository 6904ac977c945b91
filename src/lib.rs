//! The doors puzzle solved four ways: a literal pass-by-pass simulation and
//! three shortcuts that rely on only perfect-square doors ending up flipped
//!
//! Every shortcut is cross-checked against the simulation before any of them
//! is timed, and a display mode replays the simulation one pass at a time.

#![forbid(unsafe_code)]

/// Pass-by-pass rendering for small door counts
pub mod display;
/// Door rows, square tables and the four algorithms
pub mod doors;
/// Correctness cross-check and timing
pub mod harness;
/// Command-line handling, constants and errors
pub mod io;

pub use io::error::{DoorsError, Result};
