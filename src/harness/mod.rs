//! Correctness cross-check and timing for the four algorithms

/// Wall-clock timing and the relative-speed report
pub mod timing;
/// Fail-fast comparison of optimized rows against the baseline
pub mod verify;
