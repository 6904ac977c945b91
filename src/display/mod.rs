//! Pass-by-pass rendering of the baseline simulation for small door counts

/// Incremental state machine over passes
pub mod passes;
/// Banner and per-pass line formatting
pub mod render;
