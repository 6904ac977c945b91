//! Door rows and the algorithms that compute their final state

/// Fixed-length row of door states shared by every algorithm
pub mod array;
/// Perfect-square tests and the precomputed lookup table
pub mod squares;
/// Baseline simulation and the three closed-form shortcuts
pub mod toggle;

pub use array::DoorArray;
pub use squares::SquareTable;
pub use toggle::Algorithm;
