use crate::doors::array::DoorArray;
use crate::doors::squares::{SquareTable, is_perfect_square};
use crate::io::error::Result;
use std::fmt;

/// Apply a single pass to an existing row
///
/// Pass `p` inverts doors `p, 2p, 3p, ...` (1-based). Pass 0 is the
/// untouched starting row and changes nothing.
pub fn apply_pass(doors: &mut DoorArray, pass: usize) {
    if pass == 0 {
        return;
    }
    for index in (pass - 1..doors.len()).step_by(pass) {
        doors.toggle(index);
    }
}

/// Literal simulation: every pass from 1 through `count`
///
/// The reference result that every other algorithm is checked against.
pub fn toggle_every_pass(count: usize, initial: bool) -> DoorArray {
    let mut doors = DoorArray::new(count, initial);
    for pass in 1..=count {
        apply_pass(&mut doors, pass);
    }
    doors
}

/// Single forward sweep over the perfect-square indices
///
/// Consecutive squares are 3, 5, 7, ... apart, so one growing step visits
/// exactly doors 1, 4, 9, ... once each and skips everything else.
pub fn toggle_square_sweep(count: usize, initial: bool) -> DoorArray {
    let mut doors = DoorArray::new(count, initial);
    let mut index = 0;
    let mut step = 3;

    while index < count {
        doors.set(index, !initial);
        index += step;
        step += 2;
    }

    doors
}

/// Per-door square-root test, no auxiliary storage
pub fn toggle_square_test(count: usize, initial: bool) -> DoorArray {
    let mut doors = DoorArray::new(count, initial);
    for door in (1..=count).rev() {
        if is_perfect_square(door) {
            doors.set(door - 1, !initial);
        }
    }
    doors
}

/// Same as [`toggle_square_test`] with the test read from a prebuilt table
///
/// # Errors
///
/// Returns `TableTooSmall` if `table` does not cover doors `1..=count`;
/// no door is computed in that case
pub fn toggle_square_lookup(count: usize, initial: bool, table: &SquareTable) -> Result<DoorArray> {
    table.ensure_covers(count)?;

    let mut doors = DoorArray::new(count, initial);
    for door in (1..=count).rev() {
        if table.get(door) == Some(true) {
            doors.set(door - 1, !initial);
        }
    }
    Ok(doors)
}

/// The four interchangeable ways of computing the final row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// [`toggle_every_pass`], the baseline
    EveryPass,
    /// [`toggle_square_sweep`]
    SquareSweep,
    /// [`toggle_square_test`]
    SquareTest,
    /// [`toggle_square_lookup`]
    SquareLookup,
}

impl Algorithm {
    /// Every algorithm, baseline first
    pub const ALL: [Self; 4] = [
        Self::EveryPass,
        Self::SquareSweep,
        Self::SquareTest,
        Self::SquareLookup,
    ];

    /// Ground truth for cross-checks and timing comparisons
    pub const BASELINE: Self = Self::EveryPass;

    /// Algorithms compared against the baseline
    pub const OPTIMIZED: [Self; 3] = [Self::SquareSweep, Self::SquareTest, Self::SquareLookup];

    /// Short name used in reports
    pub const fn name(self) -> &'static str {
        match self {
            Self::EveryPass => "every_pass",
            Self::SquareSweep => "square_sweep",
            Self::SquareTest => "square_test",
            Self::SquareLookup => "square_lookup",
        }
    }

    /// Compute the final row for `count` doors starting at `initial`
    ///
    /// `table` is only read by [`Algorithm::SquareLookup`].
    ///
    /// # Errors
    ///
    /// Propagates `TableTooSmall` from the lookup algorithm
    pub fn run(self, count: usize, initial: bool, table: &SquareTable) -> Result<DoorArray> {
        match self {
            Self::EveryPass => Ok(toggle_every_pass(count, initial)),
            Self::SquareSweep => Ok(toggle_square_sweep(count, initial)),
            Self::SquareTest => Ok(toggle_square_test(count, initial)),
            Self::SquareLookup => toggle_square_lookup(count, initial, table),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
