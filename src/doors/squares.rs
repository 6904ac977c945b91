use crate::io::error::{DoorsError, Result};
use bitvec::prelude::*;

/// Test whether `n` has an integral square root
///
/// Uses the integer square root, so there is no floating-point rounding
/// at large `n`. Zero counts as a square.
pub const fn is_perfect_square(n: usize) -> bool {
    let root = n.isqrt();
    root * root == n
}

/// Precomputed perfect-square flags for door numbers `1..=limit`
///
/// Built once and passed by reference to whatever needs the lookups, so a
/// table is never read before it exists or for a range it was not sized for.
#[derive(Clone, Debug)]
pub struct SquareTable {
    // Slot k - 1 holds the flag for door k
    bits: BitVec,
}

impl SquareTable {
    /// Compute flags for every door number from 1 through `limit`
    pub fn new(limit: usize) -> Self {
        let mut bits = bitvec![0; limit];
        let mut root = 1usize;
        while let Some(square) = root.checked_mul(root).filter(|&square| square <= limit) {
            bits.set(square - 1, true);
            root += 1;
        }
        Self { bits }
    }

    /// Highest door number covered
    pub fn limit(&self) -> usize {
        self.bits.len()
    }

    /// Look up a 1-based door number, `None` outside `1..=limit`
    pub fn get(&self, door: usize) -> Option<bool> {
        door.checked_sub(1)
            .and_then(|index| self.bits.get(index))
            .map(|bit| *bit)
    }

    /// Confirm that every door in `1..=count` can be looked up
    ///
    /// # Errors
    ///
    /// Returns `TableTooSmall` when `count` exceeds the table's limit
    pub fn ensure_covers(&self, count: usize) -> Result<()> {
        if count > self.limit() {
            return Err(DoorsError::TableTooSmall {
                required: count,
                available: self.limit(),
            });
        }
        Ok(())
    }
}
