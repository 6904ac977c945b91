use bitvec::prelude::*;
use std::fmt;

/// Fixed-length row of door states, `true` meaning open
///
/// Index `i` holds door number `i + 1`. The length never changes after
/// construction, so every algorithm writes into a row sized by its caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoorArray {
    bits: BitVec,
}

impl DoorArray {
    /// Create `count` doors all set to `initial`
    pub fn new(count: usize, initial: bool) -> Self {
        Self {
            bits: BitVec::repeat(initial, count),
        }
    }

    /// Number of doors
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Test for a zero-door row
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// State at a 0-based index, `None` past the end
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|bit| *bit)
    }

    /// Overwrite the state at a 0-based index
    ///
    /// Indices past the end are ignored
    pub fn set(&mut self, index: usize, state: bool) {
        if let Some(mut bit) = self.bits.get_mut(index) {
            *bit = state;
        }
    }

    /// Invert the state at a 0-based index
    ///
    /// Indices past the end are ignored
    pub fn toggle(&mut self, index: usize) {
        if let Some(mut bit) = self.bits.get_mut(index) {
            *bit = !*bit;
        }
    }

    /// Iterate states in door order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    /// Count of open doors
    pub fn count_open(&self) -> usize {
        self.bits.count_ones()
    }

    /// 1-based numbers of every open door, ascending
    pub fn open_doors(&self) -> Vec<usize> {
        self.bits.iter_ones().map(|index| index + 1).collect()
    }

    /// First 0-based index where two rows differ, with both states
    ///
    /// A length difference is reported at the shorter length, with the
    /// missing door read as the opposite of the present one.
    pub fn first_difference(&self, other: &Self) -> Option<(usize, bool, bool)> {
        if let Some(index) = self
            .iter()
            .zip(other.iter())
            .position(|(left, right)| left != right)
        {
            let left = self.get(index)?;
            return Some((index, left, !left));
        }

        let shorter = self.len().min(other.len());
        match (self.get(shorter), other.get(shorter)) {
            (Some(left), None) => Some((shorter, left, !left)),
            (None, Some(right)) => Some((shorter, !right, right)),
            _ => None,
        }
    }
}

impl FromIterator<bool> for DoorArray {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for DoorArray {
    /// Renders each door as `0` (closed) or `1` (open) with no separators
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for open in self.iter() {
            f.write_str(if open { "1" } else { "0" })?;
        }
        Ok(())
    }
}
