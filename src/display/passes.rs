use crate::doors::DoorArray;
use crate::doors::toggle::apply_pass;

/// Step-by-step replay of the baseline simulation
///
/// Starts at pass 0 with every door at its initial state and applies one
/// pass per step until pass `count`, where the row holds the final answer.
#[derive(Clone, Debug)]
pub struct PassSimulator {
    doors: DoorArray,
    pass: usize,
}

impl PassSimulator {
    /// Begin at pass 0 with `count` doors set to `initial`
    pub fn new(count: usize, initial: bool) -> Self {
        Self {
            doors: DoorArray::new(count, initial),
            pass: 0,
        }
    }

    /// Number of passes applied so far
    pub const fn pass(&self) -> usize {
        self.pass
    }

    /// Current door row
    pub const fn doors(&self) -> &DoorArray {
        &self.doors
    }

    /// Test whether every pass has been applied
    pub fn is_finished(&self) -> bool {
        self.pass >= self.doors.len()
    }

    /// Apply the next pass, returning `false` once already finished
    pub fn advance(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.pass += 1;
        apply_pass(&mut self.doors, self.pass);
        true
    }
}
