use crate::display::passes::PassSimulator;
use crate::doors::DoorArray;
use crate::io::configuration::{DISPLAY_BANNER, DISPLAY_GROUP_WIDTH, PASS_FIELD_WIDTH};
use std::io::{self, Write};

/// Format one pass as `[ppp]` followed by the grouped door states
///
/// A space precedes every group of ten doors, the first group included,
/// so `[  0]  0000000000 0000000000` is the start of a closed row.
pub fn format_pass(pass: usize, doors: &DoorArray) -> String {
    let groups = doors.len().div_ceil(DISPLAY_GROUP_WIDTH);
    let mut line = String::with_capacity(PASS_FIELD_WIDTH + 3 + doors.len() + groups);
    line.push_str(&format!("[{pass:>width$}] ", width = PASS_FIELD_WIDTH));

    for (index, open) in doors.iter().enumerate() {
        if index % DISPLAY_GROUP_WIDTH == 0 {
            line.push(' ');
        }
        line.push(if open { '1' } else { '0' });
    }

    line
}

/// Write the banner and every pass from 0 through `count`, one per line
///
/// # Errors
///
/// Propagates any write failure from `out`
pub fn write_passes<W: Write>(out: &mut W, count: usize, initial: bool) -> io::Result<()> {
    for line in DISPLAY_BANNER {
        writeln!(out, "{line}")?;
    }

    let mut simulator = PassSimulator::new(count, initial);
    loop {
        writeln!(out, "{}", format_pass(simulator.pass(), simulator.doors()))?;
        if !simulator.advance() {
            break;
        }
    }

    out.flush()
}
