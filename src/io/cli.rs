//! Command-line interfaces for the benchmark and the pass display

use crate::doors::{DoorArray, SquareTable};
use crate::harness::timing::TimingReport;
use crate::harness::verify::verify_all;
use crate::io::configuration::{DEFAULT_DOOR_COUNT, USAGE_LINES};
use crate::io::error::{Result, invalid_count};
use crate::io::progress::TimingProgress;
use clap::Parser;
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "doorflip")]
#[command(
    author,
    version,
    about = "Solve the doors puzzle four ways, cross-check the results and time each"
)]
/// Command-line arguments for the benchmark tool
pub struct BenchCli {
    /// Number of doors
    #[arg(short, long, default_value_t = DEFAULT_DOOR_COUNT, value_parser = parse_count_arg)]
    pub count: usize,

    /// Start with every door open instead of closed
    #[arg(short, long)]
    pub open: bool,

    /// Suppress the timing spinner
    #[arg(short, long)]
    pub quiet: bool,
}

impl BenchCli {
    /// Initial state of every door, closed unless `--open` was given
    pub const fn initial_state(&self) -> bool {
        self.open
    }

    /// Check if the timing spinner should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Owns everything one benchmark run needs, the square table included
pub struct Benchmark {
    count: usize,
    initial: bool,
    table: SquareTable,
    progress: TimingProgress,
}

impl Benchmark {
    /// Build the square table up front for the configured door count
    pub fn new(cli: &BenchCli) -> Self {
        Self {
            count: cli.count,
            initial: cli.initial_state(),
            table: SquareTable::new(cli.count),
            progress: TimingProgress::new(!cli.should_show_progress()),
        }
    }

    /// Check every optimized algorithm against the baseline
    ///
    /// # Errors
    ///
    /// Returns `Mismatch` for the first disagreement found
    pub fn verify(&self) -> Result<DoorArray> {
        verify_all(self.count, self.initial, &self.table)
    }

    /// Time each algorithm once, baseline first
    ///
    /// # Errors
    ///
    /// Returns `TableTooSmall` if the table no longer covers the count
    pub fn time(&self) -> Result<TimingReport> {
        TimingReport::collect(self.count, self.initial, &self.table, &self.progress)
    }
}

// The count stays a raw string and the help/version flags are off, so every
// invocation other than one valid count ends in the same usage block
#[derive(Parser)]
#[command(name = "showdoors")]
#[command(
    author,
    version,
    about = "Print every door after each pass, from the starting row to the answer",
    disable_help_flag = true,
    disable_version_flag = true
)]
/// Command-line arguments for the display tool
pub struct ShowCli {
    /// Number of doors, an integer greater than 0
    #[arg(value_name = "COUNT")]
    pub count: Option<String>,
}

impl ShowCli {
    /// Validated door count
    ///
    /// # Errors
    ///
    /// Returns `InvalidCount` when the argument is missing or malformed
    pub fn door_count(&self) -> Result<usize> {
        parse_door_count(self.count.as_deref())
    }
}

/// Validate a door count: present, digits only, and at least 1
///
/// # Errors
///
/// Returns `InvalidCount` describing the first rule broken
pub fn parse_door_count(arg: Option<&str>) -> Result<usize> {
    let Some(arg) = arg else {
        return Err(invalid_count(&"", "a door count is required"));
    };

    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_count(&arg, "must contain only digits"));
    }

    let count: usize = arg
        .parse()
        .map_err(|_parse_error| invalid_count(&arg, "is too large"))?;

    if count < 1 {
        return Err(invalid_count(&arg, "must be greater than 0"));
    }

    Ok(count)
}

fn parse_count_arg(arg: &str) -> Result<usize> {
    parse_door_count(Some(arg))
}

/// Write the `showdoors` usage block
///
/// # Errors
///
/// Propagates any write failure from `out`
pub fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    for line in USAGE_LINES {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
