//! Benchmark entry point: cross-check the four algorithms, then time them

use clap::Parser;
use doorflip::io::cli::{BenchCli, Benchmark};
use doorflip::io::configuration::MATCH_CONFIRMATION;

// The report is the program's output
#[allow(clippy::print_stdout)]
fn main() -> doorflip::Result<()> {
    let cli = BenchCli::parse();
    let benchmark = Benchmark::new(&cli);

    benchmark.verify()?;
    println!("{MATCH_CONFIRMATION}");

    let report = benchmark.time()?;
    print!("{report}");
    Ok(())
}
