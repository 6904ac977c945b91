//! Display entry point: print the doors after every pass for a given count

use clap::Parser;
use doorflip::display::render::write_passes;
use doorflip::io::cli::{ShowCli, write_usage};
use doorflip::io::configuration::{DEFAULT_INITIAL_STATE, USAGE_EXIT_CODE};
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn usage() -> ExitCode {
    let _ = write_usage(&mut io::stdout().lock());
    ExitCode::from(USAGE_EXIT_CODE)
}

fn main() -> ExitCode {
    let Ok(cli) = ShowCli::try_parse() else {
        return usage();
    };

    let Ok(count) = cli.door_count() else {
        return usage();
    };

    let mut out = BufWriter::new(io::stdout().lock());
    match write_passes(&mut out, count, DEFAULT_INITIAL_STATE) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
