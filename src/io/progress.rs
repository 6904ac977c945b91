//! Spinner on stderr while the benchmark times each algorithm

use crate::doors::Algorithm;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Shows which algorithm is currently being timed
///
/// Draws nothing when quiet, so stdout stays a clean report either way.
/// Redraws only between runs; no tick thread runs while an algorithm is timed.
pub struct TimingProgress {
    bar: ProgressBar,
}

impl TimingProgress {
    /// Create a visible spinner, or a hidden one when `quiet`
    pub fn new(quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new_spinner();
            bar.set_style(SPINNER_STYLE.clone());
            bar
        };
        Self { bar }
    }

    /// Announce the next algorithm to be timed and advance the spinner once
    pub fn start(&self, algorithm: Algorithm) {
        self.bar.set_message(format!("timing {algorithm}"));
        self.bar.inc(1);
        self.bar.tick();
    }

    /// Number of runs announced so far
    pub fn runs_started(&self) -> u64 {
        self.bar.position()
    }

    /// Text currently shown beside the spinner
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Remove the spinner once every run is done
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Test whether anything will be drawn
    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }
}
