//! Wall-clock timing of each algorithm and the relative-speed report

use crate::doors::{Algorithm, SquareTable};
use crate::io::error::Result;
use crate::io::progress::TimingProgress;
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Elapsed time for one algorithm run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Which algorithm ran
    pub algorithm: Algorithm,
    /// Monotonic time between start and return
    pub elapsed: Duration,
}

impl Timing {
    /// Elapsed whole milliseconds
    pub const fn millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// Run `f` once and return its value with the elapsed time
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = black_box(f());
    (value, start.elapsed())
}

/// Time one run of `algorithm`
///
/// # Errors
///
/// Propagates `TableTooSmall` from the lookup algorithm
pub fn time_algorithm(
    algorithm: Algorithm,
    count: usize,
    initial: bool,
    table: &SquareTable,
) -> Result<Timing> {
    let (result, elapsed) = measure(|| algorithm.run(count, initial, table));
    result?;
    Ok(Timing { algorithm, elapsed })
}

/// Timings for the baseline and every optimized algorithm
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimingReport {
    /// Baseline run every ratio is relative to
    pub baseline: Timing,
    /// Optimized runs in [`Algorithm::OPTIMIZED`] order
    pub optimized: Vec<Timing>,
}

impl TimingReport {
    /// Time every algorithm sequentially, one run each
    ///
    /// # Errors
    ///
    /// Propagates `TableTooSmall` from the lookup algorithm
    pub fn collect(
        count: usize,
        initial: bool,
        table: &SquareTable,
        progress: &TimingProgress,
    ) -> Result<Self> {
        progress.start(Algorithm::BASELINE);
        let baseline = time_algorithm(Algorithm::BASELINE, count, initial, table)?;

        let mut optimized = Vec::with_capacity(Algorithm::OPTIMIZED.len());
        for algorithm in Algorithm::OPTIMIZED {
            progress.start(algorithm);
            optimized.push(time_algorithm(algorithm, count, initial, table)?);
        }
        progress.finish();

        Ok(Self {
            baseline,
            optimized,
        })
    }

    /// Optimized time as a percentage of the baseline time
    ///
    /// `None` when the baseline measured zero
    pub fn percent_of_baseline(&self, timing: &Timing) -> Option<f64> {
        let baseline = self.baseline.elapsed.as_secs_f64();
        (baseline > 0.0).then(|| timing.elapsed.as_secs_f64() / baseline * 100.0)
    }

    /// Baseline time divided by optimized time
    ///
    /// `None` when the optimized run measured zero
    pub fn speedup(&self, timing: &Timing) -> Option<f64> {
        let elapsed = timing.elapsed.as_secs_f64();
        (elapsed > 0.0).then(|| self.baseline.elapsed.as_secs_f64() / elapsed)
    }
}

fn one_decimal(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.1}"))
}

impl fmt::Display for TimingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let baseline = self.baseline.algorithm;

        for timing in std::iter::once(&self.baseline).chain(&self.optimized) {
            writeln!(f, "{} took {}ms", timing.algorithm, timing.millis())?;
        }

        for timing in &self.optimized {
            writeln!(f)?;
            writeln!(
                f,
                "{} performed in {}% of the time taken by {baseline}",
                timing.algorithm,
                one_decimal(self.percent_of_baseline(timing))
            )?;
            writeln!(
                f,
                "{} is {} times faster than {baseline}",
                timing.algorithm,
                one_decimal(self.speedup(timing))
            )?;
        }

        Ok(())
    }
}
