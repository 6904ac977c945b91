//! Tests for timing measurement and the relative-speed report

#[cfg(test)]
mod tests {
    use doorflip::doors::{Algorithm, SquareTable};
    use doorflip::harness::timing::{Timing, TimingReport, measure, time_algorithm};
    use doorflip::io::progress::TimingProgress;
    use std::time::Duration;

    fn report(baseline_ms: u64, optimized_ms: [u64; 3]) -> TimingReport {
        TimingReport {
            baseline: Timing {
                algorithm: Algorithm::BASELINE,
                elapsed: Duration::from_millis(baseline_ms),
            },
            optimized: Algorithm::OPTIMIZED
                .into_iter()
                .zip(optimized_ms)
                .map(|(algorithm, ms)| Timing {
                    algorithm,
                    elapsed: Duration::from_millis(ms),
                })
                .collect(),
        }
    }

    // Tests measure returns the closure's value and a plausible time
    // Verified by returning Duration::ZERO
    #[test]
    fn test_measure_returns_value() {
        let (value, elapsed) = measure(|| {
            std::thread::sleep(Duration::from_millis(5));
            42
        });
        assert_eq!(value, 42);
        assert!(elapsed >= Duration::from_millis(5));
    }

    // Tests percentage and speedup arithmetic
    // Verified by inverting the speedup ratio
    #[test]
    fn test_ratios() {
        let report = report(1000, [250, 100, 40]);
        let Some(first) = report.optimized.first() else {
            unreachable!("three optimized timings");
        };
        assert_eq!(report.percent_of_baseline(first), Some(25.0));
        assert_eq!(report.speedup(first), Some(4.0));
    }

    // Tests zero durations yield no ratio rather than infinity
    // Verified by removing the zero guard in speedup
    #[test]
    fn test_zero_durations() {
        let report = report(0, [0, 10, 10]);
        let Some(first) = report.optimized.first() else {
            unreachable!("three optimized timings");
        };
        assert_eq!(report.percent_of_baseline(first), None);
        assert_eq!(report.speedup(first), None);
    }

    // Tests the rendered report layout and one-decimal formatting
    // Verified by formatting with two decimals
    #[test]
    fn test_report_display() {
        let text = report(1000, [250, 300, 0]).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "every_pass took 1000ms",
                "square_sweep took 250ms",
                "square_test took 300ms",
                "square_lookup took 0ms",
                "",
                "square_sweep performed in 25.0% of the time taken by every_pass",
                "square_sweep is 4.0 times faster than every_pass",
                "",
                "square_test performed in 30.0% of the time taken by every_pass",
                "square_test is 3.3 times faster than every_pass",
                "",
                "square_lookup performed in 0.0% of the time taken by every_pass",
                "square_lookup is n/a times faster than every_pass",
            ]
        );
    }

    // Tests a real collection times every algorithm in order
    // Verified by timing the baseline twice
    #[test]
    fn test_collect_small_run() {
        let table = SquareTable::new(500);
        let progress = TimingProgress::new(true);
        let Ok(report) = TimingReport::collect(500, false, &table, &progress) else {
            unreachable!("table covers every door");
        };

        assert_eq!(report.baseline.algorithm, Algorithm::BASELINE);
        let timed: Vec<Algorithm> = report.optimized.iter().map(|t| t.algorithm).collect();
        assert_eq!(timed, Algorithm::OPTIMIZED.to_vec());
    }

    // Tests the lookup timing surfaces table errors
    // Verified by discarding the run result
    #[test]
    fn test_time_algorithm_propagates_error() {
        let table = SquareTable::new(5);
        assert!(time_algorithm(Algorithm::SquareLookup, 6, false, &table).is_err());
        assert!(time_algorithm(Algorithm::SquareTest, 6, false, &table).is_ok());
    }

    // Tests whole milliseconds truncate
    // Verified by rounding instead of truncating
    #[test]
    fn test_millis_truncates() {
        let timing = Timing {
            algorithm: Algorithm::SquareSweep,
            elapsed: Duration::from_micros(1999),
        };
        assert_eq!(timing.millis(), 1);
    }
}
