use crate::doors::{Algorithm, DoorArray, SquareTable};
use crate::io::error::{DoorsError, Result};

/// Compare one algorithm's row against the baseline row
///
/// # Errors
///
/// Returns `Mismatch` at the first differing index
pub fn check_matches(algorithm: Algorithm, expected: &DoorArray, actual: &DoorArray) -> Result<()> {
    match expected.first_difference(actual) {
        Some((index, expected, actual)) => Err(DoorsError::Mismatch {
            algorithm: algorithm.name(),
            index,
            expected,
            actual,
        }),
        None => Ok(()),
    }
}

/// Run the baseline, then every optimized algorithm, checking each in turn
///
/// Stops at the first disagreement since later timings would be meaningless.
/// Returns the baseline row on success.
///
/// # Errors
///
/// Returns `Mismatch` for the first algorithm and index that disagree, or
/// `TableTooSmall` if `table` does not cover `count` doors
pub fn verify_all(count: usize, initial: bool, table: &SquareTable) -> Result<DoorArray> {
    let expected = Algorithm::BASELINE.run(count, initial, table)?;

    for algorithm in Algorithm::OPTIMIZED {
        let actual = algorithm.run(count, initial, table)?;
        check_matches(algorithm, &expected, &actual)?;
    }

    Ok(expected)
}
