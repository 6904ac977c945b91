//! Tests for the fail-fast cross-check against the baseline

#[cfg(test)]
mod tests {
    use doorflip::DoorsError;
    use doorflip::doors::{Algorithm, DoorArray, SquareTable};
    use doorflip::harness::verify::{check_matches, verify_all};

    // Tests identical rows pass
    // Verified by inverting the comparison result
    #[test]
    fn test_check_matches_identical() {
        let row = DoorArray::new(12, false);
        assert!(check_matches(Algorithm::SquareSweep, &row, &row.clone()).is_ok());
    }

    // Tests a mismatch names the algorithm, index and both values
    // Verified by swapping expected and actual in the error
    #[test]
    fn test_check_matches_reports_first_mismatch() {
        let expected = DoorArray::new(12, false);
        let mut actual = expected.clone();
        actual.toggle(5);
        actual.toggle(9);

        let error = check_matches(Algorithm::SquareTest, &expected, &actual);
        assert_eq!(
            error,
            Err(DoorsError::Mismatch {
                algorithm: "square_test",
                index: 5,
                expected: false,
                actual: true,
            })
        );
    }

    // Tests the full cross-check returns the baseline row
    // Verified by returning the last optimized row instead
    #[test]
    fn test_verify_all_returns_baseline() {
        let table = SquareTable::new(100);
        let Ok(row) = verify_all(100, false, &table) else {
            unreachable!("all algorithms agree");
        };
        assert_eq!(row.count_open(), 10);
    }

    // Tests an undersized table stops the cross-check
    // Verified by skipping the lookup algorithm
    #[test]
    fn test_verify_all_table_too_small() {
        let table = SquareTable::new(50);
        assert!(matches!(
            verify_all(100, false, &table),
            Err(DoorsError::TableTooSmall { required: 100, .. })
        ));
    }
}
