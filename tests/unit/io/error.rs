//! Tests for error message formatting

#[cfg(test)]
mod tests {
    use doorflip::DoorsError;
    use doorflip::io::error::invalid_count;
    use std::error::Error;

    // Tests a mismatch message names the algorithm, index and both values
    // Verified by omitting the index from the message
    #[test]
    fn test_mismatch_message() {
        let error = DoorsError::Mismatch {
            algorithm: "square_sweep",
            index: 41,
            expected: true,
            actual: false,
        };

        let message = error.to_string();
        assert!(message.contains("square_sweep"));
        assert!(message.contains("doors[41]"));
        assert!(message.contains("expected true"));
        assert!(message.contains("got false"));
    }

    // Tests invalid count message carries value and reason
    // Verified by omitting the value from the message
    #[test]
    fn test_invalid_count_message() {
        let error = invalid_count(&"abc", "must contain only digits");
        let message = error.to_string();
        assert!(message.contains("'abc'"));
        assert!(message.contains("must contain only digits"));
    }

    // Tests table size message carries both bounds
    // Verified by swapping required and available
    #[test]
    fn test_table_too_small_message() {
        let error = DoorsError::TableTooSmall {
            required: 20,
            available: 10,
        };
        assert_eq!(
            error.to_string(),
            "Square table covers doors 1..=10 but door 20 was requested"
        );
    }

    // Tests errors are leaves with no source
    // Verified by attaching a dummy source
    #[test]
    fn test_no_source() {
        let error = invalid_count(&"0", "must be greater than 0");
        assert!(error.source().is_none());
    }
}
