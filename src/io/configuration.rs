//! Fixed constants and runtime defaults for both tools

/// Door count used by the benchmark when none is given
pub const DEFAULT_DOOR_COUNT: usize = 10_000_000;

/// Doors start closed unless told otherwise
pub const DEFAULT_INITIAL_STATE: bool = false;

/// Doors per display group; a space precedes each group
pub const DISPLAY_GROUP_WIDTH: usize = 10;

/// Minimum width of the right-justified pass number
pub const PASS_FIELD_WIDTH: usize = 3;

/// Header printed once before the first pass
pub const DISPLAY_BANNER: [&str; 3] = [
    "+--------------------------------------------------------------+",
    "| Results (initial state to final state): 0 = closed, 1 = open |",
    "+--------------------------------------------------------------+",
];

/// Printed by `showdoors` for any invalid invocation
pub const USAGE_LINES: [&str; 3] = [
    "Usage: showdoors <count>",
    "count must be an integer greater than 0",
    "Ex: showdoors 100",
];

/// Exit status of `showdoors` after printing usage
pub const USAGE_EXIT_CODE: u8 = 1;

/// Printed once every optimized row has matched the baseline
pub const MATCH_CONFIRMATION: &str =
    "The optimized versions returned the same results as the baseline version";
