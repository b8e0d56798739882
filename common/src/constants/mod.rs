/// Largest input whose factorial fits in a `u64`.
pub const MAX_EXACT_FACTORIAL: i64 = 20;

/// For every `n` at or above this bound `n!` holds at least 64 factors of two,
/// so its value modulo 2^64 is zero.
pub const FACTORIAL_WRAPS_TO_ZERO: i64 = 66;

pub const ECHO_LINE_COUNT: usize = 5;
pub const ECHO_MAX_LINE_LEN: usize = 199;

pub const BUSY_LOOP_ROUNDS: u64 = 10_000_000;
pub const BUSY_LOOP_DEPTH: u32 = 20;
