use std::hint::black_box;

/// Burns CPU time by computing `0!` through `(depth - 1)!`, `rounds` times over.
///
/// Nothing is printed. Returns the number of factorials computed.
pub fn spin(rounds: u64, depth: u32) -> u64 {
    tracing::debug!(rounds, depth, "busy loop started");

    let mut computed = 0u64;
    for _ in 0..rounds {
        for i in 0..depth {
            // Restarts from 1 for every `i`, like the nested loop this fixture mirrors; not `crate::factorial`.
            let mut factorial = 1u64;
            for k in 1..=u64::from(i) {
                factorial = factorial.wrapping_mul(k);
            }
            black_box(factorial);
            computed += 1;
        }
    }

    tracing::debug!(computed, "busy loop finished");
    computed
}
