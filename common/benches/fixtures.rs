use std::hint::black_box;

use console_fixtures_common::{busy_loop::spin, checked_factorial, factorial, FactorialResult};
use iai_callgrind::{library_benchmark, library_benchmark_group, main};

#[library_benchmark]
#[benches::multiple(5, 20, 65, 1_000_000)]
fn bench_factorial(n: i64) -> FactorialResult {
    black_box(factorial(n))
}

#[library_benchmark]
#[benches::multiple(5, 20, 21)]
fn bench_checked_factorial(n: i64) -> bool {
    black_box(checked_factorial(n).is_ok())
}

#[library_benchmark]
#[benches::multiple(1_000, 10_000)]
fn bench_spin(rounds: u64) -> u64 {
    black_box(spin(rounds, 20))
}

library_benchmark_group!(
    name = bench_fixtures;
    benchmarks = bench_factorial, bench_checked_factorial, bench_spin
);

main!(library_benchmark_groups = bench_fixtures);
