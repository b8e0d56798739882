//! Building blocks of the console fixture programs.
//!
//! The fixtures are tiny, single-purpose programs that pseudo-console test
//! harnesses drive through standard streams:
//!
//! - [`factorial`] computes `n!` for a signed input, reporting negative input
//!   as [`FactorialResult::Undefined`] instead of failing.
//! - [`busy_loop`] burns CPU time by recomputing small factorials.
//! - [`echo`] reads a bounded number of lines and writes them back numbered.

pub mod busy_loop;
pub mod constants;
pub mod echo;
pub mod error;
pub mod factorial;

pub use error::{EchoError, FactorialError};
pub use factorial::{checked_factorial, factorial, factorial_with, FactorialResult, OverflowPolicy};
