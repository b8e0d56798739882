use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FactorialError {
    // Factorial does not fit in 64 bits
    #[error("{n}! overflows a 64-bit unsigned integer")]
    Overflow { n: i64 },
}
