use std::fmt;

use serde::Deserialize;

use crate::{constants::FACTORIAL_WRAPS_TO_ZERO, error::FactorialError};

/// Outcome of a factorial computation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FactorialResult {
    /// `n!` for a non-negative `n`, reduced modulo 2^64 when computed with wrapping arithmetic.
    Defined(u64),
    /// The input was negative.
    Undefined,
}

impl FactorialResult {
    pub fn value(&self) -> Option<u64> {
        match self {
            FactorialResult::Defined(value) => Some(*value),
            FactorialResult::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, FactorialResult::Defined(_))
    }
}

impl fmt::Display for FactorialResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorialResult::Defined(value) => write!(f, "{value}"),
            FactorialResult::Undefined => write!(f, "undefined"),
        }
    }
}

/// How factorials exceeding `u64::MAX` are handled.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap_derive", derive(clap::ValueEnum))]
pub enum OverflowPolicy {
    /// Silently reduce modulo 2^64.
    #[default]
    #[serde(rename = "wrap")]
    Wrap,

    /// Report [`FactorialError::Overflow`].
    #[serde(rename = "checked")]
    Checked,
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowPolicy::Wrap => write!(f, "wrap"),
            OverflowPolicy::Checked => write!(f, "checked"),
        }
    }
}

/// Computes `n!` with wrapping 64-bit arithmetic.
///
/// Negative input yields [`FactorialResult::Undefined`]. Inputs above 20 wrap
/// silently; from 66 on the wrapped product is zero, so the accumulation stops
/// there and the call stays cheap for any `n`.
pub fn factorial(n: i64) -> FactorialResult {
    let result = match n {
        n if n < 0 => FactorialResult::Undefined,
        0 | 1 => FactorialResult::Defined(1),
        _ => {
            let mut acc: u64 = 1;
            // `n` is positive here.
            for i in 2..=n as u64 {
                acc = acc.wrapping_mul(i);
                if acc == 0 {
                    debug_assert!(i >= FACTORIAL_WRAPS_TO_ZERO as u64);
                    break;
                }
            }
            FactorialResult::Defined(acc)
        }
    };

    tracing::trace!(n, %result, "computed factorial");
    result
}

/// Computes `n!`, failing with [`FactorialError::Overflow`] when it exceeds `u64::MAX`.
pub fn checked_factorial(n: i64) -> Result<FactorialResult, FactorialError> {
    if n < 0 {
        return Ok(FactorialResult::Undefined);
    }

    (2..=n as u64)
        .try_fold(1u64, |acc, i| acc.checked_mul(i))
        .map(FactorialResult::Defined)
        .ok_or_else(|| {
            tracing::debug!(n, "factorial overflow");
            FactorialError::Overflow { n }
        })
}

pub fn factorial_with(n: i64, policy: OverflowPolicy) -> Result<FactorialResult, FactorialError> {
    match policy {
        OverflowPolicy::Wrap => Ok(factorial(n)),
        OverflowPolicy::Checked => checked_factorial(n),
    }
}
