use std::io::{self, BufRead, Write};

use clap::Args;
use console_fixtures_common::{factorial_with, OverflowPolicy};
use console_fixtures_config::{Config, FactorialConfig};

pub const PROMPT: &str = "\n Compute the factorial of: ";
pub const NOT_AN_INTEGER: &str = " Only integer numbers accepted!";

#[derive(Debug, Args)]
pub struct FactorialArgs {
    /// Compute N! directly instead of prompting for it on stdin.
    #[arg(allow_negative_numbers = true)]
    pub n: Option<i64>,

    /// Handling of factorials beyond 64 bits. Overrides CONSOLE_FIXTURES_FACTORIAL_OVERFLOW.
    #[arg(long, value_enum)]
    pub overflow: Option<OverflowPolicy>,
}

pub fn handle_command(args: FactorialArgs) -> anyhow::Result<()> {
    let FactorialArgs { n, overflow } = args;

    let policy = match overflow {
        Some(policy) => policy,
        None => FactorialConfig::from_env()?.overflow,
    };

    run(n, policy, io::stdin().lock(), io::stdout().lock())
}

/// Prompts for `n` unless given, then prints ` !<n> = <n!>`.
///
/// Input that is not an integer is answered with [`NOT_AN_INTEGER`] and a blank line,
/// and is not an error.
pub fn run<R: BufRead, W: Write>(
    n: Option<i64>,
    policy: OverflowPolicy,
    mut input: R,
    mut output: W,
) -> anyhow::Result<()> {
    let n = match n {
        Some(n) => n,
        None => {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            match read_integer(&mut input)? {
                Some(n) => n,
                None => {
                    writeln!(output, "{NOT_AN_INTEGER}\n")?;
                    return Ok(());
                }
            }
        }
    };

    tracing::debug!(n, %policy, "computing factorial");
    let result = factorial_with(n, policy)?;

    writeln!(output, " !{n} = {result}")?;
    output.flush()?;
    Ok(())
}

/// Reads one line holding an optional `-` followed by decimal digits.
///
/// Undecodable bytes, a leading `+` or a value outside `i64` all yield `None`.
fn read_integer<R: BufRead>(input: &mut R) -> io::Result<Option<i64>> {
    let mut line = Vec::new();
    input.read_until(b'\n', &mut line)?;

    let Ok(text) = std::str::from_utf8(&line) else {
        return Ok(None);
    };
    let text = text.trim();
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(None);
    }

    Ok(text.parse().ok())
}
