use std::io::{self, BufRead, Write};

use clap::Args;
use console_fixtures_common::echo::{read_lines, write_lines};
use console_fixtures_config::{Config, EchoConfig};

#[derive(Debug, Args)]
pub struct WriteNotesArgs {
    /// Number of lines to read. Overrides CONSOLE_FIXTURES_ECHO_LINECOUNT.
    #[arg(long)]
    pub lines: Option<usize>,

    /// Longest accepted line, in characters. Overrides CONSOLE_FIXTURES_ECHO_MAXLEN.
    #[arg(long)]
    pub max_len: Option<usize>,
}

pub fn handle_command(args: WriteNotesArgs) -> anyhow::Result<()> {
    let (count, max_len) = match (args.lines, args.max_len) {
        (Some(count), Some(max_len)) => (count, max_len),
        (lines, max_len) => {
            let config = EchoConfig::from_env()?;
            (
                lines.unwrap_or(config.line_count),
                max_len.unwrap_or(config.max_len),
            )
        }
    };

    run(count, max_len, io::stdin().lock(), io::stdout().lock())
}

pub fn run<R: BufRead, W: Write>(
    count: usize,
    max_len: usize,
    input: R,
    output: W,
) -> anyhow::Result<()> {
    let lines = read_lines(input, count, max_len)?;
    tracing::debug!(count = lines.len(), "echoing lines");

    write_lines(output, &lines)?;
    Ok(())
}
