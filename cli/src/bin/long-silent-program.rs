use clap::Parser;

use console_fixtures_cli::{command::long_silent, setup_logger};

/// Burn CPU time without reading or printing anything.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(flatten)]
    args: long_silent::LongSilentArgs,
}

fn main() -> anyhow::Result<()> {
    let _guard = setup_logger();
    let Args { args } = Args::parse();

    long_silent::handle_command(args)
}
