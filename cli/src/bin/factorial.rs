use clap::Parser;

use console_fixtures_cli::{command::factorial, setup_logger};

/// Read an integer and print its factorial.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(flatten)]
    args: factorial::FactorialArgs,
}

fn main() -> anyhow::Result<()> {
    let _guard = setup_logger();
    let Args { args } = Args::parse();

    factorial::handle_command(args)
}
