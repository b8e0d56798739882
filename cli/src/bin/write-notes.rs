use clap::Parser;

use console_fixtures_cli::{command::write_notes, setup_logger};

/// Read lines from stdin and print them back numbered.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(flatten)]
    args: write_notes::WriteNotesArgs,
}

fn main() -> anyhow::Result<()> {
    let _guard = setup_logger();
    let Args { args } = Args::parse();

    write_notes::handle_command(args)
}
