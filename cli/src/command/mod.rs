use clap::Subcommand;

pub mod factorial;
pub mod long_silent;
pub mod write_notes;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read an integer and print its factorial.
    Factorial(factorial::FactorialArgs),
    /// Read lines from stdin and print them back numbered.
    WriteNotes(write_notes::WriteNotesArgs),
    /// Burn CPU time without reading or printing anything.
    LongSilentProgram(long_silent::LongSilentArgs),
}

pub fn handle_command(cmd: Command) -> anyhow::Result<()> {
    match cmd {
        Command::Factorial(args) => factorial::handle_command(args),
        Command::WriteNotes(args) => write_notes::handle_command(args),
        Command::LongSilentProgram(args) => long_silent::handle_command(args),
    }
}
