//! # console-fixtures
//!
//! Small console programs for exercising pseudo-console test harnesses.
//!
//! Each fixture is available as a standalone binary and as a subcommand of
//! `console-fixtures`:
//!
//! ```sh
//! echo 5 | factorial
//! printf 'a\nb\nc\nd\ne\n' | write-notes
//! long-silent-program
//! console-fixtures factorial -- -3
//! ```
//!
//! Logs go to stderr and are filtered with `RUST_LOG`; stdout carries only
//! the fixture's own output.

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod command;

#[derive(Debug, Parser)]
#[command(name = "console-fixtures", bin_name = "console-fixtures")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: command::Command,
}

pub fn setup_logger() -> tracing::subscriber::DefaultGuard {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
                .with_file(false)
                .with_line_number(false),
        )
        .with(filter)
        .set_default()
}
