use clap::Args;
use console_fixtures_common::busy_loop::spin;
use console_fixtures_config::{BusyLoopConfig, Config};

#[derive(Debug, Args)]
pub struct LongSilentArgs {
    /// Outer iterations. Overrides CONSOLE_FIXTURES_BUSYLOOP_ROUNDS.
    #[arg(long)]
    pub rounds: Option<u64>,

    /// Factorials 0! through (depth - 1)! are computed each round. Overrides CONSOLE_FIXTURES_BUSYLOOP_DEPTH.
    #[arg(long)]
    pub depth: Option<u32>,
}

pub fn handle_command(args: LongSilentArgs) -> anyhow::Result<()> {
    let (rounds, depth) = match (args.rounds, args.depth) {
        (Some(rounds), Some(depth)) => (rounds, depth),
        (rounds, depth) => {
            let config = BusyLoopConfig::from_env()?;
            (rounds.unwrap_or(config.rounds), depth.unwrap_or(config.depth))
        }
    };

    spin(rounds, depth);
    Ok(())
}
