use console_fixtures_common::constants::{BUSY_LOOP_DEPTH, BUSY_LOOP_ROUNDS};

use super::Config;

#[derive(Debug, serde_wrapper::Deserialize)]
pub struct BusyLoopConfig {
    pub rounds: u64,
    pub depth: u32,
}

impl Config for BusyLoopConfig {
    const PREFIX: &'static str = "BUSYLOOP";

    fn defaults() -> Vec<(&'static str, String)> {
        vec![
            ("rounds", BUSY_LOOP_ROUNDS.to_string()),
            ("depth", BUSY_LOOP_DEPTH.to_string()),
        ]
    }
}
