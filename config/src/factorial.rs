use console_fixtures_common::OverflowPolicy;

use super::Config;

#[derive(Debug, serde_wrapper::Deserialize)]
pub struct FactorialConfig {
    pub overflow: OverflowPolicy,
}

impl Config for FactorialConfig {
    const PREFIX: &'static str = "FACTORIAL";

    fn defaults() -> Vec<(&'static str, String)> {
        vec![("overflow", OverflowPolicy::default().to_string())]
    }
}
