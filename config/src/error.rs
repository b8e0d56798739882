use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to load .config.env: {0}")]
    DotEnv(#[from] dotenvy::Error),
}
