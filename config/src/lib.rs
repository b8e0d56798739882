//! Environment-driven configuration for the console fixtures.
//!
//! Every section is read from variables named `CONSOLE_FIXTURES_<PREFIX>_<FIELD>`,
//! where `<FIELD>` is the field name with underscores removed (see [`serde_wrapper`]).
//! A `.config.env` file in the working directory is loaded first when present;
//! variables already set in the environment take precedence over it.

use std::path::PathBuf;

use serde::de::DeserializeOwned;

mod error;

pub mod busy_loop;
pub mod echo;
pub mod factorial;

pub use busy_loop::BusyLoopConfig;
pub use echo::EchoConfig;
pub use error::Error;
pub use factorial::FactorialConfig;

const CONFIG_ENV_PREFIX: &str = "CONSOLE_FIXTURES";
const CONFIG_ENV_FILE: &str = ".config.env";

pub trait Config: DeserializeOwned {
    const PREFIX: &'static str;

    /// Values for keys missing from the environment, keyed by renamed field.
    fn defaults() -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn from_env() -> Result<Self, Error> {
        load_env_file()?;

        let prefix = format!("{}_{}", CONFIG_ENV_PREFIX, Self::PREFIX);
        let mut builder = config::Config::builder();
        for (key, value) in Self::defaults() {
            builder = builder.set_default(key, value)?;
        }

        let config = builder
            .add_source(config::Environment::with_prefix(&prefix).separator("_"))
            .build()?
            .try_deserialize()?;

        tracing::debug!(prefix, "loaded configuration");
        Ok(config)
    }
}

#[doc(hidden)]
pub fn config_env_path() -> PathBuf {
    PathBuf::from(CONFIG_ENV_FILE)
}

fn load_env_file() -> Result<(), Error> {
    match dotenvy::from_path(config_env_path()) {
        Ok(()) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(err.into()),
    }
}
