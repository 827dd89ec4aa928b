mod error;

pub use self::error::{ConfigError, ConfigErrorExt};

use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, info};

/// Environment prefix for overrides, e.g. `CSTUDIO__LOG__LEVEL=debug`.
pub const ENV_PREFIX: &str = "CSTUDIO";
/// Looked up (with any supported extension) when no explicit path is given.
pub const DEFAULT_CONFIG_NAME: &str = "licsel";

/// Loads `T` from a config file overlaid with `CSTUDIO__` environment variables.
///
/// An explicit `path` must exist. Without one, `licsel.{toml,json,yaml,..}` in the
/// working directory is used if present; otherwise only defaults and environment apply.
/// Nested keys use double underscores: `CSTUDIO__LOG__PATH` maps to `log.path`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source cannot be
/// parsed, or the merged values do not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path.as_ref().map(AsRef::as_ref), environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake)
}

fn load_layered<T>(path: Option<&Path>, environment: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            File::from(path).required(true)
        },
        None => {
            debug!("No config path given, probing '{DEFAULT_CONFIG_NAME}'");
            File::with_name(DEFAULT_CONFIG_NAME).required(false)
        },
    };

    Config::builder()
        .add_source(file)
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
