//! Runtime utilities
//!
//! Used by the `graphql-jtd` binaries: configuration, logging and schema
//! loading.

mod config;
pub mod errors;
pub mod logging;
pub mod schema;

use std::path::Path;

pub use config::{Config, OutputEncoding};
pub use errors::SchemaError;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};

/// Prefix of the environment variables read into the config
const ENV_PREFIX: &str = "GRAPHQL_JTD_";

/// Separator to use when drilling down into nested options in the env figment
const ENV_NESTED_SEPARATOR: &str = "__";

/// Read configuration from environment variables only (when no config file is provided)
#[allow(clippy::result_large_err)]
pub fn read_config_from_env() -> Result<Config, figment::Error> {
    Figment::new()
        .join(Env::prefixed(ENV_PREFIX).split(ENV_NESTED_SEPARATOR))
        .extract()
}

/// Read in a config from a YAML file, filling in any missing values from the environment.
///
/// Environment variables take precedence over the file.
#[allow(clippy::result_large_err)]
pub fn read_config(yaml_path: impl AsRef<Path>) -> Result<Config, figment::Error> {
    let content = std::fs::read_to_string(yaml_path.as_ref()).map_err(|e| {
        figment::Error::from(format!(
            "failed to read config file '{}': {}",
            yaml_path.as_ref().display(),
            e
        ))
    })?;

    Figment::new()
        .join(Env::prefixed(ENV_PREFIX).split(ENV_NESTED_SEPARATOR))
        .join(Yaml::string(&content))
        .extract()
}
