use std::path::PathBuf;

use schemars::JsonSchema;
use serde::Deserialize;

use crate::logging::Logging;

/// Configuration for a conversion run
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// Path to the GraphQL schema to convert
    pub schema: Option<PathBuf>,

    /// Encoding of the written document
    pub encoding: OutputEncoding,

    /// Path to a JSON file mapping custom scalar names to JTD types
    pub custom_scalars: Option<PathBuf>,

    /// File to write the document to. Defaults to stdout.
    pub output: Option<PathBuf>,

    /// Pretty-print the written document
    pub pretty: bool,

    /// Fail when the conversion reports warnings
    pub deny_warnings: bool,

    /// Logging configuration
    pub logging: Logging,
}

/// Encoding of the written document
#[derive(Debug, Default, Clone, Copy, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputEncoding {
    /// Full JTD keywords with required and optional fields kept apart
    #[default]
    Verbose,
    /// Short keys with a single field bucket
    Minified,
}
