//! Logging config and utilities
//!
//! Logs always go to stderr so that stdout can carry the converted document.

mod defaults;
mod format_style;
mod parsers;

use std::io::IsTerminal;

pub use format_style::FormatStyle;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, Layer as LayerTrait, Registry};

/// Logging related options
#[derive(Debug, Deserialize, JsonSchema)]
pub struct Logging {
    /// The log level to use for tracing
    #[serde(
        default = "defaults::log_level",
        deserialize_with = "parsers::level"
    )]
    #[schemars(schema_with = "level")]
    pub level: Level,

    #[serde(default = "defaults::default_format")]
    pub format: FormatStyle,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
            format: defaults::default_format(),
        }
    }
}

pub type LoggingLayer = Box<dyn LayerTrait<Registry> + Send + Sync>;

pub struct LoggingLayerBuilder {
    writer: Option<BoxMakeWriter>,
    ansi_enabled: Option<bool>,
}

impl LoggingLayerBuilder {
    pub fn new() -> Self {
        Self {
            writer: None,
            ansi_enabled: None,
        }
    }

    /// Write somewhere other than stderr
    pub fn with_writer<W>(mut self, mw: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        self.writer = Some(BoxMakeWriter::new(mw));
        self
    }

    /// Force ANSI colors on or off. Defaults to on when stderr is a terminal.
    pub fn with_ansi_enabled(mut self, enabled: bool) -> Self {
        self.ansi_enabled = Some(enabled);
        self
    }

    pub fn build(self, logging: &Logging) -> LoggingLayer {
        let ansi_enabled = self
            .ansi_enabled
            .unwrap_or_else(|| self.writer.is_none() && std::io::stderr().is_terminal());
        let writer = self
            .writer
            .unwrap_or_else(|| BoxMakeWriter::new(std::io::stderr));

        let layer = tracing_subscriber::fmt::layer();
        match logging.format {
            FormatStyle::Full => layer
                .with_writer(writer)
                .with_ansi(ansi_enabled)
                .with_target(false)
                .boxed(),
            FormatStyle::Compact => layer
                .compact()
                .with_writer(writer)
                .with_ansi(ansi_enabled)
                .with_target(false)
                .boxed(),
            FormatStyle::Json => layer
                .json()
                .with_writer(writer)
                .with_ansi(ansi_enabled)
                .with_target(false)
                .boxed(),
            FormatStyle::Pretty => layer
                .pretty()
                .with_writer(writer)
                .with_ansi(ansi_enabled)
                .with_target(false)
                .boxed(),
        }
    }
}

impl Default for LoggingLayerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logging {
    /// `RUST_LOG` directives on top of the configured level
    pub fn env_filter(logging: &Logging) -> EnvFilter {
        EnvFilter::from_default_env().add_directive(logging.level.into())
    }
}

fn level(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
    /// Log level
    #[derive(JsonSchema)]
    #[schemars(rename_all = "lowercase")]
    // Only used to derive the schema
    #[allow(dead_code)]
    enum Level {
        Trace,
        Debug,
        Info,
        Warn,
        Error,
    }

    Level::json_schema(generator)
}
