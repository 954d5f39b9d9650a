use std::io::Write as _;
use std::path::PathBuf;

use anyhow::{Context as _, bail};
use apollo_compiler::Schema;
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use graphql_jtd::{
    Conversion, ConversionWarning, CustomScalarMap, Encoding, Minified, Options, Verbose, convert,
};
use graphql_jtd_runtime::logging::{Logging, LoggingLayerBuilder};
use graphql_jtd_runtime::schema::load_schema;
use graphql_jtd_runtime::{Config, OutputEncoding, read_config, read_config_from_env};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Clap styling
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

// Define clap arguments
#[derive(Debug, clap::Parser)]
#[command(
    version,
    styles = STYLES,
    about = "Convert a GraphQL schema into a JSON Type Definition document",
)]
struct Args {
    /// The path to the GraphQL schema file
    #[clap(long, short = 's')]
    schema: Option<PathBuf>,

    /// Path to a YAML config file. GRAPHQL_JTD_* environment variables take
    /// precedence over its values.
    #[clap(long, short = 'c')]
    config: Option<PathBuf>,

    /// Write the minified encoding
    #[clap(long, short = 'm')]
    minify: bool,

    /// Path to a JSON file mapping custom scalar names to JTD types
    #[clap(long)]
    custom_scalars: Option<PathBuf>,

    /// File to write the document to instead of stdout
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,

    /// Pretty-print the document
    #[clap(long)]
    pretty: bool,

    /// Exit with an error when the conversion reports warnings
    #[clap(long)]
    deny_warnings: bool,
}

impl Args {
    /// Flags given on the command line win over the config
    fn apply(self, mut config: Config) -> Config {
        if let Some(schema) = self.schema {
            config.schema = Some(schema);
        }
        if self.minify {
            config.encoding = OutputEncoding::Minified;
        }
        if let Some(custom_scalars) = self.custom_scalars {
            config.custom_scalars = Some(custom_scalars);
        }
        if let Some(output) = self.output {
            config.output = Some(output);
        }
        config.pretty |= self.pretty;
        config.deny_warnings |= self.deny_warnings;
        config
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => read_config(path)?,
        None => read_config_from_env()?,
    };
    let config = args.apply(config);

    tracing_subscriber::registry()
        .with(LoggingLayerBuilder::new().build(&config.logging))
        .with(Logging::env_filter(&config.logging))
        .try_init()?;

    let Some(schema_path) = &config.schema else {
        bail!("no schema to convert: pass --schema or set `schema` in the config");
    };
    let schema = load_schema(schema_path)?;

    let custom_scalars = config
        .custom_scalars
        .as_ref()
        .map(|path| {
            info!(custom_scalars = ?path, "Loading custom scalar map");
            CustomScalarMap::from_file(path)
        })
        .transpose()?;

    let (document, warnings) = match config.encoding {
        OutputEncoding::Verbose => render::<Verbose>(&schema, custom_scalars, config.pretty)?,
        OutputEncoding::Minified => render::<Minified>(&schema, custom_scalars, config.pretty)?,
    };

    if !warnings.is_empty() {
        warn!(count = warnings.len(), "Conversion finished with warnings");
        if config.deny_warnings {
            bail!(
                "conversion reported {} warning(s) and --deny-warnings is set",
                warnings.len()
            );
        }
    }

    match &config.output {
        Some(path) => {
            std::fs::write(path, document)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(output = ?path, "Document written");
        }
        None => writeln!(std::io::stdout().lock(), "{document}")?,
    }

    Ok(())
}

/// Convert the schema and serialize the document
fn render<E: Encoding>(
    schema: &Schema,
    custom_scalars: Option<CustomScalarMap>,
    pretty: bool,
) -> anyhow::Result<(String, Vec<ConversionWarning>)> {
    let mut options = Options::<E>::new();
    if let Some(custom_scalars) = custom_scalars {
        options = options.with_custom_scalar_map(custom_scalars);
    }

    let Conversion { document, warnings } = convert(schema, &options);
    let document = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };

    Ok((document, warnings))
}
