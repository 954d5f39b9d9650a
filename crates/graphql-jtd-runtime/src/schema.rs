//! Schema loading

use std::path::Path;

use apollo_compiler::Schema;
use apollo_compiler::validation::Valid;
use tracing::{debug, info};

use crate::errors::SchemaError;

/// Read and validate the schema at `path`
pub fn load_schema(path: impl AsRef<Path>) -> Result<Valid<Schema>, SchemaError> {
    let path = path.as_ref();
    info!(schema_path = ?path, "Loading schema");

    let source = std::fs::read_to_string(path).map_err(|source| SchemaError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_schema(source, path)
}

/// Parse and validate schema source text. `path` is only used in diagnostics.
pub fn parse_schema(source: String, path: &Path) -> Result<Valid<Schema>, SchemaError> {
    let schema =
        Schema::parse_and_validate(source, path).map_err(|errors| SchemaError::Invalid {
            path: path.to_path_buf(),
            errors: Box::new(errors),
        })?;
    debug!(types = schema.types.len(), "Schema loaded");

    Ok(schema)
}
