use std::fmt;
use std::path::PathBuf;

use apollo_compiler::Schema;
use apollo_compiler::validation::WithErrors;

/// Formats validation diagnostics one per line, without going through the
/// ariadne report renderer
struct SafeWithErrors<'a, T>(&'a WithErrors<T>);

impl<T> fmt::Display for SafeWithErrors<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = &self.0.errors;

        if errors.is_empty() {
            return write!(f, "Unknown error");
        }

        writeln!(f, "GraphQL validation errors:")?;
        for (i, diagnostic) in errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, diagnostic.error)?;
        }

        Ok(())
    }
}

/// A schema that could not be loaded
#[derive(Debug)]
pub enum SchemaError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Invalid {
        path: PathBuf,
        errors: Box<WithErrors<Schema>>,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::Read { path, source } => {
                write!(f, "Could not read schema {}: {}", path.display(), source)
            }
            SchemaError::Invalid { path, errors } => write!(
                f,
                "Invalid schema {}: {}",
                path.display(),
                SafeWithErrors(errors.as_ref())
            ),
        }
    }
}

impl std::error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SchemaError::Read { source, .. } => Some(source),
            SchemaError::Invalid { .. } => None,
        }
    }
}
