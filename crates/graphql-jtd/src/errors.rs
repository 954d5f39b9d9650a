use std::io;

/// A degraded condition met while converting a schema.
///
/// Conversions never fail. Each warning is logged when it happens and is also
/// returned to the caller alongside the document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionWarning {
    /// A custom scalar nothing could resolve, emitted as `unknown`
    #[error("no scalar type found for {scalar} (field {parent}.{field})")]
    UnknownScalar {
        scalar: String,
        field: String,
        parent: String,
    },

    /// A field type outside of the supported shapes, emitted with an empty shape
    #[error("unsupported type {type_name} for field {parent}.{field}")]
    UnsupportedType {
        type_name: String,
        field: String,
        parent: String,
    },
}

/// An error loading a custom scalar map
#[derive(Debug, thiserror::Error)]
pub enum CustomScalarMapError {
    #[error("could not read custom scalar map: {0}")]
    Read(#[from] io::Error),

    #[error("invalid custom scalar map: {0}")]
    Json(#[from] serde_json::Error),

    #[error("custom scalar {scalar} maps to unknown JTD type `{type_name}`")]
    UnknownType { scalar: String, type_name: String },
}
