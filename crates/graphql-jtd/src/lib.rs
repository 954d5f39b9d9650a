#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Convert GraphQL schemas into JSON Type Definition documents.
//!
//! ```
//! use apollo_compiler::Schema;
//! use graphql_jtd::{JtdType, Options, to_document};
//!
//! let schema = Schema::parse("type Query { ok: Boolean }", "schema.graphql").unwrap();
//! let document = to_document(&schema, &Options::default());
//!
//! let query = &document.optional_properties["Query"];
//! let ok = &query.optional_properties.as_ref().unwrap()["ok"];
//! assert_eq!(ok.r#type, Some(JtdType::Boolean));
//! ```

pub mod custom_scalar_map;
pub mod encoding;
pub mod errors;
pub mod jtd;
pub mod options;
mod walker;

use apollo_compiler::Schema;

pub use custom_scalar_map::CustomScalarMap;
pub use encoding::{Encoding, Minified, Verbose};
pub use errors::{ConversionWarning, CustomScalarMapError};
pub use jtd::{Jtd, JtdMin, JtdMinRoot, JtdRoot, JtdType, RootMetadata};
pub use options::{CompositeKind, CurrentObject, Options};
pub use walker::{Conversion, assemble, collect_types, convert};

/// Convert a schema into a verbose JTD document
pub fn to_document(schema: &Schema, options: &Options<Verbose>) -> JtdRoot {
    convert(schema, options).document
}

/// Convert a schema into a minified JTD document
pub fn to_minified_document(schema: &Schema, options: &Options<Minified>) -> JtdMinRoot {
    convert(schema, options).document
}
