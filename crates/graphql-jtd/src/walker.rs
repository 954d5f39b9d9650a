//! Schema walker
//!
//! Walks every user-defined type of a schema once and maps it into a flat list
//! of type definitions. Fields refer to other named types by name, so cyclic
//! type graphs need no special handling.

use apollo_compiler::Schema;
use apollo_compiler::ast::OperationType;
use apollo_compiler::schema::ExtendedType;
use indexmap::IndexMap;

use crate::encoding::Encoding;
use crate::errors::ConversionWarning;
use crate::jtd::RootMetadata;
use crate::options::{CurrentObject, Options};

mod classify;
mod composite;
mod field;
mod scalar;

/// Prefix reserved for introspection types
const INTROSPECTION_PREFIX: &str = "__";

/// The result of converting a schema
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion<E: Encoding> {
    pub document: E::Document,
    pub warnings: Vec<ConversionWarning>,
}

/// State shared while walking one schema
pub(crate) struct Walk<'a, E: Encoding> {
    schema: &'a Schema,
    options: &'a Options<E>,
    warnings: &'a mut Vec<ConversionWarning>,
}

/// Convert a schema into a document in the encoding `E`
pub fn convert<E: Encoding>(schema: &Schema, options: &Options<E>) -> Conversion<E> {
    let mut warnings = Vec::new();
    let types = collect_types(schema, options, &mut warnings);
    let document = assemble::<E>(types, root_metadata(schema));

    Conversion { document, warnings }
}

/// Map every input, object and enum type of a schema, in that order.
///
/// Introspection types are skipped, as are scalars, interfaces and unions.
pub fn collect_types<E: Encoding>(
    schema: &Schema,
    options: &Options<E>,
    warnings: &mut Vec<ConversionWarning>,
) -> Vec<E::Def> {
    let user_types = || {
        schema
            .types
            .values()
            .filter(|ty| !ty.name().starts_with(INTROSPECTION_PREFIX))
    };
    let mut walk = Walk {
        schema,
        options,
        warnings,
    };

    let inputs = user_types().filter_map(|ty| match ty {
        ExtendedType::InputObject(input) => Some(CurrentObject::Input(input)),
        _ => None,
    });
    let objects = user_types().filter_map(|ty| match ty {
        ExtendedType::Object(object) => Some(CurrentObject::Object(object)),
        _ => None,
    });
    let mut types: Vec<E::Def> = inputs
        .chain(objects)
        .map(|current| walk.composite(current))
        .collect();

    types.extend(user_types().filter_map(|ty| match ty {
        ExtendedType::Enum(enum_type) => Some(E::enumeration(
            enum_type.name.as_str(),
            enum_type
                .values
                .values()
                .map(|value| value.value.to_string())
                .collect(),
        )),
        _ => None,
    }));

    types
}

/// Split collected definitions into the definitions and root buckets.
///
/// Definitions without a name are dropped.
pub fn assemble<E: Encoding>(types: Vec<E::Def>, metadata: RootMetadata) -> E::Document {
    let (root, definitions): (Vec<_>, Vec<_>) =
        types.into_iter().partition(|def| E::is_root_element(def));

    E::document(metadata, by_name::<E>(definitions), by_name::<E>(root))
}

fn by_name<E: Encoding>(types: Vec<E::Def>) -> IndexMap<String, E::Def> {
    types
        .into_iter()
        .filter_map(|def| {
            let name = E::name(&def)?.to_string();
            Some((name, def))
        })
        .collect()
}

fn root_metadata(schema: &Schema) -> RootMetadata {
    let root_name = |operation| {
        schema
            .root_operation(operation)
            .map(|name| name.to_string())
    };

    RootMetadata {
        query: root_name(OperationType::Query),
        mutation: root_name(OperationType::Mutation),
        subscription: root_name(OperationType::Subscription),
    }
}
