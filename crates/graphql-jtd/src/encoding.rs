//! Output encodings
//!
//! The schema walk is written once against [`Encoding`]. Each encoding decides
//! how metadata is attached, where a field lands inside its parent, how lists
//! are wrapped and what the document envelope looks like.

use std::fmt::Debug;

use indexmap::IndexMap;
use serde::Serialize;

use crate::jtd::{
    Jtd, JtdMin, JtdMinMetadata, JtdMinRoot, JtdRoot, JtdType, Metadata, RootMetadata,
};

/// Strategy for shaping type definitions and documents
pub trait Encoding {
    /// A single type definition
    type Def: Clone + Debug + Default + PartialEq + Serialize;

    /// The document envelope
    type Document: Clone + Debug + PartialEq + Serialize;

    /// A primitive type
    fn scalar(tag: JtdType) -> Self::Def;

    /// Flag a definition as backed by the `ID` scalar
    fn mark_identifier(def: &mut Self::Def);

    /// A reference to a named type
    fn reference(name: &str) -> Self::Def;

    /// Wrap a definition as the element of a list
    fn list(element: Self::Def) -> Self::Def;

    /// An enum type with its values in declaration order
    fn enumeration(name: &str, values: Vec<String>) -> Self::Def;

    /// Record whether a field is required
    fn set_required(def: &mut Self::Def, required: bool);

    /// Replace the argument definitions of an object field
    fn set_arguments(def: &mut Self::Def, arguments: Option<IndexMap<String, Self::Def>>);

    /// An empty composite type
    fn composite(name: &str, root_element: bool) -> Self::Def;

    /// Add a field to a composite type
    fn insert_field(composite: &mut Self::Def, name: &str, field: Self::Def);

    /// The type name stored in a definition's metadata
    fn name(def: &Self::Def) -> Option<&str>;

    /// Whether the definition is a root operation type
    fn is_root_element(def: &Self::Def) -> bool;

    /// Wrap the two buckets into a document
    fn document(
        metadata: RootMetadata,
        definitions: IndexMap<String, Self::Def>,
        root: IndexMap<String, Self::Def>,
    ) -> Self::Document;
}

/// Full JTD keywords, with required and optional fields kept apart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verbose;

/// Short keys, with a single field bucket and an `rq` flag on required fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minified;

impl Encoding for Verbose {
    type Def = Jtd;
    type Document = JtdRoot;

    fn scalar(tag: JtdType) -> Jtd {
        Jtd {
            r#type: Some(tag),
            ..Default::default()
        }
    }

    fn mark_identifier(def: &mut Jtd) {
        def.metadata.get_or_insert_with(Default::default).id = Some(true);
    }

    fn reference(name: &str) -> Jtd {
        Jtd {
            r#ref: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn list(element: Jtd) -> Jtd {
        Jtd {
            elements: Some(Box::new(element)),
            ..Default::default()
        }
    }

    fn enumeration(name: &str, values: Vec<String>) -> Jtd {
        Jtd {
            metadata: Some(Metadata {
                name: Some(name.to_string()),
                ..Default::default()
            }),
            r#enum: Some(values),
            ..Default::default()
        }
    }

    fn set_required(def: &mut Jtd, required: bool) {
        def.nullable = Some(!required);
    }

    fn set_arguments(def: &mut Jtd, arguments: Option<IndexMap<String, Jtd>>) {
        def.arguments = arguments;
    }

    fn composite(name: &str, root_element: bool) -> Jtd {
        Jtd {
            metadata: Some(Metadata {
                name: Some(name.to_string()),
                root_element: root_element.then_some(true),
                ..Default::default()
            }),
            properties: Some(IndexMap::new()),
            optional_properties: Some(IndexMap::new()),
            ..Default::default()
        }
    }

    // A field without an explicit `nullable: true` counts as required, which
    // includes post-processed definitions that dropped the marker.
    fn insert_field(composite: &mut Jtd, name: &str, field: Jtd) {
        let bucket = if field.nullable == Some(true) {
            &mut composite.optional_properties
        } else {
            &mut composite.properties
        };
        bucket
            .get_or_insert_with(IndexMap::new)
            .insert(name.to_string(), field);
    }

    fn name(def: &Jtd) -> Option<&str> {
        def.metadata.as_ref()?.name.as_deref()
    }

    fn is_root_element(def: &Jtd) -> bool {
        def.metadata
            .as_ref()
            .is_some_and(|metadata| metadata.root_element == Some(true))
    }

    fn document(
        metadata: RootMetadata,
        definitions: IndexMap<String, Jtd>,
        root: IndexMap<String, Jtd>,
    ) -> JtdRoot {
        JtdRoot {
            metadata,
            definitions,
            optional_properties: root,
        }
    }
}

impl Encoding for Minified {
    type Def = JtdMin;
    type Document = JtdMinRoot;

    fn scalar(tag: JtdType) -> JtdMin {
        JtdMin {
            t: Some(tag),
            ..Default::default()
        }
    }

    fn mark_identifier(def: &mut JtdMin) {
        def.md.get_or_insert_with(Default::default).id = Some(true);
    }

    fn reference(name: &str) -> JtdMin {
        JtdMin {
            r#ref: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn list(element: JtdMin) -> JtdMin {
        JtdMin {
            el: Some(Box::new(element)),
            ..Default::default()
        }
    }

    fn enumeration(name: &str, values: Vec<String>) -> JtdMin {
        JtdMin {
            md: Some(JtdMinMetadata {
                n: Some(name.to_string()),
                ..Default::default()
            }),
            r#enum: Some(values),
            ..Default::default()
        }
    }

    fn set_required(def: &mut JtdMin, required: bool) {
        def.rq = required.then_some(true);
    }

    fn set_arguments(def: &mut JtdMin, arguments: Option<IndexMap<String, JtdMin>>) {
        def.args = arguments;
    }

    fn composite(name: &str, root_element: bool) -> JtdMin {
        JtdMin {
            md: Some(JtdMinMetadata {
                n: Some(name.to_string()),
                re: root_element.then_some(true),
                ..Default::default()
            }),
            p: Some(IndexMap::new()),
            ..Default::default()
        }
    }

    fn insert_field(composite: &mut JtdMin, name: &str, field: JtdMin) {
        composite
            .p
            .get_or_insert_with(IndexMap::new)
            .insert(name.to_string(), field);
    }

    fn name(def: &JtdMin) -> Option<&str> {
        def.md.as_ref()?.n.as_deref()
    }

    fn is_root_element(def: &JtdMin) -> bool {
        def.md.as_ref().is_some_and(|md| md.re == Some(true))
    }

    fn document(
        metadata: RootMetadata,
        definitions: IndexMap<String, JtdMin>,
        root: IndexMap<String, JtdMin>,
    ) -> JtdMinRoot {
        JtdMinRoot {
            md: metadata,
            def: definitions,
            p: root,
        }
    }
}
