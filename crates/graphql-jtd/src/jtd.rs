//! JSON Type Definition documents
//!
//! The same document comes in two encodings. [`Jtd`] and [`JtdRoot`] use the
//! full JTD keywords, while [`JtdMin`] and [`JtdMinRoot`] use short keys and
//! only mark fields that are required.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// A primitive JTD type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JtdType {
    String,
    Boolean,
    Int8,
    Int16,
    Int32,
    Uint8,
    Uint16,
    Uint32,
    Float32,
    Float64,
    Timestamp,
    /// Placeholder for scalars that could not be resolved
    Unknown,
}

impl JtdType {
    pub const ALL: [JtdType; 12] = [
        JtdType::String,
        JtdType::Boolean,
        JtdType::Int8,
        JtdType::Int16,
        JtdType::Int32,
        JtdType::Uint8,
        JtdType::Uint16,
        JtdType::Uint32,
        JtdType::Float32,
        JtdType::Float64,
        JtdType::Timestamp,
        JtdType::Unknown,
    ];

    /// The name used by the verbose encoding
    pub fn as_str(self) -> &'static str {
        match self {
            JtdType::String => "string",
            JtdType::Boolean => "boolean",
            JtdType::Int8 => "int8",
            JtdType::Int16 => "int16",
            JtdType::Int32 => "int32",
            JtdType::Uint8 => "uint8",
            JtdType::Uint16 => "uint16",
            JtdType::Uint32 => "uint32",
            JtdType::Float32 => "float32",
            JtdType::Float64 => "float64",
            JtdType::Timestamp => "timestamp",
            JtdType::Unknown => "unknown",
        }
    }

    /// The code used by the minified encoding
    pub fn as_min_str(self) -> &'static str {
        match self {
            JtdType::String => "s",
            JtdType::Boolean => "b",
            JtdType::Int8 => "i8",
            JtdType::Int16 => "i16",
            JtdType::Int32 => "i32",
            JtdType::Uint8 => "u8",
            JtdType::Uint16 => "u16",
            JtdType::Uint32 => "u32",
            JtdType::Float32 => "f32",
            JtdType::Float64 => "f64",
            JtdType::Timestamp => "ts",
            JtdType::Unknown => "unk",
        }
    }
}

impl fmt::Display for JtdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that names neither a verbose nor a minified JTD type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown JTD type `{0}`")]
pub struct UnknownJtdType(pub String);

impl FromStr for JtdType {
    type Err = UnknownJtdType;

    /// Accepts both the verbose and the minified spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JtdType::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s || tag.as_min_str() == s)
            .ok_or_else(|| UnknownJtdType(s.to_string()))
    }
}

impl Serialize for JtdType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for JtdType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Serializes an optional tag with its minified code
mod min_type {
    use super::JtdType;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(
        tag: &Option<JtdType>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match tag {
            Some(tag) => serializer.serialize_str(tag.as_min_str()),
            None => serializer.serialize_none(),
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<JtdType>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| raw.parse().map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// Metadata attached to a verbose type definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Name of the composite or enum type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Set on the query, mutation and subscription types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_element: Option<bool>,

    /// Set on fields backed by the `ID` scalar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<bool>,

    /// Anything else a post-processor put here
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A type definition in the verbose encoding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jtd {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<JtdType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<Box<Jtd>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#enum: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Jtd>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional_properties: Option<IndexMap<String, Jtd>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<IndexMap<String, Jtd>>,
}

/// Metadata attached to a minified type definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JtdMinMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub re: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A type definition in the minified encoding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JtdMin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md: Option<JtdMinMetadata>,

    #[serde(
        default,
        with = "min_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub t: Option<JtdType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub el: Option<Box<JtdMin>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#enum: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<IndexMap<String, JtdMin>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rq: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<IndexMap<String, JtdMin>>,
}

/// Names of the schema's root operation types
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
}

/// A complete document in the verbose encoding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JtdRoot {
    pub metadata: RootMetadata,

    /// Every named type that is not a root operation type
    pub definitions: IndexMap<String, Jtd>,

    /// The root operation types
    pub optional_properties: IndexMap<String, Jtd>,
}

/// A complete document in the minified encoding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JtdMinRoot {
    pub md: RootMetadata,
    pub def: IndexMap<String, JtdMin>,
    pub p: IndexMap<String, JtdMin>,
}
