//! Custom scalar map
//!
//! A JSON object naming the JTD type for each custom scalar, e.g.
//! `{ "DateTime": "timestamp", "Long": "float64" }`.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::errors::CustomScalarMapError;
use crate::jtd::JtdType;

/// Fixed mapping from custom scalar names to JTD types
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomScalarMap(HashMap<String, JtdType>);

impl CustomScalarMap {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CustomScalarMapError> {
        std::fs::read_to_string(path)?.parse()
    }

    pub fn get(&self, scalar: &str) -> Option<JtdType> {
        self.0.get(scalar).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for CustomScalarMap {
    type Err = CustomScalarMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: HashMap<String, String> = serde_json::from_str(s)?;
        raw.into_iter()
            .map(|(scalar, type_name)| match type_name.parse() {
                Ok(tag) => Ok((scalar, tag)),
                Err(_) => Err(CustomScalarMapError::UnknownType { scalar, type_name }),
            })
            .collect::<Result<_, _>>()
            .map(CustomScalarMap)
    }
}

impl FromIterator<(String, JtdType)> for CustomScalarMap {
    fn from_iter<I: IntoIterator<Item = (String, JtdType)>>(iter: I) -> Self {
        CustomScalarMap(iter.into_iter().collect())
    }
}
