//! Conversion options and extension hooks

use std::fmt;

use apollo_compiler::Name;
use apollo_compiler::ast::Type;
use apollo_compiler::schema::{InputObjectType, ObjectType, ScalarType};

use crate::custom_scalar_map::CustomScalarMap;
use crate::encoding::Encoding;
use crate::jtd::JtdType;

/// Resolves a custom scalar for a field. Returning `None` leaves the field as
/// [`JtdType::Unknown`].
pub type CustomScalarResolver =
    dyn Fn(&str, &ScalarType, &CurrentObject<'_>) -> Option<JtdType> + Send + Sync;

/// Rewrites the definition built for a field or argument.
///
/// The hook receives the built definition, the field name, the field's type
/// with its non-null and list wrappers removed (`[Int]!` arrives as `Int`), the
/// enclosing type and whether that type is a scalar. A returned definition
/// replaces the built one entirely, so it must carry over anything worth
/// keeping. Object fields get their arguments set after the hook runs.
pub type ScalarPostProcessor<D> =
    dyn Fn(&D, &str, &Type, &CurrentObject<'_>, bool) -> Option<D> + Send + Sync;

/// The composite type whose fields are being mapped
#[derive(Debug, Clone, Copy)]
pub enum CurrentObject<'a> {
    Object(&'a ObjectType),
    Input(&'a InputObjectType),
}

/// Kind of a [`CurrentObject`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeKind {
    Object,
    InputObject,
}

impl<'a> CurrentObject<'a> {
    pub fn name(&self) -> &'a Name {
        match self {
            CurrentObject::Object(object) => &object.name,
            CurrentObject::Input(input) => &input.name,
        }
    }

    pub fn kind(&self) -> CompositeKind {
        match self {
            CurrentObject::Object(_) => CompositeKind::Object,
            CurrentObject::Input(_) => CompositeKind::InputObject,
        }
    }
}

impl fmt::Display for CompositeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositeKind::Object => f.write_str("object"),
            CompositeKind::InputObject => f.write_str("input object"),
        }
    }
}

/// Options shared by every step of a conversion
pub struct Options<E: Encoding> {
    pub(crate) custom_scalar_resolver: Option<Box<CustomScalarResolver>>,
    pub(crate) scalar_post_processor: Option<Box<ScalarPostProcessor<E::Def>>>,
}

impl<E: Encoding> Options<E> {
    pub fn new() -> Self {
        Self {
            custom_scalar_resolver: None,
            scalar_post_processor: None,
        }
    }

    /// Resolve custom scalars with a callback
    pub fn with_custom_scalar_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&str, &ScalarType, &CurrentObject<'_>) -> Option<JtdType> + Send + Sync + 'static,
    {
        self.custom_scalar_resolver = Some(Box::new(resolver));
        self
    }

    /// Resolve custom scalars by name from a fixed map
    pub fn with_custom_scalar_map(self, map: CustomScalarMap) -> Self {
        self.with_custom_scalar_resolver(move |_field, scalar, _current| {
            map.get(scalar.name.as_str())
        })
    }

    /// Post-process every field definition before it is placed in its parent
    pub fn with_scalar_post_processor<F>(mut self, post_processor: F) -> Self
    where
        F: Fn(&E::Def, &str, &Type, &CurrentObject<'_>, bool) -> Option<E::Def>
            + Send
            + Sync
            + 'static,
    {
        self.scalar_post_processor = Some(Box::new(post_processor));
        self
    }
}

impl<E: Encoding> Default for Options<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Encoding> fmt::Debug for Options<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field(
                "custom_scalar_resolver",
                &self.custom_scalar_resolver.is_some(),
            )
            .field("scalar_post_processor", &self.scalar_post_processor.is_some())
            .finish()
    }
}
