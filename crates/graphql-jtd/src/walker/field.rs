use apollo_compiler::Node;
use apollo_compiler::ast::{InputValueDefinition, Type};
use indexmap::IndexMap;
use tracing::warn;

use super::Walk;
use super::classify::{Classified, Shape, classify};
use crate::encoding::Encoding;
use crate::errors::ConversionWarning;
use crate::options::CurrentObject;

impl<E: Encoding> Walk<'_, E> {
    /// Build the definition of a single field or argument
    pub(super) fn field_type(
        &mut self,
        ty: &Type,
        field_name: &str,
        current: &CurrentObject<'_>,
    ) -> E::Def {
        let schema = self.schema;
        let Classified {
            underlying,
            shape,
            required,
            list,
        } = classify(ty, schema);

        let is_scalar = matches!(shape, Shape::Scalar(_));
        let mut def = match shape {
            Shape::Scalar(scalar) => self.scalar(scalar, field_name, current),
            Shape::Object(name) | Shape::Input(name) | Shape::Enum(name) => {
                E::reference(name.as_str())
            }
            Shape::Unrecognized => {
                warn!(
                    type_name = %underlying,
                    field = field_name,
                    parent = current.name().as_str(),
                    "unsupported field type {underlying}"
                );
                self.warnings.push(ConversionWarning::UnsupportedType {
                    type_name: underlying.to_string(),
                    field: field_name.to_string(),
                    parent: current.name().to_string(),
                });
                E::Def::default()
            }
        };

        if list {
            def = E::list(def);
        }
        E::set_required(&mut def, required);

        if let Some(post_process) = &self.options.scalar_post_processor
            && let Some(replacement) =
                post_process(&def, field_name, &underlying, current, is_scalar)
        {
            def = replacement;
        }

        def
    }

    /// Build the argument definitions of an object field, or nothing when it
    /// takes no arguments
    pub(super) fn arguments(
        &mut self,
        arguments: &[Node<InputValueDefinition>],
        current: &CurrentObject<'_>,
    ) -> Option<IndexMap<String, E::Def>> {
        if arguments.is_empty() {
            return None;
        }

        Some(
            arguments
                .iter()
                .map(|argument| {
                    let def = self.field_type(&argument.ty, argument.name.as_str(), current);
                    (argument.name.to_string(), def)
                })
                .collect(),
        )
    }
}
