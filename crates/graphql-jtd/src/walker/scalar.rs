use apollo_compiler::schema::ScalarType;
use tracing::warn;

use super::Walk;
use crate::encoding::Encoding;
use crate::errors::ConversionWarning;
use crate::jtd::JtdType;
use crate::options::CurrentObject;

impl<E: Encoding> Walk<'_, E> {
    /// Map a scalar to a primitive JTD type
    pub(super) fn scalar(
        &mut self,
        scalar: &ScalarType,
        field_name: &str,
        current: &CurrentObject<'_>,
    ) -> E::Def {
        match scalar.name.as_str() {
            "Int" => E::scalar(JtdType::Int32),
            "ID" => {
                let mut def = E::scalar(JtdType::String);
                E::mark_identifier(&mut def);
                def
            }
            "String" => E::scalar(JtdType::String),
            "Float" => E::scalar(JtdType::Float32),
            "Boolean" => E::scalar(JtdType::Boolean),
            custom => {
                let resolved = self
                    .options
                    .custom_scalar_resolver
                    .as_ref()
                    .and_then(|resolve| resolve(field_name, scalar, current));

                match resolved {
                    Some(tag) => E::scalar(tag),
                    None => {
                        warn!(
                            scalar = custom,
                            field = field_name,
                            parent = current.name().as_str(),
                            "no scalar type found for {custom}"
                        );
                        self.warnings.push(ConversionWarning::UnknownScalar {
                            scalar: custom.to_string(),
                            field: field_name.to_string(),
                            parent: current.name().to_string(),
                        });
                        E::scalar(JtdType::Unknown)
                    }
                }
            }
        }
    }
}
