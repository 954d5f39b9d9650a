use apollo_compiler::Name;
use apollo_compiler::ast::OperationType;

use super::Walk;
use crate::encoding::Encoding;
use crate::options::CurrentObject;

impl<E: Encoding> Walk<'_, E> {
    /// Map an object or input type into a composite definition
    pub(super) fn composite(&mut self, current: CurrentObject<'_>) -> E::Def {
        let name = current.name();
        let mut composite = E::composite(name.as_str(), self.is_root(name));

        match current {
            CurrentObject::Object(object) => {
                for (field_name, field) in &object.fields {
                    let mut def = self.field_type(&field.ty, field_name.as_str(), &current);
                    let arguments = self.arguments(&field.arguments, &current);
                    E::set_arguments(&mut def, arguments);
                    E::insert_field(&mut composite, field_name.as_str(), def);
                }
            }
            CurrentObject::Input(input) => {
                for (field_name, field) in &input.fields {
                    let def = self.field_type(&field.ty, field_name.as_str(), &current);
                    E::insert_field(&mut composite, field_name.as_str(), def);
                }
            }
        }

        composite
    }

    fn is_root(&self, name: &Name) -> bool {
        [
            OperationType::Query,
            OperationType::Mutation,
            OperationType::Subscription,
        ]
        .into_iter()
        .any(|operation| self.schema.root_operation(operation) == Some(name))
    }
}
