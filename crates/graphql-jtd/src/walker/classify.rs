//! Field type classification

use apollo_compiler::ast::Type;
use apollo_compiler::schema::{ExtendedType, ScalarType};
use apollo_compiler::{Name, Schema};

/// What a field's type refers to once its wrappers are gone
#[derive(Debug, Clone, Copy)]
pub(crate) enum Shape<'a> {
    Scalar(&'a ScalarType),
    Object(&'a Name),
    Input(&'a Name),
    Enum(&'a Name),
    /// Interfaces, unions, unknown names and nested lists
    Unrecognized,
}

/// A classified field type
#[derive(Debug, Clone)]
pub(crate) struct Classified<'a> {
    /// The declared type without its non-null and list wrappers
    pub(crate) underlying: Type,
    pub(crate) shape: Shape<'a>,
    pub(crate) required: bool,
    pub(crate) list: bool,
}

/// Strip the non-null wrapper, then at most one list wrapper.
///
/// The list item is kept as written. An item with wrappers of its own is not a
/// supported shape, so both `[[Int]]` and `[Int!]` classify as
/// [`Shape::Unrecognized`], with `[Int]` and `Int!` as the underlying types.
pub(crate) fn classify<'a>(ty: &Type, schema: &'a Schema) -> Classified<'a> {
    let required = ty.is_non_null();
    let (list, underlying) = match ty {
        Type::List(item) | Type::NonNullList(item) => (true, item.as_ref().clone()),
        Type::Named(name) | Type::NonNullNamed(name) => (false, Type::Named(name.clone())),
    };

    Classified {
        shape: shape(&underlying, schema),
        underlying,
        required,
        list,
    }
}

fn shape<'a>(underlying: &Type, schema: &'a Schema) -> Shape<'a> {
    let Type::Named(name) = underlying else {
        return Shape::Unrecognized;
    };

    match schema.types.get(name.as_str()) {
        Some(ExtendedType::Scalar(scalar)) => Shape::Scalar(scalar),
        Some(ExtendedType::Object(object)) => Shape::Object(&object.name),
        Some(ExtendedType::InputObject(input)) => Shape::Input(&input.name),
        Some(ExtendedType::Enum(enum_type)) => Shape::Enum(&enum_type.name),
        Some(ExtendedType::Interface(_) | ExtendedType::Union(_)) | None => Shape::Unrecognized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apollo_compiler::ty;
    use rstest::rstest;

    fn schema() -> Schema {
        Schema::parse(
            r#"
            scalar Date
            enum Color { RED GREEN }
            input Filter { color: Color }
            interface Node { id: ID! }
            type Item implements Node { id: ID! }
            type Query { items(filter: Filter): [Item] }
            "#,
            "schema.graphql",
        )
        .unwrap()
    }

    #[rstest]
    #[case(ty!(String), false, false)]
    #[case(ty!(String!), true, false)]
    #[case(ty!([String]), false, true)]
    #[case(ty!([String]!), true, true)]
    fn strips_wrappers(#[case] ty: Type, #[case] required: bool, #[case] list: bool) {
        let schema = schema();
        let classified = classify(&ty, &schema);

        assert_eq!(classified.required, required);
        assert_eq!(classified.list, list);
        assert_eq!(classified.underlying, ty!(String));
        assert!(matches!(
            classified.shape,
            Shape::Scalar(scalar) if scalar.name.as_str() == "String"
        ));
    }

    #[test]
    fn identifies_named_shapes() {
        let schema = schema();

        let date = classify(&ty!(Date), &schema);
        assert!(matches!(date.shape, Shape::Scalar(s) if s.name.as_str() == "Date"));

        let item = classify(&ty!(Item!), &schema);
        assert!(matches!(item.shape, Shape::Object(n) if n.as_str() == "Item"));

        let filter = classify(&ty!(Filter), &schema);
        assert!(matches!(filter.shape, Shape::Input(n) if n.as_str() == "Filter"));

        let colors = classify(&ty!([Color]!), &schema);
        assert!(matches!(colors.shape, Shape::Enum(n) if n.as_str() == "Color"));
    }

    #[rstest]
    #[case(ty!(Node))]
    #[case(ty!(Missing))]
    #[case(ty!([[Int]]))]
    #[case(ty!([[Int!]!]!))]
    #[case(ty!([String!]))]
    #[case(ty!([Item!]!))]
    fn leaves_other_types_unrecognized(#[case] ty: Type) {
        let schema = schema();
        assert!(matches!(classify(&ty, &schema).shape, Shape::Unrecognized));
    }

    #[test]
    fn nested_lists_keep_the_inner_list() {
        let schema = schema();
        let classified = classify(&ty!([[Int!]]!), &schema);

        assert!(classified.required);
        assert!(classified.list);
        assert_eq!(classified.underlying, ty!([Int!]));
    }

    #[test]
    fn non_null_items_keep_their_wrapper() {
        let schema = schema();
        let classified = classify(&ty!([String!]!), &schema);

        assert!(classified.required);
        assert!(classified.list);
        assert_eq!(classified.underlying, ty!(String!));
        assert!(matches!(classified.shape, Shape::Unrecognized));
    }
}
