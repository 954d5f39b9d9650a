//! Conversion into the minified JTD encoding

use apollo_compiler::Schema;
use graphql_jtd::{
    ConversionWarning, CurrentObject, JtdMin, JtdMinRoot, JtdType, Minified, Options, convert,
    to_minified_document,
};
use indexmap::IndexMap;
use serde_json::json;

fn schema(sdl: &str) -> Schema {
    Schema::parse(sdl, "schema.graphql").unwrap()
}

fn demo() -> Schema {
    schema(include_str!("fixtures/demo.graphql"))
}

fn field<'a>(document: &'a JtdMinRoot, root: &str, name: &str) -> &'a JtdMin {
    &document.p[root].p.as_ref().unwrap()[name]
}

#[test]
fn root_elements() {
    let document = to_minified_document(&demo(), &Options::default());

    let query = &document.p["Query"];
    let md = query.md.as_ref().unwrap();
    assert_eq!(md.n.as_deref(), Some("Query"));
    assert_eq!(md.re, Some(true));
    assert_eq!(document.p.keys().collect::<Vec<_>>(), ["Query", "Mutation"]);
    assert_eq!(document.md.query.as_deref(), Some("Query"));
    assert_eq!(document.md.mutation.as_deref(), Some("Mutation"));
}

#[test]
fn definitions() {
    let document = to_minified_document(&demo(), &Options::default());

    assert_eq!(
        document.def.keys().collect::<Vec<_>>(),
        ["test1input1", "test1Result", "Level"]
    );
    assert_eq!(
        serde_json::to_value(&document.def["test1input1"]).unwrap(),
        json!({
            "md": { "n": "test1input1" },
            "p": {
                "name": { "t": "s", "rq": true },
                "tags": { "el": {} },
                "level": { "ref": "Level" }
            }
        })
    );
    assert_eq!(
        serde_json::to_value(&document.def["Level"]).unwrap(),
        json!({ "md": { "n": "Level" }, "enum": ["LOW", "MEDIUM", "HIGH"] })
    );
}

#[test]
fn arguments() {
    let document = to_minified_document(&demo(), &Options::default());

    let query_test1 = field(&document, "Query", "queryTest1");
    assert_eq!(
        serde_json::to_value(query_test1).unwrap(),
        json!({
            "ref": "test1Result",
            "args": {
                "req": { "t": "s", "rq": true },
                "input": { "ref": "test1input1" },
                "limit": { "t": "i32" }
            }
        })
    );
    assert_eq!(field(&document, "Query", "testInt").args, None);
}

#[test]
fn required_fields_are_flagged() {
    let document = to_minified_document(&demo(), &Options::default());

    assert_eq!(field(&document, "Query", "testInt").rq, Some(true));
    assert_eq!(field(&document, "Query", "testBoolean").rq, None);
    assert_eq!(
        serde_json::to_value(field(&document, "Query", "results")).unwrap(),
        json!({ "el": { "ref": "test1Result" }, "rq": true })
    );
}

#[test]
fn non_null_list_items_are_unsupported() {
    let conversion = convert(&demo(), &Options::<Minified>::default());

    assert!(matches!(
        conversion.warnings.as_slice(),
        [ConversionWarning::UnsupportedType { type_name, field, .. }]
            if type_name == "String!" && field == "tags"
    ));
}

#[test]
fn object_field_arguments_are_set_after_the_post_processor() {
    let hook_args: IndexMap<String, JtdMin> = [(
        "fromHook".to_string(),
        JtdMin {
            t: Some(JtdType::Boolean),
            ..Default::default()
        },
    )]
    .into_iter()
    .collect();
    let replacement = JtdMin {
        t: Some(JtdType::Uint8),
        args: Some(hook_args),
        ..Default::default()
    };
    let expected_input_field = replacement.clone();
    let options = Options::<Minified>::default().with_scalar_post_processor(
        move |_def, name, _ty, current, _is_scalar| {
            let replaced = match current {
                CurrentObject::Object(_) => ["queryTest1", "testBoolean"].contains(&name),
                CurrentObject::Input(_) => name == "name",
            };
            replaced.then(|| replacement.clone())
        },
    );
    let document = to_minified_document(&demo(), &options);

    assert_eq!(
        serde_json::to_value(field(&document, "Query", "queryTest1")).unwrap(),
        json!({
            "t": "u8",
            "args": {
                "req": { "t": "s", "rq": true },
                "input": { "ref": "test1input1" },
                "limit": { "t": "i32" }
            }
        })
    );
    assert_eq!(
        serde_json::to_value(field(&document, "Query", "testBoolean")).unwrap(),
        json!({ "t": "u8" })
    );
    assert_eq!(
        document.def["test1input1"].p.as_ref().unwrap().get("name"),
        Some(&expected_input_field)
    );
}

#[test]
fn required_input() {
    let document = to_minified_document(
        &schema(include_str!("fixtures/required_input.graphql")),
        &Options::default(),
    );

    let parent_id = &document.def["ChildInput"].p.as_ref().unwrap()["parentId"];
    assert_eq!(parent_id.rq, Some(true));
    assert_eq!(parent_id.md.as_ref().unwrap().id, Some(true));

    let create_child = field(&document, "Mutation", "createChild");
    let input = &create_child.args.as_ref().unwrap()["input"];
    assert_eq!(input.r#ref.as_deref(), Some("ChildInput"));
    assert_eq!(input.rq, None);
}

#[test]
fn custom_scalars() {
    let schema = schema(include_str!("fixtures/custom.graphql"));

    let unresolved = convert(&schema, &Options::<Minified>::default());
    assert_eq!(
        field(&unresolved.document, "Query", "date").t,
        Some(JtdType::Unknown)
    );
    assert!(matches!(
        unresolved.warnings.as_slice(),
        [ConversionWarning::UnknownScalar { scalar, .. }] if scalar == "GQLTDate"
    ));

    let options = Options::default().with_custom_scalar_resolver(|field, _scalar, _current| {
        (field == "date").then_some(JtdType::Timestamp)
    });
    let resolved = to_minified_document(&schema, &options);
    assert_eq!(
        serde_json::to_value(field(&resolved, "Query", "date")).unwrap(),
        json!({ "t": "ts" })
    );
}

#[test]
fn scalar_post_processor() {
    let options = Options::<Minified>::default().with_scalar_post_processor(
        |def: &JtdMin, name, _ty, _current, is_scalar| {
            if !is_scalar || name != "parentId" {
                return None;
            }
            let mut def = def.clone();
            def.md.get_or_insert_with(Default::default).n = Some("parent".to_string());
            Some(def)
        },
    );
    let document = to_minified_document(
        &schema(include_str!("fixtures/cyclic.graphql")),
        &options,
    );

    let parent_id = &document.def["Child"].p.as_ref().unwrap()["parentId"];
    let md = parent_id.md.as_ref().unwrap();
    assert_eq!(md.n.as_deref(), Some("parent"));
    assert_eq!(md.id, Some(true));
}

#[test]
fn cyclic_types() {
    let document = to_minified_document(
        &schema(include_str!("fixtures/cyclic.graphql")),
        &Options::default(),
    );

    let child = &document.def["Child"].p.as_ref().unwrap()["parent"];
    assert_eq!(child.r#ref.as_deref(), Some("Parent"));
    assert_eq!(document.def.len(), 6);
}

#[test]
fn both_encodings_agree_on_layout() {
    let schema = demo();
    let verbose = graphql_jtd::to_document(&schema, &Options::default());
    let minified = to_minified_document(&schema, &Options::default());

    assert_eq!(
        verbose.definitions.keys().collect::<Vec<_>>(),
        minified.def.keys().collect::<Vec<_>>()
    );
    assert_eq!(
        verbose.optional_properties.keys().collect::<Vec<_>>(),
        minified.p.keys().collect::<Vec<_>>()
    );
    assert_eq!(verbose.metadata, minified.md);
}
