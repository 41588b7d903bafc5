use oas_spec::{
    Composed, Schema, SchemaOrArray, SchemaOrBool, SchemaProps, SpecError, StringOrArray,
    MAX_DEPTH,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

const PET_SCHEMA: &str = r##"{
    "$ref": "#/definitions/Base",
    "description": "A pet in the store",
    "type": "object",
    "title": "Pet",
    "required": ["id", "name"],
    "allOf": [{"$ref": "#/definitions/Animal"}],
    "properties": {
        "id": {"type": "integer", "format": "int64", "minimum": 1},
        "name": {"type": "string", "maxLength": 64, "pattern": "^[a-z]+$"},
        "weight": {"type": "number", "maximum": 99.5, "exclusiveMaximum": true},
        "tags": {"type": "array", "items": {"type": "string"}, "uniqueItems": true},
        "meta": {"type": "object", "additionalProperties": {"type": "string"}}
    },
    "additionalProperties": false,
    "discriminator": "petType",
    "readOnly": true,
    "example": {"id": 7, "name": "rex"},
    "x-go-name": "Pet",
    "x-nullable": false
}"##;

#[test]
fn test_decode_pet_schema() {
    let schema = Schema::from_json_str(PET_SCHEMA).unwrap();
    assert_eq!(schema.reference.as_str(), Some("#/definitions/Base"));
    assert!(schema.is_type("object"));
    assert_eq!(
        schema.props.required,
        Some(vec!["id".to_string(), "name".to_string()])
    );
    assert_eq!(
        schema.props.properties.keys().collect::<Vec<_>>(),
        vec!["id", "name", "weight", "tags", "meta"]
    );
    assert_eq!(
        schema.props.additional_properties,
        Some(SchemaOrBool::Bool(false))
    );
    assert_eq!(schema.swagger.discriminator, "petType");
    assert!(schema.swagger.read_only);
    assert_eq!(schema.extensions.get_string("x-go-name"), Some("Pet"));
    assert_eq!(schema.extensions.get_bool("x-nullable"), Some(false));

    let tags = &schema.props.properties["tags"];
    match &tags.props.items {
        Some(SchemaOrArray::Single(item)) => assert!(item.is_type("string")),
        other => panic!("unexpected items: {other:?}"),
    }
    let meta = &schema.props.properties["meta"];
    assert!(matches!(
        meta.props.additional_properties,
        Some(SchemaOrBool::Schema(_))
    ));
}

#[test]
fn test_pet_schema_round_trip() {
    let schema = Schema::from_json_str(PET_SCHEMA).unwrap();
    let expected: Value = serde_json::from_str(PET_SCHEMA).unwrap();
    assert_eq!(schema.to_json_value().unwrap(), expected);

    let once = schema.to_json_string().unwrap();
    let twice = Schema::from_json_str(&once)
        .unwrap()
        .to_json_string()
        .unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_additional_properties_round_trip() {
    let absent = Schema::from_json_str(r#"{"type":"object"}"#).unwrap();
    assert_eq!(absent.props.additional_properties, None);
    assert_eq!(absent.to_json_string().unwrap(), r#"{"type":"object"}"#);

    let closed = Schema::from_json_str(r#"{"type":"object","additionalProperties":false}"#).unwrap();
    assert_eq!(
        closed.props.additional_properties,
        Some(SchemaOrBool::Bool(false))
    );
    assert_eq!(
        closed.to_json_string().unwrap(),
        r#"{"type":"object","additionalProperties":false}"#
    );
}

#[test]
fn test_numbers_keep_their_form() {
    let text = r#"{"maximum":1.5,"minimum":0,"maxLength":0,"multipleOf":0.25}"#;
    let schema = Schema::from_json_str(text).unwrap();
    assert_eq!(schema.props.minimum.as_ref().and_then(|n| n.as_i64()), Some(0));
    assert_eq!(schema.props.maximum.as_ref().and_then(|n| n.as_f64()), Some(1.5));
    assert_eq!(schema.props.max_length, Some(0));
    assert_eq!(schema.to_json_string().unwrap(), text);
}

#[test]
fn test_type_array_form_is_kept() {
    let schema = Schema::from_json_str(r#"{"type":["string","null"]}"#).unwrap();
    assert_eq!(
        schema.props.schema_type,
        Some(StringOrArray::Array(vec!["string".into(), "null".into()]))
    );
    assert!(schema.is_type("null"));
    assert_eq!(
        schema.to_json_value().unwrap(),
        json!({"type": ["string", "null"]})
    );
}

#[test]
fn test_tuple_items() {
    let schema =
        Schema::from_json_str(r#"{"items":[{"type":"string"},{"type":"integer"}],"additionalItems":true}"#)
            .unwrap();
    match &schema.props.items {
        Some(items @ SchemaOrArray::Array(_)) => assert_eq!(items.len(), 2),
        other => panic!("unexpected items: {other:?}"),
    }
    assert_eq!(schema.props.additional_items, Some(SchemaOrBool::Bool(true)));
}

#[test]
fn test_unknown_keyword_rejected() {
    let err = Schema::from_json_str(r#"{"type":"string","maxlength":3}"#).unwrap_err();
    assert!(matches!(
        err,
        SpecError::UnknownField { entity: "Schema", ref key } if key == "maxlength"
    ));
}

#[test]
fn test_nested_unknown_keyword_rejected() {
    let err =
        Schema::from_json_str(r#"{"properties":{"id":{"type":"integer","x_id":1}}}"#).unwrap_err();
    assert!(matches!(
        err,
        SpecError::UnknownField { entity: "Schema", ref key } if key == "x_id"
    ));
}

#[test]
fn test_bad_additional_properties_shape() {
    let err = Schema::from_json_str(r#"{"additionalProperties":"yes"}"#).unwrap_err();
    match err {
        SpecError::InvalidSchemaShape { path, union, .. } => {
            assert_eq!(path, "/additionalProperties");
            assert_eq!(union, "SchemaOrBool");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_entities_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Schema>();
    assert_send_sync::<oas_spec::Operation>();
    assert_send_sync::<oas_spec::Responses>();
    assert_send_sync::<oas_spec::Parameter>();
    assert_send_sync::<oas_spec::Header>();
}

fn nested_text(opening: &str, levels: usize) -> String {
    format!(
        "{}{{}}{}",
        opening.repeat(levels - 1),
        "}".repeat((levels - 1) * opening.matches('{').count())
    )
}

#[test]
fn test_nesting_up_to_the_limit_decodes() {
    let text = nested_text(r#"{"not":"#, MAX_DEPTH);
    let mut schema = Schema::from_json_str(&text).unwrap();
    let mut levels = 1;
    while let Some(inner) = schema.props.not.take() {
        schema = *inner;
        levels += 1;
    }
    assert_eq!(levels, MAX_DEPTH);
}

#[test]
fn test_nesting_past_the_limit_is_an_error() {
    let text = nested_text(r#"{"not":"#, MAX_DEPTH + 8);
    match Schema::from_json_str(&text).unwrap_err() {
        SpecError::MalformedJson { path, detail } => {
            assert_eq!(path, "/not".repeat(MAX_DEPTH));
            assert!(detail.contains("nested deeper than"), "{detail}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_deep_properties_chain_is_an_error() {
    let text = nested_text(r#"{"properties":{"a":"#, 63);
    match Schema::from_json_str(&text).unwrap_err() {
        SpecError::MalformedJson { path, .. } => {
            assert_eq!(path, "/properties/a".repeat(MAX_DEPTH));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_deep_value_built_in_memory_is_an_error() {
    let mut value = json!({});
    for _ in 0..200 {
        value = json!({ "not": value });
    }
    let err = Schema::from_json_value(value).unwrap_err();
    assert!(matches!(err, SpecError::MalformedJson { .. }));
}

#[test]
fn test_encoding_too_deep_schema_is_an_error() {
    let mut schema = Schema::of_type("string");
    for _ in 0..(MAX_DEPTH + 8) {
        schema = Schema {
            props: SchemaProps {
                not: Some(Box::new(schema)),
                ..SchemaProps::default()
            },
            ..Schema::default()
        };
    }
    assert!(matches!(
        schema.to_json_value().unwrap_err(),
        SpecError::MalformedJson { .. }
    ));
}
