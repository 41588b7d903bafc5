use oas_spec::{Composed, Extensions, Operation, Response, Responses, Schema, SpecError};
use proptest::prelude::*;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9 ]{0,16}".prop_map(Value::String),
    ]
}

fn json_value() -> impl Strategy<Value = Value> {
    json_leaf().prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn extension_entries() -> impl Strategy<Value = BTreeMap<String, Value>> {
    prop::collection::btree_map("x-[a-zA-Z0-9_-]{0,10}", json_value(), 0..6)
}

proptest! {
    /// Every `x-` entry lands in the bag and is written back unchanged.
    #[test]
    fn extensions_survive_operation_round_trip(
        entries in extension_entries(),
        summary in "[a-zA-Z ]{0,20}",
    ) {
        let mut object = Map::new();
        object.insert("summary".to_string(), json!(summary));
        for (key, value) in &entries {
            object.insert(key.clone(), value.clone());
        }
        let input = Value::Object(object);

        let op = Operation::from_json_value(input.clone()).unwrap();
        prop_assert_eq!(op.extensions.len(), entries.len());
        for (key, value) in &entries {
            prop_assert_eq!(op.extensions.get(key), Some(value));
        }
        prop_assert_eq!(&op.props.summary, &summary);

        // Empty summary is omitted on output.
        let mut expected = input;
        if summary.is_empty() {
            if let Value::Object(map) = &mut expected {
                map.remove("summary");
            }
        }
        prop_assert_eq!(op.to_json_value().unwrap(), expected);
    }

    /// Keys that are neither fields nor `x-` prefixed never decode silently.
    #[test]
    fn unprefixed_unknown_keys_rejected(key in "(Q|X-|_)[a-zA-Z0-9]{0,8}", value in json_leaf()) {
        let mut object = Map::new();
        object.insert(key.clone(), value);
        let err = Schema::from_json_value(Value::Object(object)).unwrap_err();
        let rejected = matches!(err, SpecError::UnknownField { entity: "Schema", key: ref k } if *k == key);
        prop_assert!(rejected);
    }

    /// Only `x-` prefixed keys are accepted by the bag.
    #[test]
    fn bag_accepts_only_prefixed_keys(key in "[a-zA-Z-]{0,6}", value in json_leaf()) {
        let accepted = Extensions::new().add(key.clone(), value).is_ok();
        prop_assert_eq!(accepted, key.starts_with("x-"));
    }

    /// Status codes come back in ascending order whatever the input order.
    #[test]
    fn status_codes_written_ascending(codes in prop::collection::btree_set(100u16..600, 1..8)) {
        let mut object = Map::new();
        for code in codes.iter().rev() {
            object.insert(code.to_string(), json!({"description": format!("status {code}")}));
        }
        let responses = Responses::from_json_value(Value::Object(object)).unwrap();
        let written = responses.to_json_value().unwrap();
        let keys: Vec<String> = written.as_object().unwrap().keys().cloned().collect();
        let expected: Vec<String> = codes.iter().map(u16::to_string).collect();
        prop_assert_eq!(keys, expected);
        for code in &codes {
            prop_assert_eq!(
                responses.get(*code).map(|r| r.props.description.clone()),
                Some(format!("status {code}"))
            );
        }
    }

    /// Decoding what was encoded gives back the same value.
    #[test]
    fn response_reencode_is_stable(
        description in "[a-zA-Z ]{0,20}",
        reference in proptest::option::of("#/responses/[A-Za-z]{1,8}"),
        entries in extension_entries(),
    ) {
        let mut response = match reference {
            Some(uri) => Response::ref_to(uri),
            None => Response::default(),
        };
        response.props.description = description;
        for (key, value) in entries {
            response.extensions.add(key, value).unwrap();
        }

        let text = response.to_json_string().unwrap();
        let decoded = Response::from_json_str(&text).unwrap();
        prop_assert_eq!(&decoded, &response);
        prop_assert_eq!(decoded.to_json_string().unwrap(), text);
    }
}
