//! Serialization and Reconstruction Laws
//!
//! **Invariant**: rebuilding a property from its serialized form (directly,
//! via the value form, or via the text form) yields a property with an
//! identical serialized form and independent state.

use crate::common::*;
use proptest::prelude::*;
use std::sync::Arc;

#[test]
fn test_default_text_form() {
    let property = PropertyObject::with_registries(fresh_registries());
    assert_eq!(
        property.to_string(),
        r#"{"display":"DEFAULT","editable":false,"key":null,"logs":[],"validator":"DEFAULT","value":null}"#
    );
}

#[test]
fn test_text_form_contains_logs() {
    let mut property = PropertyObject::with_registries(fresh_registries());
    property.log("hello");
    let parsed: serde_json::Value = serde_json::from_str(&property.to_string()).unwrap();
    assert_eq!(parsed["logs"][0]["message"], "hello");
    assert!(parsed["logs"][0]["timestamp"].is_u64());
}

#[test]
fn test_rebuild_from_value_form() {
    let registries = fresh_registries();
    let source = json(serde_json::json!({
        "key": "k",
        "value": [1, 2],
        "validator": "is.array",
        "display": "DEFAULT",
        "editable": false,
        "logs": [{"message": "restored", "timestamp": 1234}],
    }));

    let property = PropertyObject::from_value_in(Arc::clone(&registries), &source).unwrap();
    assert_eq!(property.key(), Value::from("k"));
    assert_eq!(property.validator(), "is.array");
    assert!(!property.editable());
    assert_eq!(
        property.logs(),
        &[LogEntry::at(Timestamp::from_millis(1234), "restored")]
    );
    assert_eq!(property.serialize().to_value(), source);
}

#[test]
fn test_rebuild_value_rejected_by_own_validator() {
    // Stored values are not re-checked against the validator they end up with.
    let source = json(serde_json::json!({
        "key": null,
        "value": true,
        "validator": "is.not.boolean",
        "display": "DEFAULT",
        "editable": true,
        "logs": [],
    }));
    let property = PropertyObject::from_value_in(fresh_registries(), &source).unwrap();
    assert_eq!(property.value(), Value::Bool(true));
}

#[test]
fn test_rebuild_missing_field() {
    let source = json(serde_json::json!({
        "key": null,
        "value": null,
        "validator": "DEFAULT",
        "display": "DEFAULT",
        "editable": false,
    }));
    let err = PropertyObject::from_value_in(fresh_registries(), &source).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_rebuild_unregistered_display() {
    let registries = fresh_registries();
    register_key_string(&registries);
    let mut property = unlocked(&registries);
    property.set_display("GET_KEY_STRING").unwrap();

    let err = PropertyObject::from_json_str_in(fresh_registries(), &property.to_string())
        .unwrap_err();
    assert_eq!(err, Error::not_found(EntryKind::Display, "GET_KEY_STRING"));
}

#[test]
fn test_rebuild_malformed_text() {
    for text in ["", "not json", "[1, 2]", r#"{"key": 1}"#] {
        let err = PropertyObject::from_json_str_in(fresh_registries(), text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "input {:?}", text);
    }
}

#[test]
fn test_nan_value_round_trips() {
    let registries = fresh_registries();
    let mut property = unlocked(&registries);
    property.set_validator("is.nan").unwrap();
    property.set_value(f64::NAN).unwrap();

    let snapshot = property.serialize();
    assert_eq!(snapshot, property.serialize());

    let rebuilt = PropertyObject::from_serialized_in(Arc::clone(&registries), &snapshot).unwrap();
    assert_eq!(rebuilt.serialize(), snapshot);

    let copy = PropertyObject::from_property(&property).unwrap();
    assert_eq!(copy.to_string(), property.to_string());
    assert!(property.to_string().contains(r#""value":null"#));
}

#[test]
fn test_copy_constructor_shares_registries() {
    let registries = fresh_registries();
    let original = unlocked(&registries);
    let copy = PropertyObject::from_property(&original).unwrap();
    assert!(Arc::ptr_eq(copy.registries(), &registries));
}

#[test]
fn test_copy_does_not_alias_logs() {
    let registries = fresh_registries();
    let mut original = unlocked(&registries);
    original.log("first");

    let mut copy = PropertyObject::from_property(&original).unwrap();
    copy.log("second");
    original.log("other");

    assert_eq!(original.logs()[1].message, "other");
    assert_eq!(copy.logs()[1].message, "second");
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e9f64..1.0e9).prop_map(Value::Float),
        Just(Value::Float(f64::NAN)),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4).prop_map(Value::Object),
        ]
    })
}

proptest! {
    /// Serialize then rebuild is the identity on the serialized form.
    #[test]
    fn prop_rebuild_preserves_serialized_form(
        key in arb_value(),
        value in arb_value(),
        editable in any::<bool>(),
        messages in prop::collection::vec("[a-z]{0,6}", 0..4),
    ) {
        let registries = fresh_registries();
        let mut property = unlocked(&registries);
        property.set_key(key).unwrap();
        property.set_value(value).unwrap();
        for message in messages {
            property.log(message);
        }
        property.set_editable(editable);

        let from_snapshot =
            PropertyObject::from_serialized_in(Arc::clone(&registries), &property.serialize())
                .unwrap();
        prop_assert_eq!(from_snapshot.serialize(), property.serialize());

        let from_text =
            PropertyObject::from_json_str_in(Arc::clone(&registries), &property.to_string())
                .unwrap();
        prop_assert_eq!(from_text.to_string(), property.to_string());
    }

    /// Any finite float survives the text form unchanged.
    #[test]
    fn prop_float_value_survives_text_form(x in -1.0e15f64..1.0e15) {
        let registries = fresh_registries();
        let mut property = unlocked(&registries);
        property.set_value(x).unwrap();

        let rebuilt =
            PropertyObject::from_json_str_in(Arc::clone(&registries), &property.to_string())
                .unwrap();
        prop_assert_eq!(rebuilt.value(), Value::Float(x));
    }
}
