//! End-to-end usage scenarios
//!
//! Each test walks through a realistic sequence of calls a host would make.

use crate::common::*;
use std::sync::Arc;

/// A counter that only accepts increments of one.
#[test]
fn test_increment_only_counter() {
    let registries = fresh_registries();
    register_inc(&registries);

    let mut counter = unlocked(&registries);
    counter.set_value(1).unwrap();
    counter.set_validator("INC").unwrap();

    counter.set_value(2).unwrap();
    assert_eq!(counter.value(), Value::Int(2));

    let err = counter.set_value(4).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValidationFailed);
    assert_eq!(counter.value(), Value::Int(2));

    counter.set_value(3).unwrap();
    assert_eq!(counter.value(), Value::Int(3));
}

/// The `is.not.boolean` library validator rejects both booleans.
#[test]
fn test_not_boolean_library_validator() {
    let registries = fresh_registries();
    let mut property = unlocked(&registries);
    property.set_validator("is.not.boolean").unwrap();

    assert!(property.set_value(true).is_err());
    assert!(property.set_value(false).is_err());
    assert_eq!(property.value(), Value::Null);

    property.set_value(1).unwrap();
    property.set_value("hello").unwrap();
    assert_eq!(property.value(), Value::from("hello"));
}

/// Logging works on a locked property and keeps order.
#[test]
fn test_audit_log_on_locked_property() {
    let mut property = PropertyObject::with_registries(fresh_registries());
    assert!(!property.editable());

    let before = Timestamp::now();
    property.log("hello");
    property.log("world");
    let after = Timestamp::now();

    let logs = property.logs();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].message, "hello");
    assert_eq!(logs[1].message, "world");
    assert!(logs[0].timestamp >= before);
    assert!(logs[1].timestamp >= logs[0].timestamp);
    assert!(logs[1].timestamp <= after);
}

/// A custom display returning the key as text.
#[test]
fn test_key_string_display() {
    let registries = fresh_registries();
    register_key_string(&registries);

    let mut property = unlocked(&registries);
    property.set_key(json(serde_json::json!({"id": 7}))).unwrap();
    property.set_display("GET_KEY_STRING").unwrap();

    assert_eq!(property.run_display().unwrap(), Value::from(r#"{"id":7}"#));
}

/// The default display mirrors the serialized form.
#[test]
fn test_default_display_is_serialized_form() {
    let registries = fresh_registries();
    let mut property = unlocked(&registries);
    property.set_key("name").unwrap();
    property.set_value(json(serde_json::json!([1, 2, 3]))).unwrap();
    property.log("created");

    assert_eq!(
        property.run_display().unwrap(),
        property.serialize().to_value()
    );
}

/// Lock a configured property, ship it as text, and rebuild it elsewhere.
#[test]
fn test_configure_lock_ship_rebuild() {
    let registries = fresh_registries();
    register_inc(&registries);
    register_key_string(&registries);

    let mut property = unlocked(&registries);
    property.set_key("visits").unwrap();
    property.set_value(10).unwrap();
    property.set_validator("INC").unwrap();
    property.set_display("GET_KEY_STRING").unwrap();
    property.log("configured");
    property.set_editable(false);

    let text = property.to_string();
    let mut rebuilt = PropertyObject::from_json_str_in(Arc::clone(&registries), &text).unwrap();

    assert_eq!(rebuilt.to_string(), text);
    assert!(rebuilt.set_value(11).is_err());

    rebuilt.set_editable(true);
    rebuilt.set_value(11).unwrap();
    assert_eq!(rebuilt.run_display().unwrap(), Value::from(r#""visits""#));
    assert_eq!(property.value(), Value::Int(10));
}

/// Field names drive the dynamic accessors.
#[test]
fn test_dynamic_field_access() {
    let registries = fresh_registries();
    let mut property = PropertyObject::with_registries(registries);

    let editable: Field = "editable".parse().unwrap();
    property.assign(editable, Value::Bool(true)).unwrap();

    for (name, value) in [
        ("key", Value::from("k")),
        ("value", Value::Int(5)),
        ("validator", Value::from("is.number")),
        ("display", Value::from("DEFAULT")),
    ] {
        let field: Field = name.parse().unwrap();
        property.assign(field, value.clone()).unwrap();
        assert_eq!(property.get(field), value);
    }

    assert_eq!(
        property.assign(Field::Value, Value::from("x")).unwrap_err().kind(),
        ErrorKind::ValidationFailed
    );
    assert_eq!(
        property.assign(Field::Logs, Value::Array(vec![])).unwrap_err().kind(),
        ErrorKind::ReadOnly
    );
}

/// Registries can be configured from TOML before properties are created.
#[test]
fn test_registries_from_toml_config() {
    let config = RegistryConfig::from_toml_str(
        r#"
import_predicates = true
predicate_prefix = "check"
"#,
    )
    .unwrap();
    let registries = Arc::new(Registries::with_config(&config).unwrap());

    let mut property = unlocked(&registries);
    assert_eq!(
        property.set_validator("is.string").unwrap_err().kind(),
        ErrorKind::NotFound
    );
    property.set_validator("check.string").unwrap();
    assert!(property.set_value(1).is_err());
    property.set_value("ok").unwrap();
}
