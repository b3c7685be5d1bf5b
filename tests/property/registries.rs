//! Registry behavior
//!
//! **Invariant**: registry names are unique and permanent; lookups never
//! observe a partially registered entry.

use crate::common::*;
use std::sync::Arc;
use std::thread;

#[test]
fn test_duplicate_validator_rejected() {
    let registries = fresh_registries();
    register_inc(&registries);
    let err = registries
        .validators()
        .register_validator("INC", |_, _| true)
        .unwrap_err();
    assert_eq!(err.to_string(), "The given validator name already exists: INC");
}

#[test]
fn test_default_cannot_be_replaced() {
    let registries = fresh_registries();
    assert_eq!(
        registries
            .validators()
            .register_validator("DEFAULT", |_, _| false)
            .unwrap_err()
            .kind(),
        ErrorKind::AlreadyExists
    );
    assert_eq!(
        registries
            .displays()
            .register_display("DEFAULT", |_| Value::Null)
            .unwrap_err()
            .kind(),
        ErrorKind::AlreadyExists
    );
}

#[test]
fn test_discovery_views() {
    let registries = fresh_registries();
    register_key_string(&registries);

    let displays = registries.displays().displays();
    assert_eq!(displays.len(), 2);
    assert_eq!(displays.get("GET_KEY_STRING").map(String::as_str), Some("GET_KEY_STRING"));

    let validators = registries.validators().validators();
    assert_eq!(validators.get("is.all.even").map(String::as_str), Some("is.all.even"));
}

#[test]
fn test_tree_registration_prefixes_names() {
    let registries = fresh_registries();
    let tree = RegistrationTree::branch()
        .with_leaf("positive", Validator::from_value_predicate(|v| {
            v.as_int().is_some_and(|i| i > 0)
        }))
        .with(
            "range",
            RegistrationTree::branch()
                .with_leaf("percent", Validator::from_value_predicate(|v| {
                    v.as_int().is_some_and(|i| (0..=100).contains(&i))
                }))
                .with("note", RegistrationTree::Data(Value::from("ignored"))),
        );

    let added = registries
        .validators()
        .register_validators_from_tree("app", tree)
        .unwrap();
    assert_eq!(added, 2);

    let mut property = unlocked(&registries);
    property.set_validator("app.range.percent").unwrap();
    property.set_value(50).unwrap();
    assert!(property.set_value(101).is_err());
    assert!(!registries.validators().contains("app.range.note"));
}

#[test]
fn test_tree_registration_stops_at_conflict() {
    let registries = fresh_registries();
    let tree = RegistrationTree::branch()
        .with_leaf("first", Validator::accept_all())
        .with_leaf("string", Validator::accept_all())
        .with_leaf("third", Validator::accept_all());

    let err = registries
        .validators()
        .register_validators_from_tree("is", tree)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert!(registries.validators().contains("is.first"));
    assert!(!registries.validators().contains("is.third"));
}

#[test]
fn test_quantified_library_forms() {
    let registries = fresh_registries();
    let mut property = unlocked(&registries);

    property.set_validator("is.all.number").unwrap();
    property.set_value(json(serde_json::json!([1, 2.5, 3]))).unwrap();
    assert!(property.set_value(json(serde_json::json!([1, "x"]))).is_err());

    property.set_validator("is.any.string").unwrap();
    property.set_value(json(serde_json::json!([1, "x"]))).unwrap();
    assert!(property.set_value(json(serde_json::json!([1, 2]))).is_err());

    property.set_validator("is.not.empty").unwrap();
    assert!(property.set_value("").is_err());
    property.set_value("filled").unwrap();
}

#[test]
fn test_isolated_registries_do_not_share_names() {
    let a = fresh_registries();
    let b = fresh_registries();
    register_inc(&a);
    assert!(a.validators().contains("INC"));
    assert!(!b.validators().contains("INC"));
}

#[test]
fn test_concurrent_registration_is_unique() {
    let registries = fresh_registries();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registries = Arc::clone(&registries);
            thread::spawn(move || {
                registries
                    .validators()
                    .register_validator("RACE", |_, _| true)
                    .is_ok()
            })
        })
        .collect();

    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|won| *won)
        .count();
    assert_eq!(winners, 1);
}

#[test]
fn test_validator_may_consult_registries() {
    let registries = fresh_registries();
    registries
        .validators()
        .register_validator("DISPLAYABLE", |subject, _| {
            subject.registries().displays().contains(subject.display())
        })
        .unwrap();
    let mut property = unlocked(&registries);
    property.set_validator("DISPLAYABLE").unwrap();
    property.set_value(1).unwrap();
}

#[test]
fn test_config_toml_roundtrip() {
    let config = RegistryConfig {
        import_predicates: false,
        predicate_prefix: "has".to_string(),
    };
    let text = config.to_toml_string().unwrap();
    assert_eq!(RegistryConfig::from_toml_str(&text).unwrap(), config);

    let registries = Registries::with_config(&config).unwrap();
    assert_eq!(registries.validators().len(), 1);
}
