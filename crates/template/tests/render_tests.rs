//! End-to-end rendering scenarios for the template engine.

#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use weft_template::{Bindings, Key, TemplateError, Value, t, transformer, validator};

#[test]
fn test_hello_world() {
    let greeting = t!("Hello, " {text} "!");
    let output = greeting
        .render(&Bindings::new().named("text", "World"))
        .unwrap();
    assert_eq!(output, "Hello, World!");
}

#[test]
fn test_positional_and_named_keys() {
    let sum = t!("Sum of " {0} " and " {1} " is " {result} ".");
    let bindings = Bindings::new()
        .positional(2)
        .positional(3)
        .named("result", 5);
    assert_eq!(sum.render(&bindings).unwrap(), "Sum of 2 and 3 is 5.");
}

#[test]
fn test_multiple_named_keys() {
    let line = t!("Name: " {name} ", Age: " {age});
    let bindings = Bindings::new().named("name", "Alice").named("age", 30);
    assert_eq!(line.render(&bindings).unwrap(), "Name: Alice, Age: 30");
}

#[test]
fn test_age_validator_gate() {
    let age_line = t!("Age: " {age})
        .validate([("age", validator(|v| v.as_i64().is_some_and(|n| n >= 0)))]);

    assert_eq!(
        age_line.render(&Bindings::new().named("age", 25)).unwrap(),
        "Age: 25"
    );

    let rejected = age_line.render(&Bindings::new().named("age", -5));
    assert_eq!(
        rejected,
        Err(TemplateError::Validation {
            key: Key::name("age"),
            value: Value::Int(-5),
        })
    );
}

#[test]
fn test_transformer_after_validation() {
    let age_line = t!("Age: " {age})
        .validate([("age", validator(|v| v.as_i64().is_some_and(|n| n >= 0)))])
        .transfer([("age", transformer(|v| format!("{v} years old").into()))]);

    assert_eq!(
        age_line.render(&Bindings::new().named("age", 30)).unwrap(),
        "Age: 30 years old"
    );

    // Rejected before the transformer ever runs.
    let rejected = age_line.render(&Bindings::new().named("age", -10));
    assert_eq!(
        rejected,
        Err(TemplateError::Validation {
            key: Key::name("age"),
            value: Value::Int(-10),
        })
    );
}

#[test]
fn test_duplicate_key_independent_occurrences() {
    let doubled = t!("Value: " {value} ", Double: " {value})
        .validate([("value", validator(|v| v.as_i64().is_some_and(|n| n >= 0)))])
        .transfer([(
            "value",
            transformer(|v| Value::from(v.as_i64().unwrap_or(0) * 2)),
        )]);

    let output = doubled.render(&Bindings::new().named("value", 15)).unwrap();
    assert_eq!(output, "Value: 30, Double: 30");
}

#[test]
fn test_round_trip_identity_without_hooks() {
    let line = t!("a=" {0} " b=" {flag} " c=" {1} ".");
    let bindings = Bindings::new()
        .positional(1.5)
        .positional("text")
        .named("flag", true);
    assert_eq!(line.render(&bindings).unwrap(), "a=1.5 b=true c=text.");
}

#[test]
fn test_validation_error_message() {
    let age_line = t!("Age: " {age}).validate([("age", validator(|_| false))]);
    let error = age_line
        .render(&Bindings::new().named("age", -5))
        .unwrap_err();
    assert_eq!(error.to_string(), "invalid value for key \"age\": -5");
}

#[test]
fn test_missing_binding_is_permissive_by_default() {
    let greeting = t!("Hello, " {text} "!");
    assert_eq!(greeting.render(&Bindings::new()).unwrap(), "Hello, !");
    assert_eq!(
        greeting.unbound_keys(&Bindings::new()),
        vec![Key::name("text")]
    );
}

#[test]
fn test_reconfiguration_last_write_wins_across_renders() {
    let strict = t!("Age: " {age}).validate([("age", validator(|_| false))]);
    assert!(strict.render(&Bindings::new().named("age", 1)).is_err());

    let relaxed = strict.validate([("age", validator(|_| true))]);
    assert_eq!(
        relaxed.render(&Bindings::new().named("age", 1)).unwrap(),
        "Age: 1"
    );
    // No cross-call leakage: repeated renders are independent.
    assert_eq!(
        relaxed.render(&Bindings::new().named("age", 2)).unwrap(),
        "Age: 2"
    );
}
