//! Integration test to verify the workspace compiles correctly.

#![allow(clippy::no_effect_underscore_binding)]

#[test]
fn domain_crate_compiles() {
    // Verify domain types are accessible
    let _key = weft_domain::Key::name("text");
    let _value = weft_domain::Value::from(42);
    let _parts = weft_domain::LiteralParts::new();
    let _error = weft_domain::TemplateError::Shape {
        fragments: 0,
        keys: 0,
    };
}

#[test]
fn template_crate_compiles() {
    // Verify the engine surface is accessible
    let template = weft_template::t!("Hello, " {text} "!");
    let _unbound = template.unbound_keys(&weft_template::Bindings::new());
}
