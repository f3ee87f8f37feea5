//! Per-key validator and transformer registry
//!
//! Every template key is seeded with a shared always-true validator and a
//! shared identity transformer when the registry is created, so render
//! never special-cases unconfigured keys. Reconfiguring a key overwrites
//! its entry (last write wins).

use std::collections::HashMap;
use std::sync::Arc;

use weft_domain::{Key, Value};

/// A per-key predicate gating whether a bound value may be rendered.
pub type Validator = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A per-key function reshaping a bound value before stringification.
pub type Transformer = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// Wraps a predicate as a [`Validator`].
#[must_use]
pub fn validator<F>(predicate: F) -> Validator
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Arc::new(predicate)
}

/// Wraps a function as a [`Transformer`].
#[must_use]
pub fn transformer<F>(function: F) -> Transformer
where
    F: Fn(&Value) -> Value + Send + Sync + 'static,
{
    Arc::new(function)
}

/// The validator and transformer maps owned by a template.
pub(crate) struct HookRegistry {
    validators: HashMap<Key, Validator>,
    transformers: HashMap<Key, Transformer>,
    permissive: Validator,
    identity: Transformer,
}

impl HookRegistry {
    /// Creates a registry seeding every given key with the permissive
    /// validator and the identity transformer.
    pub(crate) fn for_keys(keys: &[Key]) -> Self {
        let permissive: Validator = Arc::new(|_: &Value| true);
        let identity: Transformer = Arc::new(|value: &Value| value.clone());

        let mut validators = HashMap::new();
        let mut transformers = HashMap::new();
        for key in keys {
            validators.insert(key.clone(), Arc::clone(&permissive));
            transformers.insert(key.clone(), Arc::clone(&identity));
        }

        Self {
            validators,
            transformers,
            permissive,
            identity,
        }
    }

    /// Overwrites the validator for a key. Keys outside the template's
    /// key sequence are stored but never consulted.
    pub(crate) fn set_validator(&mut self, key: Key, validator: Validator) {
        self.validators.insert(key, validator);
    }

    /// Overwrites the transformer for a key, with the same inert-unknown
    /// tolerance as [`HookRegistry::set_validator`].
    pub(crate) fn set_transformer(&mut self, key: Key, transformer: Transformer) {
        self.transformers.insert(key, transformer);
    }

    /// Returns the current validator for a key.
    pub(crate) fn validator_for(&self, key: &Key) -> &(dyn Fn(&Value) -> bool + Send + Sync) {
        self.validators
            .get(key)
            .unwrap_or(&self.permissive)
            .as_ref()
    }

    /// Returns the current transformer for a key.
    pub(crate) fn transformer_for(&self, key: &Key) -> &(dyn Fn(&Value) -> Value + Send + Sync) {
        self.transformers
            .get(key)
            .unwrap_or(&self.identity)
            .as_ref()
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRegistry")
            .field("validators", &self.validators.keys())
            .field("transformers", &self.transformers.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_permissive_and_identity() {
        let keys = [Key::name("a"), Key::index(0)];
        let registry = HookRegistry::for_keys(&keys);

        assert!(registry.validator_for(&Key::name("a"))(&Value::Int(-1)));
        let raw = Value::from("unchanged");
        assert_eq!(registry.transformer_for(&Key::index(0))(&raw), raw);
    }

    #[test]
    fn test_overwrite_last_wins() {
        let keys = [Key::name("age")];
        let mut registry = HookRegistry::for_keys(&keys);

        registry.set_validator(Key::name("age"), validator(|_| false));
        registry.set_validator(
            Key::name("age"),
            validator(|value| value.as_i64().is_some_and(|n| n >= 0)),
        );

        assert!(registry.validator_for(&Key::name("age"))(&Value::Int(1)));
        assert!(!registry.validator_for(&Key::name("age"))(&Value::Int(-1)));
    }

    #[test]
    fn test_unknown_key_falls_back_to_defaults() {
        let registry = HookRegistry::for_keys(&[]);
        assert!(registry.validator_for(&Key::name("ghost"))(&Value::Absent));
        assert_eq!(
            registry.transformer_for(&Key::name("ghost"))(&Value::Int(3)),
            Value::Int(3)
        );
    }
}
