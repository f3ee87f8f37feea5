//! Template builder and rendering
//!
//! A [`Template`] owns a definition plus the per-key hooks and renders by
//! walking the key sequence in order: bind, validate, transform, append.
//! Rendering fails fast on the first rejected value and returns no
//! partial output.

use weft_domain::{Key, TemplateDefinition, TemplateError, TemplateResult};

use crate::bindings::Bindings;
use crate::registry::{HookRegistry, Transformer, Validator};

/// A reusable template with per-key validators and transformers.
///
/// Configuration is fluent and consuming: `validate` and `transfer`
/// return the builder with the map entry overwritten, so a configured
/// template is immutable and render calls observe only the most recent
/// configuration. Render takes `&self` and is independent across calls.
#[derive(Debug)]
pub struct Template {
    definition: TemplateDefinition,
    hooks: HookRegistry,
}

impl Template {
    /// Creates a template from a definition, with every key defaulting to
    /// the always-true validator and the identity transformer.
    #[must_use]
    pub fn new(definition: TemplateDefinition) -> Self {
        let hooks = HookRegistry::for_keys(definition.keys());
        Self { definition, hooks }
    }

    /// Returns the underlying definition.
    #[must_use]
    pub fn definition(&self) -> &TemplateDefinition {
        &self.definition
    }

    /// Overwrites the validator for each given key (last write wins; a
    /// later call for the same key replaces the earlier one). Entries for
    /// keys the template never references are accepted but never
    /// consulted.
    #[must_use]
    pub fn validate<K, I>(mut self, validators: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, Validator)>,
    {
        for (key, validator) in validators {
            self.hooks.set_validator(key.into(), validator);
        }
        self
    }

    /// Overwrites the transformer for each given key, with the same
    /// last-write-wins and inert-unknown-key semantics as
    /// [`Template::validate`]. A transformer runs after validation
    /// succeeds and always receives the raw bound value, once per
    /// occurrence of its key.
    #[must_use]
    pub fn transfer<K, I>(mut self, transformers: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, Transformer)>,
    {
        for (key, transformer) in transformers {
            self.hooks.set_transformer(key.into(), transformer);
        }
        self
    }

    /// Renders the template against the given bindings.
    ///
    /// For each key in occurrence order: bind the raw value (missing
    /// bindings yield [`weft_domain::Value::Absent`]), run the validator, run the
    /// transformer on the raw value, and append the transformed value's
    /// canonical text followed by the next fragment. A key appearing more
    /// than once is bound, validated, and transformed independently at
    /// each occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Validation`] on the first rejected value,
    /// aborting the whole call with no partial output.
    pub fn render(&self, bindings: &Bindings) -> TemplateResult<String> {
        let fragments = self.definition.fragments();
        let mut output = fragments[0].clone();

        for (position, key) in self.definition.keys().iter().enumerate() {
            let raw = bindings.get(key);

            let validate = self.hooks.validator_for(key);
            if !validate(&raw) {
                return Err(TemplateError::Validation {
                    key: key.clone(),
                    value: raw,
                });
            }

            let transform = self.hooks.transformer_for(key);
            output.push_str(&transform(&raw).to_string());
            output.push_str(&fragments[position + 1]);
        }

        Ok(output)
    }

    /// Returns the distinct template keys that would bind to
    /// [`weft_domain::Value::Absent`] under the given bindings, without rendering.
    /// Useful as a pre-flight check before a render call.
    #[must_use]
    pub fn unbound_keys(&self, bindings: &Bindings) -> Vec<Key> {
        let mut unbound: Vec<Key> = Vec::new();
        for key in self.definition.keys() {
            if bindings.get(key).is_absent() && !unbound.contains(key) {
                unbound.push(key.clone());
            }
        }
        unbound
    }
}
