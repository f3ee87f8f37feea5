//! Template shape
//!
//! A template is an ordered list of literal text fragments interleaved
//! with placeholder keys: `fragment[0], key[0], fragment[1], key[1], ...,
//! fragment[N-1]`. The shape invariant is
//! `fragments.len() == keys.len() + 1`.

use serde::{Deserialize, Serialize};

use crate::error::{TemplateError, TemplateResult};
use crate::key::Key;

/// The immutable record of a template's shape.
///
/// Built once from a fragment/key pair and never modified afterwards.
/// Fragments are opaque text; no placeholder syntax inside them is
/// interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TemplateShape")]
pub struct TemplateDefinition {
    fragments: Vec<String>,
    keys: Vec<Key>,
}

impl TemplateDefinition {
    /// Creates a definition from an ordered fragment list and key list.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Shape`] when
    /// `fragments.len() != keys.len() + 1`. Literal front ends maintain
    /// the invariant by construction (see [`LiteralParts`]); this path
    /// exists for programmatic construction.
    pub fn new(fragments: Vec<String>, keys: Vec<Key>) -> TemplateResult<Self> {
        if fragments.len() != keys.len() + 1 {
            return Err(TemplateError::Shape {
                fragments: fragments.len(),
                keys: keys.len(),
            });
        }
        Ok(Self { fragments, keys })
    }

    /// Returns the literal text fragments, in order.
    #[must_use]
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Returns the placeholder keys, in order of occurrence.
    #[must_use]
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Returns the distinct keys in first-appearance order.
    #[must_use]
    pub fn distinct_keys(&self) -> Vec<Key> {
        let mut distinct: Vec<Key> = Vec::new();
        for key in &self.keys {
            if !distinct.contains(key) {
                distinct.push(key.clone());
            }
        }
        distinct
    }

    /// Returns true if any key is a named key.
    #[must_use]
    pub fn has_named_keys(&self) -> bool {
        self.keys.iter().any(Key::is_named)
    }

    /// Returns the number of positional slots the template references:
    /// the highest positional index plus one, or zero if there are none.
    #[must_use]
    pub fn positional_arity(&self) -> usize {
        self.keys
            .iter()
            .filter_map(|key| match key {
                Key::Index(index) => Some(index + 1),
                Key::Name(_) => None,
            })
            .max()
            .unwrap_or(0)
    }
}

/// Raw fragment/key pair used to re-check the shape invariant when a
/// definition is deserialized.
#[derive(Debug, Deserialize)]
struct TemplateShape {
    fragments: Vec<String>,
    keys: Vec<Key>,
}

impl TryFrom<TemplateShape> for TemplateDefinition {
    type Error = TemplateError;

    fn try_from(shape: TemplateShape) -> TemplateResult<Self> {
        Self::new(shape.fragments, shape.keys)
    }
}

/// Accumulator for literal template front ends.
///
/// Maintains the alternation invariant structurally: an empty fragment is
/// inserted between adjacent keys and at either end, and adjacent
/// fragments are merged, so [`LiteralParts::finish`] is infallible.
#[derive(Debug, Clone, Default)]
pub struct LiteralParts {
    fragments: Vec<String>,
    keys: Vec<Key>,
}

impl LiteralParts {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a literal text fragment.
    pub fn fragment(&mut self, text: &str) {
        if self.fragments.len() > self.keys.len() {
            // Two fragments in a row: extend the pending one.
            if let Some(last) = self.fragments.last_mut() {
                last.push_str(text);
            }
        } else {
            self.fragments.push(text.to_string());
        }
    }

    /// Appends a placeholder key.
    pub fn key(&mut self, key: Key) {
        if self.fragments.len() == self.keys.len() {
            // Leading key or two keys in a row: pad with an empty fragment.
            self.fragments.push(String::new());
        }
        self.keys.push(key);
    }

    /// Finalizes the accumulated parts into a definition.
    #[must_use]
    pub fn finish(mut self) -> TemplateDefinition {
        if self.fragments.len() == self.keys.len() {
            // Trailing key or empty template: close with an empty fragment.
            self.fragments.push(String::new());
        }
        TemplateDefinition {
            fragments: self.fragments,
            keys: self.keys,
        }
    }
}
