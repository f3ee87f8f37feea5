//! Render-call bindings
//!
//! The explicit positional/named split supplied to one render call. The
//! two halves are separate fields, so no argument-shape inference happens
//! at render time.

use std::collections::HashMap;

use weft_domain::{Key, Value};

/// The values supplied to one render call.
///
/// Positional keys index into the positional list; named keys look up the
/// named map. A key with no binding yields [`Value::Absent`].
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    positional: Vec<Value>,
    named: HashMap<String, Value>,
}

impl Bindings {
    /// Creates an empty binding set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the next positional value.
    #[must_use]
    pub fn positional(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Sets a named value, replacing any previous value for that name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    /// Sets the positional value at an explicit index, padding any gap
    /// with [`Value::Absent`].
    pub fn set_positional(&mut self, index: usize, value: impl Into<Value>) {
        if index >= self.positional.len() {
            self.positional.resize(index + 1, Value::Absent);
        }
        self.positional[index] = value.into();
    }

    /// Sets a named value in place.
    pub fn set_named(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.named.insert(name.into(), value.into());
    }

    /// Binds the raw value for a key, yielding [`Value::Absent`] when the
    /// positional index or name has no entry.
    #[must_use]
    pub fn get(&self, key: &Key) -> Value {
        match key {
            Key::Index(index) => self
                .positional
                .get(*index)
                .cloned()
                .unwrap_or(Value::Absent),
            Key::Name(name) => self.named.get(name).cloned().unwrap_or(Value::Absent),
        }
    }

    /// Returns the number of positional values supplied.
    #[must_use]
    pub fn positional_len(&self) -> usize {
        self.positional.len()
    }

    /// Returns true if no values are bound at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}
