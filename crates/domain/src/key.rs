//! Placeholder keys
//!
//! A key marks where a value is substituted into a template: either a
//! positional index into the positional bindings or a name looked up in
//! the named bindings.

use serde::{Deserialize, Serialize};

/// A placeholder key in a template.
///
/// Keys are not required to be unique within a template; the same key may
/// appear multiple times, each occurrence rendered independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// A positional reference into the positional binding list.
    Index(usize),

    /// A named reference into the named binding map.
    Name(String),
}

impl Key {
    /// Creates a positional key.
    #[must_use]
    pub const fn index(index: usize) -> Self {
        Self::Index(index)
    }

    /// Creates a named key.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Returns true if this is a positional key.
    #[must_use]
    pub const fn is_positional(&self) -> bool {
        matches!(self, Self::Index(_))
    }

    /// Returns true if this is a named key.
    #[must_use]
    pub const fn is_named(&self) -> bool {
        matches!(self, Self::Name(_))
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}
