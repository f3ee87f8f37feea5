//! Weft Domain - Core templating types
//!
//! This crate defines the domain model for the Weft templating library:
//! placeholder keys, render values, the template shape, and the error
//! taxonomy. All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod key;
pub mod template;
pub mod value;

pub use error::{TemplateError, TemplateResult};
pub use key::Key;
pub use template::{LiteralParts, TemplateDefinition};
pub use value::Value;
