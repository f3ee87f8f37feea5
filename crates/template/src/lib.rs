//! Weft Template - typed string templating
//!
//! Defines a message shape once as a literal template of text fragments
//! interleaved with named or positional keys, then reuses it across many
//! render calls with per-key validation and transformation.
//!
//! # Usage
//!
//! ```
//! use weft_template::{Bindings, t, transformer, validator};
//!
//! let age_line = t!("Age: " {age})
//!     .validate([("age", validator(|v| v.as_i64().is_some_and(|n| n >= 0)))])
//!     .transfer([("age", transformer(|v| format!("{v} years old").into()))]);
//!
//! let output = age_line.render(&Bindings::new().named("age", 30));
//! assert_eq!(output.unwrap(), "Age: 30 years old");
//!
//! // The validator gates the raw value before the transformer runs.
//! assert!(age_line.render(&Bindings::new().named("age", -10)).is_err());
//! ```

pub mod bindings;
pub mod registry;
pub mod template;

mod macros;

pub use bindings::Bindings;
pub use registry::{Transformer, Validator, transformer, validator};
pub use template::Template;

pub use weft_domain::{Key, LiteralParts, TemplateDefinition, TemplateError, TemplateResult, Value};
