//! Literal template front end
//!
//! `t!` is the host-language literal mechanism: it splits a literal
//! template into fragments and keys at compile time and yields a ready
//! [`Template`](crate::Template). String literals are fragments; a braced
//! identifier is a named key and a braced integer a positional key:
//!
//! ```
//! use weft_template::{Bindings, t};
//!
//! let sum = t!("Sum of " {0} " and " {1} " is " {result} ".");
//! let bindings = Bindings::new().positional(2).positional(3).named("result", 5);
//! assert_eq!(sum.render(&bindings).unwrap(), "Sum of 2 and 3 is 5.");
//! ```
//!
//! Fragment text is opaque; nothing inside a string literal is
//! interpreted as placeholder syntax. The expansion goes through
//! [`LiteralParts`](crate::LiteralParts), which maintains the
//! fragment/key alternation invariant by construction, so the macro
//! surface is infallible.

/// Builds a [`Template`](crate::Template) from a literal template.
#[macro_export]
macro_rules! t {
    ($($parts:tt)*) => {{
        let mut literal = $crate::LiteralParts::new();
        $crate::__t_parts!(literal $($parts)*);
        $crate::Template::new(literal.finish())
    }};
}

/// Internal muncher for [`t!`]. Not part of the public API.
#[doc(hidden)]
#[macro_export]
macro_rules! __t_parts {
    ($literal:ident) => {};
    ($literal:ident $text:literal $($rest:tt)*) => {
        $literal.fragment($text);
        $crate::__t_parts!($literal $($rest)*);
    };
    ($literal:ident { $index:literal } $($rest:tt)*) => {
        $literal.key($crate::Key::index($index));
        $crate::__t_parts!($literal $($rest)*);
    };
    ($literal:ident { $name:ident } $($rest:tt)*) => {
        $literal.key($crate::Key::name(stringify!($name)));
        $crate::__t_parts!($literal $($rest)*);
    };
}
