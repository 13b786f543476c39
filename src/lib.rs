//! Precompiled variable substitution for quoted templates.
//!
//! Templates contain placeholders of the form `"$name"`:
//! a double quote, a dollar sign, a variable name, and a closing double quote.
//! [`Template::new()`] scans the source once and splits it into literal and variable pieces.
//! [`Template::render()`] then concatenates the pieces against a variable map,
//! any number of times, without ever re-scanning the source.
//!
//! Variable names may contain any character except a double quote.
//! A variable that is missing from the map renders as the empty string.
//! The quote characters around a placeholder are literal text and stay in the output.
//!
//! # Features
//!
//! * Compile a template once, render it many times with different variable maps.
//! * Render against a `HashMap`, `BTreeMap`, key-value slice, the environment, or a custom [`VariableMap`].
//! * Chain maps with [`fallback()`] or adapt a closure with [`from_fn()`],
//!   for example to give missing variables a visible marker.
//! * Inspect the compiled pieces through [`Template::pieces()`].
//! * Optional serde support for templates (requires the `serde` feature).
//!
//! # Examples
//!
//! Compile once, render with changing values:
//!
//! ```
//! # use std::collections::HashMap;
//! use presubst::Template;
//!
//! let template = Template::new(r#"{"var1": "$var1", "var2": "$var2"}"#);
//!
//! let mut variables = HashMap::new();
//! variables.insert("var1", "(1)");
//! variables.insert("var2", "(2)");
//! assert_eq!(template.render(&variables), r#"{"var1": "(1)", "var2": "(2)"}"#);
//!
//! variables.insert("var2", "(3)");
//! assert_eq!(template.render(&variables), r#"{"var1": "(1)", "var2": "(3)"}"#);
//! ```
//!
//! The [`substitute()`] function compiles and renders in one go,
//! for sources that are only rendered once.
//!
//! # Templates without placeholders
//!
//! A source that contains no placeholder at all compiles to an *empty* piece sequence:
//! rendering it returns `""`, not the original text.
//! Only sources with at least one placeholder keep their surrounding literal text.
//! This crate reproduces that behaviour of the system it is modelled on for compatibility;
//! check [`Template::pieces()`] for emptiness if you need to detect the case.
#![warn(missing_docs, missing_debug_implementations)]
#![cfg_attr(feature = "doc-cfg", feature(doc_cfg))]

pub mod map;
pub use map::*;

mod template;
pub use template::{Piece, Pieces, Template};

mod features;

/// Substitute variables in a string in one go.
///
/// This compiles the source and renders it once.
/// If you render the same template more than once,
/// build a [`Template`] and reuse it instead.
///
/// A variable that is missing from the map is replaced by the empty string,
/// and a source without any placeholder produces `""`
/// (see the crate documentation).
///
/// You can pass a [`HashMap`][std::collections::HashMap], [`BTreeMap`][std::collections::BTreeMap],
/// key-value slice or any other [`VariableMap`] as the `variables` parameter.
/// The map values must be [`AsRef<str>`].
pub fn substitute<'a, M>(source: &str, variables: &'a M) -> String
where
	M: VariableMap<'a> + ?Sized,
	M::Value: AsRef<str>,
{
	Template::new(source).render_with_capacity(variables, source.len() + source.len() / 8)
}
