//! Maps and related utilities for variable lookup during rendering.
//!
//! A [`Template`][crate::Template] does not care where variable values come from:
//! anything that implements [`VariableMap`] can be passed to
//! [`render()`][crate::Template::render].
//! The renderer substitutes the empty string for names the map does not know;
//! if you want a visible marker for missing variables instead,
//! wrap your map with [`fallback()`] or [`from_fn()`] rather than changing the template.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

mod fallback;
pub use fallback::*;

mod fn_map;
pub use fn_map::*;

/// Trait for types that can be used as a variable map.
pub trait VariableMap<'a> {
	/// The type returned by the [`get()`][Self::get] function.
	type Value;

	/// Get a value from the map.
	fn get(&'a self, key: &str) -> Option<Self::Value>;
}

/// Allow using key-value [`slice`]s as [`VariableMap`]s.
///
/// # Performance
///
/// Lookups scan the slice linearly.
/// For the handful of short keys a typical template references this is perfectly fine;
/// with many pairs or large keys a [`HashMap`] or [`BTreeMap`] will do better.
///
/// # Example
/// ```rust
/// # use presubst::VariableMap;
/// let endpoint = &[("host", "example.com"), ("port", "8080")];
///
/// assert_eq!(endpoint.get("host"), Some(&"example.com"));
/// assert_eq!(endpoint.get("port"), Some(&"8080"));
/// assert_eq!(endpoint.get("scheme"), None);
/// ```
impl<'a, K, V> VariableMap<'a> for [(K, V)]
where
	K: Borrow<str>,
	V: 'a,
{
	type Value = &'a V;

	fn get(&'a self, key: &str) -> Option<Self::Value> {
		self.iter().find_map(|(k, v)| (k.borrow() == key).then_some(v))
	}
}

/// Allow using key-value [`arrays`](`array`) as [`VariableMap`]s.
///
/// Delegates to the [`VariableMap`] impl for [`slices`](`slice`).
///
/// # Example
/// ```rust
/// # use presubst::{Template, VariableMap};
/// let endpoint = [("host", "example.com"), ("port", "8080")];
///
/// let template = Template::new(r#"{"host": "$host", "port": "$port"}"#);
/// assert_eq!(template.render(&endpoint), r#"{"host": "example.com", "port": "8080"}"#);
/// ```
impl<'a, K, V, const N: usize> VariableMap<'a> for [(K, V); N]
where
	K: Borrow<str>,
	V: 'a,
{
	type Value = &'a V;

	#[inline(always)]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		VariableMap::get(self.as_slice(), key)
	}
}

/// Allow using key-value [`Vec`]s as [`VariableMap`]s.
///
/// Delegates to the [`VariableMap`] impl for [`slices`](`slice`).
impl<'a, K, V> VariableMap<'a> for Vec<(K, V)>
where
	K: Borrow<str>,
	V: 'a,
{
	type Value = &'a V;

	#[inline(always)]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		VariableMap::get(self.as_slice(), key)
	}
}

impl<'a, T> VariableMap<'a> for &'_ T
where
	T: ?Sized + VariableMap<'a>,
{
	type Value = <T as VariableMap<'a>>::Value;

	#[inline(always)]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		T::get(self, key)
	}
}

impl<'a, T> VariableMap<'a> for &'_ mut T
where
	T: ?Sized + VariableMap<'a>,
{
	type Value = <T as VariableMap<'a>>::Value;

	#[inline(always)]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		T::get(self, key)
	}
}

impl<'a, T> VariableMap<'a> for std::boxed::Box<T>
where
	T: ?Sized + VariableMap<'a>,
{
	type Value = <T as VariableMap<'a>>::Value;

	#[inline(always)]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		T::get(self, key)
	}
}

impl<'a, T> VariableMap<'a> for std::rc::Rc<T>
where
	T: ?Sized + VariableMap<'a>,
{
	type Value = <T as VariableMap<'a>>::Value;

	#[inline(always)]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		T::get(self, key)
	}
}

impl<'a, T> VariableMap<'a> for std::sync::Arc<T>
where
	T: ?Sized + VariableMap<'a>,
{
	type Value = <T as VariableMap<'a>>::Value;

	#[inline(always)]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		T::get(self, key)
	}
}

/// A "map" that never returns any values.
///
/// Rendering a template with this map blanks every variable
/// and keeps only the literal text.
#[derive(Debug)]
pub struct NoSubstitution;

impl<'a> VariableMap<'a> for NoSubstitution {
	type Value = NeverValue;

	#[inline]
	fn get(&'a self, _key: &str) -> Option<Self::Value> {
		None
	}
}

/// Value returned by the [`NoSubstitution`] map.
#[derive(Debug)]
pub enum NeverValue {}

impl<T: ?Sized> AsRef<T> for NeverValue {
	#[inline]
	fn as_ref(&self) -> &T {
		match *self {}
	}
}

/// A map that gives strings from the environment.
#[derive(Debug)]
pub struct Env;

impl<'a> VariableMap<'a> for Env {
	type Value = String;

	#[inline]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		std::env::var(key).ok()
	}
}

impl<'a, V: 'a> VariableMap<'a> for BTreeMap<&str, V> {
	type Value = &'a V;

	#[inline]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		self.get(key)
	}
}

impl<'a, V: 'a> VariableMap<'a> for BTreeMap<String, V> {
	type Value = &'a V;

	#[inline]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		self.get(key)
	}
}

impl<'a, V: 'a, S: BuildHasher> VariableMap<'a> for HashMap<&str, V, S> {
	type Value = &'a V;

	#[inline]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		self.get(key)
	}
}

impl<'a, V: 'a, S: BuildHasher> VariableMap<'a> for HashMap<String, V, S> {
	type Value = &'a V;

	#[inline]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		self.get(key)
	}
}
