use super::VariableMap;

/// [`VariableMap`] produced by [`from_fn()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FnMap<F> {
	func: F,
}

impl<'a, F, V> VariableMap<'a> for FnMap<F>
where
	F: 'a + Fn(&str) -> Option<V>,
{
	type Value = V;

	#[inline(always)]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		(self.func)(key)
	}
}

/// Creates a [`VariableMap`] that delegates to the given function.
///
/// # Example
/// ```rust
/// # use presubst::{from_fn, Template, VariableMap};
/// let variables = from_fn(|key| match key {
///     "host" => Some("example.com"),
///     "port" => Some("8080"),
///     _ => None,
/// });
///
/// assert_eq!(variables.get("host"), Some("example.com"));
/// assert_eq!(variables.get("scheme"), None);
///
/// let template = Template::new(r#""$host":"$port""#);
/// assert_eq!(template.render(&variables), r#""example.com":"8080""#);
/// ```
pub const fn from_fn<F, V>(func: F) -> FnMap<F>
where
	F: Fn(&str) -> Option<V>,
{
	FnMap { func }
}

#[cfg(test)]
mod test {
	use assert2::check;

	use crate::{from_fn, Template};

	#[test]
	fn closure_supplies_missing_value_marker() {
		let template = Template::new(r#"{"var1": "$var1", "var2": "$var2"}"#);
		let map = from_fn(|key| match key {
			"var1" => Some("(1)"),
			_ => Some("<NONE>"),
		});
		check!(template.render(&map) == r#"{"var1": "(1)", "var2": "<NONE>"}"#);
	}
}
