use super::VariableMap;

/// [`VariableMap`] produced by [`fallback()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FallbackSubstitution<Base, Fallback> {
	base: Base,
	fallback: Fallback,
}

impl<'a, Value, Base, Fallback> VariableMap<'a> for FallbackSubstitution<Base, Fallback>
where
	Base: VariableMap<'a, Value = Value>,
	Fallback: VariableMap<'a, Value = Value>,
{
	type Value = Value;

	fn get(&'a self, key: &str) -> Option<Self::Value> {
		self.base.get(key).or_else(|| self.fallback.get(key))
	}
}

/// Creates a [`VariableMap`] that will first try to find values in `base`, and then attempt to
/// find values in `fallback`.
///
/// The renderer substitutes the empty string for names the map does not know,
/// so a fallback map is the place to supply defaults or a visible missing-value marker
/// without touching the template.
///
/// # Example
/// ```rust
/// # use presubst::{fallback, Template};
/// let variables = [("var1", "(1)")];
/// let with_marker = fallback(variables, [("var2", "<NONE>")]);
///
/// let template = Template::new(r#"{"var1": "$var1", "var2": "$var2"}"#);
/// assert_eq!(template.render(&with_marker), r#"{"var1": "(1)", "var2": "<NONE>"}"#);
/// ```
pub const fn fallback<Base, Fallback>(base: Base, fallback: Fallback) -> FallbackSubstitution<Base, Fallback> {
	FallbackSubstitution { base, fallback }
}

#[cfg(test)]
mod test {
	use assert2::check;

	use super::*;

	#[test]
	fn base_wins_over_fallback() {
		let map = fallback([("a", "base")], [("a", "fallback"), ("b", "fallback")]);
		check!(map.get("a") == Some(&"base"));
		check!(map.get("b") == Some(&"fallback"));
		check!(map.get("c") == None);
	}
}
