use super::{Part, Template};
use crate::VariableMap;

/// Output buffer capacity used by [`Template::render()`].
///
/// Small on purpose: the render-many workload this crate targets is dominated by
/// short templates, and a tight default avoids over-allocating for them.
/// Pass a hint to [`Template::render_with_capacity()`] for larger outputs.
const DEFAULT_CAPACITY: usize = 16;

impl Template {
	/// Render the template against a variable map.
	///
	/// Literal pieces are copied verbatim and variable pieces are replaced by
	/// the value the map returns for their name.
	/// A name the map does not know resolves to the empty string,
	/// so rendering never fails, with any map.
	/// The map may also contain names the template never references.
	///
	/// Rendering does not mutate the template or the map.
	/// The same template can be rendered any number of times,
	/// sequentially or concurrently, with the same or different maps.
	/// The source is not re-scanned: the cost of a render is proportional to
	/// the number of pieces plus the length of the produced output.
	///
	/// You can pass a [`HashMap`][std::collections::HashMap], [`BTreeMap`][std::collections::BTreeMap],
	/// key-value slice or any other [`VariableMap`] as the `variables` parameter.
	/// The map values must be [`AsRef<str>`].
	#[inline]
	pub fn render<'a, M>(&self, variables: &'a M) -> String
	where
		M: VariableMap<'a> + ?Sized,
		M::Value: AsRef<str>,
	{
		self.render_with_capacity(variables, DEFAULT_CAPACITY)
	}

	/// Render the template into an output buffer pre-sized to `capacity` bytes.
	///
	/// Identical to [`Self::render()`] except for the initial allocation.
	/// Pass the expected output length to avoid buffer growth for large outputs,
	/// at the price of over-allocation when the guess is too high.
	pub fn render_with_capacity<'a, M>(&self, variables: &'a M, capacity: usize) -> String
	where
		M: VariableMap<'a> + ?Sized,
		M::Value: AsRef<str>,
	{
		let mut output = String::with_capacity(capacity);
		for part in &self.parts {
			match part {
				Part::Literal(range) => output.push_str(&self.source[range.clone()]),
				Part::Variable(range) => {
					if let Some(value) = variables.get(&self.source[range.clone()]) {
						output.push_str(value.as_ref());
					}
				},
			}
		}
		output
	}
}

#[cfg(test)]
mod test {
	use std::collections::{BTreeMap, HashMap};

	use assert2::{assert, check};

	use crate::{NoSubstitution, Template};

	#[test]
	fn substitutes_mapped_and_missing_variables() {
		let template = Template::new(r#"{"var1": "$var1", "var2": "$var2"}"#);

		let mut map = HashMap::new();
		map.insert("var1", "(1)");
		check!(template.render(&map) == r#"{"var1": "(1)", "var2": ""}"#);

		map.insert("var2", "(3)");
		check!(template.render(&map) == r#"{"var1": "(1)", "var2": "(3)"}"#);
	}

	#[test]
	fn rerender_after_map_update() {
		let template = Template::new(r#"{"var1": "$var1", "var2": "$var2"}"#);

		let mut map: HashMap<String, String> = HashMap::new();
		map.insert("var1".into(), "(1)".into());
		map.insert("var2".into(), "(2)".into());
		check!(template.render(&map) == r#"{"var1": "(1)", "var2": "(2)"}"#);

		map.insert("var2".into(), "(3)".into());
		check!(template.render(&map) == r#"{"var1": "(1)", "var2": "(3)"}"#);

		// The template itself is unchanged between renders.
		check!(template.source() == r#"{"var1": "$var1", "var2": "$var2"}"#);
		check!(template.pieces().len() == 5);
	}

	#[test]
	fn extra_names_are_ignored() {
		let template = Template::new(r#""$a""#);
		let mut map = BTreeMap::new();
		map.insert("a", "1");
		map.insert("unused", "2");
		check!(template.render(&map) == "\"1\"");
	}

	#[test]
	fn empty_map_blanks_every_variable() {
		let template = Template::new(r#""$a" and "$b""#);
		let map: BTreeMap<&str, &str> = BTreeMap::new();
		check!(template.render(&map) == r#""" and """#);
		check!(template.render(&NoSubstitution) == r#""" and """#);
	}

	#[test]
	fn placeholder_free_template_renders_empty() {
		let template = Template::new("hello world");
		let mut map = HashMap::new();
		map.insert("hello", "goodbye");
		check!(template.render(&map) == "");
	}

	#[test]
	fn empty_template_renders_empty() {
		let template = Template::new("");
		check!(template.render(&NoSubstitution) == "");
	}

	#[test]
	fn adjacent_placeholders_resolve_independently() {
		let template = Template::new(r#""$a""$b""#);
		let map = [("a", "1"), ("b", "2")];
		check!(template.render(&map) == r#""1""2""#);

		let map = [("b", "2")];
		check!(template.render(&map) == r#""""2""#);
	}

	#[test]
	fn capacity_hint_does_not_change_the_output() {
		let template = Template::new(r#"{"var1": "$var1"}"#);
		let map = [("var1", "a value that is longer than the default capacity")];
		let expected = r#"{"var1": "a value that is longer than the default capacity"}"#;
		check!(template.render(&map) == expected);
		check!(template.render_with_capacity(&map, 0) == expected);
		check!(template.render_with_capacity(&map, 1024) == expected);
	}

	#[test]
	fn concurrent_renders_are_independent() {
		let template = Template::new(r#"{"id": "$id", "host": "$host"}"#);
		let expected: Vec<String> = (0..8)
			.map(|i| format!(r#"{{"id": "worker-{i}", "host": "node-{i}"}}"#))
			.collect();

		let outputs: Vec<String> = std::thread::scope(|scope| {
			let template = &template;
			let handles: Vec<_> = (0..8)
				.map(|i| {
					scope.spawn(move || {
						let map = [("id", format!("worker-{i}")), ("host", format!("node-{i}"))];
						template.render(&map)
					})
				})
				.collect();
			handles.into_iter().map(|handle| handle.join().unwrap()).collect()
		});

		assert!(outputs == expected);
	}
}
