use indexmap::IndexMap;

use crate::VariableMap;

impl<'a, V: 'a> VariableMap<'a> for IndexMap<&str, V> {
	type Value = &'a V;

	#[inline]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		self.get(key)
	}
}

impl<'a, V: 'a> VariableMap<'a> for IndexMap<String, V> {
	type Value = &'a V;

	#[inline]
	fn get(&'a self, key: &str) -> Option<Self::Value> {
		self.get(key)
	}
}

#[cfg(test)]
mod test {
	use assert2::check;
	use indexmap::IndexMap;

	use crate::Template;

	#[test]
	fn index_map_resolves_variables() {
		let template = Template::new(r#"{"var1": "$var1", "var2": "$var2"}"#);

		let mut map: IndexMap<String, String> = IndexMap::new();
		map.insert("var1".into(), "(1)".into());
		map.insert("var2".into(), "(2)".into());
		check!(template.render(&map) == r#"{"var1": "(1)", "var2": "(2)"}"#);

		let mut map: IndexMap<&str, &str> = IndexMap::new();
		map.insert("var1", "(1)");
		check!(template.render(&map) == r#"{"var1": "(1)", "var2": ""}"#);
	}
}
