//! Ordered HTML attribute maps

use crate::escape::escape;
use indexmap::IndexMap;

/// An ordered set of HTML attributes
///
/// Attributes render in insertion order. The `class` attribute is special:
/// adding or merging classes appends to the existing value instead of
/// replacing it, so caller-supplied classes never drop the built-in ones.
///
/// # Example
///
/// ```
/// use tablekit_html::Attributes;
///
/// let mut attrs = Attributes::new();
/// attrs.add_class("table");
/// attrs.merge(Attributes::from([("class", "table-sm"), ("id", "users")]));
///
/// assert_eq!(attrs.get("class"), Some("table table-sm"));
/// assert_eq!(attrs.render(), r#" class="table table-sm" id="users""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
	entries: IndexMap<String, String>,
}

impl Attributes {
	/// Creates an empty attribute set
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets an attribute, replacing any previous value
	///
	/// Setting `class` replaces the whole class list.
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
		self.entries.insert(name.into(), value.into());
		self
	}

	/// Appends one or more space-separated classes
	pub fn add_class(&mut self, class: &str) -> &mut Self {
		let class = class.trim();
		if class.is_empty() {
			return self;
		}
		match self.entries.get_mut("class") {
			Some(existing) if !existing.is_empty() => {
				existing.push(' ');
				existing.push_str(class);
			}
			Some(existing) => existing.push_str(class),
			None => {
				self.entries.insert("class".to_string(), class.to_string());
			}
		}
		self
	}

	/// Merges `other` into this set
	///
	/// Classes are appended; every other attribute in `other` replaces the
	/// existing value of the same name.
	pub fn merge(&mut self, other: Attributes) -> &mut Self {
		for (name, value) in other.entries {
			if name == "class" {
				self.add_class(&value);
			} else {
				self.entries.insert(name, value);
			}
		}
		self
	}

	/// Returns the value of an attribute
	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries.get(name).map(String::as_str)
	}

	/// Returns true if the attribute is present
	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	/// Number of attributes
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if there are no attributes
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over `(name, value)` pairs in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Renders the attributes as ` name="value"` pairs
	///
	/// Values are escaped. Names are emitted verbatim and must come from
	/// trusted code.
	pub fn render(&self) -> String {
		let mut out = String::new();
		for (name, value) in &self.entries {
			out.push(' ');
			out.push_str(name);
			out.push_str("=\"");
			out.push_str(&escape(value));
			out.push('"');
		}
		out
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attrs = Attributes::new();
		for (name, value) in iter {
			let name = name.into();
			if name == "class" {
				attrs.add_class(&value.into());
			} else {
				attrs.set(name, value);
			}
		}
		attrs
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
	K: Into<String>,
	V: Into<String>,
{
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_render_escapes_values() {
		let attrs = Attributes::from([("title", r#"a "quoted" <value>"#)]);
		assert_eq!(
			attrs.render(),
			r#" title="a &quot;quoted&quot; &lt;value&gt;""#
		);
	}

	#[rstest]
	fn test_merge_replaces_plain_attributes() {
		// Arrange
		let mut attrs = Attributes::from([("id", "a"), ("data-row", "1")]);

		// Act
		attrs.merge(Attributes::from([("id", "b")]));

		// Assert
		assert_eq!(attrs.get("id"), Some("b"));
		assert_eq!(attrs.get("data-row"), Some("1"));
		assert_eq!(attrs.len(), 2);
	}

	#[rstest]
	fn test_add_class_ignores_blank() {
		let mut attrs = Attributes::new();
		attrs.add_class("  ");
		assert!(attrs.is_empty());

		attrs.add_class("btn").add_class("btn-primary");
		assert_eq!(attrs.get("class"), Some("btn btn-primary"));
	}

	#[rstest]
	fn test_insertion_order_is_kept() {
		let mut attrs = Attributes::new();
		attrs.set("method", "GET").set("action", "/x");
		let names: Vec<_> = attrs.iter().map(|(name, _)| name).collect();
		assert_eq!(names, vec!["method", "action"]);
	}
}
