//! HTML element builder
//!
//! A fluent, string-backed builder for the handful of tags a server-rendered
//! table needs. Children are [`Html`] fragments, so nesting builders is a
//! matter of calling [`Element::render`] on the inner one (or passing the
//! element directly, via `From<Element> for Html`).

use crate::attributes::Attributes;
use crate::fragment::Html;

/// Tags rendered without a closing tag
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// HTML element builder with fluent API
///
/// ## Example
///
/// ```
/// use tablekit_html::Element;
///
/// let row = Element::new("tr")
///     .child(Element::new("td").text("Alice"))
///     .child(Element::new("td").text("Bob"))
///     .render();
///
/// assert_eq!(row.as_str(), "<tr><td>Alice</td><td>Bob</td></tr>");
/// ```
#[derive(Debug, Clone)]
pub struct Element {
	tag: &'static str,
	attributes: Attributes,
	children: Html,
}

impl Element {
	/// Creates an element with the given tag name
	pub fn new(tag: &'static str) -> Self {
		Self {
			tag,
			attributes: Attributes::new(),
			children: Html::empty(),
		}
	}

	/// Returns the attributes set so far
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	/// Appends space-separated classes
	pub fn add_class(mut self, class: &str) -> Self {
		self.attributes.add_class(class);
		self
	}

	/// Sets an attribute
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.set(name, value);
		self
	}

	/// Sets an attribute only when `condition` holds
	pub fn attr_if(self, condition: bool, name: &str, value: &str) -> Self {
		if condition { self.attr(name, value) } else { self }
	}

	/// Merges an attribute map onto the element
	pub fn merge_attributes(mut self, attributes: Attributes) -> Self {
		self.attributes.merge(attributes);
		self
	}

	/// Appends escaped text
	pub fn text(mut self, text: &str) -> Self {
		self.children.push(Html::text(text));
		self
	}

	/// Appends a child fragment or element
	pub fn child(mut self, child: impl Into<Html>) -> Self {
		self.children.push(child);
		self
	}

	/// Appends every child from an iterator
	pub fn children<I, C>(mut self, children: I) -> Self
	where
		I: IntoIterator<Item = C>,
		C: Into<Html>,
	{
		for child in children {
			self.children.push(child);
		}
		self
	}

	/// Renders the element
	///
	/// Void elements (`input`, `br`, ...) render as `<tag ... />` and drop any
	/// children.
	pub fn render(self) -> Html {
		let attrs = self.attributes.render();
		if VOID_TAGS.contains(&self.tag) {
			return Html::raw(format!("<{}{} />", self.tag, attrs));
		}
		Html::raw(format!(
			"<{tag}{attrs}>{children}</{tag}>",
			tag = self.tag,
			attrs = attrs,
			children = self.children
		))
	}
}

impl From<Element> for Html {
	fn from(element: Element) -> Self {
		element.render()
	}
}
