//! Trusted HTML fragments

use crate::escape::escape;
use std::fmt;

/// A fragment of markup that is emitted without further escaping
///
/// Build one from untrusted text with [`Html::text`], or wrap markup you
/// already trust with [`Html::raw`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Html(String);

impl Html {
	/// Wraps markup as-is
	pub fn raw(markup: impl Into<String>) -> Self {
		Self(markup.into())
	}

	/// Escapes `text` into a fragment
	pub fn text(text: &str) -> Self {
		Self(escape(text))
	}

	/// An empty fragment
	pub fn empty() -> Self {
		Self::default()
	}

	/// Returns the markup
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns true if the fragment contains no markup
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Appends another fragment
	pub fn push(&mut self, other: impl Into<Html>) {
		self.0.push_str(other.into().as_str());
	}
}

impl fmt::Display for Html {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl FromIterator<Html> for Html {
	fn from_iter<I: IntoIterator<Item = Html>>(iter: I) -> Self {
		let mut out = Html::empty();
		for fragment in iter {
			out.push(fragment);
		}
		out
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_text_is_escaped_raw_is_not() {
		assert_eq!(Html::text("<i>").as_str(), "&lt;i&gt;");
		assert_eq!(Html::raw("<i>").as_str(), "<i>");
	}

	#[rstest]
	fn test_collect_concatenates() {
		// Arrange
		let parts = vec![Html::raw("<td>"), Html::text("a&b"), Html::raw("</td>")];

		// Act
		let joined: Html = parts.into_iter().collect();

		// Assert
		assert_eq!(joined.to_string(), "<td>a&amp;b</td>");
	}
}
