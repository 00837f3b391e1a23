//! HTML escaping

/// Escape HTML special characters
///
/// The output is safe both as element text and inside a double- or
/// single-quoted attribute value.
///
/// # Examples
///
/// ```
/// use tablekit_html::escape;
///
/// assert_eq!(escape("Hello, World!"), "Hello, World!");
/// assert_eq!(escape("<b>'x'</b>"), "&lt;b&gt;&#x27;x&#x27;&lt;/b&gt;");
/// assert_eq!(escape("a=1&b=2"), "a=1&amp;b=2");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	result
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("", "")]
	#[case("plain", "plain")]
	#[case("<script>", "&lt;script&gt;")]
	#[case(r#"say "hi""#, "say &quot;hi&quot;")]
	#[case("▲ ▼ ×", "▲ ▼ ×")]
	#[case("&amp;", "&amp;amp;")]
	fn test_escape(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape(input), expected);
	}
}
