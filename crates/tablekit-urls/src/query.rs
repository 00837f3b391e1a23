//! Decoded query-string parameters

use url::form_urlencoded;

/// An ordered list of decoded query parameters
///
/// Keys may repeat. Lookups return the first occurrence; [`QueryParams::set`]
/// collapses all occurrences of a key into one, kept at the position of the
/// first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
	pairs: Vec<(String, String)>,
}

impl QueryParams {
	/// Creates an empty parameter list
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a raw query string (without the leading `?`)
	///
	/// Keys and values are percent-decoded and `+` becomes a space. A key
	/// without `=` gets an empty value.
	///
	/// # Examples
	///
	/// ```
	/// use tablekit_urls::QueryParams;
	///
	/// let params = QueryParams::parse("searchBy=John%20Doe&flag&take=10");
	/// assert_eq!(params.get("searchBy"), Some("John Doe"));
	/// assert_eq!(params.get("flag"), Some(""));
	/// assert!(params.get("skip").is_none());
	/// ```
	pub fn parse(query: &str) -> Self {
		let query = query.strip_prefix('?').unwrap_or(query);
		Self {
			pairs: form_urlencoded::parse(query.as_bytes())
				.map(|(k, v)| (k.into_owned(), v.into_owned()))
				.collect(),
		}
	}

	/// Returns the first value for `key`
	pub fn get(&self, key: &str) -> Option<&str> {
		self.pairs
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	/// Returns true if `key` occurs at least once
	pub fn contains(&self, key: &str) -> bool {
		self.pairs.iter().any(|(k, _)| k == key)
	}

	/// Parses the first value for `key` as an integer
	///
	/// Surrounding whitespace and a leading sign are accepted. The value must
	/// fit in 32 bits; `None` is returned when the key is missing or the value
	/// is not such an integer.
	pub fn get_int(&self, key: &str) -> Option<i64> {
		let raw = self.get(key)?;
		match raw.trim().parse::<i32>() {
			Ok(value) => Some(i64::from(value)),
			Err(error) => {
				tracing::trace!(key, value = raw, %error, "ignoring non-integer query parameter");
				None
			}
		}
	}

	/// Sets `key` to `value`
	///
	/// The first occurrence is replaced in place and later duplicates are
	/// removed; a missing key is appended.
	pub fn set(&mut self, key: &str, value: impl Into<String>) {
		let value = value.into();
		match self.pairs.iter().position(|(k, _)| k == key) {
			Some(first) => {
				self.pairs[first].1 = value;
				let mut index = 0;
				self.pairs.retain(|(k, _)| {
					let keep = index <= first || k != key;
					index += 1;
					keep
				});
			}
			None => self.pairs.push((key.to_string(), value)),
		}
	}

	/// Number of pairs, counting repeated keys
	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	/// Returns true if there are no pairs
	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}

	/// Iterates over `(key, value)` pairs in order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Serializes back into an `application/x-www-form-urlencoded` string
	pub fn to_query_string(&self) -> String {
		form_urlencoded::Serializer::new(String::new())
			.extend_pairs(self.pairs.iter())
			.finish()
	}
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
		}
	}
}
