//! Access to the current request
//!
//! Tables never reach into framework request objects directly. Hosts hand
//! over anything implementing [`RequestContext`]; implementations ship for
//! [`RequestUrl`] and, with the `http` feature, for `http::Request<B>`.

use crate::error::{Result, UrlError};
use url::Url;

/// What a table needs to know about the request being served
pub trait RequestContext {
	/// The request path, e.g. `/users`
	fn path(&self) -> &str;

	/// The raw query string without the leading `?`; empty when absent
	fn query_string(&self) -> &str;

	/// The absolute URL the client sees, e.g. `https://example.com/users?take=10`
	fn display_url(&self) -> String;
}

impl<R: RequestContext + ?Sized> RequestContext for &R {
	fn path(&self) -> &str {
		(**self).path()
	}

	fn query_string(&self) -> &str {
		(**self).query_string()
	}

	fn display_url(&self) -> String {
		(**self).display_url()
	}
}

/// A request described by its absolute URL
///
/// Handy for hosts that already know the full URL, and for tests.
///
/// # Examples
///
/// ```
/// use tablekit_urls::{RequestContext, RequestUrl};
///
/// let request = RequestUrl::parse("http://localhost/items?take=10")?;
/// assert_eq!(request.path(), "/items");
/// assert_eq!(request.query_string(), "take=10");
/// # Ok::<(), tablekit_urls::UrlError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl {
	url: Url,
}

impl RequestUrl {
	/// Parses an absolute URL
	pub fn parse(url: &str) -> Result<Self> {
		let parsed = Url::parse(url).map_err(|source| UrlError::InvalidUrl {
			url: url.to_string(),
			source,
		})?;
		Ok(Self { url: parsed })
	}
}

impl RequestContext for RequestUrl {
	fn path(&self) -> &str {
		self.url.path()
	}

	fn query_string(&self) -> &str {
		self.url.query().unwrap_or("")
	}

	fn display_url(&self) -> String {
		self.url.to_string()
	}
}

#[cfg(feature = "http")]
impl<B> RequestContext for http::Request<B> {
	fn path(&self) -> &str {
		self.uri().path()
	}

	fn query_string(&self) -> &str {
		self.uri().query().unwrap_or("")
	}

	/// Absolute-form URIs are used as-is. Origin-form URIs (the usual case
	/// on a server) are resolved against the `Host` header, falling back to
	/// `localhost` when the header is missing or does not form a valid URL;
	/// the scheme is taken from the URI when present and defaults to `http`.
	fn display_url(&self) -> String {
		let uri = self.uri();
		let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
		let scheme = uri.scheme_str().unwrap_or("http");

		if let Some(authority) = uri.authority() {
			return format!("{}://{}{}", scheme, authority, path_and_query);
		}

		let host = self
			.headers()
			.get(http::header::HOST)
			.and_then(|h| h.to_str().ok())
			.unwrap_or("localhost");
		let url = format!("{}://{}{}", scheme, host, path_and_query);
		if let Err(error) = Url::parse(&url) {
			tracing::trace!(host, %error, "unusable Host header, falling back to localhost");
			return format!("{}://localhost{}", scheme, path_and_query);
		}
		url
	}
}
