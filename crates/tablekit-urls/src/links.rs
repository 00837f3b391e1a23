//! Query-string overlay links

use crate::context::RequestContext;
use crate::error::{Result, UrlError};
use crate::query::QueryParams;
use url::Url;

/// Builds links to the current page with selected parameters overridden
///
/// The request is parsed once; each call clones the parsed parameters,
/// applies the overrides with [`QueryParams::set`] and re-serializes against
/// the display URL. Parameters not named in the override list are kept in
/// their original order.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
	base: Url,
	params: QueryParams,
}

impl LinkBuilder {
	/// Parses the request's display URL and query string
	pub fn from_request<R: RequestContext + ?Sized>(request: &R) -> Result<Self> {
		let display = request.display_url();
		let mut base = Url::parse(&display).map_err(|source| UrlError::InvalidUrl {
			url: display.clone(),
			source,
		})?;
		base.set_query(None);
		base.set_fragment(None);

		Ok(Self {
			base,
			params: QueryParams::parse(request.query_string()),
		})
	}

	/// The parameters of the current request
	pub fn params(&self) -> &QueryParams {
		&self.params
	}

	/// The current URL with every `(key, value)` in `overrides` applied
	///
	/// # Examples
	///
	/// ```
	/// use tablekit_urls::{LinkBuilder, RequestUrl};
	///
	/// let request = RequestUrl::parse("http://localhost/t?q=x&sortBy=0")?;
	/// let links = LinkBuilder::from_request(&request)?;
	///
	/// assert_eq!(
	///     links.with(&[("sortBy", "2".to_string()), ("sortOrder", "desc".to_string())]),
	///     "http://localhost/t?q=x&sortBy=2&sortOrder=desc"
	/// );
	/// # Ok::<(), tablekit_urls::UrlError>(())
	/// ```
	pub fn with(&self, overrides: &[(&str, String)]) -> String {
		let mut params = self.params.clone();
		for (key, value) in overrides {
			params.set(key, value.as_str());
		}
		self.build(&params)
	}

	/// The current URL with a single parameter overridden
	pub fn with_param(&self, key: &str, value: impl ToString) -> String {
		self.with(&[(key, value.to_string())])
	}

	/// The current URL stripped of its query string
	pub fn without_query(&self) -> String {
		self.base.to_string()
	}

	fn build(&self, params: &QueryParams) -> String {
		let mut url = self.base.clone();
		if !params.is_empty() {
			url.set_query(Some(&params.to_query_string()));
		}
		url.to_string()
	}
}
