//! Error types for URL handling

use thiserror::Error;

/// Errors raised while building links from a request
#[derive(Debug, Error)]
pub enum UrlError {
	/// The request's display URL could not be parsed as an absolute URL
	#[error("invalid display URL `{url}`: {source}")]
	InvalidUrl {
		/// The offending URL
		url: String,
		/// Parser error
		#[source]
		source: url::ParseError,
	},
}

/// Result type for URL operations
pub type Result<T> = std::result::Result<T, UrlError>;
