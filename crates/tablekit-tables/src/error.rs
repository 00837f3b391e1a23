//! Error types for table configuration and rendering

use tablekit_urls::UrlError;
use thiserror::Error;

/// Errors raised by table configuration and rendering
///
/// Malformed query parameters are never errors: they fall back to defaults.
/// What remains are caller configuration mistakes and an unusable request URL.
#[derive(Debug, Error)]
pub enum TableError {
	/// A second column was flagged as the default sort column
	#[error("column {second} cannot be the default sort: column {first} already is")]
	DuplicateDefaultSort {
		/// Index of the column that already carries the flag
		first: usize,
		/// Index of the rejected column
		second: usize,
	},

	/// Pager math was asked to divide by a zero page size
	#[error("page size must not be zero")]
	ZeroPageSize,

	/// Links could not be built from the request
	#[error(transparent)]
	Url(#[from] UrlError),

	/// Table options could not be parsed
	#[error("invalid table options: {0}")]
	InvalidOptions(#[from] toml::de::Error),
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
