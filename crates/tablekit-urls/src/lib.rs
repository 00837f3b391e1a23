//! Request context and query-string overlay links
//!
//! Every link a rendered table emits is "the current page, with one or two
//! query parameters changed". This crate provides the pieces for that:
//!
//! - [`RequestContext`]: what the host framework must expose about the
//!   current request (path, raw query string, display URL)
//! - [`QueryParams`]: an ordered, decoded view of a query string
//! - [`LinkBuilder`]: parses the current request once, then produces URLs
//!   with selected parameters overridden and all others preserved
//!
//! # Example
//!
//! ```
//! use tablekit_urls::{LinkBuilder, RequestUrl};
//!
//! let request = RequestUrl::parse("https://example.com/users?sortBy=1&take=10")?;
//! let links = LinkBuilder::from_request(&request)?;
//!
//! assert_eq!(
//!     links.with_param("take", 50),
//!     "https://example.com/users?sortBy=1&take=50"
//! );
//! assert_eq!(links.without_query(), "https://example.com/users");
//! # Ok::<(), tablekit_urls::UrlError>(())
//! ```

#![warn(missing_docs)]

pub mod context;
pub mod error;
pub mod links;
pub mod query;

pub use context::{RequestContext, RequestUrl};
pub use error::{Result, UrlError};
pub use links::LinkBuilder;
pub use query::QueryParams;
