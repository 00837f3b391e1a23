//! Request context and link building module.
//!
//! # Examples
//!
//! ```rust
//! use tablekit::urls::{LinkBuilder, RequestUrl};
//!
//! let request = RequestUrl::parse("http://localhost/items?take=10")?;
//! let links = LinkBuilder::from_request(&request)?;
//! assert_eq!(links.with_param("skip", 10), "http://localhost/items?take=10&skip=10");
//! # Ok::<(), tablekit::urls::UrlError>(())
//! ```

#[cfg(feature = "urls")]
pub use tablekit_urls::*;
