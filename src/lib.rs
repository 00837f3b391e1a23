//! # Tablekit
//!
//! Server-rendered HTML tables with sorting, searching and pagination driven
//! entirely by the URL query string.
//!
//! Every interactive element of a table is a plain link or a GET form: the
//! header links set the sort column and direction, the pager links set the
//! offset, the page-size selector sets the page size, and the search form
//! submits the term and column. Hosts hand over a request and a collection;
//! the table reads its state back from the query string on the next request.
//!
//! ## Feature Flags
//!
//! - `full` (default) - everything below
//! - `tables` - table configuration and rendering (implies `html` and `urls`)
//! - `html` - markup primitives only
//! - `urls` - request context and query overlay links
//! - `http` - implements the request context for `http::Request`
//!
//! ## Quick Example
//!
//! ```rust
//! use tablekit::prelude::*;
//!
//! #[derive(Clone)]
//! struct Book {
//!     title: &'static str,
//!     year: u16,
//! }
//!
//! let books = vec![
//!     Book { title: "Dune", year: 1965 },
//!     Book { title: "Neuromancer", year: 1984 },
//!     Book { title: "Foundation", year: 1951 },
//! ];
//!
//! let request = RequestUrl::parse("http://localhost/books?sortBy=1")?;
//! let html = table(&request, None, books, |t| {
//!     t.add_column(
//!         Column::new("Title", |b: &Book| b.title)
//!             .sort_by(|b: &Book| b.title)
//!             .search(|b: &Book, term: &str| b.title.contains(term)),
//!     )?;
//!     t.add_column(Column::new("Year", |b: &Book| b.year).sort_by(|b: &Book| b.year))?;
//!     Ok(())
//! })?;
//!
//! let markup = html.as_str();
//! assert!(markup.find("Foundation") < markup.find("Dune"));
//! assert!(markup.find("Dune") < markup.find("Neuromancer"));
//! # Ok::<(), TableError>(())
//! ```

#[cfg(feature = "html")]
pub mod html;
#[cfg(feature = "tables")]
pub mod tables;
#[cfg(feature = "urls")]
pub mod urls;

#[cfg(feature = "html")]
pub use tablekit_html::{Attributes, Element, Html};

#[cfg(feature = "urls")]
pub use tablekit_urls::{LinkBuilder, QueryParams, RequestContext, RequestUrl, UrlError};

#[cfg(feature = "tables")]
pub use tablekit_tables::{
	Cell, Column, ColumnSetting, ElementAlignment, ElementPlacement, SortOrder, Table, TableError,
	TableOptions, TableSource, table,
};

/// Commonly used types
pub mod prelude {
	#[cfg(feature = "html")]
	pub use crate::{Attributes, Html};

	#[cfg(feature = "urls")]
	pub use crate::{RequestContext, RequestUrl};

	#[cfg(feature = "tables")]
	pub use crate::{
		Column, ColumnSetting, ElementAlignment, ElementPlacement, Table, TableError, TableOptions,
		table,
	};
}
