//! # Tablekit Tables
//!
//! Server-rendered HTML tables whose sorting, searching and pagination live
//! entirely in the URL query string. Every header link, page link and
//! page-size choice is the current URL with one or two parameters replaced,
//! so a table works without JavaScript and any state can be bookmarked.
//!
//! ## Query parameters
//!
//! | Parameter   | Meaning                              |
//! |-------------|--------------------------------------|
//! | `searchBy`  | search term                          |
//! | `searchCol` | index of the column to search        |
//! | `sortBy`    | index of the column to sort by       |
//! | `sortOrder` | `asc` or `desc`                      |
//! | `take`      | page size                            |
//! | `skip`      | offset of the first row              |
//!
//! A table created with [`Table::with_id`] prefixes every name with
//! `{id}-`, so several tables can share a page.
//!
//! ## Example
//!
//! ```
//! use tablekit_tables::{Column, Table, TableOptions};
//! use tablekit_urls::RequestUrl;
//!
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! let users: Vec<User> = (1..=25)
//!     .map(|n| User { name: format!("user{n}"), age: 20 + n })
//!     .collect();
//!
//! let mut table = Table::new();
//! table
//!     .add_column(
//!         Column::new("Name", |u: &User| u.name.clone())
//!             .sort_by(|u: &User| u.name.clone())
//!             .search(|u: &User, term: &str| u.name.contains(term)),
//!     )?
//!     .add_column(Column::new("Age", |u: &User| u.age).sort_by(|u: &User| u.age))?;
//! table.set_options(TableOptions::new().default_take(10));
//!
//! let request = RequestUrl::parse("https://example.com/users?sortBy=1&sortOrder=desc")?;
//! let html = table.render(users, &request)?;
//!
//! assert!(html.as_str().contains("<td>45</td>"));
//! assert!(!html.as_str().contains("<td>30</td>"));
//! # Ok::<(), tablekit_tables::TableError>(())
//! ```

#![warn(missing_docs)]

pub mod column;
pub mod error;
pub mod options;
pub mod pager;
pub mod params;
pub mod render;
pub mod source;
pub mod state;
pub mod table;

pub use column::{Cell, Column, ColumnSetting};
pub use error::{Result, TableError};
pub use options::{ElementAlignment, ElementPlacement, SearchCriteria, TableOptions};
pub use pager::{PageLink, PagerMath};
pub use params::ParamNames;
pub use render::{RenderContext, SortLink, sort_link};
pub use source::{IterSource, TableSource};
pub use state::{ActiveSearch, ResolvedQueryState, SortOrder, SortState};
pub use table::{Table, TablePage, table};
