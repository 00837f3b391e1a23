//! Table options
//!
//! Everything about a table that is not a column: page sizes and defaults,
//! where the search panel and pager go, and the label strings. The plain
//! data fields deserialize with serde, so hosts can keep them next to the
//! rest of their settings:
//!
//! ```toml
//! page_size_options = [25, 50]
//! default_take = 25
//! pagination_placement = "both"
//! search_alignment = "left"
//! first_page_text = "First"
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Where an element is placed relative to the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementPlacement {
	/// Above the table
	Top,
	/// Below the table
	Bottom,
	/// Both above and below
	Both,
}

impl ElementPlacement {
	/// Returns true if the element is rendered above the table
	pub fn is_top(self) -> bool {
		matches!(self, Self::Top | Self::Both)
	}

	/// Returns true if the element is rendered below the table
	pub fn is_bottom(self) -> bool {
		matches!(self, Self::Bottom | Self::Both)
	}
}

/// Horizontal alignment of the search panel or pager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementAlignment {
	/// Left aligned
	Left,
	/// Right aligned
	Right,
	/// Centered
	Center,
}

impl ElementAlignment {
	/// CSS classes implementing the alignment
	pub fn css_class(self) -> &'static str {
		match self {
			Self::Center => "justify-content-md-center",
			Self::Left => "justify-content-md-start ml-md-1",
			Self::Right => "justify-content-md-end mr-md-1",
		}
	}
}

/// Decides whether a search term activates the search
///
/// Defaults to "the term is not empty".
#[derive(Clone)]
pub struct SearchCriteria(Arc<dyn Fn(&str) -> bool + Send + Sync>);

impl SearchCriteria {
	/// Wraps a predicate
	pub fn new<F>(predicate: F) -> Self
	where
		F: Fn(&str) -> bool + Send + Sync + 'static,
	{
		Self(Arc::new(predicate))
	}

	/// Evaluates the predicate
	pub fn accepts(&self, term: &str) -> bool {
		(self.0)(term)
	}
}

impl Default for SearchCriteria {
	fn default() -> Self {
		Self::new(|term| !term.is_empty())
	}
}

impl fmt::Debug for SearchCriteria {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("SearchCriteria(..)")
	}
}

/// Options shared by every render of a table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
	/// Choices offered by the page-size selector
	pub page_size_options: Vec<i64>,
	/// Page size used when the URL does not name one
	pub default_take: i64,
	/// Offset used when the URL does not name one
	pub default_skip: i64,
	/// Placement of the pager
	pub pagination_placement: ElementPlacement,
	/// Alignment of the pager
	pub pagination_alignment: ElementAlignment,
	/// Label of the first-page link
	pub first_page_text: String,
	/// Label of the last-page link
	pub last_page_text: String,
	/// Glyph shown next to a column sorted ascending
	pub ascending_character: String,
	/// Glyph shown next to a column sorted descending
	pub descending_character: String,
	/// Placement of the search panel
	pub search_placement: ElementPlacement,
	/// Alignment of the search panel
	pub search_alignment: ElementAlignment,
	/// Label of the search button
	pub search_button_text: String,
	/// Label of the search clear button
	pub search_clear_text: String,
	/// Decides whether a search term is applied
	#[serde(skip)]
	pub search_term_criteria: SearchCriteria,
}

impl Default for TableOptions {
	fn default() -> Self {
		Self {
			page_size_options: vec![10, 20, 50, 100],
			default_take: 20,
			default_skip: 0,
			pagination_placement: ElementPlacement::Bottom,
			pagination_alignment: ElementAlignment::Right,
			first_page_text: "<<".to_string(),
			last_page_text: ">>".to_string(),
			ascending_character: "▲".to_string(),
			descending_character: "▼".to_string(),
			search_placement: ElementPlacement::Top,
			search_alignment: ElementAlignment::Right,
			search_button_text: "🔍".to_string(),
			search_clear_text: "×".to_string(),
			search_term_criteria: SearchCriteria::default(),
		}
	}
}

impl TableOptions {
	/// Creates options with the default values
	pub fn new() -> Self {
		Self::default()
	}

	/// Loads options from a TOML document; missing keys keep their defaults
	///
	/// # Examples
	///
	/// ```
	/// use tablekit_tables::{ElementPlacement, TableOptions};
	///
	/// let options = TableOptions::from_toml_str(r#"
	///     default_take = 50
	///     pagination_placement = "both"
	/// "#)?;
	///
	/// assert_eq!(options.default_take, 50);
	/// assert_eq!(options.pagination_placement, ElementPlacement::Both);
	/// assert_eq!(options.default_skip, 0);
	/// # Ok::<(), tablekit_tables::TableError>(())
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Sets the page-size choices
	pub fn page_size_options(mut self, sizes: impl Into<Vec<i64>>) -> Self {
		self.page_size_options = sizes.into();
		self
	}

	/// Sets the default page size
	pub fn default_take(mut self, take: i64) -> Self {
		self.default_take = take;
		self
	}

	/// Sets the default offset
	pub fn default_skip(mut self, skip: i64) -> Self {
		self.default_skip = skip;
		self
	}

	/// Sets the pager placement
	pub fn pagination_placement(mut self, placement: ElementPlacement) -> Self {
		self.pagination_placement = placement;
		self
	}

	/// Sets the search panel placement
	pub fn search_placement(mut self, placement: ElementPlacement) -> Self {
		self.search_placement = placement;
		self
	}

	/// Sets the search activation predicate
	pub fn search_term_criteria<F>(mut self, predicate: F) -> Self
	where
		F: Fn(&str) -> bool + Send + Sync + 'static,
	{
		self.search_term_criteria = SearchCriteria::new(predicate);
		self
	}
}
