//! Column definitions
//!
//! A column is a name plus a set of caller-supplied closures:
//! - a display closure producing the cell content (required)
//! - a sort key, which makes the header a sort link
//! - a search predicate, which lists the column in the search selector
//! - a cell attribute closure
//!
//! Columns are identified by their position in the table. The index is
//! assigned when the column is added and is what appears in URLs, since
//! column names need not be URL-safe.

use crate::state::SortOrder;
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use tablekit_html::{Attributes, Html};

/// Per-column flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnSetting {
	/// Sort by this column when the URL names no sort column
	DefaultSort,
	/// Sort descending the first time this column becomes the active sort
	FirstSortDesc,
}

/// Content of a single table cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cell {
	/// Nothing; renders as an empty cell
	#[default]
	Empty,
	/// Plain text, escaped on output
	Text(String),
	/// Trusted markup, emitted as-is
	Html(Html),
}

impl Cell {
	/// Renders the cell content
	pub fn into_html(self) -> Html {
		match self {
			Cell::Empty => Html::empty(),
			Cell::Text(text) => Html::text(&text),
			Cell::Html(html) => html,
		}
	}
}

impl From<String> for Cell {
	fn from(text: String) -> Self {
		Cell::Text(text)
	}
}

impl From<&str> for Cell {
	fn from(text: &str) -> Self {
		Cell::Text(text.to_string())
	}
}

impl From<&String> for Cell {
	fn from(text: &String) -> Self {
		Cell::Text(text.clone())
	}
}

impl From<Html> for Cell {
	fn from(html: Html) -> Self {
		Cell::Html(html)
	}
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
	fn from(value: Option<T>) -> Self {
		value.map_or(Cell::Empty, Into::into)
	}
}

macro_rules! cell_from_display {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Cell {
				fn from(value: $ty) -> Self {
					Cell::Text(value.to_string())
				}
			}
		)*
	};
}

cell_from_display!(
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
);

type DisplayFn<T> = Box<dyn Fn(&T) -> Cell>;
type CompareFn<T> = Box<dyn Fn(&T, &T) -> Ordering>;
type SearchFn<T> = Box<dyn Fn(&T, &str) -> bool>;
type AttributesFn<T> = Box<dyn Fn(&T) -> Attributes>;

/// A table column over rows of type `T`
///
/// # Example
///
/// ```rust
/// use tablekit_tables::Column;
///
/// struct User {
///     id: u32,
///     name: String,
/// }
///
/// let name = Column::new("Name", |u: &User| u.name.clone())
///     .sort_by(|u: &User| u.name.to_lowercase())
///     .search(|u: &User, term: &str| u.name.contains(term))
///     .default_sort();
///
/// assert!(name.is_sortable());
/// assert!(name.is_searchable());
/// ```
pub struct Column<T> {
	index: usize,
	name: String,
	display: DisplayFn<T>,
	compare: Option<CompareFn<T>>,
	search: Option<SearchFn<T>>,
	cell_attributes: Option<AttributesFn<T>>,
	settings: Vec<ColumnSetting>,
}

impl<T> Column<T> {
	/// Creates a column with a display closure
	///
	/// The closure may return anything convertible into a [`Cell`]: text,
	/// numbers, [`Html`], or an `Option` of those (`None` renders empty).
	pub fn new<F, C>(name: impl Into<String>, display: F) -> Self
	where
		F: Fn(&T) -> C + 'static,
		C: Into<Cell>,
	{
		Self {
			index: 0,
			name: name.into(),
			display: Box::new(move |item| display(item).into()),
			compare: None,
			search: None,
			cell_attributes: None,
			settings: Vec::new(),
		}
	}

	/// Makes the column sortable by the key `key` extracts
	pub fn sort_by<K, F>(mut self, key: F) -> Self
	where
		K: Ord,
		F: Fn(&T) -> K + 'static,
	{
		self.compare = Some(Box::new(move |a, b| key(a).cmp(&key(b))));
		self
	}

	/// Makes the column sortable with an explicit comparator
	pub fn sort_with<F>(mut self, compare: F) -> Self
	where
		F: Fn(&T, &T) -> Ordering + 'static,
	{
		self.compare = Some(Box::new(compare));
		self
	}

	/// Makes the column searchable
	///
	/// The predicate receives the row and the active search term.
	pub fn search<F>(mut self, predicate: F) -> Self
	where
		F: Fn(&T, &str) -> bool + 'static,
	{
		self.search = Some(Box::new(predicate));
		self
	}

	/// Sets per-cell attributes
	pub fn cell_attributes<F>(mut self, attributes: F) -> Self
	where
		F: Fn(&T) -> Attributes + 'static,
	{
		self.cell_attributes = Some(Box::new(attributes));
		self
	}

	/// Adds a setting flag
	pub fn setting(mut self, setting: ColumnSetting) -> Self {
		if !self.settings.contains(&setting) {
			self.settings.push(setting);
		}
		self
	}

	/// Adds several setting flags
	pub fn settings(self, settings: impl IntoIterator<Item = ColumnSetting>) -> Self {
		settings.into_iter().fold(self, Self::setting)
	}

	/// Shorthand for [`ColumnSetting::DefaultSort`]
	pub fn default_sort(self) -> Self {
		self.setting(ColumnSetting::DefaultSort)
	}

	/// Shorthand for [`ColumnSetting::FirstSortDesc`]
	pub fn first_sort_desc(self) -> Self {
		self.setting(ColumnSetting::FirstSortDesc)
	}

	pub(crate) fn set_index(&mut self, index: usize) {
		self.index = index;
	}

	/// Position of the column in its table
	pub fn index(&self) -> usize {
		self.index
	}

	/// Display label
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns true if the column has a sort key
	pub fn is_sortable(&self) -> bool {
		self.compare.is_some()
	}

	/// Returns true if the column has a search predicate
	pub fn is_searchable(&self) -> bool {
		self.search.is_some()
	}

	/// Returns true if the setting flag is present
	pub fn has_setting(&self, setting: ColumnSetting) -> bool {
		self.settings.contains(&setting)
	}

	/// The direction this column sorts in when it first becomes active
	pub fn initial_order(&self) -> SortOrder {
		if self.has_setting(ColumnSetting::FirstSortDesc) {
			SortOrder::Descending
		} else {
			SortOrder::Ascending
		}
	}

	/// Produces the cell content for `item`
	pub fn render_cell(&self, item: &T) -> Cell {
		(self.display)(item)
	}

	/// Attributes for the cell of `item`, if the column defines any
	pub fn attributes_for(&self, item: &T) -> Option<Attributes> {
		self.cell_attributes.as_ref().map(|f| f(item))
	}

	/// Evaluates the search predicate; unsearchable columns match nothing
	pub fn matches(&self, item: &T, term: &str) -> bool {
		self.search.as_ref().is_some_and(|f| f(item, term))
	}

	/// Stable-sorts `rows` by this column's key
	///
	/// Returns false and leaves `rows` untouched when the column is not
	/// sortable.
	pub fn sort_rows(&self, rows: &mut [T], order: SortOrder) -> bool {
		let Some(compare) = self.compare.as_ref() else {
			return false;
		};
		match order {
			SortOrder::Ascending => rows.sort_by(|a, b| compare(a, b)),
			SortOrder::Descending => rows.sort_by(|a, b| compare(b, a)),
		}
		true
	}
}

impl<T> Debug for Column<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Column")
			.field("index", &self.index)
			.field("name", &self.name)
			.field("sortable", &self.is_sortable())
			.field("searchable", &self.is_searchable())
			.field("settings", &self.settings)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[derive(Debug, Clone, PartialEq)]
	struct Row {
		id: u32,
		label: Option<&'static str>,
	}

	fn rows() -> Vec<Row> {
		vec![
			Row { id: 2, label: Some("b") },
			Row { id: 1, label: None },
			Row { id: 3, label: Some("a") },
		]
	}

	#[rstest]
	fn test_column_defaults() {
		let column = Column::new("Id", |r: &Row| r.id);
		assert_eq!(column.name(), "Id");
		assert!(!column.is_sortable());
		assert!(!column.is_searchable());
		assert_eq!(column.initial_order(), SortOrder::Ascending);
	}

	#[rstest]
	fn test_none_renders_empty() {
		let column = Column::new("Label", |r: &Row| r.label);
		assert_eq!(column.render_cell(&rows()[1]), Cell::Empty);
		assert_eq!(column.render_cell(&rows()[0]), Cell::Text("b".into()));
	}

	#[rstest]
	fn test_text_cell_is_escaped_html_cell_is_not() {
		assert_eq!(Cell::from("<b>").into_html().as_str(), "&lt;b&gt;");
		assert_eq!(Cell::from(Html::raw("<b>")).into_html().as_str(), "<b>");
	}

	#[rstest]
	#[case(SortOrder::Ascending, vec![1, 2, 3])]
	#[case(SortOrder::Descending, vec![3, 2, 1])]
	fn test_sort_rows(#[case] order: SortOrder, #[case] expected: Vec<u32>) {
		// Arrange
		let column = Column::new("Id", |r: &Row| r.id).sort_by(|r: &Row| r.id);
		let mut data = rows();

		// Act
		let sorted = column.sort_rows(&mut data, order);

		// Assert
		assert!(sorted);
		assert_eq!(data.iter().map(|r| r.id).collect::<Vec<_>>(), expected);
	}

	#[rstest]
	fn test_unsortable_column_leaves_rows() {
		let column = Column::new("Id", |r: &Row| r.id);
		let mut data = rows();
		assert!(!column.sort_rows(&mut data, SortOrder::Ascending));
		assert_eq!(data, rows());
	}

	#[rstest]
	fn test_settings_are_deduplicated() {
		let column = Column::new("Id", |r: &Row| r.id)
			.default_sort()
			.settings([ColumnSetting::DefaultSort, ColumnSetting::FirstSortDesc]);
		assert!(column.has_setting(ColumnSetting::DefaultSort));
		assert_eq!(column.initial_order(), SortOrder::Descending);
		assert_eq!(format!("{:?}", column).matches("DefaultSort").count(), 1);
	}

	#[rstest]
	fn test_matches_uses_term() {
		let column = Column::new("Label", |r: &Row| r.label)
			.search(|r: &Row, term: &str| r.label.is_some_and(|l| l == term));
		assert!(column.matches(&rows()[2], "a"));
		assert!(!column.matches(&rows()[1], "a"));
	}

	#[rstest]
	fn test_cell_attributes() {
		let column = Column::new("Id", |r: &Row| r.id)
			.cell_attributes(|r: &Row| Attributes::from([("data-id", r.id.to_string())]));
		let attrs = column.attributes_for(&rows()[0]).unwrap();
		assert_eq!(attrs.get("data-id"), Some("2"));
	}
}
