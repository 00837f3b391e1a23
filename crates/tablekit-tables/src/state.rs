//! Query state resolution
//!
//! Turns the request's query parameters into a [`ResolvedQueryState`]. The
//! resolver never fails: anything missing or malformed falls back to the
//! configured defaults, or disables the feature for this render.

use crate::column::{Column, ColumnSetting};
use crate::options::TableOptions;
use crate::params::ParamNames;
use tablekit_urls::QueryParams;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
	/// Ascending order
	Ascending,
	/// Descending order
	Descending,
}

impl SortOrder {
	/// Returns the opposite direction
	pub fn toggle(self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// The value written to the sort-order parameter
	pub fn as_param(self) -> &'static str {
		match self {
			Self::Ascending => "asc",
			Self::Descending => "desc",
		}
	}

	/// Reads a sort-order parameter value
	///
	/// Only the literal `desc` selects descending; every other value,
	/// including garbage, is ascending.
	pub fn from_param(value: &str) -> Self {
		if value == "desc" {
			Self::Descending
		} else {
			Self::Ascending
		}
	}

}

/// A search that applies to this render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSearch {
	/// The search term
	pub term: String,
	/// Index of the searched column
	pub column: usize,
}

/// The sort that applies to this render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
	/// Index of the sort column
	pub column: usize,
	/// Sort direction
	pub order: SortOrder,
}

/// Per-request view state derived from the query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQueryState {
	/// Raw search term, present whenever the search parameter is, active or not
	pub search_term: Option<String>,
	/// The search to apply, if any
	pub search: Option<ActiveSearch>,
	/// The sort to apply; `None` only for tables without columns
	pub sort: Option<SortState>,
	/// The sort the header links reflect
	///
	/// The URL's sort column when `sortBy` names an existing column, the
	/// default sort when `sortBy` is absent, and `None` when `sortBy` is
	/// present but names no column.
	pub header_sort: Option<SortState>,
	/// Page size; not validated
	pub take: i64,
	/// Page offset; not validated
	pub skip: i64,
}

impl ResolvedQueryState {
	/// Resolves the state for one render
	///
	/// - search: active only if the term passes the options' criteria and the
	///   search-column parameter names a searchable column
	/// - sort: the URL's sort column if it names a column, else the
	///   [`ColumnSetting::DefaultSort`] column, else column 0. With a sort
	///   parameter present, direction is descending only for `desc`; without
	///   one, the default column's [`ColumnSetting::FirstSortDesc`] decides
	/// - take/skip: integers from the URL, else the options' defaults
	pub fn resolve<T>(
		params: &QueryParams,
		names: &ParamNames,
		columns: &[Column<T>],
		options: &TableOptions,
	) -> Self {
		let search_term = params.get(&names.search_by).map(str::to_string);
		let search = resolve_search(params, names, columns, options, search_term.as_deref());
		let (sort, header_sort) = resolve_sort(params, names, columns);
		let take = params.get_int(&names.take).unwrap_or(options.default_take);
		let skip = params.get_int(&names.skip).unwrap_or(options.default_skip);

		Self {
			search_term,
			search,
			sort,
			header_sort,
			take,
			skip,
		}
	}

	/// Index of the sort column, if any
	pub fn sort_column(&self) -> Option<usize> {
		self.sort.map(|s| s.column)
	}

	/// Returns true if `column` is the active sort column
	pub fn is_sorted_by(&self, column: usize) -> bool {
		self.sort_column() == Some(column)
	}
}

fn resolve_search<T>(
	params: &QueryParams,
	names: &ParamNames,
	columns: &[Column<T>],
	options: &TableOptions,
	term: Option<&str>,
) -> Option<ActiveSearch> {
	let term = term?;
	if !options.search_term_criteria.accepts(term) {
		return None;
	}
	let index = column_index(params, &names.search_col, columns.len())?;
	if !columns[index].is_searchable() {
		tracing::trace!(column = index, "search column is not searchable");
		return None;
	}
	Some(ActiveSearch {
		term: term.to_string(),
		column: index,
	})
}

/// Returns the sort to apply and the sort the header reflects
fn resolve_sort<T>(
	params: &QueryParams,
	names: &ParamNames,
	columns: &[Column<T>],
) -> (Option<SortState>, Option<SortState>) {
	if columns.is_empty() {
		return (None, None);
	}

	let default = columns
		.iter()
		.position(|c| c.has_setting(ColumnSetting::DefaultSort))
		.unwrap_or(0);

	if !params.contains(&names.sort_by) {
		let sort = SortState {
			column: default,
			order: columns[default].initial_order(),
		};
		return (Some(sort), Some(sort));
	}

	let requested = column_index(params, &names.sort_by, columns.len());
	let order = params
		.get(&names.sort_order)
		.map_or(SortOrder::Ascending, SortOrder::from_param);
	let sort = SortState {
		column: requested.unwrap_or(default),
		order,
	};
	let header_sort = requested.map(|column| SortState { column, order });
	(Some(sort), header_sort)
}

/// Parses `key` as an index into a table with `len` columns
fn column_index(params: &QueryParams, key: &str, len: usize) -> Option<usize> {
	let index = params.get_int(key)?;
	match usize::try_from(index) {
		Ok(index) if index < len => Some(index),
		_ => {
			tracing::trace!(key, index, "column index out of range");
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::*;

	struct Item {
		name: &'static str,
	}

	fn columns() -> Vec<Column<Item>> {
		let mut columns = vec![
			Column::new("Name", |i: &Item| i.name)
				.sort_by(|i: &Item| i.name)
				.search(|i: &Item, term: &str| i.name.contains(term)),
			Column::new("Length", |i: &Item| i.name.len()).sort_by(|i: &Item| i.name.len()),
			Column::new("Plain", |_: &Item| "x"),
		];
		for (index, column) in columns.iter_mut().enumerate() {
			column.set_index(index);
		}
		columns
	}

	fn resolve(query: &str, columns: &[Column<Item>]) -> ResolvedQueryState {
		ResolvedQueryState::resolve(
			&QueryParams::parse(query),
			&ParamNames::default(),
			columns,
			&TableOptions::default(),
		)
	}

	#[rstest]
	fn test_no_params_uses_defaults() {
		// Arrange
		let columns = columns();

		// Act
		let state = resolve("", &columns);

		// Assert
		assert_eq!(state.search, None);
		assert_eq!(state.search_term, None);
		assert_eq!(
			state.sort,
			Some(SortState {
				column: 0,
				order: SortOrder::Ascending
			})
		);
		assert_eq!((state.take, state.skip), (20, 0));
	}

	#[rstest]
	fn test_active_search() {
		let columns = columns();
		let state = resolve("searchBy=foo&searchCol=0", &columns);
		assert_eq!(
			state.search,
			Some(ActiveSearch {
				term: "foo".to_string(),
				column: 0
			})
		);
	}

	#[rstest]
	#[case::missing_column("searchBy=foo")]
	#[case::non_integer_column("searchBy=foo&searchCol=x")]
	#[case::unknown_column("searchBy=foo&searchCol=9")]
	#[case::negative_column("searchBy=foo&searchCol=-1")]
	#[case::unsearchable_column("searchBy=foo&searchCol=1")]
	#[case::empty_term("searchBy=&searchCol=0")]
	fn test_search_disabled(#[case] query: &str) {
		let columns = columns();
		let state = resolve(query, &columns);
		assert_eq!(state.search, None);
	}

	#[rstest]
	fn test_inactive_search_keeps_raw_term() {
		let columns = columns();
		let state = resolve("searchBy=foo&searchCol=9", &columns);
		assert_eq!(state.search_term.as_deref(), Some("foo"));
	}

	#[rstest]
	fn test_custom_search_criteria() {
		let columns = columns();
		let options = TableOptions::new().search_term_criteria(|term| term.len() > 3);
		let state = ResolvedQueryState::resolve(
			&QueryParams::parse("searchBy=foo&searchCol=0"),
			&ParamNames::default(),
			&columns,
			&options,
		);
		assert_eq!(state.search, None);
	}

	#[rstest]
	#[case("sortBy=1", 1, SortOrder::Ascending)]
	#[case("sortBy=1&sortOrder=desc", 1, SortOrder::Descending)]
	#[case("sortBy=1&sortOrder=asc", 1, SortOrder::Ascending)]
	#[case("sortBy=1&sortOrder=sideways", 1, SortOrder::Ascending)]
	#[case("sortBy=7&sortOrder=desc", 0, SortOrder::Descending)]
	#[case("sortBy=abc", 0, SortOrder::Ascending)]
	#[case("sortOrder=desc", 0, SortOrder::Ascending)]
	fn test_sort_resolution(#[case] query: &str, #[case] column: usize, #[case] order: SortOrder) {
		let columns = columns();
		let state = resolve(query, &columns);
		assert_eq!(state.sort, Some(SortState { column, order }));
	}

	#[rstest]
	#[case::no_sort_param("", Some((0, SortOrder::Ascending)))]
	#[case::valid_column("sortBy=1&sortOrder=desc", Some((1, SortOrder::Descending)))]
	#[case::unknown_column("sortBy=7&sortOrder=desc", None)]
	#[case::non_integer_column("sortBy=abc", None)]
	fn test_header_sort_follows_url(#[case] query: &str, #[case] expected: Option<(usize, SortOrder)>) {
		let columns = columns();
		let state = resolve(query, &columns);
		assert_eq!(
			state.header_sort,
			expected.map(|(column, order)| SortState { column, order })
		);
	}

	#[rstest]
	fn test_default_sort_flag_with_first_sort_desc() {
		// Arrange
		let mut columns = columns();
		let flagged = Column::new("Flagged", |i: &Item| i.name)
			.sort_by(|i: &Item| i.name)
			.default_sort()
			.first_sort_desc();
		columns[2] = flagged;
		columns[2].set_index(2);

		// Act
		let state = resolve("sortOrder=asc", &columns);

		// Assert
		assert_eq!(
			state.sort,
			Some(SortState {
				column: 2,
				order: SortOrder::Descending
			})
		);
	}

	#[rstest]
	fn test_zero_columns_has_no_sort() {
		let columns: Vec<Column<Item>> = Vec::new();
		assert_eq!(resolve("sortBy=0", &columns).sort, None);
	}

	#[rstest]
	#[case("take=10&skip=20", 10, 20)]
	#[case("take=-5&skip=-1", -5, -1)]
	#[case("take=0", 0, 0)]
	#[case("take=lots&skip=1e3", 20, 0)]
	#[case("take=3000000000&skip=2147483648", 20, 0)]
	fn test_pagination_passthrough(#[case] query: &str, #[case] take: i64, #[case] skip: i64) {
		let columns = columns();
		let state = resolve(query, &columns);
		assert_eq!((state.take, state.skip), (take, skip));
	}

	#[rstest]
	fn test_prefixed_names_ignore_unprefixed_params() {
		let columns = columns();
		let state = ResolvedQueryState::resolve(
			&QueryParams::parse("take=5&users-take=7&sortBy=1"),
			&ParamNames::new(Some("users")),
			&columns,
			&TableOptions::default(),
		);
		assert_eq!(state.take, 7);
		assert_eq!(state.sort_column(), Some(0));
	}

	proptest! {
		#[test]
		fn prop_resolver_never_targets_missing_column(query in "[a-zA-Z0-9=&-]{0,40}") {
			let columns = columns();
			let state = resolve(&query, &columns);
			if let Some(sort) = state.sort {
				prop_assert!(sort.column < columns.len());
			}
			if let Some(search) = state.search {
				prop_assert!(columns[search.column].is_searchable());
			}
		}

		#[test]
		fn prop_default_sort_column_is_chosen(flag in 0usize..3) {
			let mut columns = columns();
			let replacement = Column::new("Flagged", |i: &Item| i.name).default_sort();
			columns[flag] = replacement;
			columns[flag].set_index(flag);
			let state = resolve("take=10", &columns);
			prop_assert_eq!(state.sort_column(), Some(flag));
		}
	}
}
