//! The table itself

use crate::column::{Column, ColumnSetting};
use crate::error::{Result, TableError};
use crate::options::TableOptions;
use crate::params::ParamNames;
use crate::render::{self, RenderContext};
use crate::source::TableSource;
use crate::state::ResolvedQueryState;
use std::fmt;
use tablekit_html::{Attributes, Element, Html};
use tablekit_urls::{LinkBuilder, QueryParams, RequestContext};

type RowAttributesFn<T> = Box<dyn Fn(&T) -> Attributes>;

/// One page of rows, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePage<T> {
	/// Rows of the current page, sorted
	pub rows: Vec<T>,
	/// Number of rows that matched the search, before pagination
	pub total: usize,
}

/// A sortable, searchable, paginated table over rows of type `T`
///
/// A table is configured once (columns, options, attributes) and rendered
/// per request. Rendering reads the request's query string, resolves the
/// view state, and runs the pipeline below on the source:
///
/// ```mermaid
/// flowchart LR
///     Q[query string] --> R[resolve state]
///     R --> F[filter by search]
///     F --> T[count total]
///     T --> S[sort]
///     S --> P[skip / take]
///     P --> H[render markup]
///     T --> H
/// ```
///
/// # Example
///
/// ```
/// use tablekit_tables::{Column, Table};
/// use tablekit_urls::RequestUrl;
///
/// let request = RequestUrl::parse("http://localhost/fruit?sortOrder=desc&sortBy=0")?;
///
/// let mut table = Table::new();
/// table.add_column(Column::new("Fruit", |f: &String| f.clone()).sort_by(|f: &String| f.clone()))?;
///
/// let fruit: Vec<String> = ["apple", "cherry", "banana"].map(String::from).into();
/// let html = table.render(fruit, &request)?;
/// let markup = html.as_str();
///
/// assert!(markup.find("cherry") < markup.find("banana"));
/// assert!(markup.find("banana") < markup.find("apple"));
/// # Ok::<(), tablekit_tables::TableError>(())
/// ```
#[cfg_attr(doc, aquamarine::aquamarine)]
pub struct Table<T> {
	id: Option<String>,
	names: ParamNames,
	columns: Vec<Column<T>>,
	options: TableOptions,
	attributes: Attributes,
	row_attributes: Option<RowAttributesFn<T>>,
}

impl<T> Table<T> {
	/// Creates a table with unprefixed query parameters
	pub fn new() -> Self {
		Self::build(None)
	}

	/// Creates a table whose query parameters are prefixed with `{id}-`
	///
	/// Use one id per table when a page shows several.
	pub fn with_id(id: impl Into<String>) -> Self {
		Self::build(Some(id.into()))
	}

	fn build(id: Option<String>) -> Self {
		Self {
			names: ParamNames::new(id.as_deref()),
			id,
			columns: Vec::new(),
			options: TableOptions::default(),
			attributes: Attributes::new(),
			row_attributes: None,
		}
	}

	/// The table id, if any
	pub fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	/// The query parameter names this table reads and writes
	pub fn param_names(&self) -> &ParamNames {
		&self.names
	}

	/// The table options
	pub fn options(&self) -> &TableOptions {
		&self.options
	}

	/// Mutable access to the table options
	pub fn options_mut(&mut self) -> &mut TableOptions {
		&mut self.options
	}

	/// Replaces the table options
	pub fn set_options(&mut self, options: TableOptions) -> &mut Self {
		self.options = options;
		self
	}

	/// Merges attributes onto the `<table>` element
	///
	/// Classes are appended to the built-in `table` class.
	pub fn attributes(&mut self, attributes: Attributes) -> &mut Self {
		self.attributes.merge(attributes);
		self
	}

	/// Sets per-row attributes
	pub fn row_attributes<F>(&mut self, attributes: F) -> &mut Self
	where
		F: Fn(&T) -> Attributes + 'static,
	{
		self.row_attributes = Some(Box::new(attributes));
		self
	}

	/// Appends a column; its index is its position
	///
	/// # Errors
	///
	/// [`TableError::DuplicateDefaultSort`] if the column is flagged
	/// [`ColumnSetting::DefaultSort`] and another column already is.
	pub fn add_column(&mut self, mut column: Column<T>) -> Result<&mut Self> {
		if column.has_setting(ColumnSetting::DefaultSort)
			&& let Some(first) = self
				.columns
				.iter()
				.find(|c| c.has_setting(ColumnSetting::DefaultSort))
		{
			return Err(TableError::DuplicateDefaultSort {
				first: first.index(),
				second: self.columns.len(),
			});
		}
		column.set_index(self.columns.len());
		self.columns.push(column);
		Ok(self)
	}

	/// The columns, in display order
	pub fn columns(&self) -> &[Column<T>] {
		&self.columns
	}

	/// Resolves the view state for a request
	pub fn resolve<R: RequestContext + ?Sized>(&self, request: &R) -> ResolvedQueryState {
		self.resolve_params(&QueryParams::parse(request.query_string()))
	}

	/// Resolves the view state from already-parsed parameters
	pub fn resolve_params(&self, params: &QueryParams) -> ResolvedQueryState {
		ResolvedQueryState::resolve(params, &self.names, &self.columns, &self.options)
	}

	/// Filters, counts, sorts and slices `source` according to `state`
	///
	/// The source is read once. A negative offset starts at the first row and
	/// a negative page size yields an empty page.
	pub fn apply<S: TableSource<T>>(&self, source: S, state: &ResolvedQueryState) -> TablePage<T> {
		let search = state
			.search
			.as_ref()
			.and_then(|search| Some((self.columns.get(search.column)?, search.term.as_str())));
		let predicate = search.map(|(column, term)| move |item: &T| column.matches(item, term));
		let predicate: Option<&dyn Fn(&T) -> bool> = match &predicate {
			Some(predicate) => Some(predicate),
			None => None,
		};
		let mut rows = source.filter_rows(predicate);
		let total = rows.len();

		if let Some(sort) = state.sort
			&& let Some(column) = self.columns.get(sort.column)
			&& !column.sort_rows(&mut rows, sort.order)
		{
			tracing::trace!(column = sort.column, "sort column has no sort key, keeping source order");
		}

		let skip = clamp_to_usize(state.skip).min(rows.len());
		rows.drain(..skip);
		rows.truncate(clamp_to_usize(state.take));

		TablePage { rows, total }
	}

	/// Renders the table for `request`
	///
	/// # Errors
	///
	/// - [`TableError::Url`] if the request URL cannot be parsed
	/// - [`TableError::ZeroPageSize`] if rows matched and the page size is
	///   zero
	pub fn render<S, R>(&self, source: S, request: &R) -> Result<Html>
	where
		S: TableSource<T>,
		R: RequestContext + ?Sized,
	{
		let links = LinkBuilder::from_request(request)?;
		let state = self.resolve_params(links.params());
		tracing::debug!(
			table = self.id.as_deref().unwrap_or_default(),
			sort_column = ?state.sort_column(),
			search_column = ?state.search.as_ref().map(|s| s.column),
			take = state.take,
			skip = state.skip,
			"resolved table state"
		);

		let page = self.apply(source, &state);
		tracing::debug!(total = page.total, rows = page.rows.len(), "applied table query");

		let ctx = RenderContext {
			state: &state,
			names: &self.names,
			options: &self.options,
			links: &links,
			total: page.total,
		};
		let search = render::search_panel(&self.columns, &ctx);
		let pager = render::pager(&ctx)?;
		let table = Element::new("table")
			.add_class("table")
			.merge_attributes(self.attributes.clone())
			.child(render::header(&self.columns, &ctx))
			.child(render::body(
				&self.columns,
				&page.rows,
				self.row_attributes.as_deref(),
			));

		let search_placement = self.options.search_placement;
		let pagination_placement = self.options.pagination_placement;
		let mut container = Element::new("div");
		if let Some(search) = &search
			&& search_placement.is_top()
		{
			container = container.child(search.clone());
		}
		if let Some(pager) = &pager
			&& pagination_placement.is_top()
		{
			container = container.child(pager.clone());
		}
		container = container.child(table);
		if let Some(pager) = pager
			&& pagination_placement.is_bottom()
		{
			container = container.child(pager);
		}
		if let Some(search) = search
			&& search_placement.is_bottom()
		{
			container = container.child(search);
		}

		Ok(container.render())
	}
}

impl<T> Default for Table<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> fmt::Debug for Table<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Table")
			.field("id", &self.id)
			.field("columns", &self.columns)
			.field("options", &self.options)
			.field("attributes", &self.attributes)
			.finish_non_exhaustive()
	}
}

fn clamp_to_usize(value: i64) -> usize {
	usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

/// Builds and renders a table in one call
///
/// `setup` receives the empty table to add columns and adjust options.
///
/// # Example
///
/// ```
/// use tablekit_tables::{table, Column, IterSource};
/// use tablekit_urls::RequestUrl;
///
/// let request = RequestUrl::parse("http://localhost/n?nums-take=2")?;
/// let html = table(&request, Some("nums"), IterSource::new(1..=5), |t| {
///     t.add_column(Column::new("N", |n: &i32| *n).sort_by(|n: &i32| *n))?;
///     Ok(())
/// })?;
///
/// // header row plus two body rows
/// assert_eq!(html.as_str().matches("<tr>").count(), 3);
/// # Ok::<(), tablekit_tables::TableError>(())
/// ```
pub fn table<T, S, R, F>(request: &R, id: Option<&str>, source: S, setup: F) -> Result<Html>
where
	S: TableSource<T>,
	R: RequestContext + ?Sized,
	F: FnOnce(&mut Table<T>) -> Result<()>,
{
	let mut table = match id {
		Some(id) => Table::with_id(id),
		None => Table::new(),
	};
	setup(&mut table)?;
	table.render(source, request)
}
