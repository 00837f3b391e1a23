//! Markup for the table parts
//!
//! Each function renders one part (header, body, search panel, pager) from
//! an explicit [`RenderContext`]. Nothing here reads the request: the state
//! is resolved once by [`crate::Table::render`] and passed down.

use crate::column::Column;
use crate::error::Result;
use crate::options::TableOptions;
use crate::pager::PagerMath;
use crate::params::ParamNames;
use crate::state::{ResolvedQueryState, SortOrder};
use tablekit_html::{Attributes, Element, Html};
use tablekit_urls::LinkBuilder;

/// Everything a part needs to render, resolved once per request
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
	/// Resolved query state
	pub state: &'a ResolvedQueryState,
	/// Parameter names of the table
	pub names: &'a ParamNames,
	/// Table options
	pub options: &'a TableOptions,
	/// Link builder over the current request
	pub links: &'a LinkBuilder,
	/// Row count after filtering, before pagination
	pub total: usize,
}

/// A header sort link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortLink {
	/// Link target
	pub href: String,
	/// Direction the link sorts in
	pub target: SortOrder,
	/// Direction to show a glyph for; set only on the column the URL sorts by
	pub glyph: Option<SortOrder>,
}

/// Computes the header link of a column; `None` for unsortable columns
///
/// The current column is the one the URL sorts by, or the default sort
/// column when the URL names none; a `sortBy` naming no column leaves every
/// header inactive. A column that is not current links to its initial
/// direction (descending for [`crate::ColumnSetting::FirstSortDesc`], else
/// ascending) without a glyph. The current column links to the opposite of
/// its direction and shows a glyph for it.
pub fn sort_link<T>(column: &Column<T>, ctx: &RenderContext<'_>) -> Option<SortLink> {
	if !column.is_sortable() {
		return None;
	}

	let current = ctx
		.state
		.header_sort
		.filter(|sort| sort.column == column.index())
		.map(|sort| sort.order);
	let target = match current {
		Some(order) => order.toggle(),
		None => column.initial_order(),
	};
	let href = ctx.links.with(&[
		(ctx.names.sort_by.as_str(), column.index().to_string()),
		(ctx.names.sort_order.as_str(), target.as_param().to_string()),
	]);

	Some(SortLink {
		href,
		target,
		glyph: current,
	})
}

/// Renders `<thead>` with one `<th>` per column
pub fn header<T>(columns: &[Column<T>], ctx: &RenderContext<'_>) -> Html {
	let cells = columns.iter().map(|column| {
		let th = Element::new("th");
		match sort_link(column, ctx) {
			None => th.text(column.name()),
			Some(link) => {
				let glyph = match link.glyph {
					Some(SortOrder::Ascending) => ctx.options.ascending_character.as_str(),
					Some(SortOrder::Descending) => ctx.options.descending_character.as_str(),
					None => "",
				};
				th.child(
					Element::new("a")
						.attr("href", link.href)
						.text(column.name())
						.text(glyph),
				)
			}
		}
	});

	Element::new("thead")
		.child(Element::new("tr").children(cells))
		.render()
}

/// Renders `<tbody>` with one row per item and one cell per column
pub fn body<T>(
	columns: &[Column<T>],
	rows: &[T],
	row_attributes: Option<&dyn Fn(&T) -> Attributes>,
) -> Html {
	let rows = rows.iter().map(|item| {
		let mut tr = Element::new("tr");
		if let Some(attributes) = row_attributes {
			tr = tr.merge_attributes(attributes(item));
		}
		tr.children(columns.iter().map(|column| {
			let mut td = Element::new("td");
			if let Some(attributes) = column.attributes_for(item) {
				td = td.merge_attributes(attributes);
			}
			td.child(column.render_cell(item).into_html())
		}))
	});

	Element::new("tbody").children(rows).render()
}

/// Renders the search form; `None` when no column is searchable
pub fn search_panel<T>(columns: &[Column<T>], ctx: &RenderContext<'_>) -> Option<Html> {
	if !columns.iter().any(Column::is_searchable) {
		return None;
	}

	let active_column = ctx.state.search.as_ref().map(|search| search.column);
	let options = columns.iter().filter(|c| c.is_searchable()).map(|column| {
		Element::new("option")
			.attr("value", column.index().to_string())
			.attr_if(active_column == Some(column.index()), "selected", "selected")
			.text(column.name())
	});
	let column_select = Element::new("select")
		.add_class("form-control")
		.attr("name", ctx.names.search_col.as_str())
		.children(options);

	let mut term_input = Element::new("input")
		.add_class("form-control")
		.attr("type", "text");
	if let Some(term) = &ctx.state.search_term {
		term_input = term_input.attr("value", term.as_str());
	}
	let term_input = term_input.attr("name", ctx.names.search_by.as_str());

	let buttons = Element::new("div")
		.add_class("input-group-append")
		.child(
			Element::new("input")
				.add_class("btn btn-warning")
				.attr("type", "reset")
				.attr("value", ctx.options.search_clear_text.as_str()),
		)
		.child(
			Element::new("button")
				.add_class("btn btn-primary")
				.attr("type", "submit")
				.child(Html::raw(ctx.options.search_button_text.as_str())),
		);

	let row = Element::new("div")
		.add_class("row")
		.add_class(ctx.options.search_alignment.css_class())
		.child(Element::new("div").add_class("col-md-auto").child(column_select))
		.child(
			Element::new("div").add_class("col-md-auto").child(
				Element::new("div")
					.add_class("input-group")
					.child(term_input)
					.child(buttons),
			),
		);

	Some(
		Element::new("form")
			.add_class("mb-2")
			.attr("method", "GET")
			.attr("action", ctx.links.without_query())
			.child(row)
			.render(),
	)
}

/// Renders the page-size selector and page links; `None` when nothing matched
///
/// # Errors
///
/// [`crate::TableError::ZeroPageSize`] if rows matched and the page size is
/// zero.
pub fn pager(ctx: &RenderContext<'_>) -> Result<Option<Html>> {
	if ctx.total == 0 {
		return Ok(None);
	}

	let math = PagerMath::new(ctx.total, ctx.state.take, ctx.state.skip)?;
	let take_param = ctx.names.take.as_str();
	let skip_param = ctx.names.skip.as_str();
	let alignment = ctx.options.pagination_alignment.css_class();

	let size_options = ctx.options.page_size_options.iter().map(|&size| {
		Element::new("option")
			.attr("value", ctx.links.with_param(take_param, size))
			.attr_if(size == ctx.state.take, "selected", "selected")
			.text(&size.to_string())
	});
	let size_select = Element::new("select")
		.add_class("form-control d-inline")
		.attr("onchange", "window.location=this.value;")
		.children(size_options);

	let first = page_item(
		&ctx.options.first_page_text,
		ctx.links.with_param(skip_param, 0),
		false,
	);
	let pages = math.pages().map(|page| {
		page_item(
			&page.number.to_string(),
			ctx.links.with_param(skip_param, page.skip),
			page.active,
		)
	});
	let last = page_item(
		&ctx.options.last_page_text,
		ctx.links.with_param(skip_param, math.last_page_skip()),
		false,
	);

	let list = Element::new("ul")
		.add_class("pagination")
		.add_class(alignment)
		.child(first)
		.children(pages)
		.child(last);

	Ok(Some(
		Element::new("div")
			.add_class("row")
			.add_class(alignment)
			.child(Element::new("div").add_class("col-md-auto").child(size_select))
			.child(
				Element::new("div")
					.add_class("col-md-auto")
					.child(Element::new("nav").child(list)),
			)
			.render(),
	))
}

fn page_item(label: &str, href: String, active: bool) -> Element {
	let mut li = Element::new("li").add_class("page-item");
	if active {
		li = li.add_class("active");
	}
	li.child(
		Element::new("a")
			.add_class("page-link")
			.attr("href", href)
			.text(label),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::state::SortState;
	use rstest::*;
	use tablekit_urls::RequestUrl;

	struct Row {
		n: i32,
	}

	fn columns() -> Vec<Column<Row>> {
		let mut columns = vec![
			Column::new("N", |r: &Row| r.n).sort_by(|r: &Row| r.n),
			Column::new("Desc first", |r: &Row| r.n)
				.sort_by(|r: &Row| r.n)
				.first_sort_desc(),
			Column::new("Static", |_: &Row| "-"),
		];
		for (index, column) in columns.iter_mut().enumerate() {
			column.set_index(index);
		}
		columns
	}

	fn links(url: &str) -> LinkBuilder {
		LinkBuilder::from_request(&RequestUrl::parse(url).unwrap()).unwrap()
	}

	fn state(column: usize, order: SortOrder) -> ResolvedQueryState {
		ResolvedQueryState {
			search_term: None,
			search: None,
			sort: Some(SortState { column, order }),
			header_sort: Some(SortState { column, order }),
			take: 10,
			skip: 0,
		}
	}

	#[rstest]
	fn test_active_column_toggles() {
		// Arrange
		let columns = columns();
		let state = state(0, SortOrder::Ascending);
		let links = links("http://localhost/t?sortBy=0&sortOrder=asc");
		let options = TableOptions::default();
		let names = ParamNames::default();
		let ctx = RenderContext {
			state: &state,
			names: &names,
			options: &options,
			links: &links,
			total: 3,
		};

		// Act
		let link = sort_link(&columns[0], &ctx).unwrap();

		// Assert
		assert_eq!(link.target, SortOrder::Descending);
		assert_eq!(link.glyph, Some(SortOrder::Ascending));
		assert_eq!(link.href, "http://localhost/t?sortBy=0&sortOrder=desc");
	}

	#[rstest]
	#[case(1, SortOrder::Descending)]
	#[case(0, SortOrder::Ascending)]
	fn test_inactive_column_uses_initial_order(#[case] index: usize, #[case] expected: SortOrder) {
		let columns = columns();
		let state = state(2, SortOrder::Ascending);
		let links = links("http://localhost/t");
		let options = TableOptions::default();
		let names = ParamNames::default();
		let ctx = RenderContext {
			state: &state,
			names: &names,
			options: &options,
			links: &links,
			total: 3,
		};

		let link = sort_link(&columns[index], &ctx).unwrap();

		assert_eq!(link.target, expected);
		assert_eq!(link.glyph, None);
	}

	#[rstest]
	fn test_unsortable_column_has_plain_header() {
		let columns = columns();
		let state = state(0, SortOrder::Ascending);
		let links = links("http://localhost/t");
		let options = TableOptions::default();
		let names = ParamNames::default();
		let ctx = RenderContext {
			state: &state,
			names: &names,
			options: &options,
			links: &links,
			total: 3,
		};

		assert!(sort_link(&columns[2], &ctx).is_none());
		let head = header(&columns, &ctx);
		assert!(head.as_str().contains("<th>Static</th>"));
		assert!(head.as_str().contains("N▲</a>"));
	}

	#[rstest]
	fn test_body_escapes_text_and_merges_attributes() {
		// Arrange
		let columns = vec![
			Column::new("Label", |r: &Row| format!("<{}>", r.n))
				.cell_attributes(|r: &Row| Attributes::from([("data-n", r.n.to_string())])),
		];
		let rows = vec![Row { n: 1 }];
		let striped = |_: &Row| Attributes::from([("class", "striped")]);

		// Act
		let html = body(&columns, &rows, Some(&striped));

		// Assert
		assert_eq!(
			html.as_str(),
			r#"<tbody><tr class="striped"><td data-n="1">&lt;1&gt;</td></tr></tbody>"#
		);
	}

	#[rstest]
	fn test_pager_hidden_when_nothing_matches() {
		let state = state(0, SortOrder::Ascending);
		let links = links("http://localhost/t");
		let options = TableOptions::default();
		let names = ParamNames::default();
		let ctx = RenderContext {
			state: &state,
			names: &names,
			options: &options,
			links: &links,
			total: 0,
		};

		assert!(pager(&ctx).unwrap().is_none());
	}

	#[rstest]
	fn test_search_panel_absent_without_searchable_columns() {
		let columns = columns();
		let state = state(0, SortOrder::Ascending);
		let links = links("http://localhost/t");
		let options = TableOptions::default();
		let names = ParamNames::default();
		let ctx = RenderContext {
			state: &state,
			names: &names,
			options: &options,
			links: &links,
			total: 3,
		};

		assert!(search_panel(&columns, &ctx).is_none());
	}
}
