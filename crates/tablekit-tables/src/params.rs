//! Query parameter names
//!
//! All names are derived once from the optional table id, so several tables
//! can live on one page without reading each other's parameters.

/// The query parameter names a table reads and writes
///
/// # Examples
///
/// ```
/// use tablekit_tables::ParamNames;
///
/// assert_eq!(ParamNames::new(None).sort_by, "sortBy");
/// assert_eq!(ParamNames::new(Some("users")).sort_by, "users-sortBy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamNames {
	/// Raw search term
	pub search_by: String,
	/// Index of the column to search
	pub search_col: String,
	/// Index of the column to sort by
	pub sort_by: String,
	/// Sort direction, `asc` or `desc`
	pub sort_order: String,
	/// Page size
	pub take: String,
	/// Page offset
	pub skip: String,
}

impl ParamNames {
	/// Derives the names for a table, prefixing them with `{id}-` if given
	pub fn new(id: Option<&str>) -> Self {
		let prefix = id.map(|id| format!("{}-", id)).unwrap_or_default();
		let name = |base: &str| format!("{}{}", prefix, base);
		Self {
			search_by: name("searchBy"),
			search_col: name("searchCol"),
			sort_by: name("sortBy"),
			sort_order: name("sortOrder"),
			take: name("take"),
			skip: name("skip"),
		}
	}
}

impl Default for ParamNames {
	fn default() -> Self {
		Self::new(None)
	}
}
