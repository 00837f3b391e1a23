//! Pager math
//!
//! Offsets and page counts for the page-link list, computed over the
//! post-filter total. Values come straight from the URL, so negative sizes
//! and offsets are accepted and follow truncating integer division; only a
//! zero page size is rejected.

use crate::error::{Result, TableError};

/// One entry in the page-link list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
	/// 1-based page number shown as the link label
	pub number: i64,
	/// Offset the link navigates to
	pub skip: i64,
	/// Whether this is the current page
	pub active: bool,
}

/// Page arithmetic for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerMath {
	total: i64,
	take: i64,
	skip: i64,
}

impl PagerMath {
	/// Creates the pager for `total` rows shown `take` at a time from `skip`
	///
	/// # Errors
	///
	/// [`TableError::ZeroPageSize`] if `take` is zero.
	pub fn new(total: usize, take: i64, skip: i64) -> Result<Self> {
		if take == 0 {
			tracing::warn!(total, skip, "pager requested with a zero page size");
			return Err(TableError::ZeroPageSize);
		}
		Ok(Self {
			total: i64::try_from(total).unwrap_or(i64::MAX),
			take,
			skip,
		})
	}

	/// Zero-based index of the current page
	pub fn active_page(&self) -> i64 {
		self.skip.wrapping_div(self.take)
	}

	/// Offset of the last page
	///
	/// When the total is an exact multiple of the page size, the last page is
	/// the last full one rather than an empty trailing page.
	pub fn last_page_skip(&self) -> i64 {
		let full_pages = self.total / self.take;
		let trailing_empty = i64::from(self.total % self.take == 0);
		(full_pages - trailing_empty) * self.take
	}

	/// The page links, in order
	///
	/// Candidate pages run over `0..=total / take`; a page is kept while its
	/// offset is below the total. For a positive page size this yields
	/// exactly `ceil(total / take)` pages.
	pub fn pages(&self) -> impl Iterator<Item = PageLink> + '_ {
		let active = self.active_page();
		(0..=self.total / self.take)
			.filter(move |page| page * self.take < self.total)
			.map(move |page| PageLink {
				number: page + 1,
				skip: page * self.take,
				active: page == active,
			})
	}
}
