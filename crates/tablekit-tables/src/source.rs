//! Data sources
//!
//! A render reads its source exactly once: [`TableSource::filter_rows`]
//! applies the optional search predicate and materializes the result. The
//! total, the sort and the page slice are all computed on that cached
//! vector, so the pager total and the displayed rows always agree even when
//! the underlying source would not enumerate the same way twice.

use std::collections::VecDeque;

/// A collection a table can render
pub trait TableSource<T> {
	/// Materializes the rows matching `predicate`, or all rows if `None`
	fn filter_rows(self, predicate: Option<&dyn Fn(&T) -> bool>) -> Vec<T>;
}

impl<T> TableSource<T> for Vec<T> {
	fn filter_rows(mut self, predicate: Option<&dyn Fn(&T) -> bool>) -> Vec<T> {
		if let Some(predicate) = predicate {
			self.retain(|item| predicate(item));
		}
		self
	}
}

impl<T> TableSource<T> for VecDeque<T> {
	fn filter_rows(self, predicate: Option<&dyn Fn(&T) -> bool>) -> Vec<T> {
		Vec::from(self).filter_rows(predicate)
	}
}

impl<T: Clone> TableSource<T> for &[T] {
	fn filter_rows(self, predicate: Option<&dyn Fn(&T) -> bool>) -> Vec<T> {
		match predicate {
			Some(predicate) => self.iter().filter(|item| predicate(item)).cloned().collect(),
			None => self.to_vec(),
		}
	}
}

impl<T: Clone> TableSource<T> for &Vec<T> {
	fn filter_rows(self, predicate: Option<&dyn Fn(&T) -> bool>) -> Vec<T> {
		self.as_slice().filter_rows(predicate)
	}
}

/// Adapts any iterator into a [`TableSource`]
///
/// The iterator is consumed lazily up to the filter and collected once.
///
/// # Example
///
/// ```
/// use tablekit_tables::source::{IterSource, TableSource};
///
/// let even = |n: &u32| n % 2 == 0;
/// let rows = IterSource::new(1..=6u32).filter_rows(Some(&even));
/// assert_eq!(rows, vec![2, 4, 6]);
/// ```
#[derive(Debug, Clone)]
pub struct IterSource<I>(I);

impl<I: Iterator> IterSource<I> {
	/// Wraps an iterator
	pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
		Self(iter.into_iter())
	}
}

impl<I: Iterator> TableSource<I::Item> for IterSource<I> {
	fn filter_rows(self, predicate: Option<&dyn Fn(&I::Item) -> bool>) -> Vec<I::Item> {
		match predicate {
			Some(predicate) => self.0.filter(|item| predicate(item)).collect(),
			None => self.0.collect(),
		}
	}
}
