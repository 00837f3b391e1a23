//! HTML primitives for tablekit
//!
//! Server-side markup is assembled as strings. This crate keeps the two
//! kinds of string apart: [`Html`] is trusted markup that is emitted as-is,
//! while plain `&str` text always goes through [`escape`] on its way in.
//!
//! - [`escape`]: escapes the five HTML special characters
//! - [`Attributes`]: ordered attribute map with class merging
//! - [`Element`]: fluent element builder rendering to [`Html`]
//!
//! # Example
//!
//! ```
//! use tablekit_html::Element;
//!
//! let link = Element::new("a")
//!     .attr("href", "/items?page=2")
//!     .add_class("page-link")
//!     .text("2 & more")
//!     .render();
//!
//! assert_eq!(
//!     link.as_str(),
//!     r#"<a href="/items?page=2" class="page-link">2 &amp; more</a>"#
//! );
//! ```

#![warn(missing_docs)]

pub mod attributes;
pub mod element;
pub mod escape;
pub mod fragment;

pub use attributes::Attributes;
pub use element::Element;
pub use escape::escape;
pub use fragment::Html;
