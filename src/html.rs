//! Markup primitives module.
//!
//! Escaping, attribute maps and the element builder the tables render with.
//!
//! # Examples
//!
//! ```rust
//! use tablekit::html::Element;
//!
//! let cell = Element::new("td").text("a < b").render();
//! assert_eq!(cell.as_str(), "<td>a &lt; b</td>");
//! ```

#[cfg(feature = "html")]
pub use tablekit_html::*;
