//! Tables module.
//!
//! Column definitions, options, query state resolution and rendering.

#[cfg(feature = "tables")]
pub use tablekit_tables::*;
