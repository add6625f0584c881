//! Query processing logic.
//!
//! - [`validate`] - argument validation into a [`Query`]
//! - [`annotate`] - reserved-range matching

mod annotate;
mod validate;

// Re-export public functions
pub use annotate::{category_priority, match_reserved, DEFAULT_PRIORITY};
pub use validate::{parse_args, Query};
