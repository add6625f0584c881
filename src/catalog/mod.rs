//! Reserved-range catalog.
//!
//! - [`loader`] - reading the JSON catalog from disk or the built-in copy

mod loader;

// Re-export public functions
pub use loader::{builtin_catalog, load_catalog, parse_catalog, read_catalog};
