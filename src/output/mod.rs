//! Output formatting for subnet reports.
//!
//! - [`terminal`] - plain-text report with the FYI annotation block

mod terminal;

pub use terminal::{format_report, wrap_text, WRAP_WIDTH};
