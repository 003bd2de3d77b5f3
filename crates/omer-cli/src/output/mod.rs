//! Output formatting helpers for the CLI.
//!
//! This module turns query results into JSON values and text blocks.

mod json;
mod text;

// Re-export public API
pub use json::{day_json, gregorian_lookup_json, print_json, settings_json, validation_json};
pub use text::{print_day, print_days, print_recitation};
