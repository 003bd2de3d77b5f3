//! UI primitives for the Omer CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens, owo-colors styles, symbols
//! - **Render**: Tables, headers, receipts, hints, formatted text
//! - **Format**: String utilities (truncate, wrap)
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{header, kv, UiContext};
//!
//! let ctx = UiContext::from_env(cli.json, cli.plain, cli.no_color, cli.ascii);
//!
//! if ctx.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! println!("{}", header(&ctx, "day", Some("33")));
//! println!("{}", kv(&ctx, "Hebrew date", "18 Iyyar"));
//! ```

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use theme::Badge;

pub use render::{
    badge, blank_line, divider, header, header_with_context, hint, kv, print, print_error,
    receipt, simple_table, table, Column,
};
