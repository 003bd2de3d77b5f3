//! Application-level utilities for the Omer CLI.
//!
//! This module provides:
//! - Application context for unified CLI + config handling
//! - Path resolution for the config file

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
