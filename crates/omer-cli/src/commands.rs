//! Command handlers, one module per command group.

pub mod config;
pub mod days;
pub mod export;
pub mod info;
pub mod lookup;
pub mod misc;
pub mod status;
