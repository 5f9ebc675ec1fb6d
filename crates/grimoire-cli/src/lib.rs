//! CLI library components for the grimoire tool.

pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
