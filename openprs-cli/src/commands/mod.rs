//! CLI command implementations

pub mod config;
pub mod list;

pub use list::ListArgs;
