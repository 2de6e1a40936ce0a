//! Result formatters for command output.

pub mod stale_apps;

pub use stale_apps::{StaleAppsReport, format_timestamp};
