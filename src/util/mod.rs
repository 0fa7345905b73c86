//! Browser glue helpers: breakpoint subscription, roster view persistence,
//! and query-string assembly for navigation targets.

pub mod breakpoint;
pub mod query;
pub mod view_mode;
