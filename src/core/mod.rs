/// Command parsing and dispatch
pub mod command;

/// Column expansion over a stream of rows
pub mod expand;

/// Row-level plumbing: line endings, tab fields, the value separator
pub mod row;
