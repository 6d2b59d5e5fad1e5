//! Streaming filter: runs a [`RuleSet`](crate::RuleSet) over a reader.
//!
//! The `stream` sub-module reads lines from any `BufRead`, hands each one to
//! the rule set, and writes the resulting directives to any `Write`.  Where
//! the lines come from (stdin, files) is decided by the caller.

pub mod stream;

pub use stream::{filter_lines, FilterError, FilterStats};
