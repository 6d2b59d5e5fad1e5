//! # kconf-core
//!
//! Shared library for the KWin config-update migration filters.  It contains
//! the migration rule type, the deletion directive it produces, the table of
//! built-in rules, and a streaming filter that runs a rule set over any
//! line-oriented reader.
//!
//! This crate has no knowledge of processes, command lines, or environment
//! variables.  The `kconf-update` crate wires it to standard input/output.
//!
//! # Architecture overview (for beginners)
//!
//! When KWin is upgraded, some values stored in `kwinrc` stop meaning
//! anything (a removed task switcher layout, a removed compositing backend).
//! The desktop's config-update tool runs small "migration filters" over the
//! old file.  A filter reads every line and prints `# DELETE <Key>` for each
//! key that still holds a removed value.  The host tool then deletes those
//! keys so the built-in defaults take over.
//!
//! - **`domain`** – Pure types: [`MigrationRule`], [`DeletionDirective`],
//!   [`RuleSet`].  Applying a rule to a line is a pure function.
//!
//! - **`rules`** – The built-in rules shipped with KWin
//!   ([`rules::COVER_SWITCH`], [`rules::XRENDER_BACKEND`]).
//!
//! - **`filter`** – Reads lines from a `BufRead`, applies a [`RuleSet`], and
//!   writes directives to a `Write`.

pub mod domain;
pub mod filter;
pub mod rules;

// Re-export the most-used types at the crate root so callers can write
// `kconf_core::MigrationRule` instead of `kconf_core::domain::rule::MigrationRule`.
pub use domain::directive::{DeletionDirective, DIRECTIVE_PREFIX};
pub use domain::rule::{ConfigLine, MigrationRule};
pub use domain::rule_set::RuleSet;
pub use filter::stream::{filter_lines, FilterError, FilterStats};
