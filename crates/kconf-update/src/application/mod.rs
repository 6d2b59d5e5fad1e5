//! Application layer use cases.
//!
//! - **`select_rules`**  – Builds the [`RuleSet`](kconf_core::RuleSet) for a
//!   run from built-in rule names and rules loaded from a file.
//! - **`run_migration`** – Filters every input in order into one output and
//!   reports the combined counters.

pub mod run_migration;
pub mod select_rules;
