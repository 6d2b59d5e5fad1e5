//! Domain layer: migration rules and the directives they produce.
//!
//! Everything in here is pure.  There is no I/O, no logging and no global
//! state, so each type can be tested with plain string literals.
//!
//! # Sub-modules
//!
//! - **`rule`**      – [`MigrationRule`] and the per-line match.
//! - **`directive`** – [`DeletionDirective`], the `# DELETE <Key>` output line.
//! - **`rule_set`**  – [`RuleSet`], an ordered list of rules applied together.

pub mod directive;
pub mod rule;
pub mod rule_set;

pub use directive::DeletionDirective;
pub use rule::{ConfigLine, MigrationRule};
pub use rule_set::RuleSet;
