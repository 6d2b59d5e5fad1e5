//! Rule selection for `kconf-migrate`.
//!
//! | `--rule` names | rules file | Resulting rule set                     |
//! |----------------|------------|----------------------------------------|
//! | none           | none       | every built-in rule                    |
//! | some           | none       | the named built-ins, in argument order |
//! | none           | some       | the file's rules only                  |
//! | some           | some       | named built-ins, then the file's rules |

use kconf_core::{rules, MigrationRule, RuleSet};
use thiserror::Error;

/// A `--rule` name that matches no built-in rule.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown rule '{name}' (known rules: {known})")]
pub struct UnknownRuleError {
    pub name: String,
    pub known: String,
}

/// Builds the rule set for a run.
///
/// Duplicate names are kept once, at their first position.
///
/// # Errors
///
/// Returns [`UnknownRuleError`] for the first name that is not a built-in rule.
pub fn select_rules(names: &[String], extra: Vec<MigrationRule>) -> Result<RuleSet, UnknownRuleError> {
    if names.is_empty() && extra.is_empty() {
        return Ok(rules::builtin_set());
    }

    let mut set = RuleSet::new();
    let mut seen: Vec<&str> = Vec::new();
    for name in names {
        let rule = rules::find(name).ok_or_else(|| UnknownRuleError {
            name: name.clone(),
            known: known_names(),
        })?;
        if !seen.contains(&name.as_str()) {
            seen.push(name);
            set.push(rule.clone());
        }
    }
    set.extend(extra);
    Ok(set)
}

fn known_names() -> String {
    rules::BUILTIN
        .iter()
        .map(MigrationRule::name)
        .collect::<Vec<_>>()
        .join(", ")
}
