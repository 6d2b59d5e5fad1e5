//! An ordered list of rules applied to each line.

use super::directive::DeletionDirective;
use super::rule::MigrationRule;

/// Ordered collection of [`MigrationRule`]s.
///
/// Rules are tried in insertion order and the first directive wins, so a
/// single line never yields more than one directive even if two rules share
/// a key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<MigrationRule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a rule set holding a single rule.
    pub fn single(rule: MigrationRule) -> Self {
        Self { rules: vec![rule] }
    }

    /// Appends a rule.
    pub fn push(&mut self, rule: MigrationRule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MigrationRule> {
        self.rules.iter()
    }

    /// Applies the rules to `line`, returning the first directive produced.
    pub fn apply(&self, line: &str) -> Option<DeletionDirective> {
        self.rules.iter().find_map(|rule| rule.apply(line))
    }
}

impl FromIterator<MigrationRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = MigrationRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<MigrationRule> for RuleSet {
    fn extend<I: IntoIterator<Item = MigrationRule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}
