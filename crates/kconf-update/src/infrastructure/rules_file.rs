//! TOML rules files for `kconf-migrate`.
//!
//! A rules file adds migration rules beyond the built-in ones.  Example:
//!
//! ```toml
//! [[rule]]
//! name = "cover-switch"
//! key = "LayoutName"
//! deprecated = "coverswitch"
//!
//! [[rule]]
//! key = "Backend"          # name defaults to the key
//! deprecated = "XRender"
//! ```
//!
//! Each entry becomes a [`MigrationRule`].  Keys are checked so that a rule
//! can actually match a `Key=Value` line and can never match a directive or
//! a group header.

use std::path::{Path, PathBuf};

use kconf_core::MigrationRule;
use serde::Deserialize;
use thiserror::Error;

/// Error type for rules file operations.
#[derive(Debug, Error)]
pub enum RulesFileError {
    /// The file could not be read.
    #[error("I/O error reading rules file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse rules file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The file parsed but a rule is unusable.
    #[error("invalid rules file {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: InvalidRule,
    },
}

/// Why a rules file entry was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidRule {
    #[error("the file defines no [[rule]] entries")]
    NoRules,

    /// `index` is zero-based, in file order.
    #[error("rule #{index}: {reason}")]
    Entry { index: usize, reason: &'static str },
}

// ── File schema ───────────────────────────────────────────────────────────────

/// Top-level rules file document.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RulesFile {
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleEntry>,
}

/// One `[[rule]]` table.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RuleEntry {
    /// Short name; defaults to `key`.
    #[serde(default)]
    pub name: Option<String>,
    pub key: String,
    pub deprecated: String,
}

impl RuleEntry {
    fn validate(&self) -> Result<(), &'static str> {
        let key = self.key.as_str();
        if key.is_empty() {
            return Err("key must not be empty");
        }
        if key.contains('=') {
            return Err("key must not contain '='");
        }
        if key.chars().any(char::is_whitespace) {
            return Err("key must not contain whitespace");
        }
        if key.starts_with('#') || key.starts_with('[') {
            return Err("key must not start with '#' or '['");
        }
        if self.deprecated.trim().is_empty() {
            return Err("deprecated value must not be empty");
        }
        if self.deprecated.trim() != self.deprecated {
            return Err("deprecated value must not have surrounding whitespace");
        }
        Ok(())
    }

    fn into_rule(self) -> MigrationRule {
        let name = self.name.unwrap_or_else(|| self.key.clone());
        MigrationRule::new(name, self.key, self.deprecated)
    }
}

impl RulesFile {
    /// Parses rules file text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error for malformed text or unknown fields.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Validates every entry and converts them into rules, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRule::NoRules`] for an empty file and
    /// [`InvalidRule::Entry`] for the first entry that fails validation.
    pub fn into_rules(self) -> Result<Vec<MigrationRule>, InvalidRule> {
        if self.rules.is_empty() {
            return Err(InvalidRule::NoRules);
        }
        for (index, entry) in self.rules.iter().enumerate() {
            entry
                .validate()
                .map_err(|reason| InvalidRule::Entry { index, reason })?;
        }
        Ok(self.rules.into_iter().map(RuleEntry::into_rule).collect())
    }
}

/// Reads, parses and validates the rules file at `path`.
///
/// # Errors
///
/// See [`RulesFileError`].
pub fn load_rules_file(path: &Path) -> Result<Vec<MigrationRule>, RulesFileError> {
    let text = std::fs::read_to_string(path).map_err(|source| RulesFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file = RulesFile::from_toml_str(&text).map_err(|source| RulesFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    file.into_rules().map_err(|source| RulesFileError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
