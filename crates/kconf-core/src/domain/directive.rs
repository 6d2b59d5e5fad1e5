//! The `# DELETE <Key>` line understood by the config-update host.
//!
//! The host tool reads the filter's standard output and treats each
//! `# DELETE <Key>` line as an instruction to remove `<Key>` from the live
//! configuration.  Anything the filter does not print is left as it was.

use std::fmt;

/// Text that starts every deletion directive, including the trailing space.
pub const DIRECTIVE_PREFIX: &str = "# DELETE ";

/// Instruction to remove one key so its built-in default applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeletionDirective {
    key: String,
}

impl DeletionDirective {
    /// Creates a directive for `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The key to delete.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Recognises a rendered directive.
    ///
    /// Accepts exactly `# DELETE <Key>` where `<Key>` is non-empty and has no
    /// leading or trailing whitespace.  A trailing line terminator is ignored.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        let key = line.strip_prefix(DIRECTIVE_PREFIX)?;
        if key.is_empty() || key.trim() != key {
            return None;
        }
        Some(Self::new(key))
    }
}

impl fmt::Display for DeletionDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{DIRECTIVE_PREFIX}{}", self.key)
    }
}
