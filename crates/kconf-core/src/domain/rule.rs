//! Migration rules: a key plus the deprecated value that triggers deletion.
//!
//! A [`MigrationRule`] answers one question for one line of `kwinrc`:
//! "does this line set my key to the value that no longer exists?"  When the
//! answer is yes it returns a [`DeletionDirective`] for the key.
//!
//! # Matching rules (for beginners)
//!
//! Given the rule (`Backend`, `XRender`):
//!
//! | Line                    | Result              | Why                                 |
//! |-------------------------|---------------------|-------------------------------------|
//! | `Backend=XRender`       | `# DELETE Backend`  | exact match                         |
//! | `Backend=  XRender  `   | `# DELETE Backend`  | the value is trimmed                |
//! | `Backend=OpenGL`        | nothing             | different value                     |
//! | `backend=XRender`       | nothing             | the key prefix is case-sensitive    |
//! | ` Backend=XRender`      | nothing             | the prefix must start the line      |
//! | `Backend = XRender`     | nothing             | the prefix is `Backend=` exactly    |
//! | `SomeOtherKey=XRender`  | nothing             | different key                       |
//!
//! Group headers (`[Compositing]`) are not tracked; a matching line in any
//! group produces a directive.

use std::borrow::Cow;
use std::fmt;

use super::directive::DeletionDirective;

/// A single line of configuration text, without its line terminator.
///
/// Produced by the line reader, consumed once by the rule set, then dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigLine<'a> {
    text: &'a str,
}

impl<'a> ConfigLine<'a> {
    /// Wraps a raw line, removing one trailing `\n` or `\r\n` if present.
    pub fn new(raw: &'a str) -> Self {
        let text = raw.strip_suffix('\n').unwrap_or(raw);
        let text = text.strip_suffix('\r').unwrap_or(text);
        Self { text }
    }

    /// The line text without its terminator.
    pub fn as_str(&self) -> &'a str {
        self.text
    }
}

impl AsRef<str> for ConfigLine<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

/// A fixed (key, deprecated value) pair.
///
/// Built-in rules are `const` items (see [`crate::rules`]); rules loaded from
/// a rules file own their strings.  `Cow` lets both live in the same type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MigrationRule {
    name: Cow<'static, str>,
    key: Cow<'static, str>,
    deprecated: Cow<'static, str>,
}

impl MigrationRule {
    /// Creates a rule from static strings.  Usable in `const` context.
    pub const fn from_static(
        name: &'static str,
        key: &'static str,
        deprecated: &'static str,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            key: Cow::Borrowed(key),
            deprecated: Cow::Borrowed(deprecated),
        }
    }

    /// Creates a rule from owned strings.
    ///
    /// No validation happens here; callers loading rules from untrusted text
    /// should validate the key first (see `kconf-update`'s rules file loader).
    pub fn new(
        name: impl Into<String>,
        key: impl Into<String>,
        deprecated: impl Into<String>,
    ) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            key: Cow::Owned(key.into()),
            deprecated: Cow::Owned(deprecated.into()),
        }
    }

    /// Short name used to select the rule on the command line.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configuration key this rule watches.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value that marks the key for deletion.
    pub fn deprecated_value(&self) -> &str {
        &self.deprecated
    }

    /// Applies the rule to one line.
    ///
    /// Returns a directive when the line starts with `<key>=` and the rest of
    /// the line, trimmed, equals the deprecated value.  Never fails.
    pub fn apply(&self, line: &str) -> Option<DeletionDirective> {
        let value = line
            .strip_prefix(self.key())?
            .strip_prefix('=')?;

        if value.trim() == self.deprecated_value() {
            Some(DeletionDirective::new(self.key()))
        } else {
            None
        }
    }
}

impl fmt::Display for MigrationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}={}", self.name, self.key, self.deprecated)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const BACKEND: MigrationRule = MigrationRule::from_static("xrender-backend", "Backend", "XRender");

    fn deletes(rule: &MigrationRule, line: &str) -> Option<String> {
        rule.apply(line).map(|d| d.to_string())
    }

    // ── apply ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_apply_exact_match_emits_directive() {
        assert_eq!(deletes(&BACKEND, "Backend=XRender").as_deref(), Some("# DELETE Backend"));
    }

    #[test]
    fn test_apply_trims_whitespace_around_value() {
        assert_eq!(deletes(&BACKEND, "Backend=XRender   ").as_deref(), Some("# DELETE Backend"));
        assert_eq!(deletes(&BACKEND, "Backend=\tXRender").as_deref(), Some("# DELETE Backend"));
    }

    #[test]
    fn test_apply_different_value_emits_nothing() {
        assert_eq!(deletes(&BACKEND, "Backend=OpenGL"), None);
        assert_eq!(deletes(&BACKEND, "Backend=XRenderX"), None);
        assert_eq!(deletes(&BACKEND, "Backend=xrender"), None);
    }

    #[test]
    fn test_apply_empty_value_emits_nothing() {
        assert_eq!(deletes(&BACKEND, "Backend="), None);
    }

    #[test]
    fn test_apply_key_is_case_sensitive() {
        assert_eq!(deletes(&BACKEND, "backend=XRender"), None);
    }

    #[test]
    fn test_apply_key_must_start_the_line() {
        assert_eq!(deletes(&BACKEND, " Backend=XRender"), None);
    }

    #[test]
    fn test_apply_space_before_equals_does_not_match() {
        assert_eq!(deletes(&BACKEND, "Backend = XRender"), None);
    }

    #[test]
    fn test_apply_longer_key_with_same_prefix_does_not_match() {
        // "BackendX=" starts with "Backend" but not with "Backend=".
        assert_eq!(deletes(&BACKEND, "BackendX=XRender"), None);
    }

    #[test]
    fn test_apply_line_without_equals_is_skipped() {
        assert_eq!(deletes(&BACKEND, "Backend"), None);
        assert_eq!(deletes(&BACKEND, ""), None);
        assert_eq!(deletes(&BACKEND, "[Compositing]"), None);
    }

    #[test]
    fn test_apply_other_key_with_deprecated_value_emits_nothing() {
        assert_eq!(deletes(&BACKEND, "SomeOtherKey=XRender"), None);
    }

    #[test]
    fn test_apply_is_idempotent_over_its_own_output() {
        // Arrange
        let first = deletes(&BACKEND, "Backend=XRender").unwrap();

        // Act
        let second = deletes(&BACKEND, &first);

        // Assert
        assert_eq!(second, None);
    }

    // ── ConfigLine ────────────────────────────────────────────────────────────

    #[test]
    fn test_config_line_strips_lf() {
        assert_eq!(ConfigLine::new("Backend=XRender\n").as_str(), "Backend=XRender");
    }

    #[test]
    fn test_config_line_strips_crlf() {
        assert_eq!(ConfigLine::new("Backend=XRender\r\n").as_str(), "Backend=XRender");
    }

    #[test]
    fn test_config_line_keeps_other_trailing_whitespace() {
        assert_eq!(ConfigLine::new("Backend=XRender  \n").as_str(), "Backend=XRender  ");
    }

    // ── Accessors / Display ───────────────────────────────────────────────────

    #[test]
    fn test_owned_rule_behaves_like_static_rule() {
        let owned = MigrationRule::new("xrender-backend", "Backend", "XRender");
        assert_eq!(owned, BACKEND);
        assert_eq!(owned.apply("Backend=XRender"), BACKEND.apply("Backend=XRender"));
    }

    #[test]
    fn test_display_shows_name_key_and_value() {
        assert_eq!(BACKEND.to_string(), "xrender-backend: Backend=XRender");
    }
}
