//! Integration tests for the built-in migration rules.
//!
//! These tests drive the public API end to end: a built-in rule set, the
//! streaming filter, and realistic `kwinrc` content.

use kconf_core::{filter_lines, rules, DeletionDirective, MigrationRule, RuleSet};

/// Runs `rules` over `input` and returns the filter output.
fn filter(rules: &RuleSet, input: &str) -> String {
    let mut out = Vec::new();
    filter_lines(rules, input.as_bytes(), &mut out).expect("filter must succeed");
    String::from_utf8(out).expect("output must be UTF-8")
}

fn cover_switch() -> RuleSet {
    RuleSet::single(rules::COVER_SWITCH)
}

fn xrender_backend() -> RuleSet {
    RuleSet::single(rules::XRENDER_BACKEND)
}

// ── Per-line scenarios ────────────────────────────────────────────────────────

#[test]
fn test_cover_switch_layout_is_deleted() {
    assert_eq!(filter(&cover_switch(), "LayoutName=coverswitch\n"), "# DELETE LayoutName\n");
}

#[test]
fn test_flip_switch_layout_is_kept() {
    assert_eq!(filter(&cover_switch(), "LayoutName=flipswitch\n"), "");
}

#[test]
fn test_xrender_backend_is_deleted() {
    assert_eq!(filter(&xrender_backend(), "Backend=XRender\n"), "# DELETE Backend\n");
}

#[test]
fn test_opengl_backend_is_kept() {
    assert_eq!(filter(&xrender_backend(), "Backend=OpenGL\n"), "");
}

#[test]
fn test_other_key_with_xrender_value_is_kept() {
    assert_eq!(filter(&xrender_backend(), "SomeOtherKey=XRender\n"), "");
}

#[test]
fn test_trailing_whitespace_is_trimmed_before_comparison() {
    assert_eq!(filter(&xrender_backend(), "Backend=XRender   \n"), "# DELETE Backend\n");
}

#[test]
fn test_lowercase_key_does_not_match() {
    assert_eq!(filter(&cover_switch(), "layoutname=coverswitch\n"), "");
}

#[test]
fn test_each_script_only_knows_its_own_key() {
    assert_eq!(filter(&cover_switch(), "Backend=XRender\n"), "");
    assert_eq!(filter(&xrender_backend(), "LayoutName=coverswitch\n"), "");
}

// ── Whole-file behaviour ──────────────────────────────────────────────────────

const OLD_KWINRC: &str = "\
[Compositing]
Backend=XRender
Enabled=true
GLCore=false

[TabBox]
LayoutName=coverswitch
ShowTabBox=true

[TabBoxAlternative]
LayoutName=flipswitch
";

#[test]
fn test_full_kwinrc_emits_directives_in_input_order() {
    // Act
    let out = filter(&rules::builtin_set(), OLD_KWINRC);

    // Assert
    assert_eq!(out, "# DELETE Backend\n# DELETE LayoutName\n");
}

#[test]
fn test_output_contains_only_directives() {
    let out = filter(&rules::builtin_set(), OLD_KWINRC);
    for line in out.lines() {
        assert!(
            DeletionDirective::parse(line).is_some(),
            "unexpected non-directive output line: {line:?}"
        );
    }
}

#[test]
fn test_filter_is_idempotent_over_its_own_output() {
    // Arrange
    let first = filter(&rules::builtin_set(), OLD_KWINRC);

    // Act
    let second = filter(&rules::builtin_set(), &first);

    // Assert
    assert_eq!(second, "");
}

#[test]
fn test_current_kwinrc_needs_no_migration() {
    let current = "[Compositing]\nBackend=OpenGL\n[TabBox]\nLayoutName=org.kde.breeze.desktop\n";
    assert_eq!(filter(&rules::builtin_set(), current), "");
}

#[test]
fn test_custom_rule_works_like_builtin() {
    let rules = RuleSet::single(MigrationRule::new("glx", "GLPlatformInterface", "glx"));
    assert_eq!(
        filter(&rules, "GLPlatformInterface= glx \n"),
        "# DELETE GLPlatformInterface\n"
    );
}
