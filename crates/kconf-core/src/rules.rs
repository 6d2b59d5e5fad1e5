//! Built-in migration rules shipped with KWin.
//!
//! | Name              | Key          | Deprecated    | kwinrc group    | Default after deletion |
//! |-------------------|--------------|---------------|-----------------|------------------------|
//! | `cover-switch`    | `LayoutName` | `coverswitch` | `[TabBox]`      | default switcher layout|
//! | `xrender-backend` | `Backend`    | `XRender`     | `[Compositing]` | `OpenGL`               |

use crate::domain::{MigrationRule, RuleSet};

/// The Cover Switch task switcher layout was removed.
pub const COVER_SWITCH: MigrationRule =
    MigrationRule::from_static("cover-switch", "LayoutName", "coverswitch");

/// The XRender compositing backend was removed; OpenGL is the default.
pub const XRENDER_BACKEND: MigrationRule =
    MigrationRule::from_static("xrender-backend", "Backend", "XRender");

/// Every built-in rule, in the order they are applied by default.
pub const BUILTIN: &[MigrationRule] = &[COVER_SWITCH, XRENDER_BACKEND];

/// Looks up a built-in rule by its short name.
pub fn find(name: &str) -> Option<&'static MigrationRule> {
    BUILTIN.iter().find(|rule| rule.name() == name)
}

/// A rule set containing every built-in rule.
pub fn builtin_set() -> RuleSet {
    BUILTIN.iter().cloned().collect()
}
