//! kconf_update script: drop `LayoutName=coverswitch` from `[TabBox]`.
//!
//! The Cover Switch task switcher layout no longer exists.  Deleting the key
//! lets the task switcher fall back to its default layout.

fn main() -> anyhow::Result<()> {
    kconf_update::script::run(kconf_core::rules::COVER_SWITCH)
}
