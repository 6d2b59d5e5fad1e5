//! kconf_update script: drop `Backend=XRender` from `[Compositing]`.
//!
//! The XRender compositing backend was removed.  Deleting the key makes the
//! compositor use its default, OpenGL.

fn main() -> anyhow::Result<()> {
    kconf_update::script::run(kconf_core::rules::XRENDER_BACKEND)
}
