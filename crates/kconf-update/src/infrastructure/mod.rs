//! Infrastructure layer for kconf-update.
//!
//! Everything that touches the outside world lives here:
//!
//! - **`input`**      – Turns the command-line file list (or its absence)
//!   into line readers, following the host's stdin / in-place file protocol.
//! - **`rules_file`** – Loads extra migration rules from a TOML file.
//! - **`logging`**    – Installs the `tracing` subscriber.  Logs go to stderr
//!   because stdout is reserved for directives.

pub mod input;
pub mod logging;
pub mod rules_file;
