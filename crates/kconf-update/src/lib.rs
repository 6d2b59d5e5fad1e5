//! kconf-update library crate.
//!
//! Process-level plumbing for the KWin migration filters: where the lines come
//! from, which rules apply, where the logs go.  The rule logic itself lives in
//! `kconf-core`.
//!
//! # Architecture
//!
//! ```text
//! kconf_update host  (runs the script, applies "# DELETE <Key>" lines)
//!         ↕ stdin / file args → stdout
//! [kconf-update]
//!   ├── script           Shared entry point of the single-rule executables
//!   ├── application/     Rule selection and the multi-input migration run
//!   └── infrastructure/
//!         ├── input       stdin / file list as line readers
//!         ├── rules_file  TOML rules for kconf-migrate
//!         └── logging     tracing subscriber on stderr
//! ```
//!
//! # Layer rules
//!
//! - `application` depends on `kconf-core` and on `infrastructure` only through
//!   plain values (opened readers, loaded rules).
//! - `infrastructure` owns every file handle and environment read.

/// Application layer: rule selection and migration runs.
pub mod application;

/// Infrastructure layer: inputs, rules files, logging.
pub mod infrastructure;

/// Entry point shared by the single-rule script executables.
pub mod script;
