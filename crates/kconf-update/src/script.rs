//! Shared entry point for the single-rule kconf_update scripts.
//!
//! Each script executable is a one-line `main` that passes its rule to
//! [`run`].  The command line is the one the host uses:
//!
//! ```text
//! kwin-remove-xrender-backend [FILE]...
//! ```
//!
//! With no files the script reads standard input.  Directives go to stdout,
//! logs to stderr.  Exit code 0 on normal completion, non-zero when an input
//! cannot be read.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, FromArgMatches, Parser};
use kconf_core::{FilterStats, MigrationRule, RuleSet};

use crate::application::run_migration::run_migration;
use crate::infrastructure::input::InputSource;
use crate::infrastructure::logging::init_logging;

/// Arguments accepted by every single-rule script.
#[derive(Debug, Parser)]
#[command(version)]
pub struct ScriptCli {
    /// Configuration files to read, in order.  Reads stdin when omitted;
    /// `-` also means stdin.
    pub files: Vec<PathBuf>,
}

/// Parses the process arguments, runs `rule` over the inputs and writes the
/// directives to stdout.
///
/// # Errors
///
/// Returns an error if an input cannot be opened or read, or stdout cannot
/// be written.
pub fn run(rule: MigrationRule) -> anyhow::Result<()> {
    init_logging();

    let about = format!(
        "Prints '# DELETE {key}' for every line that sets {key} to {value}",
        key = rule.key(),
        value = rule.deprecated_value()
    );
    let matches = ScriptCli::command().about(about).get_matches();
    let cli = ScriptCli::from_arg_matches(&matches)?;

    let stdout = io::stdout();
    execute(rule, &cli, stdout.lock())?;
    Ok(())
}

/// Runs `rule` over the inputs named by `cli`, writing to `output`.
///
/// # Errors
///
/// See [`run`].
pub fn execute<W: Write>(rule: MigrationRule, cli: &ScriptCli, output: W) -> anyhow::Result<FilterStats> {
    let key = rule.key().to_string();
    let rules = RuleSet::single(rule);
    let inputs = InputSource::from_args(&cli.files);
    run_migration(&rules, &inputs, output).with_context(|| format!("{key} migration failed"))
}

#[cfg(test)]
mod tests {
    use kconf_core::rules;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_cli_without_files_reads_stdin() {
        let cli = ScriptCli::parse_from(["kwin-remove-xrender-backend"]);
        assert!(cli.files.is_empty());
        assert_eq!(InputSource::from_args(&cli.files), vec![InputSource::Stdin]);
    }

    #[test]
    fn test_cli_collects_file_arguments() {
        let cli = ScriptCli::parse_from(["kwin-remove-cover-switch", "kwinrc", "-"]);
        assert_eq!(cli.files, vec![PathBuf::from("kwinrc"), PathBuf::from("-")]);
    }

    #[test]
    fn test_cli_rejects_unknown_flags() {
        let result = ScriptCli::try_parse_from(["kwin-remove-cover-switch", "--rule", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_execute_writes_directive_for_file() {
        // Arrange
        let path = std::env::temp_dir().join(format!("kconf_script_{}.rc", Uuid::new_v4()));
        std::fs::write(&path, "[Compositing]\nBackend=XRender\n").unwrap();
        let cli = ScriptCli { files: vec![path.clone()] };
        let mut out = Vec::new();

        // Act
        let stats = execute(rules::XRENDER_BACKEND, &cli, &mut out).unwrap();

        // Assert
        assert_eq!(String::from_utf8(out).unwrap(), "# DELETE Backend\n");
        assert_eq!(stats.directives_emitted, 1);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_execute_missing_file_is_an_error() {
        let cli = ScriptCli {
            files: vec![PathBuf::from("/nonexistent/path/that/cannot/exist/kwinrc")],
        };
        let result = execute(rules::COVER_SWITCH, &cli, Vec::new());
        assert!(result.is_err());
    }
}
