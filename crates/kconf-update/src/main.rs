//! kconf-migrate — general KWin config migration driver.
//!
//! Runs any combination of the built-in migration rules, plus rules read from
//! a TOML file, over a configuration file in one pass.  Output follows the
//! same protocol as the single-rule scripts: one `# DELETE <Key>` line per
//! deprecated value found, nothing else.
//!
//! # Usage
//!
//! ```text
//! kconf-migrate [OPTIONS] [FILE]...
//!
//! Options:
//!   --rule <NAME>         Built-in rule to apply (repeatable)
//!   --rules-file <PATH>   Extra rules in TOML [env: KCONF_MIGRATE_RULES]
//!   --list                Print the built-in rules and exit
//! ```
//!
//! Without `--rule` or `--rules-file` every built-in rule is applied.
//!
//! # Logging
//!
//! Set `RUST_LOG=debug` to see each directive as it is emitted.  Logs go to
//! stderr.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use kconf_core::{rules, RuleSet};
use tracing::info;

use kconf_update::application::run_migration::run_migration;
use kconf_update::application::select_rules::select_rules;
use kconf_update::infrastructure::input::InputSource;
use kconf_update::infrastructure::logging::init_logging;
use kconf_update::infrastructure::rules_file::load_rules_file;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// KWin configuration migration driver.
///
/// Prints `# DELETE <Key>` for every key that still holds a removed value.
#[derive(Debug, Parser)]
#[command(
    name = "kconf-migrate",
    about = "Prints kconf_update deletion directives for deprecated KWin settings",
    version
)]
struct Cli {
    /// Built-in rule to apply, by name.  Repeat to apply several.
    ///
    /// See `--list` for the available names.
    #[arg(long = "rule", value_name = "NAME")]
    rules: Vec<String>,

    /// TOML file with additional `[[rule]]` entries.
    #[arg(long, value_name = "PATH", env = "KCONF_MIGRATE_RULES")]
    rules_file: Option<PathBuf>,

    /// Print the built-in rules and exit.
    #[arg(long)]
    list: bool,

    /// Configuration files to read, in order.  Reads stdin when omitted.
    files: Vec<PathBuf>,
}

impl Cli {
    /// Resolves `--rule` and `--rules-file` into the rule set for this run.
    ///
    /// # Errors
    ///
    /// Returns an error if the rules file cannot be loaded or a rule name is
    /// unknown.
    fn rule_set(&self) -> anyhow::Result<RuleSet> {
        let extra = match &self.rules_file {
            Some(path) => load_rules_file(path)?,
            None => Vec::new(),
        };
        Ok(select_rules(&self.rules, extra)?)
    }
}

/// Writes the built-in rule table, one rule per line.
fn write_rule_list<W: Write>(mut out: W) -> io::Result<()> {
    for rule in rules::BUILTIN {
        writeln!(out, "{rule}")?;
    }
    out.flush()
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();

    if cli.list {
        write_rule_list(io::stdout().lock()).context("failed to write rule list")?;
        return Ok(());
    }

    let rules = cli.rule_set()?;
    info!(rules = rules.len(), "kconf-migrate starting");

    let inputs = InputSource::from_args(&cli.files);
    run_migration(&rules, &inputs, io::stdout().lock()).context("migration failed")?;

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
