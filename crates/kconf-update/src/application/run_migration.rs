//! RunMigrationUseCase: filter every input into one directive stream.
//!
//! Inputs are processed strictly one after another, as if concatenated.  The
//! first input that cannot be opened or read stops the run; directives
//! already written for earlier inputs stay written.

use std::io::Write;

use kconf_core::{filter_lines, FilterError, FilterStats, RuleSet};
use thiserror::Error;
use tracing::{debug, info};

use crate::infrastructure::input::{InputError, InputSource};

/// Error type for a migration run.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("while filtering {input}: {source}")]
    Filter {
        input: String,
        #[source]
        source: FilterError,
    },
}

/// Runs `rules` over each input in order, writing directives to `output`.
///
/// # Errors
///
/// Returns [`MigrationError::Input`] when an input cannot be opened and
/// [`MigrationError::Filter`] when reading it or writing output fails.
pub fn run_migration<W: Write>(
    rules: &RuleSet,
    inputs: &[InputSource],
    mut output: W,
) -> Result<FilterStats, MigrationError> {
    let mut total = FilterStats::default();

    for input in inputs {
        debug!(%input, "filtering input");
        let reader = input.open()?;
        let stats = filter_lines(rules, reader, &mut output).map_err(|source| MigrationError::Filter {
            input: input.to_string(),
            source,
        })?;
        debug!(
            %input,
            lines = stats.lines_read,
            directives = stats.directives_emitted,
            "input done"
        );
        total.merge(stats);
    }

    info!(
        inputs = inputs.len(),
        lines = total.lines_read,
        directives = total.directives_emitted,
        "migration finished"
    );
    Ok(total)
}
