//! Line-by-line application of a rule set.
//!
//! # Output protocol
//!
//! Only directives are written.  Lines that do not trigger a rule produce no
//! output at all: the host applies the printed directives to the original
//! file and leaves every other line untouched, so echoing them back would be
//! wrong.
//!
//! # Encoding
//!
//! Lines are read as bytes and decoded lossily.  Keys and deprecated values
//! are plain text, so a replacement character can never turn a non-matching
//! line into a match.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, trace};

use crate::domain::{ConfigLine, RuleSet};

/// Error type for the streaming filter.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Reading the next input line failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        line: u64,
        #[source]
        source: io::Error,
    },

    /// Writing a directive to the output failed.
    #[error("failed to write directive: {0}")]
    Write(#[source] io::Error),
}

/// Counters reported after a filter run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Number of input lines processed.
    pub lines_read: u64,
    /// Number of `# DELETE` lines written.
    pub directives_emitted: u64,
}

impl FilterStats {
    /// Adds the counters of another run, used when several inputs are
    /// filtered one after another.
    pub fn merge(&mut self, other: FilterStats) {
        self.lines_read += other.lines_read;
        self.directives_emitted += other.directives_emitted;
    }
}

/// Applies `rules` to every line of `input`, writing directives to `output`.
///
/// Directives are written in input order, each followed by `\n`.  The output
/// is flushed before returning.
///
/// # Errors
///
/// Returns [`FilterError::Read`] if the input cannot be read and
/// [`FilterError::Write`] if the output cannot be written.  Lines already
/// written stay written.
pub fn filter_lines<R, W>(rules: &RuleSet, mut input: R, mut output: W) -> Result<FilterStats, FilterError>
where
    R: BufRead,
    W: Write,
{
    let mut stats = FilterStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .map_err(|source| FilterError::Read {
                line: stats.lines_read + 1,
                source,
            })?;
        if read == 0 {
            break;
        }
        stats.lines_read += 1;

        let text = String::from_utf8_lossy(&buf);
        let line = ConfigLine::new(&text);

        match rules.apply(line.as_str()) {
            Some(directive) => {
                debug!(line = stats.lines_read, key = directive.key(), "deprecated value found");
                writeln!(output, "{directive}").map_err(FilterError::Write)?;
                stats.directives_emitted += 1;
            }
            None => trace!(line = stats.lines_read, "no rule matched"),
        }
    }

    output.flush().map_err(FilterError::Write)?;
    Ok(stats)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
