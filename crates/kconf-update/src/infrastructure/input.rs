//! Input selection: standard input or a list of files.
//!
//! The host runs a script either with the old config on standard input or
//! with one or more file paths as arguments.  Both cases end up here:
//!
//! | Arguments             | Inputs read, in order        |
//! |-----------------------|------------------------------|
//! | *(none)*              | stdin                        |
//! | `kwinrc`              | `kwinrc`                     |
//! | `a.rc b.rc`           | `a.rc`, then `b.rc`          |
//! | `a.rc - b.rc`         | `a.rc`, stdin, then `b.rc`   |

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Path argument that stands for standard input.
pub const STDIN_ARG: &str = "-";

/// Error type for opening inputs.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be opened for reading.
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One source of configuration lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Maps command-line paths to input sources.
    ///
    /// An empty list means standard input.  `-` also means standard input.
    pub fn from_args(paths: &[PathBuf]) -> Vec<InputSource> {
        if paths.is_empty() {
            return vec![InputSource::Stdin];
        }
        paths
            .iter()
            .map(|p| {
                if p.as_os_str() == STDIN_ARG {
                    InputSource::Stdin
                } else {
                    InputSource::File(p.clone())
                }
            })
            .collect()
    }

    /// Opens the source as a buffered line reader.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Open`] if a file cannot be opened.
    pub fn open(&self) -> Result<Box<dyn BufRead>, InputError> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => open_file(path),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn open_file(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}
