//! Errors reported by the command-line tool
//!
//! Every variant is terminal: `main` prints it to stderr and exits non-zero.

use ibex_babel::ConvertError;
use ibex_config::ConfigError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// The input file is missing or unreadable
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The output file cannot be written
    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Standard output was closed before the result was written
    #[error("cannot write to standard output: {0}")]
    Stdout(#[source] io::Error),
    /// Unknown experiment type or unusable configuration file
    #[error("configuration error: {0}")]
    Configuration(String),
    /// The input is not well-formed Linger
    #[error("{0}")]
    Convert(ConvertError),
}

impl From<ConvertError> for CliError {
    fn from(err: ConvertError) -> Self {
        match err {
            ConvertError::UnknownExperimentType(_) => CliError::Configuration(err.to_string()),
            other => CliError::Convert(other),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Configuration(err.to_string())
    }
}
