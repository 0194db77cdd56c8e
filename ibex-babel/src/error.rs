//! Error types for conversion operations

use thiserror::Error;

/// Errors that can occur while converting Linger stimuli to Ibex
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A line of the Linger source does not match the expected structure
    #[error("parse error at line {line}: {message}: '{content}'")]
    Parse {
        /// 1-based line number of the offending line
        line: usize,
        /// The offending line, trimmed
        content: String,
        message: String,
    },
    /// The requested experiment type is not one of the supported templates
    #[error("unknown experiment type '{0}' (expected DashedSentence or AcceptabilityJudgment)")]
    UnknownExperimentType(String),
    /// Error while writing the output
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ConvertError {
    pub(crate) fn parse(line: usize, content: &str, message: impl Into<String>) -> Self {
        ConvertError::Parse {
            line,
            content: content.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
