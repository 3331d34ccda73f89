//! Unified Error Model
use thiserror::Error;

/// Errors raised while capturing an environment context.
///
/// Predicates themselves never fail; only loading a context from a file or
/// document can.
#[derive(Error, Debug)]
pub enum SniffError {
    #[error("IO/{0}")]
    Io(#[from] std::io::Error),

    #[error("PARSE/{0}")]
    Parse(String),

    #[error("FORMAT/unsupported context file: {0}")]
    UnsupportedFormat(String),
}

impl From<serde_json::Error> for SniffError {
    fn from(err: serde_json::Error) -> Self {
        SniffError::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for SniffError {
    fn from(err: serde_yaml::Error) -> Self {
        SniffError::Parse(err.to_string())
    }
}
