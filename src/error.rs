use serde::Serialize;
use thiserror::Error;

#[derive(Debug, PartialEq, Clone, Error)]
#[error("invalid pattern #{index} `{pattern}`: {message}")]
pub struct PatternCompileError {
    pub index: usize,
    pub pattern: String,
    pub message: String,
}

/// Raised by an engine while scanning, after compilation succeeded.
#[derive(Debug, PartialEq, Clone, Error, Serialize)]
#[error("{message}")]
pub struct MatchEngineError {
    pub index: usize,
    pub pattern: String,
    pub message: String,
}
