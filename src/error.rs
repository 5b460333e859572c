//! Error types for Cardsmith
//!
//! Library code returns [`CardsmithResult`]; the binary wraps these in
//! `anyhow` with command-level context.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{CacheError, FsError};

/// Result type alias for Cardsmith operations
pub type CardsmithResult<T> = Result<T, CardsmithError>;

/// Main error type for Cardsmith operations
#[derive(Error, Debug)]
pub enum CardsmithError {
    /// The completion API could not be reached or answered with an error
    #[error("completion request failed: {message}")]
    Completion { message: String },

    /// Model is missing from the context-length table
    #[error("unknown model '{model}' (known: {known})")]
    UnknownModel { model: String, known: String },

    /// The model's context window cannot fit the reserved example tokens
    #[error("model '{model}' has a context length of {context_length}, which does not exceed the {reserved} tokens reserved for example content")]
    TokenBudget {
        model: String,
        context_length: u32,
        reserved: u32,
    },

    /// Response cache failure
    #[error("response cache error: {0}")]
    Cache(#[from] CacheError),

    /// Model output was expected to be JSON
    #[error("model output is not valid JSON: {message}")]
    InvalidJson { message: String, raw: String },

    /// Model output was JSON, but not an object of attributes
    #[error("model output is JSON but not an object (got {kind})")]
    NotAnObject { kind: &'static str },

    /// No `export default` or `export class ... extends` found
    #[error("no exported component found (expected `export default Name` or `export class Name extends ...`)")]
    NoExport,

    /// Several exported classes, none of them distinguishable as the card
    #[error("ambiguous exports: {}", candidates.join(", "))]
    AmbiguousExport { candidates: Vec<String> },

    /// Filename fragment cannot be used as a module path segment
    #[error("invalid filename fragment '{fragment}': {reason}")]
    InvalidFragment { fragment: String, reason: String },

    /// The content server could not be reached
    #[error("submission to {url} failed: {message}")]
    Submission { url: String, message: String },

    /// File system error
    #[error("file system error: {0}")]
    Fs(#[from] FsError),

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
