use std::io;
use thiserror::Error;

/// Malformed solve invocation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),
}

/// Failure to load a dictionary file
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary could not be read")]
    Io(#[from] io::Error),
    #[error("line {line}: unknown category section [{name}]")]
    UnknownCategory { line: usize, name: String },
    /// An entry appeared before any `[CATEGORY]` header
    #[error("line {line}: entry outside of a category section")]
    EntryOutsideSection { line: usize },
    #[error("dictionary contains no entries")]
    Empty,
}
