//! Error types for reading bracketed parse trees.

use thiserror::Error;

/// Errors that can occur while reading a bracketed tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("empty input")]
    Empty,

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("expected {expected} at offset {offset}, found '{found}'")]
    Unexpected {
        expected: &'static str,
        found: String,
        offset: usize,
    },

    #[error("node '{label}' at offset {offset} has no children")]
    EmptyNode { label: String, offset: usize },

    #[error("node '{label}' at offset {offset} mixes words and subtrees")]
    MixedChildren { label: String, offset: usize },

    #[error("node at offset {offset} is nested deeper than {limit} levels")]
    TooDeep { offset: usize, limit: usize },

    #[error("trailing input at offset {offset}")]
    TrailingInput { offset: usize },
}
