//! Error types for reduction and agreement scoring.

use std::time::Duration;

use concord_tree::TreeError;
use thiserror::Error;

use crate::phrase::TaggedWord;

/// Boxed error returned by external collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures while turning subject/verb pairs into reductions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReductionError {
    /// No rule in the noun-phrase table matched the subject words.
    #[error("no noun class for subject words [{}]", display_words(.words))]
    UnclassifiableNounPhrase { words: Vec<TaggedWord> },

    #[error("malformed reduction key '{key}'")]
    MalformedKey { key: String },
}

fn display_words(words: &[TaggedWord]) -> String {
    words
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Failures while evaluating one sentence.
#[derive(Debug, Error)]
pub enum AgreementError {
    #[error("parser failed: {0}")]
    Parser(#[source] BoxError),

    #[error("conjugation service failed: {0}")]
    Conjugation(#[source] BoxError),

    #[error("frequency store failed: {0}")]
    FrequencyStore(#[source] BoxError),

    #[error("sentence evaluation timed out after {0:?}")]
    Timeout(Duration),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Reduction(#[from] ReductionError),
}
