//! # concord-agreement
//!
//! Subject-verb agreement checking by statistics over sentence shapes.
//!
//! Every subject/verb pair in a sentence's parse is reduced to a short key
//! that records the sentence mood, the verbs' forms and the grammatical
//! number of the subject. A corpus of correct English tells how often each
//! key occurs. A sentence whose verbs, re-conjugated, produce keys the corpus
//! prefers is probably wrong, and the preferred variant is the suggestion.
//!
//! ## Pipeline
//!
//! ```text
//! sentence → parser → ParseTree
//!   → clause matching (subject/verb pairs)
//!     → word extraction (tagged verbs, tagged nouns)
//!       → encoding (+ mood) → reductions
//!         → frequency lookups → score
//! alternatives (re-conjugated sentences) → the same pipeline → best score
//!   → verdict + suggestion
//! ```
//!
//! ## Collaborators
//!
//! Parsing, conjugation, morphology, mood detection and the frequency corpus
//! live outside this crate. They are passed in as a [`Capabilities`] bundle
//! of trait objects, so tests and hosts supply their own.
//!
//! ## Reductions
//!
//! A reduction reads `MOOD-verbs>noun`, for instance
//! `NONCONDITIONAL-ARE>PL` for "Sometimes, sentences are correct." See
//! [`reduction`] for the encoding rules and [`NOUN_RULES`] for the
//! noun-phrase table.

pub mod alternatives;
pub mod batch;
pub mod capability;
pub mod clause;
pub mod config;
pub mod error;
pub mod frequency;
pub mod mood;
pub mod phrase;
pub mod preprocess;
pub mod reducer;
pub mod reduction;
pub mod score;

pub use alternatives::{VerbTemplate, alternative_sentences};
pub use batch::{BatchEntry, BatchReport, evaluate_batch};
pub use capability::{
    Capabilities, Conjugator, FrequencyStore, Morphology, MoodSignal, SentenceParser, TenseForm,
    TenseSignature,
};
pub use clause::{ClauseRule, SubjectVerbPair, VerbPhrase, match_clauses};
pub use config::{DEFAULT_COMMON_VERBS, EncoderConfig, ScorerConfig};
pub use error::{AgreementError, BoxError, ReductionError};
pub use frequency::InMemoryFrequencyStore;
pub use mood::{CONDITIONAL_MARKERS, CoarseMood, Mood, UnknownMood, classify_mood};
pub use phrase::{TaggedWord, compress_nouns, subject_words, verb_words};
pub use preprocess::{Prepared, preprocess_sentence};
pub use reducer::Reducer;
pub use reduction::{
    NOUN_RULES, NounClass, NounRule, Reduction, ReductionEncoder, classify_noun_phrase,
};
pub use score::{AgreementScorer, Assessment, Verdict};
