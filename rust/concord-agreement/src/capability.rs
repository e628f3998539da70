//! Collaborators the agreement checker depends on.
//!
//! Parsing, conjugation and frequency lookups may block on a model or a
//! remote store, so those traits are async. Morphology and the mood signal
//! are consulted once per word or sentence while a tree is being reduced
//! and are expected to answer from memory.

use std::collections::BTreeSet;
use std::fmt;

use async_trait::async_trait;
use concord_tree::ParseTree;

use crate::error::BoxError;
use crate::mood::CoarseMood;

/// Produces a constituency parse for a sentence.
#[async_trait]
pub trait SentenceParser: Send + Sync {
    async fn parse(&self, sentence: &str) -> Result<ParseTree, BoxError>;
}

/// Produces the other person/number inflections of a verb.
#[async_trait]
pub trait Conjugator: Send + Sync {
    /// Every surface form that shares `verb`'s tense and aspect across
    /// singular/plural and first/second/third person, excluding `verb`.
    async fn alternative_forms(&self, verb: &str) -> Result<BTreeSet<String>, BoxError>;
}

/// Read access to reduction counts.
#[async_trait]
pub trait FrequencyStore: Send + Sync {
    /// Occurrences of `key`; zero when it was never seen.
    async fn count(&self, key: &str) -> Result<u64, BoxError>;

    /// Occurrences of all keys together.
    async fn total_count(&self) -> Result<u64, BoxError>;
}

/// Dictionary lookups for verbs.
pub trait Morphology: Send + Sync {
    /// Base form of `verb`.
    fn lemma(&self, verb: &str) -> String;

    /// Every tense/aspect form of `verb`. Only ever hashed.
    fn tense_signature(&self, verb: &str) -> TenseSignature;
}

/// Coarse mood of a whole sentence.
pub trait MoodSignal: Send + Sync {
    fn coarse_mood(&self, sentence: &str) -> CoarseMood;
}

/// One labelled inflection of a verb, e.g. `3s present = "runs"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TenseForm {
    pub label: String,
    pub form: String,
}

impl TenseForm {
    pub fn new(label: impl Into<String>, form: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            form: form.into(),
        }
    }
}

/// The full conjugation table of a verb.
///
/// Two verbs with the same table hash the same way. The canonical text is
/// `label=form;label=form;...` in the order given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TenseSignature(pub Vec<TenseForm>);

impl TenseSignature {
    /// The first `len` hex characters of the MD5 digest of the canonical
    /// text. `len` is clamped to the 32 characters a digest has.
    pub fn digest(&self, len: usize) -> String {
        let mut hex = format!("{:x}", md5::compute(self.to_string()));
        hex.truncate(len.min(32));
        hex
    }
}

impl fmt::Display for TenseSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, form) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(";")?;
            }
            write!(f, "{}={}", form.label, form.form)?;
        }
        Ok(())
    }
}

impl FromIterator<TenseForm> for TenseSignature {
    fn from_iter<I: IntoIterator<Item = TenseForm>>(iter: I) -> Self {
        TenseSignature(iter.into_iter().collect())
    }
}

/// The collaborators one evaluation needs, borrowed for its duration.
#[derive(Clone, Copy)]
pub struct Capabilities<'a> {
    pub parser: &'a dyn SentenceParser,
    pub conjugator: &'a dyn Conjugator,
    pub morphology: &'a dyn Morphology,
    pub mood: &'a dyn MoodSignal,
    pub frequencies: &'a dyn FrequencyStore,
}

impl fmt::Debug for Capabilities<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities").finish_non_exhaustive()
    }
}
