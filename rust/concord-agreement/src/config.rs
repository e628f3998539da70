//! Tunables for encoding and scoring.
//!
//! Both configs deserialize from JSON with every field optional; missing
//! fields take their defaults.

use std::collections::BTreeSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Lemmas whose inflections are spelled out in reductions instead of hashed.
///
/// `to` is included so the infinitive marker reads as `TO`.
pub const DEFAULT_COMMON_VERBS: &[&str] = &[
    "be", "have", "do", "to", "go", "get", "make", "say", "know", "take", "see", "come", "can",
    "will", "would", "shall", "should", "may", "might", "must", "could",
];

/// Characters in an MD5 hex digest.
const DIGEST_LEN: usize = 32;

/// How verb and noun phrases are rendered into reduction keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Lower-case lemmas rendered literally.
    pub common_verbs: BTreeSet<String>,

    /// Hex characters kept from a tense signature digest (default: 8)
    pub signature_hash_len: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            common_verbs: DEFAULT_COMMON_VERBS
                .iter()
                .map(|verb| verb.to_string())
                .collect(),
            signature_hash_len: 8,
        }
    }
}

impl EncoderConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replace the common verb allow-list
    pub fn with_common_verbs<I, S>(mut self, verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.common_verbs = verbs
            .into_iter()
            .map(|verb| verb.into().to_lowercase())
            .collect();
        self
    }

    /// Set the digest length, clamped to the length of an MD5 hex digest
    pub fn with_signature_hash_len(mut self, len: usize) -> Self {
        self.signature_hash_len = len.min(DIGEST_LEN);
        self
    }

    pub fn is_common_verb(&self, lemma: &str) -> bool {
        self.common_verbs.contains(&lemma.to_lowercase())
    }

    /// The digest length actually used.
    pub fn hash_len(&self) -> usize {
        self.signature_hash_len.min(DIGEST_LEN)
    }
}

/// How sentences are scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Per-sentence timeout in seconds, `None` for no limit (default: 30)
    pub timeout_seconds: Option<u64>,

    /// Sentences evaluated at once in a batch (default: 4)
    pub concurrency: usize,

    /// Alternative sentences scored per sentence (default: 256)
    pub max_alternatives: usize,

    /// Suggestion reported when no alternative scored above zero
    pub no_suggestion: String,

    /// Normalise whitespace and unpack contractions before parsing
    pub preprocess: bool,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: Some(30),
            concurrency: 4,
            max_alternatives: 256,
            no_suggestion: "< no suggestion >".to_string(),
            preprocess: true,
        }
    }
}

impl ScorerConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// Set the per-sentence timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Let sentences run as long as their collaborators take
    pub fn without_timeout(mut self) -> Self {
        self.timeout_seconds = None;
        self
    }

    /// Set batch concurrency; at least one sentence always runs
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_max_alternatives(mut self, max_alternatives: usize) -> Self {
        self.max_alternatives = max_alternatives;
        self
    }

    pub fn with_no_suggestion(mut self, placeholder: impl Into<String>) -> Self {
        self.no_suggestion = placeholder.into();
        self
    }

    pub fn with_preprocess(mut self, preprocess: bool) -> Self {
        self.preprocess = preprocess;
        self
    }
}
