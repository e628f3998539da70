//! Agreement verdicts from reduction frequencies.
//!
//! A sentence scores the sum of `count / total` over its reductions. The
//! sentence is re-conjugated into alternatives, each scored the same way,
//! and the best alternative is compared with the original:
//!
//! - an alternative scoring strictly higher means the original's verbs
//!   probably disagree with their subjects;
//! - an original scoring zero has a shape the corpus never saw, which is
//!   flagged even when no alternative does better.
//!
//! Subjects that fit no noun class are skipped and contribute nothing.
//!
//! Moods are read from the text the parser sees, for the original and for
//! every alternative alike. Suggestions keep the writer's own text apart
//! from the swapped verbs.

use std::fmt;

use concord_tree::ParseTree;
use tracing::{debug, info, instrument};

use crate::alternatives::alternative_sentences;
use crate::capability::{Capabilities, FrequencyStore};
use crate::config::ScorerConfig;
use crate::error::AgreementError;
use crate::mood::Mood;
use crate::preprocess::Prepared;
use crate::reducer::Reducer;
use crate::reduction::{Reduction, ReductionEncoder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn is_incorrect(&self) -> bool {
        matches!(self, Verdict::Incorrect)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Correct => "CORRECT",
            Verdict::Incorrect => "INCORRECT",
        })
    }
}

/// The outcome of evaluating one sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub verdict: Verdict,
    /// Best alternative, or the configured placeholder when none scored
    /// above zero. Set exactly when the verdict is [`Verdict::Incorrect`].
    pub suggestion: Option<String>,
    pub score: f64,
    /// Score of the best alternative, zero when there was none.
    pub alternative_score: f64,
}

/// Advice shown to a writer; empty for a correct sentence.
impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.suggestion {
            Some(suggestion) => write!(
                f,
                "That looks like a subject verb agreement error.\n suggestion: {suggestion}"
            ),
            None => Ok(()),
        }
    }
}

/// Decides subject-verb agreement for whole sentences.
#[derive(Debug, Clone, Default)]
pub struct AgreementScorer {
    config: ScorerConfig,
    encoder: ReductionEncoder,
}

impl AgreementScorer {
    pub fn new(config: ScorerConfig, encoder: ReductionEncoder) -> Self {
        Self { config, encoder }
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    pub fn encoder(&self) -> &ReductionEncoder {
        &self.encoder
    }

    /// The sentence with the text handed to the parser.
    pub fn prepare(&self, sentence: &str) -> Prepared {
        if self.config.preprocess {
            Prepared::new(sentence)
        } else {
            Prepared::unchanged(sentence)
        }
    }

    /// Parse `sentence` and return all of its reductions, failing on
    /// subjects that fit no noun class.
    pub async fn reductions(
        &self,
        sentence: &str,
        capabilities: &Capabilities<'_>,
    ) -> Result<Vec<Reduction>, AgreementError> {
        let prepared = self.prepare(sentence);
        let tree = capabilities
            .parser
            .parse(prepared.text())
            .await
            .map_err(AgreementError::Parser)?;
        let reducer = Reducer::with_capabilities(&self.encoder, capabilities);
        Ok(reducer.reductions(prepared.text(), &tree)?)
    }

    /// Evaluate one sentence within the configured timeout.
    ///
    /// Collaborator failures and timeouts are errors for this sentence
    /// only; nothing is retried.
    #[instrument(skip_all, fields(sentence = %sentence))]
    pub async fn evaluate(
        &self,
        sentence: &str,
        capabilities: &Capabilities<'_>,
    ) -> Result<Assessment, AgreementError> {
        let evaluation = self.evaluate_unbounded(sentence, capabilities);
        match self.config.timeout() {
            Some(limit) => tokio::time::timeout(limit, evaluation)
                .await
                .unwrap_or_else(|_| Err(AgreementError::Timeout(limit))),
            None => evaluation.await,
        }
    }

    async fn evaluate_unbounded(
        &self,
        sentence: &str,
        capabilities: &Capabilities<'_>,
    ) -> Result<Assessment, AgreementError> {
        let prepared = self.prepare(sentence);
        let tree = capabilities
            .parser
            .parse(prepared.text())
            .await
            .map_err(AgreementError::Parser)?;
        let total = capabilities
            .frequencies
            .total_count()
            .await
            .map_err(AgreementError::FrequencyStore)?;
        let reducer = Reducer::with_capabilities(&self.encoder, capabilities);

        let score = self
            .score_tree(
                &reducer,
                reducer.mood(prepared.text()),
                &tree,
                capabilities.frequencies,
                total,
            )
            .await?;

        let alternatives = alternative_sentences(
            &prepared,
            &tree,
            capabilities.conjugator,
            self.config.max_alternatives,
        )
        .await?;

        let mut alternative_score = 0.0;
        let mut best = None;
        for alternative in alternatives {
            let alternative_text = self.prepare(&alternative);
            let alternative_tree = capabilities
                .parser
                .parse(alternative_text.text())
                .await
                .map_err(AgreementError::Parser)?;
            let candidate = self
                .score_tree(
                    &reducer,
                    reducer.mood(alternative_text.text()),
                    &alternative_tree,
                    capabilities.frequencies,
                    total,
                )
                .await?;
            debug!(%alternative, score = candidate, "Scored alternative");
            if candidate > alternative_score {
                alternative_score = candidate;
                best = Some(alternative);
            }
        }

        let verdict = if alternative_score > score || score == 0.0 {
            Verdict::Incorrect
        } else {
            Verdict::Correct
        };
        let suggestion = verdict
            .is_incorrect()
            .then(|| best.unwrap_or_else(|| self.config.no_suggestion.clone()));

        info!(
            %verdict,
            score,
            alternative_score,
            suggestion = suggestion.as_deref().unwrap_or_default(),
            "Evaluated sentence"
        );

        Ok(Assessment {
            verdict,
            suggestion,
            score,
            alternative_score,
        })
    }

    async fn score_tree(
        &self,
        reducer: &Reducer<'_>,
        mood: Mood,
        tree: &ParseTree,
        frequencies: &dyn FrequencyStore,
        total: u64,
    ) -> Result<f64, AgreementError> {
        if total == 0 {
            return Ok(0.0);
        }

        let mut score = 0.0;
        for reduction in reducer.pair_reductions_in_mood(mood, tree) {
            match reduction {
                Ok(reduction) => {
                    let count = frequencies
                        .count(&reduction.to_string())
                        .await
                        .map_err(AgreementError::FrequencyStore)?;
                    score += count as f64 / total as f64;
                }
                Err(error) => debug!(%error, "Skipping subject without a noun class"),
            }
        }
        Ok(score)
    }
}
