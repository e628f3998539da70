//! Evaluating many sentences.

use futures_util::{StreamExt, stream};
use tracing::warn;

use crate::capability::Capabilities;
use crate::error::AgreementError;
use crate::score::{AgreementScorer, Assessment};

/// One sentence of a batch and how its evaluation went.
#[derive(Debug)]
pub struct BatchEntry {
    pub sentence: String,
    pub outcome: Result<Assessment, AgreementError>,
}

/// Outcomes in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    /// Sentences that produced a verdict.
    pub fn evaluated(&self) -> usize {
        self.assessments().count()
    }

    /// Sentences judged to have an agreement error.
    pub fn incorrect(&self) -> usize {
        self.assessments()
            .filter(|assessment| assessment.verdict.is_incorrect())
            .count()
    }

    /// Sentences whose evaluation failed.
    pub fn failed(&self) -> usize {
        self.entries.len() - self.evaluated()
    }

    pub fn assessments(&self) -> impl Iterator<Item = &Assessment> {
        self.entries
            .iter()
            .filter_map(|entry| entry.outcome.as_ref().ok())
    }
}

/// Evaluate `sentences` with at most the scorer's configured concurrency.
///
/// A failing sentence is logged and recorded in the report; the rest of
/// the batch carries on.
pub async fn evaluate_batch<I, S>(
    scorer: &AgreementScorer,
    sentences: I,
    capabilities: &Capabilities<'_>,
) -> BatchReport
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let entries = stream::iter(sentences.into_iter().map(Into::<String>::into))
        .map(|sentence: String| async move {
            let outcome = scorer.evaluate(&sentence, capabilities).await;
            if let Err(error) = &outcome {
                warn!(%sentence, %error, "Sentence evaluation failed");
            }
            BatchEntry { sentence, outcome }
        })
        .buffered(scorer.config().concurrency.max(1))
        .collect::<Vec<_>>()
        .await;

    BatchReport { entries }
}
