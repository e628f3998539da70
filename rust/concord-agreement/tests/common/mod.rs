#![allow(dead_code)]

use std::collections::{BTreeSet, HashMap};
use std::time::Duration;

use async_trait::async_trait;
use concord_agreement::{
    AgreementScorer, BoxError, Capabilities, CoarseMood, Conjugator, FrequencyStore,
    InMemoryFrequencyStore, Morphology, MoodSignal, SentenceParser, TenseForm, TenseSignature,
};
use concord_tree::{ParseTree, parse_tree};

/// Answers with bracketed trees looked up by sentence.
#[derive(Default)]
pub struct TableParser {
    trees: HashMap<String, String>,
    delay: Option<Duration>,
}

impl TableParser {
    pub fn with(mut self, sentence: &str, tree: &str) -> Self {
        self.trees.insert(sentence.to_string(), tree.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl SentenceParser for TableParser {
    async fn parse(&self, sentence: &str) -> Result<ParseTree, BoxError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let bracketed = self
            .trees
            .get(sentence)
            .ok_or_else(|| format!("no parse for '{sentence}'"))?;
        Ok(parse_tree(bracketed)?)
    }
}

/// Alternative forms looked up by verb.
#[derive(Default)]
pub struct TableConjugator {
    forms: HashMap<String, BTreeSet<String>>,
}

impl TableConjugator {
    /// Every form in `paradigm` lists the others as its alternatives.
    pub fn with_paradigm(mut self, paradigm: &[&str]) -> Self {
        for form in paradigm {
            let others = paradigm
                .iter()
                .filter(|other| *other != form)
                .map(|other| other.to_string())
                .collect();
            self.forms.insert(form.to_string(), others);
        }
        self
    }
}

#[async_trait]
impl Conjugator for TableConjugator {
    async fn alternative_forms(&self, verb: &str) -> Result<BTreeSet<String>, BoxError> {
        Ok(self.forms.get(verb).cloned().unwrap_or_default())
    }
}

/// Lemmas from a word list; the signature is derived from the lemma so
/// every inflection of a verb shares it.
#[derive(Default)]
pub struct LexiconMorphology {
    lemmas: HashMap<String, String>,
}

impl LexiconMorphology {
    pub fn with_verb(mut self, lemma: &str, forms: &[&str]) -> Self {
        for form in forms {
            self.lemmas.insert(form.to_string(), lemma.to_string());
        }
        self
    }
}

impl Morphology for LexiconMorphology {
    fn lemma(&self, verb: &str) -> String {
        self.lemmas
            .get(verb)
            .cloned()
            .unwrap_or_else(|| verb.to_string())
    }

    fn tense_signature(&self, verb: &str) -> TenseSignature {
        TenseSignature(vec![TenseForm::new("lemma", self.lemma(verb))])
    }
}

pub struct FixedMood(pub CoarseMood);

impl MoodSignal for FixedMood {
    fn coarse_mood(&self, _sentence: &str) -> CoarseMood {
        self.0
    }
}

/// Fails every lookup of a key containing `failing`, and answers the rest
/// from `counts`.
pub struct FlakyFrequencies {
    pub counts: InMemoryFrequencyStore,
    pub failing: &'static str,
}

#[async_trait]
impl FrequencyStore for FlakyFrequencies {
    async fn count(&self, key: &str) -> Result<u64, BoxError> {
        if key.contains(self.failing) {
            return Err(format!("lookup of '{key}' failed").into());
        }
        self.counts.count(key).await
    }

    async fn total_count(&self) -> Result<u64, BoxError> {
        self.counts.total_count().await
    }
}

pub const GIRL_RUN: &str = "The girl run incredibly fast.";
pub const GIRL_RUNS: &str = "The girl runs incredibly fast.";
pub const SENTENCES_ARE: &str = "Sometimes, sentences are correct.";
pub const SENTENCES_IS: &str = "Sometimes, sentences is correct.";
pub const SENTENCES_AM: &str = "Sometimes, sentences am correct.";

/// Collaborators that know a handful of sentences.
pub struct World {
    pub parser: TableParser,
    pub conjugator: TableConjugator,
    pub morphology: LexiconMorphology,
    pub mood: FixedMood,
    pub frequencies: InMemoryFrequencyStore,
}

impl World {
    pub fn new() -> Self {
        let parser = TableParser::default()
            .with(
                GIRL_RUN,
                "(ROOT (S (NP (DT The) (NN girl)) (VP (VBP run) (ADVP (RB incredibly) (RB fast))) (. .)))",
            )
            .with(
                GIRL_RUNS,
                "(ROOT (S (NP (DT The) (NN girl)) (VP (VBZ runs) (ADVP (RB incredibly) (RB fast))) (. .)))",
            )
            .with(
                SENTENCES_ARE,
                "(ROOT (S (ADVP (RB Sometimes)) (, ,) (NP (NNS sentences)) (VP (VBP are) (ADJP (JJ correct))) (. .)))",
            )
            .with(
                SENTENCES_IS,
                "(ROOT (S (ADVP (RB Sometimes)) (, ,) (NP (NNS sentences)) (VP (VBZ is) (ADJP (JJ correct))) (. .)))",
            )
            .with(
                SENTENCES_AM,
                "(ROOT (S (ADVP (RB Sometimes)) (, ,) (NP (NNS sentences)) (VP (VBP am) (ADJP (JJ correct))) (. .)))",
            );

        Self {
            parser,
            conjugator: TableConjugator::default()
                .with_paradigm(&["run", "runs"])
                .with_paradigm(&["is", "are", "am"]),
            morphology: LexiconMorphology::default()
                .with_verb("run", &["run", "runs", "ran"])
                .with_verb("be", &["is", "are", "am", "was", "were"]),
            mood: FixedMood(CoarseMood::Indicative),
            frequencies: InMemoryFrequencyStore::new(),
        }
    }

    pub fn capabilities(&self) -> Capabilities<'_> {
        Capabilities {
            parser: &self.parser,
            conjugator: &self.conjugator,
            morphology: &self.morphology,
            mood: &self.mood,
            frequencies: &self.frequencies,
        }
    }

    /// Count each reduction of `sentence` `times` times.
    pub async fn learn(&mut self, scorer: &AgreementScorer, sentence: &str, times: u64) {
        let reductions = match scorer.reductions(sentence, &self.capabilities()).await {
            Ok(reductions) => reductions,
            Err(error) => panic!("cannot learn '{sentence}': {error}"),
        };
        for reduction in reductions {
            let key = reduction.to_string();
            let count = self.frequencies.get(&key) + times;
            self.frequencies.insert(key, count);
        }
    }
}
