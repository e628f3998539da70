//! From a parsed sentence to its reductions.

use concord_tree::ParseTree;
use tracing::debug;

use crate::capability::{Capabilities, Morphology, MoodSignal};
use crate::clause::match_clauses;
use crate::error::ReductionError;
use crate::mood::{Mood, classify_mood};
use crate::phrase::{subject_words, verb_words};
use crate::reduction::{Reduction, ReductionEncoder};

/// Runs clause matching, word extraction and encoding over one tree.
///
/// ```
/// use concord_agreement::{
///     CoarseMood, Morphology, MoodSignal, Reducer, ReductionEncoder, TenseSignature,
/// };
/// use concord_tree::parse_tree;
///
/// struct Lemmas;
/// impl Morphology for Lemmas {
///     fn lemma(&self, verb: &str) -> String {
///         if verb == "are" { "be".into() } else { verb.into() }
///     }
///     fn tense_signature(&self, _verb: &str) -> TenseSignature {
///         TenseSignature::default()
///     }
/// }
///
/// struct Plain;
/// impl MoodSignal for Plain {
///     fn coarse_mood(&self, _sentence: &str) -> CoarseMood {
///         CoarseMood::Indicative
///     }
/// }
///
/// let sentence = "Sometimes, sentences are correct.";
/// let tree = parse_tree(
///     "(S (ADVP (RB Sometimes)) (, ,) (NP (NNS sentences)) (VP (VBP are) (ADJP (JJ correct))) (. .))",
/// )
/// .unwrap();
///
/// let encoder = ReductionEncoder::default();
/// let reducer = Reducer::new(&encoder, &Lemmas, &Plain);
/// let keys: Vec<String> = reducer
///     .reductions(sentence, &tree)
///     .unwrap()
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(keys, vec!["NONCONDITIONAL-ARE>PL"]);
/// ```
#[derive(Clone, Copy)]
pub struct Reducer<'a> {
    encoder: &'a ReductionEncoder,
    morphology: &'a dyn Morphology,
    mood: &'a dyn MoodSignal,
}

impl<'a> Reducer<'a> {
    pub fn new(
        encoder: &'a ReductionEncoder,
        morphology: &'a dyn Morphology,
        mood: &'a dyn MoodSignal,
    ) -> Self {
        Self {
            encoder,
            morphology,
            mood,
        }
    }

    pub fn with_capabilities(encoder: &'a ReductionEncoder, capabilities: &Capabilities<'a>) -> Self {
        Self::new(encoder, capabilities.morphology, capabilities.mood)
    }

    /// Mood of `sentence` as recorded in its reductions.
    pub fn mood(&self, sentence: &str) -> Mood {
        classify_mood(sentence, self.mood.coarse_mood(sentence))
    }

    /// One result per subject/verb pair, in the order the pairs were found.
    /// The mood is read from `sentence`.
    pub fn pair_reductions(
        &self,
        sentence: &str,
        tree: &ParseTree,
    ) -> Vec<Result<Reduction, ReductionError>> {
        self.pair_reductions_in_mood(self.mood(sentence), tree)
    }

    /// Like [`Reducer::pair_reductions`] with the mood already known.
    pub fn pair_reductions_in_mood(
        &self,
        mood: Mood,
        tree: &ParseTree,
    ) -> Vec<Result<Reduction, ReductionError>> {
        match_clauses(tree)
            .into_iter()
            .map(|pair| {
                let verbs = verb_words(tree, Some(pair.verb));
                let nouns = subject_words(tree, Some(pair.subject));
                debug!(?pair, ?verbs, ?nouns, "Extracted subject/verb pair");

                let reduction = self
                    .encoder
                    .encode(self.morphology, mood, &verbs, &nouns);
                if let Ok(reduction) = &reduction {
                    debug!(%reduction, "Encoded reduction");
                }
                reduction
            })
            .collect()
    }

    /// Every reduction of `tree`, duplicates included, failing on the first
    /// subject that fits no noun class.
    pub fn reductions(
        &self,
        sentence: &str,
        tree: &ParseTree,
    ) -> Result<Vec<Reduction>, ReductionError> {
        self.pair_reductions(sentence, tree).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{TenseForm, TenseSignature};
    use crate::mood::CoarseMood;
    use crate::reduction::NounClass;
    use concord_tree::parse_tree;
    use pretty_assertions::assert_eq;

    struct Lexicon;

    impl Morphology for Lexicon {
        fn lemma(&self, verb: &str) -> String {
            match verb {
                "is" | "are" | "was" | "were" => "be".to_string(),
                "has" | "have" => "have".to_string(),
                other => other.trim_end_matches('s').to_string(),
            }
        }

        fn tense_signature(&self, verb: &str) -> TenseSignature {
            let lemma = self.lemma(verb);
            [
                TenseForm::new("base", lemma.as_str()),
                TenseForm::new("3s present", format!("{lemma}s")),
            ]
            .into_iter()
            .collect()
        }
    }

    struct Fixed(CoarseMood);

    impl MoodSignal for Fixed {
        fn coarse_mood(&self, _sentence: &str) -> CoarseMood {
            self.0
        }
    }

    fn keys(reductions: &[Reduction]) -> Vec<String> {
        reductions.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn girl_run_is_singular() {
        let encoder = ReductionEncoder::default();
        let reducer = Reducer::new(&encoder, &Lexicon, &Fixed(CoarseMood::Indicative));
        let tree = parse_tree(
            "(S (NP (DT The) (NN girl)) (VP (VBP run) (ADVP (RB incredibly) (RB fast))) (. .))",
        )
        .unwrap();

        let reductions = reducer
            .reductions("The girl run incredibly fast.", &tree)
            .unwrap();
        assert_eq!(reductions.len(), 1);
        assert_eq!(reductions[0].mood, Mood::Nonconditional);
        assert_eq!(reductions[0].noun_phrase, NounClass::Singular);
        assert!(reductions[0].verb_phrase.starts_with("VBP_"));
    }

    #[test]
    fn mood_comes_from_the_sentence() {
        let encoder = ReductionEncoder::default();
        let reducer = Reducer::new(&encoder, &Lexicon, &Fixed(CoarseMood::Subjunctive));
        let tree = parse_tree("(S (NP (PRP I)) (VP (MD would) (VP (VB dance))))").unwrap();

        let reductions = reducer.reductions("I would dance", &tree).unwrap();
        assert_eq!(keys(&reductions).len(), 1);
        assert_eq!(reductions[0].mood, Mood::Conditional);
        assert!(keys(&reductions)[0].starts_with("CONDITIONAL-WOULD:VB_"));
        assert!(keys(&reductions)[0].ends_with(">I"));
    }

    #[test]
    fn repeated_calls_agree() {
        let encoder = ReductionEncoder::default();
        let reducer = Reducer::new(&encoder, &Lexicon, &Fixed(CoarseMood::Indicative));
        let tree = parse_tree(
            "(S (NP (NNS Kids)) (VP (VP (VBP run)) (CC and) (VP (VBP jump))))",
        )
        .unwrap();

        let first = reducer.reductions("Kids run and jump", &tree).unwrap();
        let second = reducer.reductions("Kids run and jump", &tree).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn duplicates_are_kept() {
        let encoder = ReductionEncoder::default();
        let reducer = Reducer::new(&encoder, &Lexicon, &Fixed(CoarseMood::Indicative));
        let tree = parse_tree(
            "(S (NP (NNS Dogs)) (VP (VP (VBP are) (ADJP (JJ loud))) (CC and) (VP (VBP are) (ADJP (JJ happy)))))",
        )
        .unwrap();

        let reductions = reducer.reductions("Dogs are loud and are happy", &tree).unwrap();
        assert_eq!(
            keys(&reductions),
            vec!["NONCONDITIONAL-ARE>PL", "NONCONDITIONAL-ARE>PL"]
        );
    }

    #[test]
    fn unclassifiable_subjects_fail_strictly_but_not_per_pair() {
        let encoder = ReductionEncoder::default();
        let reducer = Reducer::new(&encoder, &Lexicon, &Fixed(CoarseMood::Indicative));
        let tree = parse_tree(
            "(S (NP (DT The) (CD two)) (VP (VBP are) (ADJP (JJ happy))))",
        )
        .unwrap();

        let pairs = reducer.pair_reductions("The two are happy", &tree);
        assert_eq!(pairs.len(), 1);
        assert!(matches!(
            pairs[0],
            Err(ReductionError::UnclassifiableNounPhrase { .. })
        ));
        assert!(reducer.reductions("The two are happy", &tree).is_err());
    }
}
