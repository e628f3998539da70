//! Encoding subject/verb pairs as reduction keys.
//!
//! A reduction is `MOOD-verbs>noun`:
//!
//! - `MOOD` is the upper-cased [`Mood`].
//! - `verbs` joins one token per verb word with `:`. Common verbs are
//!   spelled out upper-cased (`IS`, `HAS`); every other verb becomes its tag
//!   and a digest of its conjugation table (`VBP_1a2b3c4d`), so all
//!   inflections of a rare verb share a hash and differ only by tag.
//! - `noun` is the [`NounClass`] picked by the first matching rule in
//!   [`NOUN_RULES`].
//!
//! `NONCONDITIONAL-VBP_1a2b3c4d>SG` is a singular subject with a
//! non-third-person present verb, the shape of "The girl run".

use std::fmt;
use std::str::FromStr;

use concord_tree::Label;

use crate::capability::Morphology;
use crate::config::EncoderConfig;
use crate::error::ReductionError;
use crate::mood::Mood;
use crate::phrase::TaggedWord;

/// The grammatical shape of a subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NounClass {
    /// One singular noun.
    Singular,
    /// One plural noun.
    Plural,
    /// Several nouns or pronouns.
    They,
    /// A lone determiner or personal pronoun, upper-cased.
    Literal(String),
    /// One adjective or adverb.
    Modifier,
    /// Several adjectives or adverbs.
    Modifiers,
    /// A gerund.
    Gerund,
    /// An infinitive, optionally followed by gerunds.
    Infinitive,
}

impl fmt::Display for NounClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NounClass::Singular => "SG",
            NounClass::Plural => "PL",
            NounClass::They => "THEY",
            NounClass::Literal(word) => word,
            NounClass::Modifier => "MOD",
            NounClass::Modifiers => "MODS",
            NounClass::Gerund => "VBG",
            NounClass::Infinitive => "INF",
        })
    }
}

impl FromStr for NounClass {
    type Err = ReductionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "SG" => NounClass::Singular,
            "PL" => NounClass::Plural,
            "THEY" => NounClass::They,
            "MOD" => NounClass::Modifier,
            "MODS" => NounClass::Modifiers,
            "VBG" => NounClass::Gerund,
            "INF" => NounClass::Infinitive,
            "" => {
                return Err(ReductionError::MalformedKey { key: s.to_string() });
            }
            literal => NounClass::Literal(literal.to_string()),
        })
    }
}

/// One row of the noun-phrase table: a guard over the subject words and
/// the class it assigns.
#[derive(Clone, Copy)]
pub struct NounRule {
    pub name: &'static str,
    pub applies: fn(&[TaggedWord]) -> bool,
    pub class: fn(&[TaggedWord]) -> NounClass,
}

impl fmt::Debug for NounRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NounRule").field("name", &self.name).finish()
    }
}

/// Noun-phrase rules in priority order. The first rule whose guard holds
/// decides the class.
pub const NOUN_RULES: &[NounRule] = &[
    NounRule {
        name: "singular noun",
        applies: |words| single(words, Label::is_singular_noun),
        class: |_| NounClass::Singular,
    },
    NounRule {
        name: "plural noun",
        applies: |words| single(words, Label::is_plural_noun),
        class: |_| NounClass::Plural,
    },
    NounRule {
        name: "several nouns or pronouns",
        applies: |words| several(words, |tag| tag.is_noun() || tag.is_pronoun()),
        class: |_| NounClass::They,
    },
    NounRule {
        name: "determiner",
        applies: |words| single(words, Label::is_determiner),
        class: literal,
    },
    NounRule {
        name: "personal pronoun",
        applies: |words| single(words, Label::is_personal_pronoun),
        class: literal,
    },
    NounRule {
        name: "modifier",
        applies: |words| single(words, is_modifier),
        class: |_| NounClass::Modifier,
    },
    NounRule {
        name: "several modifiers",
        applies: |words| several(words, is_modifier),
        class: |_| NounClass::Modifiers,
    },
    NounRule {
        name: "gerund",
        applies: |words| single(words, Label::is_gerund),
        class: |_| NounClass::Gerund,
    },
    NounRule {
        name: "infinitive",
        applies: is_infinitive,
        class: |_| NounClass::Infinitive,
    },
];

fn single(words: &[TaggedWord], predicate: impl Fn(&Label) -> bool) -> bool {
    matches!(words, [only] if predicate(&only.tag))
}

fn several(words: &[TaggedWord], predicate: impl Fn(&Label) -> bool) -> bool {
    words.len() > 1 && words.iter().all(|word| predicate(&word.tag))
}

fn is_modifier(tag: &Label) -> bool {
    tag.is_adjective() || tag.is_adverb()
}

fn is_infinitive(words: &[TaggedWord]) -> bool {
    match words {
        [marker, verb, rest @ ..] => {
            marker.tag.is_infinitive_marker()
                && verb.tag == Label::Vb
                && rest.iter().all(|word| word.tag.is_gerund())
        }
        _ => false,
    }
}

fn literal(words: &[TaggedWord]) -> NounClass {
    NounClass::Literal(
        words
            .iter()
            .map(|word| word.word.to_uppercase())
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// Classify subject words with the first matching rule of [`NOUN_RULES`].
pub fn classify_noun_phrase(words: &[TaggedWord]) -> Result<NounClass, ReductionError> {
    NOUN_RULES
        .iter()
        .find(|rule| (rule.applies)(words))
        .map(|rule| (rule.class)(words))
        .ok_or_else(|| ReductionError::UnclassifiableNounPhrase {
            words: words.to_vec(),
        })
}

/// One subject/verb fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reduction {
    pub mood: Mood,
    pub verb_phrase: String,
    pub noun_phrase: NounClass,
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}>{}", self.mood, self.verb_phrase, self.noun_phrase)
    }
}

impl FromStr for Reduction {
    type Err = ReductionError;

    /// Split at the first `-` and the last `>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ReductionError::MalformedKey { key: s.to_string() };

        let (mood, rest) = s.split_once('-').ok_or_else(malformed)?;
        let (verb_phrase, noun_phrase) = rest.rsplit_once('>').ok_or_else(malformed)?;

        Ok(Reduction {
            mood: mood.parse().map_err(|_| malformed())?,
            verb_phrase: verb_phrase.to_string(),
            noun_phrase: noun_phrase.parse().map_err(|_| malformed())?,
        })
    }
}

/// Renders tagged words into reduction keys.
#[derive(Debug, Clone, Default)]
pub struct ReductionEncoder {
    config: EncoderConfig,
}

impl ReductionEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// `RUNS` for a common verb, `VBZ_<digest>` otherwise.
    pub fn encode_verb_word(&self, morphology: &dyn Morphology, verb: &TaggedWord) -> String {
        let lowered = verb.word.to_lowercase();
        if self.config.is_common_verb(&morphology.lemma(&lowered)) {
            verb.word.to_uppercase()
        } else {
            let digest = morphology
                .tense_signature(&lowered)
                .digest(self.config.hash_len());
            format!("{}_{}", verb.tag, digest)
        }
    }

    pub fn encode_verb_phrase(&self, morphology: &dyn Morphology, verbs: &[TaggedWord]) -> String {
        verbs
            .iter()
            .map(|verb| self.encode_verb_word(morphology, verb))
            .collect::<Vec<_>>()
            .join(":")
    }

    pub fn encode(
        &self,
        morphology: &dyn Morphology,
        mood: Mood,
        verbs: &[TaggedWord],
        nouns: &[TaggedWord],
    ) -> Result<Reduction, ReductionError> {
        Ok(Reduction {
            mood,
            verb_phrase: self.encode_verb_phrase(morphology, verbs),
            noun_phrase: classify_noun_phrase(nouns)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{TenseForm, TenseSignature};
    use pretty_assertions::assert_eq;

    struct Lexicon;

    impl Morphology for Lexicon {
        fn lemma(&self, verb: &str) -> String {
            match verb {
                "is" | "are" | "was" => "be",
                "runs" | "ran" => "run",
                other => other,
            }
            .to_string()
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

    fn word(word: &str, tag: Label) -> TaggedWord {
        TaggedWord::new(word, tag)
    }

    #[test]
    fn noun_rules_in_order() {
        let cases = [
            (vec![word("girl", Label::Nn)], NounClass::Singular),
            (vec![word("Mickey Mantle", Label::Nnp)], NounClass::Singular),
            (vec![word("sentences", Label::Nns)], NounClass::Plural),
            (
                vec![word("John", Label::Nnp), word("Mary", Label::Nnp)],
                NounClass::They,
            ),
            (
                vec![word("he", Label::Prp), word("dogs", Label::Nns)],
                NounClass::They,
            ),
            (vec![word("Some", Label::Dt)], NounClass::Literal("SOME".into())),
            (vec![word("she", Label::Prp)], NounClass::Literal("SHE".into())),
            (vec![word("Melancholy", Label::Jj)], NounClass::Modifier),
            (vec![word("Here", Label::Rb)], NounClass::Modifier),
            (
                vec![word("rich", Label::Jj), word("very", Label::Rb)],
                NounClass::Modifiers,
            ),
            (vec![word("Swinging", Label::Vbg)], NounClass::Gerund),
            (
                vec![word("To", Label::To), word("dance", Label::Vb)],
                NounClass::Infinitive,
            ),
            (
                vec![
                    word("to", Label::To),
                    word("keep", Label::Vb),
                    word("running", Label::Vbg),
                ],
                NounClass::Infinitive,
            ),
        ];
        for (words, expected) in cases {
            assert_eq!(classify_noun_phrase(&words), Ok(expected), "{words:?}");
        }
    }

    #[test]
    fn personal_pronoun_never_falls_through() {
        let words = [word("it", Label::Prp)];
        let matching: Vec<&str> = NOUN_RULES
            .iter()
            .filter(|rule| (rule.applies)(&words))
            .map(|rule| rule.name)
            .collect();
        assert_eq!(matching, vec!["personal pronoun"]);
        assert_eq!(
            classify_noun_phrase(&words),
            Ok(NounClass::Literal("IT".into()))
        );
    }

    #[test]
    fn first_applicable_rule_wins() {
        for rule in NOUN_RULES {
            let samples: &[&[TaggedWord]] = &[
                &[word("cat", Label::Nn)],
                &[word("cats", Label::Nns)],
                &[word("a", Label::Dt)],
                &[word("they", Label::Prp)],
                &[word("big", Label::Jj)],
                &[word("big", Label::Jj), word("red", Label::Jj)],
            ];
            for sample in samples {
                if (rule.applies)(sample) {
                    let first = NOUN_RULES
                        .iter()
                        .position(|candidate| (candidate.applies)(sample));
                    let class = first.map(|index| (NOUN_RULES[index].class)(sample));
                    assert_eq!(classify_noun_phrase(sample).ok(), class);
                }
            }
        }
    }

    #[test]
    fn unmatched_words_are_an_error() {
        for words in [
            vec![],
            vec![word("the", Label::Dt), word("big", Label::Jj)],
            vec![word("ran", Label::Vbd)],
            vec![word("to", Label::To), word("ran", Label::Vbd)],
        ] {
            assert_eq!(
                classify_noun_phrase(&words),
                Err(ReductionError::UnclassifiableNounPhrase { words: words.clone() })
            );
        }
    }

    #[test]
    fn common_verbs_are_spelled_out() {
        let encoder = ReductionEncoder::default();
        assert_eq!(
            encoder.encode_verb_word(&Lexicon, &word("Is", Label::Vbz)),
            "IS"
        );
        assert_eq!(
            encoder.encode_verb_word(&Lexicon, &word("to", Label::To)),
            "TO"
        );
    }

    #[test]
    fn rare_verbs_are_hashed_by_tag() {
        let encoder = ReductionEncoder::default();
        let runs = encoder.encode_verb_word(&Lexicon, &word("runs", Label::Vbz));
        let run = encoder.encode_verb_word(&Lexicon, &word("run", Label::Vbp));
        let ran = encoder.encode_verb_word(&Lexicon, &word("ran", Label::Vbd));

        assert!(runs.starts_with("VBZ_"));
        assert!(run.starts_with("VBP_"));
        assert_eq!(runs.len(), "VBZ_".len() + 8);
        // Same conjugation table, same digest.
        assert_eq!(&runs[4..], &run[4..]);
        assert_eq!(&ran[4..], &run[4..]);
        assert_eq!(
            runs,
            encoder.encode_verb_word(&Lexicon, &word("runs", Label::Vbz))
        );
    }

    #[test]
    fn verb_phrase_joins_with_colons() {
        let encoder =
            ReductionEncoder::new(EncoderConfig::default().with_signature_hash_len(4));
        let phrase = encoder.encode_verb_phrase(
            &Lexicon,
            &[word("was", Label::Vbd), word("dancing", Label::Vbg)],
        );
        let (first, second) = phrase.split_once(':').unwrap();
        assert_eq!(first, "WAS");
        assert!(second.starts_with("VBG_"));
        assert_eq!(second.len(), "VBG_".len() + 4);
    }

    #[test]
    fn full_reduction() {
        let encoder = ReductionEncoder::default();
        let reduction = encoder
            .encode(
                &Lexicon,
                Mood::Nonconditional,
                &[word("are", Label::Vbp)],
                &[word("sentences", Label::Nns)],
            )
            .unwrap();
        assert_eq!(reduction.to_string(), "NONCONDITIONAL-ARE>PL");
    }

    #[test]
    fn reductions_parse_back_into_parts() {
        let key = "CONDITIONAL-WOULD:VB_0cc175b9>THEY";
        let reduction: Reduction = key.parse().unwrap();
        assert_eq!(reduction.mood, Mood::Conditional);
        assert_eq!(reduction.verb_phrase, "WOULD:VB_0cc175b9");
        assert_eq!(reduction.noun_phrase, NounClass::They);
        assert_eq!(reduction.to_string(), key);

        let literal: Reduction = "SUBJUNCTIVE-BE>SOME".parse().unwrap();
        assert_eq!(literal.noun_phrase, NounClass::Literal("SOME".into()));
    }

    #[test]
    fn malformed_keys_are_rejected() {
        for key in ["", "NONCONDITIONAL", "NONCONDITIONAL-IS", "SOMETIMES-IS>SG", "SUBJUNCTIVE-IS>"] {
            assert_eq!(
                key.parse::<Reduction>(),
                Err(ReductionError::MalformedKey { key: key.to_string() }),
                "{key}"
            );
        }
    }
}
