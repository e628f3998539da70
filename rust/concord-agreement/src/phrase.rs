//! Flattening subject and verb phrases into tagged words.
//!
//! Both extractors take an optional phrase and return an empty list when
//! there is nothing to read, so callers never branch on missing halves of a
//! pair.

use std::fmt;

use concord_tree::{Label, NodeId, ParseNode, ParseTree};

use crate::clause::VerbPhrase;

/// A word paired with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaggedWord {
    pub word: String,
    pub tag: Label,
}

impl TaggedWord {
    pub fn new(word: impl Into<String>, tag: Label) -> Self {
        Self {
            word: word.into(),
            tag,
        }
    }
}

impl fmt::Display for TaggedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.word, self.tag)
    }
}

/// The verbs of a verb phrase, in order.
///
/// Collects verb-tagged and `TO` children, descending into nested `VP`s.
pub fn verb_words(tree: &ParseTree, phrase: Option<VerbPhrase>) -> Vec<TaggedWord> {
    match phrase {
        None => Vec::new(),
        Some(VerbPhrase::Phrase(id)) => phrase_verb_words(tree, id),
        Some(VerbPhrase::Bare(verb)) => {
            let mut words = Vec::new();
            collect_verb(tree, verb, &mut words);
            words
        }
    }
}

fn phrase_verb_words(tree: &ParseTree, id: NodeId) -> Vec<TaggedWord> {
    let mut words = Vec::new();
    for child in tree.children(id) {
        collect_verb(tree, *child, &mut words);
    }
    words
}

fn collect_verb(tree: &ParseTree, id: NodeId, words: &mut Vec<TaggedWord>) {
    match tree.node(id) {
        ParseNode::Leaf { tag, word } if tag.is_verb() || tag.is_infinitive_marker() => {
            words.push(TaggedWord::new(word.as_str(), *tag));
        }
        ParseNode::Interior {
            label: Label::Vp, ..
        } => words.extend(phrase_verb_words(tree, id)),
        _ => {}
    }
}

/// The nouns heading a subject phrase.
///
/// - A clause subject (`S`) yields the verbs of that clause.
/// - A phrase made of a single determiner yields that determiner.
/// - Otherwise nouns and pronouns are collected, descending into nested
///   `NP`s, and nouns from adjacent children are compounded
///   ("Mickey" + "Mantle" reads as "Mickey Mantle"). When there are no
///   nouns, the phrase's adjectives stand in.
pub fn subject_words(tree: &ParseTree, subject: Option<NodeId>) -> Vec<TaggedWord> {
    let Some(id) = subject else {
        return Vec::new();
    };

    if tree.label(id) == Label::S {
        return phrase_verb_words(tree, id);
    }

    let children = tree.children(id);
    if let [only] = children {
        if let ParseNode::Leaf {
            tag: Label::Dt,
            word,
        } = tree.node(*only)
        {
            return vec![TaggedWord::new(word.as_str(), Label::Dt)];
        }
    }

    let mut nouns: Vec<(usize, TaggedWord)> = Vec::new();
    let mut adjectives = Vec::new();
    for (position, child) in children.iter().enumerate() {
        match tree.node(*child) {
            ParseNode::Interior {
                label: Label::Np, ..
            } => nouns.extend(
                subject_words(tree, Some(*child))
                    .into_iter()
                    .map(|word| (position, word)),
            ),
            ParseNode::Leaf { tag, word } if tag.is_noun() || tag.is_personal_pronoun() => {
                nouns.push((position, TaggedWord::new(word.as_str(), *tag)));
            }
            ParseNode::Leaf { tag, word } if tag.is_adjective() => {
                adjectives.push(TaggedWord::new(word.as_str(), *tag));
            }
            _ => {}
        }
    }

    let nouns = compress_nouns(nouns);
    if nouns.is_empty() { adjectives } else { nouns }
}

/// Merge nouns that came from adjacent child positions.
///
/// Each word is annotated with the position of the child it came from. A
/// word whose position directly follows the previous word's is folded into
/// it: the merged word keeps the later tag and position, so runs of three
/// or more compound left to right.
pub fn compress_nouns(nouns: Vec<(usize, TaggedWord)>) -> Vec<TaggedWord> {
    nouns
        .into_iter()
        .fold(Vec::<(usize, TaggedWord)>::new(), |mut merged, (position, word)| {
            match merged.last_mut() {
                Some((last_position, last)) if *last_position + 1 == position => {
                    last.word = format!("{} {}", last.word, word.word);
                    last.tag = word.tag;
                    *last_position = position;
                }
                _ => merged.push((position, word)),
            }
            merged
        })
        .into_iter()
        .map(|(_, word)| word)
        .collect()
}
