//! Finding subject/verb pairs in clause subtrees.
//!
//! Every subtree whose label has a [`ClauseRule`] is examined on its own,
//! nested clauses included. Each rule looks only at the clause's immediate
//! children and, apart from declaratives with coordinated verb phrases,
//! yields at most one pair: the first structurally valid match.
//!
//! Clause categories follow the Penn Treebank bracketing guidelines.

use concord_tree::{Label, NodeId, ParseTree};

use crate::phrase::subject_words;

/// The verb half of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbPhrase {
    /// A phrase node whose verbs are read from its children.
    Phrase(NodeId),
    /// A lone verb-tagged leaf, read as if wrapped in a one-child `VP`.
    Bare(NodeId),
}

/// A subject and the verb phrase that agrees with it, both pointing into
/// the same tree.
///
/// The subject is an `NP`, a wh-phrase, or an `S` when a gerund or
/// infinitive clause is the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubjectVerbPair {
    pub verb: VerbPhrase,
    pub subject: NodeId,
}

impl SubjectVerbPair {
    fn new(verb: VerbPhrase, subject: NodeId) -> Self {
        Self { verb, subject }
    }
}

/// How one clause category yields pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseRule {
    /// `S` and `FRAG`.
    Declarative,
    /// `SQ`.
    Question,
    /// `SBAR`.
    Subordinate,
    /// `SBARQ`.
    WhQuestion,
    /// `SINV`.
    Inversion,
}

impl ClauseRule {
    pub const ALL: &'static [ClauseRule] = &[
        ClauseRule::Declarative,
        ClauseRule::Question,
        ClauseRule::Subordinate,
        ClauseRule::WhQuestion,
        ClauseRule::Inversion,
    ];

    /// The rule for a node label, if that label is a clause we read.
    pub fn for_label(label: Label) -> Option<ClauseRule> {
        match label {
            Label::S | Label::Frag => Some(ClauseRule::Declarative),
            Label::Sq => Some(ClauseRule::Question),
            Label::Sbar => Some(ClauseRule::Subordinate),
            Label::Sbarq => Some(ClauseRule::WhQuestion),
            Label::Sinv => Some(ClauseRule::Inversion),
            _ => None,
        }
    }

    pub fn apply(&self, tree: &ParseTree, clause: NodeId) -> Vec<SubjectVerbPair> {
        match self {
            ClauseRule::Declarative => declarative(tree, clause),
            ClauseRule::Question => question(tree, clause),
            ClauseRule::Subordinate => subordinate(tree, clause),
            ClauseRule::WhQuestion => wh_question(tree, clause),
            ClauseRule::Inversion => inversion(tree, clause),
        }
    }
}

/// Every subject/verb pair in the tree, in pre-order of the clauses that
/// produced them.
pub fn match_clauses(tree: &ParseTree) -> Vec<SubjectVerbPair> {
    tree.preorder()
        .filter_map(|id| ClauseRule::for_label(tree.label(id)).map(|rule| (rule, id)))
        .flat_map(|(rule, id)| rule.apply(tree, id))
        .collect()
}

/// "Joyce is amazing", "I was in heaven and danced freely",
/// "Swinging from vines is fun".
///
/// The last `NP` child is the subject, falling back to the last `S` child.
/// Every `VP` child pairs with it, coordinated `VP`s counted one by one.
fn declarative(tree: &ParseTree, clause: NodeId) -> Vec<SubjectVerbPair> {
    let mut noun_phrase = None;
    let mut clause_subject = None;
    let mut verb_phrases = Vec::new();

    for child in tree.children(clause) {
        match tree.label(*child) {
            Label::Np => noun_phrase = Some(*child),
            Label::S => clause_subject = Some(*child),
            Label::Vp => verb_phrases.push(*child),
            _ => {}
        }
    }

    let Some(subject) = noun_phrase.or(clause_subject) else {
        return Vec::new();
    };

    verb_phrases
        .into_iter()
        .flat_map(|vp| unpack_verb_phrases(tree, vp))
        .map(|vp| SubjectVerbPair::new(VerbPhrase::Phrase(vp), subject))
        .collect()
}

/// A `VP` with several `VP` children is a coordination; those children
/// stand in for it. Otherwise the `VP` stands for itself.
pub fn unpack_verb_phrases(tree: &ParseTree, vp: NodeId) -> Vec<NodeId> {
    let nested: Vec<NodeId> = tree
        .children(vp)
        .iter()
        .copied()
        .filter(|child| tree.label(*child) == Label::Vp)
        .collect();
    if nested.len() > 1 { nested } else { vec![vp] }
}

/// "Is John here?" The question clause itself carries the verbs.
fn question(tree: &ParseTree, clause: NodeId) -> Vec<SubjectVerbPair> {
    tree.children(clause)
        .iter()
        .rev()
        .find(|child| tree.label(**child) == Label::Np)
        .map(|np| vec![SubjectVerbPair::new(VerbPhrase::Phrase(clause), *np)])
        .unwrap_or_default()
}

/// "the book which sits on the shelf". The wh-noun phrase is the subject of
/// the clause that follows it.
fn subordinate(tree: &ParseTree, clause: NodeId) -> Vec<SubjectVerbPair> {
    tree.children(clause)
        .windows(2)
        .find(|pair| {
            tree.label(pair[0]) == Label::Whnp
                && tree.label(pair[1]) == Label::S
                && !subject_words(tree, Some(pair[0])).is_empty()
        })
        .map(|pair| vec![SubjectVerbPair::new(VerbPhrase::Phrase(pair[1]), pair[0])])
        .unwrap_or_default()
}

/// "Which dogs bark?" Only a wh-noun phrase with readable nouns counts
/// as the subject of the following `SQ`.
fn wh_question(tree: &ParseTree, clause: NodeId) -> Vec<SubjectVerbPair> {
    tree.children(clause)
        .windows(2)
        .find(|pair| {
            tree.label(pair[0]) == Label::Whnp
                && tree.label(pair[1]) == Label::Sq
                && !subject_words(tree, Some(pair[0])).is_empty()
        })
        .map(|pair| vec![SubjectVerbPair::new(VerbPhrase::Phrase(pair[1]), pair[0])])
        .unwrap_or_default()
}

/// "Never had I seen such a place." The verb precedes the subject: for
/// each `NP`, look back for the nearest `VP` or bare verb.
fn inversion(tree: &ParseTree, clause: NodeId) -> Vec<SubjectVerbPair> {
    let children = tree.children(clause);
    for (position, subject) in children.iter().enumerate() {
        if tree.label(*subject) != Label::Np {
            continue;
        }
        for candidate in children[..position].iter().rev() {
            let label = tree.label(*candidate);
            if label == Label::Vp {
                return vec![SubjectVerbPair::new(VerbPhrase::Phrase(*candidate), *subject)];
            }
            if label.is_verb() && tree.node(*candidate).is_leaf() {
                return vec![SubjectVerbPair::new(VerbPhrase::Bare(*candidate), *subject)];
            }
        }
    }
    Vec::new()
}
