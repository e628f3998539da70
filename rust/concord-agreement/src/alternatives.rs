//! Re-conjugated variants of a sentence.
//!
//! Each verb the parser found is cut out of the sentence as the writer
//! typed it, leaving a template with one slot per verb. Every slot is then
//! filled with the verb's own form or any of its person/number
//! alternatives, and every combination except the original becomes a
//! candidate sentence. Text around the verbs is kept byte for byte, so
//! "The dogs isn't barking." becomes "The dogs aren't barking.".

use concord_tree::ParseTree;
use itertools::Itertools;

use crate::capability::Conjugator;
use crate::error::AgreementError;
use crate::preprocess::Prepared;

/// A sentence with its verbs cut out.
///
/// `pieces` always holds one more entry than `verbs`: the text before the
/// first verb, between each pair of verbs, and after the last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbTemplate {
    pieces: Vec<String>,
    verbs: Vec<String>,
}

impl VerbTemplate {
    /// Locate the tree's verb leaves in `sentence`, which was parsed as
    /// written.
    pub fn from_tree(sentence: &str, tree: &ParseTree) -> Self {
        Self::from_prepared(&Prepared::unchanged(sentence), tree)
    }

    /// Locate the tree's verb leaves in the parsed text, left to right,
    /// and cut them out of the raw sentence.
    ///
    /// Verbs are matched as whole words. A verb the parser reports but the
    /// text does not contain after the previous match is skipped, as is a
    /// verb that only exists in an unpacked contraction ("they're").
    pub fn from_prepared(prepared: &Prepared, tree: &ParseTree) -> Self {
        let raw = prepared.raw();
        let mut pieces = Vec::new();
        let mut verbs = Vec::new();
        let mut cursor = 0;
        let mut raw_cursor = 0;

        for leaf in tree.leaves(tree.root()) {
            let node = tree.node(leaf);
            if !node.label().is_inflected_verb() {
                continue;
            }
            let Some(word) = node.word() else {
                continue;
            };
            let Some(start) = find_word(prepared.text(), word, cursor) else {
                continue;
            };
            cursor = start + word.len();
            let Some(span) = prepared.raw_range(start..cursor) else {
                continue;
            };
            if span.start < raw_cursor {
                continue;
            }
            pieces.push(raw[raw_cursor..span.start].to_string());
            verbs.push(word.to_string());
            raw_cursor = span.end;
        }
        pieces.push(raw[raw_cursor..].to_string());

        Self { pieces, verbs }
    }

    pub fn verbs(&self) -> &[String] {
        &self.verbs
    }

    /// Put `forms` into the slots, in order.
    pub fn fill<S: AsRef<str>>(&self, forms: &[S]) -> String {
        let mut sentence = String::new();
        for (piece, form) in self.pieces.iter().zip(forms) {
            sentence.push_str(piece);
            sentence.push_str(form.as_ref());
        }
        if let Some(last) = self.pieces.last() {
            sentence.push_str(last);
        }
        sentence
    }
}

fn find_word(text: &str, word: &str, from: usize) -> Option<usize> {
    let is_word_char = |c: char| c.is_alphanumeric() || c == '\'';
    text.get(from..)?
        .match_indices(word)
        .map(|(offset, _)| from + offset)
        .find(|start| {
            let end = start + word.len();
            let before = text[..*start].chars().next_back();
            let after = text[end..].chars().next();
            !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
        })
}

/// Every variant of the raw sentence with its verbs swapped for other
/// person/number forms, at most `limit` of them. `tree` is the parse of
/// `sentence.text()`.
///
/// The original sentence and repeated variants are left out. Sentences
/// without verbs have no variants.
pub async fn alternative_sentences(
    sentence: &Prepared,
    tree: &ParseTree,
    conjugator: &dyn Conjugator,
    limit: usize,
) -> Result<Vec<String>, AgreementError> {
    let template = VerbTemplate::from_prepared(sentence, tree);
    if template.verbs().is_empty() {
        return Ok(Vec::new());
    }

    let mut slots = Vec::with_capacity(template.verbs().len());
    for verb in template.verbs() {
        let alternatives = conjugator
            .alternative_forms(verb)
            .await
            .map_err(AgreementError::Conjugation)?;
        let mut slot = vec![verb.clone()];
        slot.extend(alternatives.into_iter().filter(|form| form != verb));
        slots.push(slot);
    }

    let original = template.fill(template.verbs());
    Ok(slots
        .iter()
        .map(|slot| slot.iter())
        .multi_cartesian_product()
        .map(|forms| template.fill(forms.as_slice()))
        .filter(|candidate| *candidate != original)
        .unique()
        .take(limit)
        .collect())
}
