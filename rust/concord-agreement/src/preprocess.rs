//! Sentence clean-up before parsing.
//!
//! The cleaned text goes to the parser, but suggestions are written back
//! into the writer's own text. [`Prepared`] keeps both and maps words of
//! the cleaned text back to where they came from.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Contraction patterns and their expansions, applied in order.
const CONTRACTIONS: &[(&str, &str)] = &[
    (
        r"\b([Aa]re|[Cc]ould|[Dd]id|[Dd]oes|[Dd]o|[Hh]ad|[Hh]as|[Hh]ave|[Ii]s|[Mm]ight|[Mm]ust|[Ss]hould|[Ww]ere|[Ww]ould)n't\b",
        "${1} not",
    ),
    (
        r"\b([Hh]e|[Ii]|[Ss]he|[Tt]hey|[Ww]e|[Ww]hat|[Ww]ho|[Yy]ou)'ll\b",
        "${1} will",
    ),
    (r"\b([Tt]hey|[Ww]e|[Ww]hat|[Ww]ho|[Yy]ou)'re\b", "${1} are"),
    (
        r"\b([Ii]|[Ss]hould|[Tt]hey|[Ww]e|[Ww]hat|[Ww]ho|[Ww]ould|[Yy]ou)'ve\b",
        "${1} have",
    ),
    (r"\b([Cc]a)n't\b", "${1}n not"),
    (r"\b([Ii])'m\b", "${1} am"),
    (r"\b([Ll]et)'s\b", "${1} us"),
    (r"\b([Ww])on't\b", "${1}ill not"),
    (r"\b([Ss])han't\b", "${1}hall not"),
    (r"\b([Yy])(?:'all|a'll)\b", "${1}ou all"),
];

static CONTRACTION_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    CONTRACTIONS
        .iter()
        .filter_map(|(pattern, replacement)| {
            Regex::new(pattern).ok().map(|regex| (regex, *replacement))
        })
        .collect()
});

/// Spell out common English contractions: "don't" becomes "do not",
/// "won't" becomes "will not", "I'm" becomes "I am".
pub fn unpack_contractions(sentence: &str) -> String {
    CONTRACTION_RULES
        .iter()
        .fold(sentence.to_string(), |text, (regex, replacement)| {
            regex.replace_all(&text, *replacement).into_owned()
        })
}

/// Collapse runs of whitespace into single spaces, trim the ends, then
/// unpack contractions.
pub fn preprocess_sentence(sentence: &str) -> String {
    Prepared::new(sentence).text
}

/// Words of `sentence` with their byte offsets.
fn words(sentence: &str) -> impl Iterator<Item = (usize, &str)> {
    sentence
        .split_inclusive(char::is_whitespace)
        .scan(0_usize, |offset, piece| {
            let start = *offset;
            *offset += piece.len();
            Some((start, piece.trim_end_matches(char::is_whitespace)))
        })
        .filter(|(_, word)| !word.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct WordSpan {
    raw: Range<usize>,
    text: Range<usize>,
}

/// A sentence as written and as handed to the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prepared {
    raw: String,
    text: String,
    spans: Vec<WordSpan>,
}

impl Prepared {
    /// Normalize whitespace and unpack contractions word by word.
    pub fn new(sentence: &str) -> Self {
        let mut text = String::with_capacity(sentence.len());
        let mut spans = Vec::new();
        for (start, word) in words(sentence) {
            if !text.is_empty() {
                text.push(' ');
            }
            let begin = text.len();
            text.push_str(&unpack_contractions(word));
            spans.push(WordSpan {
                raw: start..start + word.len(),
                text: begin..text.len(),
            });
        }
        Self {
            raw: sentence.to_string(),
            text,
            spans,
        }
    }

    /// Parse the sentence exactly as written.
    pub fn unchanged(sentence: &str) -> Self {
        Self {
            raw: sentence.to_string(),
            text: sentence.to_string(),
            spans: vec![WordSpan {
                raw: 0..sentence.len(),
                text: 0..sentence.len(),
            }],
        }
    }

    /// The sentence as written.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The text the parser sees.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Where `text()[range]` sits in the raw sentence, if it was carried
    /// over unchanged. Text produced by unpacking a contraction, like the
    /// "are" of "they're", has no raw counterpart.
    pub fn raw_range(&self, range: Range<usize>) -> Option<Range<usize>> {
        let span = self
            .spans
            .iter()
            .find(|span| span.text.start <= range.start && range.end <= span.text.end)?;
        let start = span.raw.start + (range.start - span.text.start);
        let raw = start..start + range.len();
        if raw.end > span.raw.end {
            return None;
        }
        (self.raw.get(raw.clone())? == self.text.get(range)?).then_some(raw)
    }
}
