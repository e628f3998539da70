//! Sentence mood.
//!
//! An external signal gives a coarse mood. Imperative and indicative
//! sentences read as [`Mood::Nonconditional`]. Subjunctive and conditional
//! signals are refined by looking for conditional markers in the sentence.

use std::fmt;
use std::str::FromStr;

/// Coarse mood reported by a [`MoodSignal`](crate::MoodSignal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoarseMood {
    Indicative,
    Imperative,
    Conditional,
    Subjunctive,
}

/// The mood recorded in a reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mood {
    Nonconditional,
    Conditional,
    Subjunctive,
}

impl Mood {
    pub const ALL: &'static [Mood] = &[Mood::Nonconditional, Mood::Conditional, Mood::Subjunctive];

    /// Upper-case form used in reduction keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Nonconditional => "NONCONDITIONAL",
            Mood::Conditional => "CONDITIONAL",
            Mood::Subjunctive => "SUBJUNCTIVE",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no [`Mood`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mood '{0}'")]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .iter()
            .copied()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}

/// Words and phrases that mark a conditional reading, matched against the
/// lower-cased sentence.
pub const CONDITIONAL_MARKERS: &[&str] = &[
    "assuming",
    "if",
    "in case",
    "no matter how",
    "supposing",
    "unless",
    "would",
    "'d",
    "should",
    "could",
    "might",
    "going to",
    "whenever",
    "as long as",
    "because",
    "in order to",
];

/// Refine a coarse mood signal for `sentence`.
///
/// ```
/// use concord_agreement::{CoarseMood, Mood, classify_mood};
///
/// assert_eq!(
///     classify_mood("If I were you", CoarseMood::Subjunctive),
///     Mood::Conditional
/// );
/// assert_eq!(classify_mood("Go home", CoarseMood::Imperative), Mood::Nonconditional);
/// ```
pub fn classify_mood(sentence: &str, coarse: CoarseMood) -> Mood {
    match coarse {
        CoarseMood::Indicative | CoarseMood::Imperative => Mood::Nonconditional,
        CoarseMood::Conditional | CoarseMood::Subjunctive => {
            let lowered = sentence.to_lowercase();
            if CONDITIONAL_MARKERS
                .iter()
                .any(|marker| lowered.contains(marker))
            {
                Mood::Conditional
            } else {
                Mood::Subjunctive
            }
        }
    }
}
