//! Penn Treebank category labels.
//!
//! Every node in a [`ParseTree`](crate::ParseTree) carries one [`Label`].
//! Clause and phrase labels appear on interior nodes, part-of-speech tags on
//! leaves. Tags outside the Penn set read as [`Label::Unknown`].
//!
//! Readers should go through [`Label::from_tag`], which strips function tags
//! and co-indices (`NP-SBJ-1` reads as `NP`, `S=2` as `S`).

use std::fmt;

macro_rules! labels {
    ($($(#[$meta:meta])* $variant:ident => $tag:literal,)*) => {
        /// A grammatical category from the Penn Treebank tag set.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Label {
            $($(#[$meta])* $variant,)*
            /// Any tag outside the Penn set.
            Unknown,
        }

        impl Label {
            /// Every known label, in declaration order. Excludes [`Label::Unknown`].
            pub const ALL: &'static [Label] = &[$(Label::$variant,)*];

            /// The canonical tag text, e.g. `"NP"` or `"PRP$"`.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Label::$variant => $tag,)*
                    Label::Unknown => "UNKNOWN",
                }
            }

            fn from_exact(tag: &str) -> Label {
                match tag {
                    $($tag => Label::$variant,)*
                    _ => Label::Unknown,
                }
            }
        }
    };
}

labels! {
    /// Synthetic root added by some parsers (`ROOT`, `TOP`, or an unlabeled wrapper).
    Root => "ROOT",

    /// Simple declarative clause.
    S => "S",
    /// Clause introduced by a (possibly empty) subordinating conjunction.
    Sbar => "SBAR",
    /// Direct question introduced by a wh-word or wh-phrase.
    Sbarq => "SBARQ",
    /// Inverted declarative sentence.
    Sinv => "SINV",
    /// Inverted yes/no question, or main clause of a wh-question.
    Sq => "SQ",

    Adjp => "ADJP",
    Advp => "ADVP",
    Conjp => "CONJP",
    /// Fragment.
    Frag => "FRAG",
    Intj => "INTJ",
    Lst => "LST",
    Nac => "NAC",
    /// Noun phrase.
    Np => "NP",
    Nx => "NX",
    Pp => "PP",
    Prn => "PRN",
    Prt => "PRT",
    Qp => "QP",
    Rrc => "RRC",
    Ucp => "UCP",
    /// Verb phrase.
    Vp => "VP",
    Whadjp => "WHADJP",
    Whadvp => "WHADVP",
    /// Wh-noun phrase.
    Whnp => "WHNP",
    Whpp => "WHPP",
    X => "X",

    Cc => "CC",
    Cd => "CD",
    /// Determiner.
    Dt => "DT",
    Ex => "EX",
    Fw => "FW",
    In => "IN",
    /// Adjective.
    Jj => "JJ",
    /// Adjective, comparative.
    Jjr => "JJR",
    /// Adjective, superlative.
    Jjs => "JJS",
    Ls => "LS",
    /// Modal.
    Md => "MD",
    /// Noun, singular or mass.
    Nn => "NN",
    /// Noun, plural.
    Nns => "NNS",
    /// Proper noun, singular.
    Nnp => "NNP",
    /// Proper noun, plural.
    Nnps => "NNPS",
    Pdt => "PDT",
    Pos => "POS",
    /// Personal pronoun.
    Prp => "PRP",
    /// Possessive pronoun.
    PrpPossessive => "PRP$",
    /// Adverb.
    Rb => "RB",
    Rbr => "RBR",
    Rbs => "RBS",
    Rp => "RP",
    Sym => "SYM",
    /// The infinitive marker `to`.
    To => "TO",
    Uh => "UH",
    /// Verb, base form.
    Vb => "VB",
    /// Verb, past tense.
    Vbd => "VBD",
    /// Verb, gerund or present participle.
    Vbg => "VBG",
    /// Verb, past participle.
    Vbn => "VBN",
    /// Verb, non-3rd person singular present.
    Vbp => "VBP",
    /// Verb, 3rd person singular present.
    Vbz => "VBZ",
    Wdt => "WDT",
    /// Wh-pronoun.
    Wp => "WP",
    /// Possessive wh-pronoun.
    WpPossessive => "WP$",
    Wrb => "WRB",
    Hyph => "HYPH",
    Nfp => "NFP",
    Add => "ADD",
    Afx => "AFX",

    Comma => ",",
    Period => ".",
    Colon => ":",
    OpenQuote => "``",
    CloseQuote => "''",
    Dollar => "$",
    Pound => "#",
    LeftBracket => "-LRB-",
    RightBracket => "-RRB-",
    /// Empty element.
    Empty => "-NONE-",
}

impl Label {
    /// Read a tag as emitted by a parser.
    ///
    /// Function tags and co-indices are dropped: `NP-SBJ-1` reads as
    /// [`Label::Np`]. Tags that begin with `-` (`-LRB-`, `-NONE-`) are
    /// matched whole. `TOP` and the empty string read as [`Label::Root`].
    pub fn from_tag(tag: &str) -> Label {
        if tag.is_empty() || tag == "TOP" {
            return Label::Root;
        }
        if tag.starts_with('-') {
            return Label::from_exact(tag);
        }
        let base = tag.split(['-', '=']).next().unwrap_or(tag);
        Label::from_exact(base)
    }

    /// Finite and non-finite verb tags, including modals.
    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            Label::Md | Label::Vb | Label::Vbd | Label::Vbg | Label::Vbn | Label::Vbp | Label::Vbz
        )
    }

    /// The `VB*` family: inflected verbs, modals excluded.
    pub fn is_inflected_verb(&self) -> bool {
        self.is_verb() && *self != Label::Md
    }

    pub fn is_infinitive_marker(&self) -> bool {
        *self == Label::To
    }

    /// Common and proper nouns, singular or plural.
    pub fn is_noun(&self) -> bool {
        self.is_singular_noun() || self.is_plural_noun()
    }

    pub fn is_singular_noun(&self) -> bool {
        matches!(self, Label::Nn | Label::Nnp)
    }

    pub fn is_plural_noun(&self) -> bool {
        matches!(self, Label::Nns | Label::Nnps)
    }

    pub fn is_personal_pronoun(&self) -> bool {
        *self == Label::Prp
    }

    /// Personal, possessive and wh-pronouns.
    pub fn is_pronoun(&self) -> bool {
        matches!(
            self,
            Label::Prp | Label::PrpPossessive | Label::Wp | Label::WpPossessive
        )
    }

    pub fn is_determiner(&self) -> bool {
        *self == Label::Dt
    }

    pub fn is_adjective(&self) -> bool {
        matches!(self, Label::Jj | Label::Jjr | Label::Jjs)
    }

    pub fn is_adverb(&self) -> bool {
        matches!(self, Label::Rb | Label::Rbr | Label::Rbs)
    }

    pub fn is_gerund(&self) -> bool {
        *self == Label::Vbg
    }

    /// `WHADJP`, `WHADVP`, `WHNP` and `WHPP`.
    pub fn is_wh_phrase(&self) -> bool {
        matches!(
            self,
            Label::Whadjp | Label::Whadvp | Label::Whnp | Label::Whpp
        )
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_reads_back_from_its_tag() {
        for label in Label::ALL {
            assert_eq!(Label::from_tag(label.as_str()), *label, "{label}");
        }
    }

    #[test]
    fn function_tags_are_stripped() {
        assert_eq!(Label::from_tag("NP-SBJ-1"), Label::Np);
        assert_eq!(Label::from_tag("S=2"), Label::S);
        assert_eq!(Label::from_tag("-LRB-"), Label::LeftBracket);
        assert_eq!(Label::from_tag("-NONE-"), Label::Empty);
    }

    #[test]
    fn wrappers_read_as_root() {
        assert_eq!(Label::from_tag(""), Label::Root);
        assert_eq!(Label::from_tag("TOP"), Label::Root);
        assert_eq!(Label::from_tag("ROOT"), Label::Root);
    }

    #[test]
    fn unknown_tags_are_preserved_as_unknown() {
        assert_eq!(Label::from_tag("GW"), Label::Unknown);
    }

    #[test]
    fn verb_predicates() {
        assert!(Label::Md.is_verb());
        assert!(!Label::Md.is_inflected_verb());
        assert!(Label::Vbz.is_inflected_verb());
        assert!(!Label::To.is_verb());
        assert!(Label::To.is_infinitive_marker());
    }

    #[test]
    fn wh_phrases() {
        assert!(Label::Whnp.is_wh_phrase());
        assert!(Label::Whpp.is_wh_phrase());
        assert!(!Label::Wp.is_wh_phrase());
    }
}
