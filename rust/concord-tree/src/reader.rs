//! Reader for bracketed Penn Treebank trees.
//!
//! Splits the input into parenthesis and atom tokens, then reads nodes
//! recursively:
//!
//! ```text
//! tree := '(' label? (tree+ | word) ')'
//! ```
//!
//! A node whose only child is a bare word becomes a leaf. A node with no
//! label (the `( (S ...) )` wrapper some parsers emit) reads as
//! [`Label::Root`]. Trees nested deeper than [`MAX_DEPTH`] are rejected.

use crate::error::TreeError;
use crate::label::Label;
use crate::tree::{NodeId, ParseTree, TreeBuilder};

/// Deepest nesting [`parse_tree`] accepts.
pub const MAX_DEPTH: usize = 512;

#[derive(Debug, Clone, PartialEq)]
enum Token<'a> {
    Open,
    Close,
    Atom(&'a str),
}

impl Token<'_> {
    fn describe(&self) -> String {
        match self {
            Token::Open => "(".to_string(),
            Token::Close => ")".to_string(),
            Token::Atom(atom) => (*atom).to_string(),
        }
    }
}

fn tokenize(input: &str) -> Vec<(usize, Token<'_>)> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (offset, c) in input.char_indices() {
        if c == '(' || c == ')' || c.is_whitespace() {
            if let Some(begin) = start.take() {
                tokens.push((begin, Token::Atom(&input[begin..offset])));
            }
            match c {
                '(' => tokens.push((offset, Token::Open)),
                ')' => tokens.push((offset, Token::Close)),
                _ => {}
            }
        } else if start.is_none() {
            start = Some(offset);
        }
    }
    if let Some(begin) = start {
        tokens.push((begin, Token::Atom(&input[begin..])));
    }

    tokens
}

struct Reader<'a> {
    tokens: Vec<(usize, Token<'a>)>,
    position: usize,
    builder: TreeBuilder,
}

impl<'a> Reader<'a> {
    fn peek(&self) -> Option<&(usize, Token<'a>)> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) -> Option<(usize, Token<'a>)> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn expect_open(&mut self) -> Result<usize, TreeError> {
        match self.advance() {
            Some((offset, Token::Open)) => Ok(offset),
            Some((offset, token)) => Err(TreeError::Unexpected {
                expected: "'('",
                found: token.describe(),
                offset,
            }),
            None => Err(TreeError::UnexpectedEnd),
        }
    }

    fn read_node(&mut self, depth: usize) -> Result<NodeId, TreeError> {
        let offset = self.expect_open()?;
        if depth > MAX_DEPTH {
            return Err(TreeError::TooDeep {
                offset,
                limit: MAX_DEPTH,
            });
        }

        let raw_label = match self.peek() {
            Some((_, Token::Atom(atom))) => {
                let atom = *atom;
                self.position += 1;
                atom
            }
            Some(_) => "",
            None => return Err(TreeError::UnexpectedEnd),
        };
        let label = Label::from_tag(raw_label);

        let mut children = Vec::new();
        let mut word: Option<&str> = None;
        loop {
            match self.peek() {
                Some((_, Token::Close)) => {
                    self.position += 1;
                    break;
                }
                Some((_, Token::Open)) => {
                    if word.is_some() {
                        return Err(TreeError::MixedChildren {
                            label: raw_label.to_string(),
                            offset,
                        });
                    }
                    children.push(self.read_node(depth + 1)?);
                }
                Some((_, Token::Atom(atom))) => {
                    if word.is_some() || !children.is_empty() {
                        return Err(TreeError::MixedChildren {
                            label: raw_label.to_string(),
                            offset,
                        });
                    }
                    word = Some(*atom);
                    self.position += 1;
                }
                None => return Err(TreeError::UnexpectedEnd),
            }
        }

        match word {
            Some(word) => Ok(self.builder.leaf(label, word)),
            None if children.is_empty() => Err(TreeError::EmptyNode {
                label: raw_label.to_string(),
                offset,
            }),
            None => Ok(self.builder.interior(label, children)),
        }
    }
}

/// Read one bracketed tree.
///
/// ```
/// use concord_tree::{Label, parse_tree};
///
/// let tree = parse_tree("(ROOT (S (NP (PRP I)) (VP (VBP am))))").unwrap();
/// assert_eq!(tree.label(tree.root()), Label::Root);
/// assert_eq!(tree.sentence(), "I am");
/// ```
pub fn parse_tree(input: &str) -> Result<ParseTree, TreeError> {
    let tokens = tokenize(input);
    if tokens.is_empty() {
        return Err(TreeError::Empty);
    }

    let mut reader = Reader {
        tokens,
        position: 0,
        builder: TreeBuilder::new(),
    };
    let root = reader.read_node(1)?;

    if let Some((offset, _)) = reader.peek() {
        return Err(TreeError::TrailingInput { offset: *offset });
    }

    Ok(reader.builder.finish(root))
}

impl std::str::FromStr for ParseTree {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tree(s)
    }
}
