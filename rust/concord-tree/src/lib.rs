//! # concord-tree
//!
//! Constituency parse trees for English sentences, stored in an arena.
//!
//! A [`ParseTree`] owns every node of one sentence's parse. Nodes refer to
//! their children through [`NodeId`] indices rather than owned boxes, so a
//! tree is cheap to traverse, trivially immutable once built, and any number
//! of borrowed views (subject/verb pairs, word lists) can point into it at
//! once.
//!
//! Node categories are a closed [`Label`] enumeration over the Penn Treebank
//! tag set. Interior nodes carry a phrase or clause label (`NP`, `VP`, `S`,
//! `SBAR`, ...); leaves carry a part-of-speech tag and the word itself.
//!
//! ## Reading trees
//!
//! External constituency parsers emit trees in the bracketed Penn format.
//! [`parse_tree`] reads that format:
//!
//! ```
//! use concord_tree::{Label, parse_tree};
//!
//! let tree = parse_tree("(S (NP (DT The) (NN girl)) (VP (VBP run)))").unwrap();
//!
//! assert_eq!(tree.label(tree.root()), Label::S);
//! assert_eq!(tree.sentence(), "The girl run");
//!
//! // Rendering gives back the bracketed form
//! assert_eq!(
//!     tree.to_string(),
//!     "(S (NP (DT The) (NN girl)) (VP (VBP run)))"
//! );
//! ```

pub mod error;
pub mod label;
pub mod reader;
pub mod tree;

pub use error::TreeError;
pub use label::Label;
pub use reader::{MAX_DEPTH, parse_tree};
pub use tree::{NodeId, ParseNode, ParseTree, Preorder, TreeBuilder};
