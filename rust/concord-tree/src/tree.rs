//! Arena-backed parse trees.
//!
//! All nodes of a tree live in one `Vec`, addressed by [`NodeId`]. Children
//! are created before their parents, so a [`TreeBuilder`] assembles a tree
//! bottom-up and [`TreeBuilder::finish`] seals it. After that the tree is
//! read-only.

use std::fmt;

use crate::label::Label;

/// Index of a node inside one [`ParseTree`].
///
/// Ids are only meaningful for the tree that minted them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single node: either a labeled phrase with ordered children, or a
/// tagged word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNode {
    Interior { label: Label, children: Vec<NodeId> },
    Leaf { tag: Label, word: String },
}

impl ParseNode {
    /// The phrase label of an interior node, or the part-of-speech tag of a leaf.
    pub fn label(&self) -> Label {
        match self {
            ParseNode::Interior { label, .. } => *label,
            ParseNode::Leaf { tag, .. } => *tag,
        }
    }

    /// Ordered children. Empty for leaves.
    pub fn children(&self) -> &[NodeId] {
        match self {
            ParseNode::Interior { children, .. } => children,
            ParseNode::Leaf { .. } => &[],
        }
    }

    pub fn word(&self) -> Option<&str> {
        match self {
            ParseNode::Leaf { word, .. } => Some(word),
            ParseNode::Interior { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, ParseNode::Leaf { .. })
    }
}

/// Builds a [`ParseTree`] from the leaves up.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<ParseNode>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tagged word.
    pub fn leaf(&mut self, tag: Label, word: impl Into<String>) -> NodeId {
        self.push(ParseNode::Leaf {
            tag,
            word: word.into(),
        })
    }

    /// Add a phrase over already-added children.
    pub fn interior(&mut self, label: Label, children: Vec<NodeId>) -> NodeId {
        self.push(ParseNode::Interior { label, children })
    }

    /// Seal the tree with `root` as its root.
    pub fn finish(self, root: NodeId) -> ParseTree {
        ParseTree {
            nodes: self.nodes,
            root,
        }
    }

    fn push(&mut self, node: ParseNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }
}

/// An immutable constituency parse of one sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTree {
    nodes: Vec<ParseNode>,
    root: NodeId,
}

impl ParseTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node. Panics if `id` was minted by another tree and is out
    /// of range; use [`ParseTree::get`] when that can happen.
    pub fn node(&self, id: NodeId) -> &ParseNode {
        &self.nodes[id.index()]
    }

    pub fn get(&self, id: NodeId) -> Option<&ParseNode> {
        self.nodes.get(id.index())
    }

    pub fn label(&self, id: NodeId) -> Label {
        self.node(id).label()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).children()
    }

    pub fn word(&self, id: NodeId) -> Option<&str> {
        self.node(id).word()
    }

    /// Every node reachable from the root, parents before children, children
    /// left to right.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![self.root],
        }
    }

    /// Leaves under `id`, left to right.
    pub fn leaves(&self, id: NodeId) -> Vec<NodeId> {
        Preorder {
            tree: self,
            stack: vec![id],
        }
        .filter(|node| self.node(*node).is_leaf())
        .collect()
    }

    /// The words under `id`, left to right.
    pub fn words(&self, id: NodeId) -> Vec<&str> {
        self.leaves(id)
            .into_iter()
            .filter_map(|leaf| self.word(leaf))
            .collect()
    }

    /// The sentence spelled out by the leaves, space separated.
    pub fn sentence(&self) -> String {
        self.words(self.root).join(" ")
    }

    fn write_node(&self, id: NodeId, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node(id) {
            ParseNode::Leaf { tag, word } => write!(f, "({tag} {word})"),
            ParseNode::Interior { label, children } => {
                write!(f, "({label}")?;
                for child in children {
                    write!(f, " ")?;
                    self.write_node(*child, f)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(self.root, f)
    }
}

/// Depth-first, pre-order walk over node ids.
pub struct Preorder<'a> {
    tree: &'a ParseTree,
    stack: Vec<NodeId>,
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
