//! Constituency tree
//!
//! The tree is an arena: nodes live in one vector and refer to their children by
//! [`NodeId`]. Nodes never point at their parent; when a pass needs upward links
//! it asks for [`ParseTree::parents`], a derived id→id relation.
//!
//! A finished tree is compact: every node in the arena is reachable from the
//! root and ids are assigned in pre-order, so two trees built from the same
//! parse compare equal with `==`.
//!
//! Invariants
//!
//! 1. A terminal wraps one token and spans `[position, position + 1)`.
//! 2. An internal node's span is the contiguous concatenation of its children's
//!    spans, in order.

use crate::kparse::lexing::Token;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Index of a node inside its tree's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Terminal {
        position: usize,
        token: Token,
    },
    Internal {
        label: String,
        children: Vec<NodeId>,
        span: Range<usize>,
    },
}

impl Node {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Node::Terminal { .. })
    }

    pub fn span(&self) -> Range<usize> {
        match self {
            Node::Terminal { position, .. } => *position..*position + 1,
            Node::Internal { span, .. } => span.clone(),
        }
    }

    pub fn children(&self) -> &[NodeId] {
        match self {
            Node::Terminal { .. } => &[],
            Node::Internal { children, .. } => children,
        }
    }

    /// Category label of an internal node
    pub fn label(&self) -> Option<&str> {
        match self {
            Node::Terminal { .. } => None,
            Node::Internal { label, .. } => Some(label),
        }
    }

    pub fn token(&self) -> Option<&Token> {
        match self {
            Node::Terminal { token, .. } => Some(token),
            Node::Internal { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl ParseTree {
    /// Copy the subtree under `root` out of a scratch arena into a compact tree.
    ///
    /// With `collapse` set, every internal node with exactly one child is
    /// replaced by that child, repeatedly.
    pub(crate) fn compact(arena: &[Node], root: NodeId, collapse: bool) -> Self {
        let mut nodes = Vec::new();
        let root = copy_subtree(arena, root, &mut nodes, collapse);
        ParseTree { nodes, root }
    }

    /// A flat tree of terminals under a single internal root.
    ///
    /// This is the fallback shape used when the grammar cannot account for the
    /// whole sentence: every token becomes a direct child of `label`.
    pub fn degenerate(label: &str, tokens: &[Token]) -> Self {
        let mut nodes = vec![Node::Internal {
            label: label.to_string(),
            children: (1..=tokens.len()).map(NodeId::new).collect(),
            span: 0..tokens.len(),
        }];
        nodes.extend(
            tokens
                .iter()
                .enumerate()
                .map(|(position, token)| Node::Terminal {
                    position,
                    token: token.clone(),
                }),
        );
        ParseTree {
            nodes,
            root: NodeId::new(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).children()
    }

    pub fn span(&self, id: NodeId) -> Range<usize> {
        self.node(id).span()
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.node(id).label()
    }

    /// Relabel an internal node. Terminals are left untouched.
    pub fn set_label(&mut self, id: NodeId, new_label: impl Into<String>) {
        if let Node::Internal { label, .. } = &mut self.nodes[id.index()] {
            *label = new_label.into();
        }
    }

    /// All node ids, parents before children, children left to right
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev());
        }
        order
    }

    /// Terminal nodes in surface order
    pub fn terminals(&self) -> Vec<NodeId> {
        self.preorder()
            .into_iter()
            .filter(|&id| self.node(id).is_terminal())
            .collect()
    }

    /// The tokens covered by the tree, in surface order
    pub fn tokens(&self) -> Vec<&Token> {
        self.terminals()
            .into_iter()
            .filter_map(|id| self.node(id).token())
            .collect()
    }

    /// Derived upward links: `parents()[id.index()]` is the parent of `id`
    pub fn parents(&self) -> Vec<Option<NodeId>> {
        let mut parents = vec![None; self.nodes.len()];
        for id in self.preorder() {
            for &child in self.children(id) {
                parents[child.index()] = Some(id);
            }
        }
        parents
    }

    /// A copy with every single-child internal node collapsed into its child
    pub fn flattened(&self) -> ParseTree {
        ParseTree::compact(&self.nodes, self.root, true)
    }

    /// True when no internal node has exactly one child
    pub fn is_flat(&self) -> bool {
        self.nodes.iter().all(|node| node.is_terminal() || node.children().len() != 1)
    }

    /// Check span invariants for every internal node
    pub fn spans_are_contiguous(&self) -> bool {
        self.nodes.iter().all(|node| match node {
            Node::Terminal { .. } => true,
            Node::Internal { children, span, .. } => {
                let mut cursor = span.start;
                for &child in children {
                    let child_span = self.span(child);
                    if child_span.start != cursor {
                        return false;
                    }
                    cursor = child_span.end;
                }
                children.is_empty() || cursor == span.end
            }
        })
    }
}

impl fmt::Display for ParseTree {
    /// Single-line form: `Label [child, child]`, terminals as `lexeme:TAG`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_inline(&self.nodes, self.root, f)
    }
}

pub(crate) fn write_inline(nodes: &[Node], id: NodeId, out: &mut impl fmt::Write) -> fmt::Result {
    match &nodes[id.index()] {
        Node::Terminal { token, .. } => write!(out, "{token}"),
        Node::Internal {
            label, children, ..
        } => {
            out.write_str(label)?;
            if children.is_empty() {
                return Ok(());
            }
            out.write_str(" [")?;
            for (i, &child) in children.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_inline(nodes, child, out)?;
            }
            out.write_str("]")
        }
    }
}

fn copy_subtree(arena: &[Node], id: NodeId, out: &mut Vec<Node>, collapse: bool) -> NodeId {
    let mut id = id;
    if collapse {
        while let [only] = arena[id.index()].children() {
            id = *only;
        }
    }

    let slot = out.len();
    match &arena[id.index()] {
        Node::Terminal { position, token } => out.push(Node::Terminal {
            position: *position,
            token: token.clone(),
        }),
        Node::Internal {
            label, children, span,
        } => {
            out.push(Node::Internal {
                label: label.clone(),
                children: Vec::with_capacity(children.len()),
                span: span.clone(),
            });
            let copied: Vec<NodeId> = children
                .iter()
                .map(|&child| copy_subtree(arena, child, out, collapse))
                .collect();
            if let Node::Internal { children, .. } = &mut out[slot] {
                *children = copied;
            }
        }
    }
    NodeId::new(slot)
}
