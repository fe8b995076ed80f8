//! Scratch arena used while parsing
//!
//! Productions build nodes bottom-up into a [`TreeBuilder`]. Nodes created by
//! productions that later fail simply stay unreferenced; [`TreeBuilder::finish`]
//! copies out only what the winning root reaches.
//!
//! Terminals are shared per input position, so a memoized subtree replayed at
//! several places in the search always refers to the same leaf ids.

use super::tree::{write_inline, Node, NodeId, ParseTree};
use crate::kparse::lexing::Token;
use std::collections::HashMap;
use std::ops::Range;

#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
    terminals: HashMap<usize, NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The leaf for the token at `position`, created on first use
    pub fn terminal(&mut self, position: usize, token: &Token) -> NodeId {
        if let Some(&id) = self.terminals.get(&position) {
            return id;
        }
        let id = self.push(Node::Terminal {
            position,
            token: token.clone(),
        });
        self.terminals.insert(position, id);
        id
    }

    /// A new internal node over `children`.
    ///
    /// The span runs from the first child's start to the last child's end;
    /// a childless node gets the empty span at `empty_at`.
    pub fn internal(&mut self, label: &str, children: Vec<NodeId>, empty_at: usize) -> NodeId {
        let span = self.covering_span(&children).unwrap_or(empty_at..empty_at);
        self.push(Node::Internal {
            label: label.to_string(),
            children,
            span,
        })
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn span(&self, id: NodeId) -> Range<usize> {
        self.node(id).span()
    }

    /// Number of tokens covered by the node
    pub fn width(&self, id: NodeId) -> usize {
        self.span(id).len()
    }

    /// One-line rendering of a node, as used by trace lines
    pub fn describe(&self, id: NodeId) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = write_inline(&self.nodes, id, &mut out);
        out
    }

    /// Copy the tree reachable from `root` into a compact [`ParseTree`]
    pub fn finish(&self, root: NodeId) -> ParseTree {
        ParseTree::compact(&self.nodes, root, false)
    }

    fn covering_span(&self, children: &[NodeId]) -> Option<Range<usize>> {
        let first = children.first()?;
        let last = children.last()?;
        Some(self.span(*first).start..self.span(*last).end)
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }
}
