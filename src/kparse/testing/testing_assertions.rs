//! Fluent assertion API for parse trees

use crate::kparse::ast::{Node, NodeId, ParseTree};
use std::ops::Range;

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder positioned at the root of a tree
pub fn assert_tree(tree: &ParseTree) -> NodeAssertion<'_> {
    NodeAssertion {
        tree,
        id: tree.root(),
        context: "root".to_string(),
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    tree: &'a ParseTree,
    id: NodeId,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    fn node(&self) -> &'a Node {
        self.tree.node(self.id)
    }

    fn summary(&self) -> String {
        match self.node() {
            Node::Terminal { token, .. } => format!("terminal {token}"),
            Node::Internal { label, .. } => format!("{label} {:?}", self.tree.span(self.id)),
        }
    }

    /// Assert the node is internal with this exact label
    pub fn label(self, expected: &str) -> Self {
        assert_eq!(
            self.node().label(),
            Some(expected),
            "{}: expected label '{}', found {}",
            self.context,
            expected,
            self.summary()
        );
        self
    }

    /// Assert the node is a terminal for `lexeme:TAG`
    pub fn terminal(self, expected: &str) -> Self {
        let actual = self.node().token().map(|token| token.to_string());
        assert_eq!(
            actual.as_deref(),
            Some(expected),
            "{}: expected terminal {}, found {}",
            self.context,
            expected,
            self.summary()
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let children = self.tree.children(self.id);
        assert_eq!(
            children.len(),
            expected,
            "{}: expected {} children, found {}: [{}]",
            self.context,
            expected,
            children.len(),
            self.summarize_children()
        );
        self
    }

    /// Assert on a specific child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let children = self.tree.children(self.id);
        assert!(
            index < children.len(),
            "{}: child index {} out of bounds ({} has {} children)",
            self.context,
            index,
            self.summary(),
            children.len()
        );
        assertion(NodeAssertion {
            tree: self.tree,
            id: children[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }

    /// Check the labels of a single-child chain starting at this node and move
    /// to its last element
    pub fn descend(self, labels: &[&str]) -> Self {
        let mut current = self;
        for (i, expected) in labels.iter().enumerate() {
            current = current.label(expected);
            if i + 1 < labels.len() {
                let children = current.tree.children(current.id);
                assert_eq!(
                    children.len(),
                    1,
                    "{}: expected {} to have a single child, found [{}]",
                    current.context,
                    expected,
                    current.summarize_children()
                );
                current = NodeAssertion {
                    tree: current.tree,
                    id: children[0],
                    context: format!("{} > {}", current.context, labels[i + 1]),
                };
            }
        }
        current
    }

    pub fn span(self, expected: Range<usize>) -> Self {
        let actual = self.tree.span(self.id);
        assert_eq!(
            actual, expected,
            "{}: expected span {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    /// Assert the words under this node, joined by single spaces
    pub fn covers(self, expected: &str) -> Self {
        let mut words = Vec::new();
        let mut stack = vec![self.id];
        while let Some(id) = stack.pop() {
            match self.tree.node(id) {
                Node::Terminal { token, .. } => words.push(token.word().to_string()),
                Node::Internal { children, .. } => stack.extend(children.iter().rev()),
            }
        }
        assert_eq!(
            words.join(" "),
            expected,
            "{}: covered words differ",
            self.context
        );
        self
    }

    fn summarize_children(&self) -> String {
        self.tree
            .children(self.id)
            .iter()
            .map(|&child| match self.tree.node(child) {
                Node::Terminal { token, .. } => token.to_string(),
                Node::Internal { label, .. } => label.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kparse::lexing::token::parse_descriptors;

    fn flat() -> ParseTree {
        ParseTree::degenerate("Unrecognized", &parse_descriptors("빵:NNG 을:JKO").unwrap())
    }

    #[test]
    fn test_passing_chain() {
        assert_tree(&flat())
            .label("Unrecognized")
            .span(0..2)
            .child_count(2)
            .covers("빵 을")
            .child(1, |child| {
                child.terminal("을:JKO").span(1..2);
            });
    }

    #[test]
    #[should_panic(expected = "expected label 'Sentence'")]
    fn test_wrong_label_panics() {
        assert_tree(&flat()).label("Sentence");
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_missing_child_panics() {
        assert_tree(&flat()).child(5, |_| {});
    }

    #[test]
    #[should_panic(expected = "single child")]
    fn test_descend_requires_chain() {
        assert_tree(&flat()).descend(&["Unrecognized", "Noun"]);
    }
}
