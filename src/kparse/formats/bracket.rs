//! Bracket formatter
//!
//! An internal node opens with `Label (` on its own line and its children
//! follow, indented two spaces per level. Closing parentheses are carried down
//! to the last child, so each subtree closes at the end of its last line:
//!
//! ```text
//! Adverbial Phrase (
//!   Noun (
//!     학교:NNG)
//!   에:JKB)
//! ```
//!
//! Childless internal nodes print their bare label.

use super::registry::{FormatError, Formatter};
use crate::kparse::ast::{Node, NodeId, ParseTree};

pub fn to_bracket_str(tree: &ParseTree) -> String {
    let mut output = String::new();
    format_node(tree, tree.root(), 0, "", &mut output);
    output
}

fn format_node(tree: &ParseTree, id: NodeId, depth: usize, closer: &str, output: &mut String) {
    let indent = "  ".repeat(depth);
    match tree.node(id) {
        Node::Terminal { token, .. } => {
            output.push_str(&format!("{}{}:{}{}\n", indent, token.word(), token.tag(), closer));
        }
        Node::Internal {
            label, children, ..
        } if children.is_empty() => {
            output.push_str(&format!("{indent}{label}{closer}\n"));
        }
        Node::Internal {
            label, children, ..
        } => {
            output.push_str(&format!("{indent}{label} (\n"));
            let last = children.len() - 1;
            for (i, &child) in children.iter().enumerate() {
                let child_closer = if i == last {
                    format!("{closer})")
                } else {
                    String::new()
                };
                format_node(tree, child, depth + 1, &child_closer, output);
            }
        }
    }
}

pub struct BracketFormatter;

impl Formatter for BracketFormatter {
    fn name(&self) -> &str {
        "bracket"
    }

    fn serialize(&self, tree: &ParseTree) -> Result<String, FormatError> {
        Ok(to_bracket_str(tree))
    }

    fn description(&self) -> &str {
        "Indented bracketed tree, one node per line"
    }
}
