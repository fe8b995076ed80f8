//! Treeviz formatter for parse trees
//!
//! One line per node, which makes deep trees quick to scan. Nesting is drawn
//! with box connectors, two columns per level:
//!
//! <prefix><connector> <icon> <label> (labels truncated to 30 characters)
//!
//! Example:
//!
//! ⧉ Input
//! └─ ¶ StandAlonePhrase
//!   └─ ○ AdverbialPhrase
//!     ├─ ◦ 학교:NNG
//!     └─ ◦ 에:JKB
//!
//! Icons
//!     Input: ⧉
//!     Sentence: §
//!     Clauses: ☰
//!     Phrase, StandAlonePhrase: ¶
//!     Predicate: ƒ
//!     Other internal nodes: ○
//!     Words: ◦

use super::registry::{FormatError, Formatter};
use crate::kparse::ast::labels::label_key;
use crate::kparse::ast::{Node, NodeId, ParseTree};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node: &Node) -> &'static str {
    let Some(label) = node.label() else {
        return "◦";
    };
    match label_key(label).as_str() {
        "Input" => "⧉",
        "Sentence" => "§",
        "Phrase" | "StandAlonePhrase" => "¶",
        "Predicate" => "ƒ",
        key if key.ends_with("Clause") => "☰",
        _ => "○",
    }
}

fn node_text(node: &Node) -> String {
    match node {
        Node::Terminal { token, .. } => format!("{}:{}", token.word(), token.tag()),
        Node::Internal { label, .. } => label.clone(),
    }
}

fn format_node(
    tree: &ParseTree,
    id: NodeId,
    prefix: &str,
    child_index: usize,
    child_count: usize,
) -> String {
    let mut output = String::new();
    let node = tree.node(id);

    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };

    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(node),
        truncate(&node_text(node), 30)
    ));

    let children = node.children();
    if !children.is_empty() {
        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        for (i, &child) in children.iter().enumerate() {
            output.push_str(&format_node(tree, child, &child_prefix, i, children.len()));
        }
    }

    output
}

pub fn to_treeviz_str(tree: &ParseTree) -> String {
    let root = tree.node(tree.root());
    let mut output = format!("{} {}\n", get_icon(root), truncate(&node_text(root), 30));

    let children = root.children();
    for (i, &child) in children.iter().enumerate() {
        output.push_str(&format_node(tree, child, "", i, children.len()));
    }

    output
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, tree: &ParseTree) -> Result<String, FormatError> {
        Ok(to_treeviz_str(tree))
    }

    fn description(&self) -> &str {
        "Visual tree representation with box connectors and Unicode icons"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kparse::lexing::token::parse_descriptors;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 30), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }

    #[test]
    fn test_icons_ignore_spacing() {
        let node = |label: &str| Node::Internal {
            label: label.to_string(),
            children: Vec::new(),
            span: 0..0,
        };
        assert_eq!(get_icon(&node("Main Clause")), "☰");
        assert_eq!(get_icon(&node("SubordinateClause")), "☰");
        assert_eq!(get_icon(&node("Stand Alone Phrase")), "¶");
        assert_eq!(get_icon(&node("Object Phrase")), "○");
    }

    #[test]
    fn test_flat_tree() {
        let tokens = parse_descriptors("빵:NNG 을:JKO").unwrap();
        let tree = ParseTree::degenerate("Unrecognized", &tokens);
        assert_eq!(
            to_treeviz_str(&tree),
            "○ Unrecognized\n├─ ◦ 빵:NNG\n└─ ◦ 을:JKO\n"
        );
    }
}
