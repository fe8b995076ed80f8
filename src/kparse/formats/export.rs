//! Export tree
//!
//! A nested, serializable copy of a parse tree for display. Unless every level
//! is requested, chains of single-child nodes collapse into their only child.
//! A few labels are shown differently depending on where they sit; see
//! [`display_label`].

use super::registry::{FormatError, Formatter};
use crate::kparse::ast::labels::same_label;
use crate::kparse::ast::{Node, NodeId, ParseTree};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExportNode {
    Tree {
        tag: String,
        children: Vec<ExportNode>,
    },
    Word {
        word: String,
        tag: String,
    },
}

impl ExportNode {
    pub fn tag(&self) -> &str {
        match self {
            ExportNode::Tree { tag, .. } | ExportNode::Word { tag, .. } => tag,
        }
    }

    pub fn children(&self) -> &[ExportNode] {
        match self {
            ExportNode::Tree { children, .. } => children,
            ExportNode::Word { .. } => &[],
        }
    }
}

/// Label shown for an internal node at `level` (0 is the displayed root).
///
/// - `S`, or a root `Main Clause` or `Sentence`, shows as `Sentence`
/// - a root `Stand Alone Phrase` shows as `Phrase`
/// - a `Predicate` that is not its parent's last child shows as `Verb Phrase`
pub(crate) fn display_label(label: &str, level: usize, is_last: bool) -> String {
    let at_root = level == 0;
    if label == "S"
        || at_root && (same_label(label, "Main Clause") || same_label(label, "Sentence"))
    {
        "Sentence".to_string()
    } else if at_root && same_label(label, "Stand Alone Phrase") {
        "Phrase".to_string()
    } else if same_label(label, "Predicate") && !is_last {
        "Verb Phrase".to_string()
    } else {
        label.to_string()
    }
}

/// Follow single-child links down to the first node worth showing
pub(crate) fn collapse(tree: &ParseTree, mut id: NodeId) -> NodeId {
    while let [only] = tree.children(id) {
        id = *only;
    }
    id
}

pub fn export_tree(tree: &ParseTree, show_all_levels: bool) -> ExportNode {
    export_node(tree, tree.root(), 0, true, show_all_levels)
}

fn export_node(
    tree: &ParseTree,
    id: NodeId,
    level: usize,
    is_last: bool,
    show_all_levels: bool,
) -> ExportNode {
    let id = if show_all_levels { id } else { collapse(tree, id) };
    match tree.node(id) {
        Node::Terminal { token, .. } => ExportNode::Word {
            word: token.word().to_string(),
            tag: token.tag().to_string(),
        },
        Node::Internal {
            label, children, ..
        } => ExportNode::Tree {
            tag: display_label(label, level, is_last),
            children: children
                .iter()
                .enumerate()
                .map(|(i, &child)| {
                    export_node(tree, child, level + 1, i + 1 == children.len(), show_all_levels)
                })
                .collect(),
        },
    }
}

/// Pretty-printed JSON of the export tree
#[derive(Debug, Default)]
pub struct JsonFormatter {
    pub show_all_levels: bool,
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, tree: &ParseTree) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&export_tree(tree, self.show_all_levels))
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Nested JSON display tree"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kparse::lexing::token::parse_descriptors;
    use crate::kparse::parsing::parse;
    use serde_json::json;

    fn tree(input: &str) -> ParseTree {
        parse(&parse_descriptors(input).unwrap()).tree
    }

    #[test]
    fn test_display_label_rules() {
        assert_eq!(display_label("S", 3, true), "Sentence");
        assert_eq!(display_label("Main Clause", 0, true), "Sentence");
        assert_eq!(display_label("MainClause", 0, true), "Sentence");
        assert_eq!(display_label("Main Clause", 1, true), "Main Clause");
        assert_eq!(display_label("Stand Alone Phrase", 0, true), "Phrase");
        assert_eq!(display_label("Stand Alone Phrase", 1, true), "Stand Alone Phrase");
        assert_eq!(display_label("Predicate", 2, false), "Verb Phrase");
        assert_eq!(display_label("Predicate", 2, true), "Predicate");
    }

    #[test]
    fn test_chains_collapse() {
        let exported = export_tree(&tree("학교:NNG 에:JKB .:SF"), false);
        assert_eq!(
            serde_json::to_value(&exported).unwrap(),
            json!({
                "type": "tree",
                "tag": "AdverbialPhrase",
                "children": [
                    {"type": "word", "word": "학교", "tag": "NNG"},
                    {"type": "word", "word": "에", "tag": "JKB"}
                ]
            })
        );
    }

    #[test]
    fn test_all_levels_keeps_chains() {
        let exported = export_tree(&tree("학교:NNG 에:JKB .:SF"), true);
        assert_eq!(exported.tag(), "Input");
        assert_eq!(exported.children()[0].tag(), "StandAlonePhrase");
    }

    #[test]
    fn test_root_main_clause_shows_as_sentence() {
        let exported = export_tree(&tree("빵:NNG 을:JKO 주:VV 세요:EF .:SF"), false);
        assert_eq!(exported.tag(), "Sentence");
        let tags: Vec<_> = exported.children().iter().map(ExportNode::tag).collect();
        assert_eq!(tags, vec!["ObjectPhrase", "Predicate"]);
    }

    #[test]
    fn test_json_formatter() {
        let text = JsonFormatter::default()
            .serialize(&tree("학교:NNG 에:JKB .:SF"))
            .unwrap();
        assert!(text.contains("\"tag\": \"AdverbialPhrase\""));
    }
}
