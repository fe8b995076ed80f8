//! Phrase descriptor lists
//!
//! One list per top-level child of the root. Each list reads left to right:
//! words as they appear, and after the words of a sub-phrase a marker naming
//! it. Purely structural labels contribute their words but no marker.

use crate::kparse::ast::labels::same_label;
use crate::kparse::ast::{Node, NodeId, ParseTree};
use serde::Serialize;

const HIDDEN_LABELS: &[&str] = &["Substantive", "Constituent", "NounPhrase", "Connection"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PhraseItem {
    Word { word: String, tag: String },
    Tree { tag: String },
}

impl PhraseItem {
    fn marker(label: &str) -> Self {
        PhraseItem::Tree {
            tag: label.to_string(),
        }
    }
}

fn is_hidden(label: &str) -> bool {
    HIDDEN_LABELS.iter().any(|hidden| same_label(hidden, label))
}

pub fn phrase_list(tree: &ParseTree) -> Vec<Vec<PhraseItem>> {
    tree.children(tree.root())
        .iter()
        .map(|&child| {
            let mut phrase = Vec::new();
            describe(tree, child, &mut phrase);
            phrase
        })
        .collect()
}

fn describe(tree: &ParseTree, id: NodeId, phrase: &mut Vec<PhraseItem>) {
    match tree.node(id) {
        Node::Terminal { token, .. } => phrase.push(PhraseItem::Word {
            word: token.word().to_string(),
            tag: token.tag().to_string(),
        }),
        Node::Internal {
            label, children, ..
        } => {
            for &child in children {
                describe(tree, child, phrase);
            }
            if !is_hidden(label) {
                phrase.push(PhraseItem::marker(label));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kparse::lexing::token::parse_descriptors;
    use crate::kparse::parsing::parse;

    fn word(word: &str, tag: &str) -> PhraseItem {
        PhraseItem::Word {
            word: word.into(),
            tag: tag.into(),
        }
    }

    #[test]
    fn test_markers_follow_their_words() {
        let outcome = parse(&parse_descriptors("학교:NNG 에:JKB .:SF").unwrap());
        let phrases = phrase_list(&outcome.tree);
        assert_eq!(
            phrases,
            vec![vec![
                word("학교", "NNG"),
                PhraseItem::marker("SimpleNoun"),
                PhraseItem::marker("Noun"),
                PhraseItem::marker("SimpleNounPhrase"),
                word("에", "JKB"),
                PhraseItem::marker("AdverbialParticle"),
                PhraseItem::marker("AdverbialPhrase"),
                PhraseItem::marker("Phrase"),
                PhraseItem::marker("StandAlonePhrase"),
            ]]
        );
    }

    #[test]
    fn test_hidden_labels_match_spaced_form() {
        assert!(is_hidden("Noun Phrase"));
        assert!(is_hidden("Substantive"));
        assert!(!is_hidden("Simple Noun Phrase"));
    }

    #[test]
    fn test_terminal_children_become_single_word_phrases() {
        let tokens = parse_descriptors("xx:ZZ yy:ZZ").unwrap();
        let tree = ParseTree::degenerate("Unrecognized", &tokens);
        assert_eq!(
            phrase_list(&tree),
            vec![vec![word("xx", "ZZ")], vec![word("yy", "ZZ")]]
        );
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(vec![word("밥", "NNG"), PhraseItem::marker("Noun")]).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"type": "word", "word": "밥", "tag": "NNG"},
                {"type": "tree", "tag": "Noun"}
            ])
        );
    }
}
