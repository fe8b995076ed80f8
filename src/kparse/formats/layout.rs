//! Layered layout
//!
//! Prepares a tree for level-based drawing: words sit on layer 0 and every
//! internal node sits one layer above its highest child. Nodes get integer ids
//! in post-order starting at 1, and parent links are those ids, so the result
//! serializes without cycles.
//!
//! Layers are assigned by sweeping upward from the words: each sweep raises the
//! parents of the current frontier and the parents become the next frontier,
//! until no node has a parent left to visit.

use super::export::{collapse, display_label};
use crate::kparse::ast::{Node, NodeId, ParseTree};
use crate::kparse::config::TagMap;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

const DEFINED_TAG_PREFIXES: &[char] = &['V', 'N', 'M'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Tree,
    Word,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub id: u32,
    /// Display label for trees, the raw tag for words
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    /// Display label lines for words, plus the word's definition when known
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_label: Vec<String>,
    /// Depth from the displayed root; words have none
    pub level: Option<u32>,
    pub layer: u32,
    pub parent: Option<u32>,
    pub children: Vec<LayoutNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub tree: LayoutNode,
    /// `layers[n]` lists the ids on layer `n`, in id order
    pub layers: Vec<Vec<u32>>,
}

impl Layout {
    /// Every node, parents after their children
    pub fn nodes(&self) -> Vec<&LayoutNode> {
        let mut nodes = Vec::new();
        collect_postorder(&self.tree, &mut nodes);
        nodes
    }
}

fn collect_postorder<'a>(node: &'a LayoutNode, out: &mut Vec<&'a LayoutNode>) {
    for child in &node.children {
        collect_postorder(child, out);
    }
    out.push(node);
}

struct Builder<'a> {
    tree: &'a ParseTree,
    tagmap: &'a TagMap,
    word_defs: &'a BTreeMap<String, String>,
    show_all_levels: bool,
    /// indexed by id - 1
    parents: Vec<Option<u32>>,
    words: Vec<u32>,
}

impl Builder<'_> {
    fn build(&mut self, id: NodeId, level: u32, is_last: bool) -> LayoutNode {
        let id = if self.show_all_levels {
            id
        } else {
            collapse(self.tree, id)
        };

        match self.tree.node(id) {
            Node::Terminal { token, .. } => {
                let word = token.word().to_string();
                let mut tag_label = self.tagmap.label_lines(token);
                if token.tag().starts_with(DEFINED_TAG_PREFIXES) {
                    if let Some(definition) = self.word_defs.get(&word) {
                        tag_label.push(definition.clone());
                    }
                }
                let node_id = self.next_id();
                self.words.push(node_id);
                LayoutNode {
                    kind: NodeKind::Word,
                    id: node_id,
                    tag: token.tag().to_string(),
                    word: Some(word),
                    tag_label,
                    level: None,
                    layer: 0,
                    parent: None,
                    children: Vec::new(),
                }
            }
            Node::Internal {
                label, children, ..
            } => {
                let mut built: Vec<LayoutNode> = children
                    .iter()
                    .enumerate()
                    .map(|(i, &child)| self.build(child, level + 1, i + 1 == children.len()))
                    .collect();
                let node_id = self.next_id();
                for child in &mut built {
                    child.parent = Some(node_id);
                    self.parents[child.id as usize - 1] = Some(node_id);
                }
                LayoutNode {
                    kind: NodeKind::Tree,
                    id: node_id,
                    tag: display_label(label, level as usize, is_last),
                    word: None,
                    tag_label: Vec::new(),
                    level: Some(level),
                    layer: 1,
                    parent: None,
                    children: built,
                }
            }
        }
    }

    fn next_id(&mut self) -> u32 {
        self.parents.push(None);
        self.parents.len() as u32
    }

    /// Layer per id (index id - 1)
    fn assign_layers(&self) -> Vec<u32> {
        let mut layers: Vec<u32> = vec![1; self.parents.len()];
        for &word in &self.words {
            layers[word as usize - 1] = 0;
        }

        let mut frontier: BTreeSet<u32> = self.words.iter().copied().collect();
        while !frontier.is_empty() {
            let mut next = BTreeSet::new();
            for id in frontier {
                if let Some(parent) = self.parents[id as usize - 1] {
                    let raised = layers[id as usize - 1] + 1;
                    let slot = &mut layers[parent as usize - 1];
                    *slot = (*slot).max(raised);
                    next.insert(parent);
                }
            }
            frontier = next;
        }
        layers
    }
}

fn apply_layers(node: &mut LayoutNode, layers: &[u32]) {
    node.layer = layers[node.id as usize - 1];
    for child in &mut node.children {
        apply_layers(child, layers);
    }
}

/// Build the layered layout of a tree.
///
/// # Arguments
///
/// * `tagmap` - supplies the display label lines of each word
/// * `word_defs` - word → short definition, appended to the labels of verbs,
///   nouns and modifiers
/// * `show_all_levels` - keep single-child chains instead of collapsing them
pub fn layout(
    tree: &ParseTree,
    tagmap: &TagMap,
    word_defs: &BTreeMap<String, String>,
    show_all_levels: bool,
) -> Layout {
    let mut builder = Builder {
        tree,
        tagmap,
        word_defs,
        show_all_levels,
        parents: Vec::new(),
        words: Vec::new(),
    };
    let mut root = builder.build(tree.root(), 0, true);
    let node_layers = builder.assign_layers();
    apply_layers(&mut root, &node_layers);

    let height = node_layers.iter().copied().max().unwrap_or(0) as usize;
    let mut layers = vec![Vec::new(); height + 1];
    for (index, &layer) in node_layers.iter().enumerate() {
        layers[layer as usize].push(index as u32 + 1);
    }

    Layout {
        tree: root,
        layers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kparse::lexing::token::parse_descriptors;
    use crate::kparse::parsing::parse;

    fn tree(input: &str) -> ParseTree {
        parse(&parse_descriptors(input).unwrap()).tree
    }

    fn tables() -> TagMap {
        TagMap::from_yaml("labels:\n  NNG: noun\n  JKB: adverbial particle\n").unwrap()
    }

    #[test]
    fn test_collapsed_layout() {
        let defs = BTreeMap::from([("학교".to_string(), "school".to_string())]);
        let result = layout(&tree("학교:NNG 에:JKB .:SF"), &tables(), &defs, false);

        assert_eq!(result.layers, vec![vec![1, 2], vec![3]]);
        assert_eq!(result.tree.tag, "AdverbialPhrase");
        assert_eq!(result.tree.level, Some(0));
        assert_eq!(result.tree.parent, None);

        let school = &result.tree.children[0];
        assert_eq!(school.word.as_deref(), Some("학교"));
        assert_eq!(school.tag_label, vec!["noun", "school"]);
        assert_eq!(school.parent, Some(3));
        assert_eq!(school.level, None);
        assert_eq!(result.tree.children[1].tag_label, vec!["adverbial particle"]);
    }

    #[test]
    fn test_all_levels_layers() {
        let result = layout(&tree("학교:NNG 에:JKB .:SF"), &tables(), &BTreeMap::new(), true);

        assert_eq!(result.layers.len(), 9);
        assert_eq!(result.layers[0], vec![1, 6]);
        assert_eq!(result.layers[1], vec![2, 7]);
        assert_eq!(result.layers[5], vec![8]);
        assert_eq!(result.layers[8], vec![11]);
        assert_eq!(result.tree.tag, "Input");
        assert_eq!(result.tree.id, 11);
    }

    #[test]
    fn test_layers_sit_above_children() {
        let result = layout(
            &tree("저:MM 작:VA 은:ETM 소년:NNG 의:JKG 남동생:NNG 은:TOP 밥:NNG 을:JKO 먹:VV 다:EF .:SF"),
            &tables(),
            &BTreeMap::new(),
            false,
        );
        for node in result.nodes() {
            match node.kind {
                NodeKind::Word => assert_eq!(node.layer, 0),
                NodeKind::Tree => {
                    let highest = node.children.iter().map(|c| c.layer).max().unwrap_or(0);
                    assert_eq!(node.layer, highest + 1);
                }
            }
        }
        let ids: Vec<u32> = result.nodes().iter().map(|n| n.id).collect();
        assert_eq!(ids, (1..=ids.len() as u32).collect::<Vec<_>>());
        assert_eq!(result.layers.iter().map(Vec::len).sum::<usize>(), ids.len());
    }

    #[test]
    fn test_serialized_words_have_null_level() {
        let tokens = parse_descriptors("빵:NNG").unwrap();
        let degenerate = ParseTree::degenerate("Unrecognized", &tokens);
        let result = layout(&degenerate, &tables(), &BTreeMap::new(), true);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["tree"]["children"][0]["level"], serde_json::Value::Null);
        assert_eq!(json["tree"]["children"][0]["tagLabel"][0], "noun");
        assert_eq!(json["tree"]["children"][0]["type"], "word");
        assert_eq!(json["layers"], serde_json::json!([[1], [2]]));
    }
}
