//! Reference and annotation extraction
//!
//! Walks a tree once and gathers what a reader needs next to it:
//!
//! 1. `references`: word → dictionary links plus any static references for its tag
//! 2. `lookup_keys`: word → the key it is looked up under (`먹` → `먹다`)
//! 3. `tags`: every tag seen → its notes, display label and description
//! 4. `annotations`: internal label → its configured explanation

use crate::kparse::ast::{Node, ParseTree};
use crate::kparse::config::{Reference, RuleAnnotation, TagMap};
use serde::Serialize;
use std::collections::BTreeMap;

/// What is known about one tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct References {
    pub references: BTreeMap<String, Vec<Reference>>,
    pub lookup_keys: BTreeMap<String, String>,
    pub tags: BTreeMap<String, TagInfo>,
    pub annotations: BTreeMap<String, RuleAnnotation>,
}

pub fn collect_references(tree: &ParseTree, tagmap: &TagMap) -> References {
    let mut found = References::default();

    for id in tree.preorder() {
        match tree.node(id) {
            Node::Internal { label, .. } => {
                if let Some(annotation) = tagmap.annotation(label) {
                    found.annotations.insert(label.clone(), annotation.clone());
                }
            }
            Node::Terminal { token, .. } => {
                let word = token.word().to_string();
                let mut links = Vec::new();
                if let Some(key) = tagmap.lookup_key(token) {
                    links.extend(tagmap.dictionary_links(&key));
                    found.lookup_keys.insert(word.clone(), key);
                }
                links.extend(tagmap.tag_references(token.tag()).iter().cloned());
                if !links.is_empty() {
                    found.references.insert(word, links);
                }

                found
                    .tags
                    .entry(token.tag().to_string())
                    .or_insert_with(|| TagInfo {
                        notes: tagmap.notes(token.tag()).map(str::to_string),
                        label: tagmap.tag_label(token.tag()).map(str::to_string),
                        description: tagmap.description(token.tag()).map(str::to_string),
                    });
            }
        }
    }
    found
}
