//! Node renaming
//!
//! Synthetic tags can change what the clause around them is called: a clause
//! ending in `CEC_고` is a sequential clause rather than a generic subordinate
//! clause. For each terminal whose tag has rename rules, the nearest ancestor
//! whose label matches one of the rule's old labels is relabeled, and the search
//! stops for that terminal.
//!
//! Before renaming, every internal label is respaced from camel case
//! (`SubordinateClause` → `Subordinate Clause`).

use crate::kparse::ast::labels::{same_label, spaced};
use crate::kparse::ast::ParseTree;
use crate::kparse::config::TagMap;

/// Respace labels and apply the tag-triggered renames in place.
///
/// # Returns
///
/// The number of ancestors renamed. A second run over the same tree returns 0.
pub fn map_node_names(tree: &mut ParseTree, tagmap: &TagMap) -> usize {
    for id in tree.preorder() {
        if let Some(label) = tree.label(id) {
            let respaced = spaced(label);
            tree.set_label(id, respaced);
        }
    }

    let parents = tree.parents();
    let mut renamed = 0;
    for terminal in tree.terminals() {
        let Some(token) = tree.node(terminal).token() else {
            continue;
        };
        let Some(rules) = tagmap.renames_for(token.tag()) else {
            continue;
        };

        let mut ancestor = parents[terminal.index()];
        while let Some(id) = ancestor {
            let replacement = tree.label(id).and_then(|label| {
                rules
                    .iter()
                    .find(|(old, new)| same_label(old, label) && !same_label(new, label))
                    .map(|(_, new)| spaced(new))
            });
            if let Some(new_label) = replacement {
                tree.set_label(id, new_label);
                renamed += 1;
                break;
            }
            ancestor = parents[id.index()];
        }
    }
    renamed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kparse::lexing::token::parse_descriptors;
    use crate::kparse::parsing::parse;

    fn tagmap() -> TagMap {
        TagMap::from_yaml(
            "renames:\n  CEC_고:\n    Subordinate Clause: SequentialClause\n",
        )
        .unwrap()
    }

    fn tree(input: &str) -> ParseTree {
        let outcome = parse(&parse_descriptors(input).unwrap());
        assert!(outcome.is_ok(), "{input} should parse");
        outcome.tree
    }

    #[test]
    fn test_labels_are_spaced() {
        let mut tree = tree("빵:NNG 을:JKO 주:VV 세요:EF .:SF");
        assert_eq!(map_node_names(&mut tree, &TagMap::default()), 0);
        let labels: Vec<_> = tree
            .preorder()
            .into_iter()
            .filter_map(|id| tree.label(id).map(str::to_string))
            .collect();
        assert!(labels.contains(&"Main Clause".to_string()));
        assert!(labels.contains(&"Object Phrase".to_string()));
    }

    #[test]
    fn test_nearest_matching_ancestor_renamed() {
        let mut tree = tree("밥:NNG 을:JKO 먹:VV 고:CEC_고 학교:NNG 에:JKB 가:VV 았:EP 다:EF .:SF");
        assert_eq!(map_node_names(&mut tree, &tagmap()), 1);
        assert!(tree.to_string().starts_with("Input [Sentence [Sequential Clause ["));
    }

    #[test]
    fn test_rename_is_idempotent() {
        let mut tree = tree("밥:NNG 을:JKO 먹:VV 고:CEC_고 학교:NNG 에:JKB 가:VV 았:EP 다:EF .:SF");
        map_node_names(&mut tree, &tagmap());
        let once = tree.clone();
        assert_eq!(map_node_names(&mut tree, &tagmap()), 0);
        assert_eq!(tree, once);
    }
}
