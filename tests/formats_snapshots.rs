//! Snapshot tests for the text formats and JSON checks for the structured views

use kparse::kparse::annotation::map_node_names;
use kparse::kparse::config::TagMap;
use kparse::kparse::formats::{export_tree, layout, to_bracket_str, to_treeviz_str, FormatRegistry};
use kparse::kparse::parsing::parse;
use kparse::kparse::testing::Sample;
use serde_json::json;
use std::collections::BTreeMap;

#[test]
fn test_bracket_stand_alone_phrase() {
    let outcome = parse(&Sample::StandAlone.tokens());

    insta::assert_snapshot!(to_bracket_str(&outcome.tree), @r"
    Input (
      StandAlonePhrase (
        Phrase (
          AdverbialPhrase (
            NounPhrase (
              SimpleNounPhrase (
                Noun (
                  SimpleNoun (
                    학교:NNG))))
            AdverbialParticle (
              에:JKB)))))
    ");
}

#[test]
fn test_treeviz_stand_alone_phrase() {
    let outcome = parse(&Sample::StandAlone.tokens());

    insta::assert_snapshot!(to_treeviz_str(&outcome.tree), @r"
    ⧉ Input
    └─ ¶ StandAlonePhrase
      └─ ¶ Phrase
        └─ ○ AdverbialPhrase
          ├─ ○ NounPhrase
          │ └─ ○ SimpleNounPhrase
          │   └─ ○ Noun
          │     └─ ○ SimpleNoun
          │       └─ ◦ 학교:NNG
          └─ ○ AdverbialParticle
            └─ ◦ 에:JKB
    ");
}

#[test]
fn test_treeviz_renamed_clauses() {
    let tagmap = TagMap::defaults().unwrap();
    let mut tree = parse(&Sample::Sequential.tokens()).tree.flattened();
    map_node_names(&mut tree, &tagmap);

    insta::assert_snapshot!(to_treeviz_str(&tree), @r"
    § Sentence
    ├─ ☰ Sequential Clause
    │ ├─ ○ Object Phrase
    │ │ ├─ ◦ 밥:NNG
    │ │ └─ ◦ 을:JKO
    │ ├─ ◦ 먹:VV
    │ └─ ◦ 고:CEC_고
    └─ ☰ Main Clause
      ├─ ○ Adverbial Phrase
      │ ├─ ◦ 학교:NNG
      │ └─ ◦ 에:JKB
      └─ ƒ Predicate
        ├─ ○ Verb Phrase
        │ ├─ ◦ 가:VV
        │ └─ ◦ 았:EP
        └─ ◦ 다:EF
    ");
}

#[test]
fn test_export_tree_json() {
    let tagmap = TagMap::defaults().unwrap();
    let mut tree = parse(&Sample::Request.tokens()).tree;
    map_node_names(&mut tree, &tagmap);

    let exported = serde_json::to_value(export_tree(&tree, false)).unwrap();
    assert_eq!(
        exported,
        json!({
            "type": "tree",
            "tag": "Sentence",
            "children": [
                {
                    "type": "tree",
                    "tag": "Object Phrase",
                    "children": [
                        {"type": "word", "word": "빵", "tag": "NNG"},
                        {"type": "word", "word": "을", "tag": "JKO"}
                    ]
                },
                {
                    "type": "tree",
                    "tag": "Predicate",
                    "children": [
                        {"type": "word", "word": "주", "tag": "VV"},
                        {"type": "word", "word": "세요", "tag": "EF"}
                    ]
                }
            ]
        })
    );
}

#[test]
fn test_layout_json() {
    let tagmap = TagMap::defaults().unwrap();
    let mut tree = parse(&Sample::Request.tokens()).tree;
    map_node_names(&mut tree, &tagmap);
    let defs = BTreeMap::from([("빵".to_string(), "bread".to_string())]);

    let value = serde_json::to_value(layout(&tree, &tagmap, &defs, false)).unwrap();
    assert_eq!(value["layers"], json!([[1, 2, 4, 5], [3, 6], [7]]));
    assert_eq!(value["tree"]["tag"], "Sentence");
    assert_eq!(value["tree"]["id"], 7);
    assert_eq!(value["tree"]["level"], 0);
    assert_eq!(value["tree"]["children"][0]["parent"], 7);
    assert_eq!(
        value["tree"]["children"][0]["children"][0]["tagLabel"],
        json!(["noun", "bread"])
    );
    assert_eq!(
        value["tree"]["children"][0]["children"][1]["tagLabel"],
        json!(["object particle"])
    );
}

#[test]
fn test_registry_formats_by_name() {
    let registry = FormatRegistry::with_defaults();
    let tree = parse(&Sample::StandAlone.tokens()).tree;

    for name in registry.list_formats() {
        let output = registry.serialize(&tree, &name).unwrap();
        assert!(output.contains("학교"), "{name} output lost a word");
    }
    assert!(registry.serialize(&tree, "xml").is_err());
}
