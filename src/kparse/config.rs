//! Tag tables
//!
//! `defaults/tagmap.yaml` is embedded into the binary so the built-in tables and
//! the documentation stay in sync. Applications layer their own YAML files on
//! top of those defaults via [`Loader`] before handing the resulting [`TagMap`]
//! to the annotation and layout passes.
//!
//! A [`TagMap`] is an immutable snapshot: nothing in the crate mutates it after
//! loading, and it is always passed in explicitly.

use crate::kparse::ast::labels::same_label;
use crate::kparse::lexing::Token;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_YAML: &str = include_str!("../../defaults/tagmap.yaml");

const DEFAULT_VERB_ENDING: &str = "다";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid tag table in {origin}: {source}")]
    Yaml {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// A titled link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub title: String,
    pub url: String,
}

/// An online dictionary, queried by substituting `${word}` in its URL template
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Dictionary {
    pub title: String,
    pub url_template: String,
}

impl Dictionary {
    pub fn link(&self, word: &str) -> Reference {
        Reference {
            title: self.title.clone(),
            url: self.url_template.replace("${word}", word),
        }
    }
}

/// Explanation attached to a production label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleAnnotation {
    pub description: String,
    #[serde(default)]
    pub references: Vec<Reference>,
}

/// How a tag's words are looked up in dictionaries
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum LookupKey {
    /// Written `none`: words with this tag are never looked up
    Disabled,
    /// Every word with this tag is looked up under this key
    Fixed(String),
}

impl From<String> for LookupKey {
    fn from(value: String) -> Self {
        if value == "none" {
            LookupKey::Disabled
        } else {
            LookupKey::Fixed(value)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagMap {
    verb_ending: Option<String>,
    /// tag -> display label
    pub labels: BTreeMap<String, String>,
    /// `word:TAG` -> display label, taking precedence over `labels`
    pub word_labels: BTreeMap<String, String>,
    /// tag -> description
    pub descriptions: BTreeMap<String, String>,
    /// tag -> usage notes
    pub notes: BTreeMap<String, String>,
    /// synthetic tag -> (old ancestor label -> new label)
    pub renames: BTreeMap<String, BTreeMap<String, String>>,
    /// tag -> dictionary lookup key
    pub lookup_keys: BTreeMap<String, LookupKey>,
    /// tag -> static references
    pub references: BTreeMap<String, Vec<Reference>>,
    /// production label -> annotation
    pub annotations: BTreeMap<String, RuleAnnotation>,
    pub dictionaries: Vec<Dictionary>,
}

impl TagMap {
    /// The built-in tables
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::from_yaml_named(DEFAULT_YAML, "built-in defaults")
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Self::from_yaml_named(yaml, "inline YAML")
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_named(&yaml, &path.display().to_string())
    }

    fn from_yaml_named(yaml: &str, origin: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(TagMap::default());
        }
        serde_yaml::from_str(yaml).map_err(|source| ConfigError::Yaml {
            origin: origin.to_string(),
            source,
        })
    }

    /// Layer `other` over `self`: its entries win, tables it leaves out are kept
    pub fn merge(&mut self, other: TagMap) {
        if other.verb_ending.is_some() {
            self.verb_ending = other.verb_ending;
        }
        self.labels.extend(other.labels);
        self.word_labels.extend(other.word_labels);
        self.descriptions.extend(other.descriptions);
        self.notes.extend(other.notes);
        self.renames.extend(other.renames);
        self.lookup_keys.extend(other.lookup_keys);
        self.references.extend(other.references);
        self.annotations.extend(other.annotations);
        if !other.dictionaries.is_empty() {
            self.dictionaries = other.dictionaries;
        }
    }

    /// Morpheme appended to verb stems for dictionary lookup
    pub fn verb_ending(&self) -> &str {
        self.verb_ending.as_deref().unwrap_or(DEFAULT_VERB_ENDING)
    }

    pub fn tag_label(&self, tag: &str) -> Option<&str> {
        self.labels.get(tag).map(String::as_str)
    }

    /// Display label lines for a word: the per-word override, else the tag
    /// label, else the raw tag
    pub fn label_lines(&self, token: &Token) -> Vec<String> {
        let label = self
            .word_labels
            .get(&token.word_key())
            .or_else(|| self.labels.get(token.tag()))
            .map(String::as_str)
            .unwrap_or(token.tag());
        label.split('\n').map(str::to_string).collect()
    }

    pub fn description(&self, tag: &str) -> Option<&str> {
        self.descriptions.get(tag).map(String::as_str)
    }

    pub fn notes(&self, tag: &str) -> Option<&str> {
        self.notes.get(tag).map(String::as_str)
    }

    /// Rename rules triggered by a terminal with this tag
    pub fn renames_for(&self, tag: &str) -> Option<&BTreeMap<String, String>> {
        self.renames.get(tag)
    }

    pub fn tag_references(&self, tag: &str) -> &[Reference] {
        self.references.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Annotation for a production label, ignoring spacing differences
    pub fn annotation(&self, label: &str) -> Option<&RuleAnnotation> {
        self.annotations
            .iter()
            .find(|(key, _)| same_label(key, label))
            .map(|(_, annotation)| annotation)
    }

    /// The dictionary lookup key for a word, if it should be looked up at all.
    ///
    /// Verb stems get the verb ending appended (`먹` → `먹다`).
    pub fn lookup_key(&self, token: &Token) -> Option<String> {
        match self.lookup_keys.get(token.tag()) {
            Some(LookupKey::Disabled) => None,
            Some(LookupKey::Fixed(key)) => Some(key.clone()),
            None => {
                let word = token.word();
                let ending = self.verb_ending();
                if token.is_verb() && !word.ends_with(ending) {
                    Some(format!("{word}{ending}"))
                } else {
                    Some(word.to_string())
                }
            }
        }
    }

    /// One link per configured dictionary
    pub fn dictionary_links(&self, key: &str) -> Vec<Reference> {
        self.dictionaries.iter().map(|d| d.link(key)).collect()
    }
}

enum Source {
    Yaml(String),
    File { path: PathBuf, required: bool },
}

/// Helper for layering user tables over the built-in defaults.
pub struct Loader {
    sources: Vec<Source>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        Loader {
            sources: vec![Source::Yaml(DEFAULT_YAML.to_string())],
        }
    }

    /// Start a loader with no tables at all.
    pub fn empty() -> Self {
        Loader {
            sources: Vec::new(),
        }
    }

    /// Layer a YAML file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.sources.push(Source::File {
            path: path.as_ref().to_path_buf(),
            required: true,
        });
        self
    }

    /// Layer an optional YAML file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        self.sources.push(Source::File {
            path: path.as_ref().to_path_buf(),
            required: false,
        });
        self
    }

    /// Layer inline YAML.
    pub fn with_yaml(mut self, yaml: impl Into<String>) -> Self {
        self.sources.push(Source::Yaml(yaml.into()));
        self
    }

    /// Read every source in order and merge them.
    pub fn build(self) -> Result<TagMap, ConfigError> {
        let mut tagmap = TagMap::default();
        for source in self.sources {
            let layer = match source {
                Source::Yaml(yaml) => TagMap::from_yaml(&yaml)?,
                Source::File { path, required } => {
                    if !required && !path.exists() {
                        continue;
                    }
                    TagMap::from_yaml_file(&path)?
                }
            };
            tagmap.merge(layer);
        }
        Ok(tagmap)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(descriptor: &str) -> Token {
        descriptor.parse().unwrap()
    }

    #[test]
    fn test_defaults_parse() {
        let tagmap = TagMap::defaults().unwrap();
        assert_eq!(tagmap.verb_ending(), "다");
        assert_eq!(tagmap.tag_label("JKO"), Some("object particle"));
        assert_eq!(tagmap.dictionaries.len(), 2);
        assert!(tagmap.annotation("TopicPhrase").is_some());
    }

    #[test]
    fn test_loader_layers_overrides() {
        let tagmap = Loader::new()
            .with_yaml("labels:\n  NNG: common noun\nverb_ending: 다\n")
            .build()
            .unwrap();
        assert_eq!(tagmap.tag_label("NNG"), Some("common noun"));
        assert_eq!(tagmap.tag_label("JKO"), Some("object particle"));
    }

    #[test]
    fn test_loader_optional_file_may_be_missing() {
        let tagmap = Loader::empty()
            .with_optional_file("/nonexistent/kparse-tagmap.yaml")
            .build()
            .unwrap();
        assert_eq!(tagmap, TagMap::default());
    }

    #[test]
    fn test_loader_required_file_must_exist() {
        let result = Loader::empty()
            .with_file("/nonexistent/kparse-tagmap.yaml")
            .build();
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_unknown_table_is_rejected() {
        let result = TagMap::from_yaml("colours:\n  NNG: red\n");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn test_lookup_key_rules() {
        let tagmap = TagMap::from_yaml(
            "lookup_keys:\n  SF: none\n  JKO: 을\n",
        )
        .unwrap();
        assert_eq!(tagmap.lookup_key(&token(".:SF")), None);
        assert_eq!(tagmap.lookup_key(&token("를:JKO")), Some("을".to_string()));
        assert_eq!(tagmap.lookup_key(&token("먹:VV")), Some("먹다".to_string()));
        assert_eq!(tagmap.lookup_key(&token("하다:VV")), Some("하다".to_string()));
        assert_eq!(tagmap.lookup_key(&token("밥:NNG")), Some("밥".to_string()));
    }

    #[test]
    fn test_label_lines_prefer_word_override() {
        let tagmap = TagMap::defaults().unwrap();
        assert_eq!(
            tagmap.label_lines(&token("이:VCP")),
            vec!["copula".to_string(), "to be".to_string()]
        );
        assert_eq!(tagmap.label_lines(&token("밥:NNG")), vec!["noun".to_string()]);
        assert_eq!(tagmap.label_lines(&token("x:ZZ")), vec!["ZZ".to_string()]);
    }

    #[test]
    fn test_dictionary_link_substitutes_word() {
        let dictionary = Dictionary {
            title: "Wiktionary".into(),
            url_template: "https://en.wiktionary.org/wiki/${word}".into(),
        };
        assert_eq!(
            dictionary.link("먹다").url,
            "https://en.wiktionary.org/wiki/먹다"
        );
    }
}
