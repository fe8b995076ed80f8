//! Whole-sentence analysis
//!
//! [`Analyzer`] runs the full pipeline over one tagged sentence and bundles
//! every view an API layer hands back to a client:
//!
//! parse → rename → references → phrase list → export tree → layout
//!
//! The bundle is a plain serializable value; a failed or incomplete parse is
//! reported in `error` and still carries the degenerate tree's views.

use crate::kparse::annotation::{collect_references, map_node_names, phrase_list, PhraseItem, References};
use crate::kparse::ast::ParseTree;
use crate::kparse::config::TagMap;
use crate::kparse::formats::{export_tree, layout, ExportNode, Layout};
use crate::kparse::lexing::Token;
use crate::kparse::parsing::{parse_with, ParseError, ParseOptions, ParseStats, TraceLevel};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzerOptions {
    pub trace: TraceLevel,
    /// Keep single-child chains in the export tree and layout
    pub show_all_levels: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// The input as `lexeme:TAG` descriptors
    pub tokens: Vec<String>,
    pub error: Option<ParseError>,
    pub parse_tree: ExportNode,
    pub phrases: Vec<Vec<PhraseItem>>,
    pub references: References,
    pub layout: Layout,
    pub log: Vec<String>,
    pub stats: ParseStats,
    /// The renamed tree the views were derived from
    #[serde(skip)]
    pub tree: ParseTree,
}

impl Analysis {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

pub struct Analyzer {
    tagmap: TagMap,
    options: AnalyzerOptions,
}

impl Analyzer {
    pub fn new(tagmap: TagMap) -> Self {
        Analyzer {
            tagmap,
            options: AnalyzerOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AnalyzerOptions) -> Self {
        self.options = options;
        self
    }

    /// Analyze one sentence.
    ///
    /// `word_defs` maps words to short definitions shown under verbs, nouns and
    /// modifiers in the layout; pass an empty map when none are available.
    pub fn analyze(&self, tokens: &[Token], word_defs: &BTreeMap<String, String>) -> Analysis {
        let outcome = parse_with(
            tokens,
            ParseOptions {
                trace: self.options.trace,
            },
        );
        let mut tree = outcome.tree;
        map_node_names(&mut tree, &self.tagmap);

        let references = collect_references(&tree, &self.tagmap);
        let phrases = phrase_list(&tree);
        let parse_tree = export_tree(&tree, self.options.show_all_levels);
        let layout = layout(&tree, &self.tagmap, word_defs, self.options.show_all_levels);

        Analysis {
            tokens: tokens.iter().map(Token::to_string).collect(),
            error: outcome.error,
            parse_tree,
            phrases,
            references,
            layout,
            log: outcome.trace.lines().to_vec(),
            stats: outcome.stats,
            tree,
        }
    }
}
