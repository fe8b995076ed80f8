//! Named output formats
//!
//! The command line picks its output by name. Each format implements
//! [`Formatter`]; [`FormatRegistry::with_defaults`] holds `bracket`, `json` and
//! `treeviz`, and registering a formatter under a taken name replaces it.

use crate::kparse::ast::ParseTree;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub trait Formatter {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn serialize(&self, tree: &ParseTree) -> Result<String, FormatError>;
}

/// Formatters keyed by name, listed in name order
#[derive(Default)]
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn with_defaults() -> Self {
        let mut registry = Self::default();
        registry.register(super::BracketFormatter);
        registry.register(super::JsonFormatter::default());
        registry.register(super::TreevizFormatter);
        registry
    }

    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn serialize(&self, tree: &ParseTree, format: &str) -> Result<String, FormatError> {
        self.get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?
            .serialize(tree)
    }

    pub fn list_formats(&self) -> Vec<String> {
        self.formatters.keys().cloned().collect()
    }
}
