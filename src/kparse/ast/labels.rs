//! Label helpers
//!
//! Internal nodes start out labeled with the production name in camel case
//! (`SimpleNounPhrase`) and are respaced for display (`Simple Noun Phrase`).
//! Every label lookup goes through [`label_key`], so both spellings address the
//! same configuration entry.

use once_cell::sync::Lazy;
use regex::Regex;

static LOWER_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());
static ACRONYM_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z])([A-Z][a-z])").unwrap());

/// Split a camel-case label into space-separated words.
///
/// Already spaced labels come back unchanged, so the function is idempotent.
pub fn spaced(label: &str) -> String {
    let split = LOWER_UPPER.replace_all(label, "$1 $2");
    ACRONYM_WORD.replace_all(&split, "$1 $2").into_owned()
}

/// Whitespace-insensitive key for comparing labels
pub fn label_key(label: &str) -> String {
    label.split_whitespace().collect()
}

/// True when two labels name the same category, ignoring spacing
pub fn same_label(a: &str, b: &str) -> bool {
    label_key(a) == label_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaced_camel_case() {
        assert_eq!(spaced("SimpleNounPhrase"), "Simple Noun Phrase");
        assert_eq!(spaced("Input"), "Input");
    }

    #[test]
    fn test_spaced_keeps_acronyms_together() {
        assert_eq!(spaced("XMLPhrase"), "XML Phrase");
    }

    #[test]
    fn test_spaced_is_idempotent() {
        let once = spaced("VerbAndAuxiliary");
        assert_eq!(spaced(&once), once);
    }

    #[test]
    fn test_same_label_ignores_spacing() {
        assert!(same_label("Main Clause", "MainClause"));
        assert!(!same_label("Main Clause", "Subordinate Clause"));
        assert_eq!(label_key(" Topic  Phrase "), "TopicPhrase");
    }
}
