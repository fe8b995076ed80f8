//! Tag classification
//!
//! Tags come in two shapes: the fixed Sejong tag inventory (`NNG`, `JKO`, `EF`, ...)
//! and synthetic tags minted by the tag mapper upstream, which share a family
//! prefix and carry a suffix (`PSXEC_께서`, `TOP_6`, `VND_하`). A [`TagSet`] is a
//! closed list of [`TagPattern`]s: exact tags and tag families. Membership is a
//! whole-tag test, never a substring search.
//!
//! Each grammar terminal is defined by exactly one of the sets below.

use std::fmt;

/// One accepted tag or tag family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagPattern {
    /// The tag must equal this text
    Exact(&'static str),
    /// The tag must start with this text (`SF`, `SF_q`, `SFX` all match `Family("SF")`)
    Family(&'static str),
}

impl TagPattern {
    pub fn matches(&self, tag: &str) -> bool {
        match self {
            TagPattern::Exact(exact) => tag == *exact,
            TagPattern::Family(prefix) => tag.starts_with(prefix),
        }
    }
}

impl fmt::Display for TagPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagPattern::Exact(exact) => write!(f, "{exact}"),
            TagPattern::Family(prefix) => write!(f, "{prefix}*"),
        }
    }
}

/// A named, closed set of accepted tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSet {
    name: &'static str,
    patterns: &'static [TagPattern],
}

impl TagSet {
    pub const fn new(name: &'static str, patterns: &'static [TagPattern]) -> Self {
        TagSet { name, patterns }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(tag))
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pattern) in self.patterns.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{pattern}")?;
        }
        Ok(())
    }
}

use TagPattern::{Exact, Family};

pub const JOINING_ADVERB: TagSet = TagSet::new("joining adverb", &[Exact("MAJ")]);
pub const CONNECTING_SUFFIX: TagSet = TagSet::new(
    "connecting suffix",
    &[Exact("EC"), Family("PSXEC"), Family("ADVEC"), Family("CEC")],
);
pub const ENDING_SUFFIX: TagSet = TagSet::new("ending suffix", &[Exact("EF"), Family("PSXEF")]);
pub const PUNCTUATION: TagSet = TagSet::new(
    "punctuation",
    &[
        Exact("SP"),
        Exact("SS"),
        Exact("SE"),
        Exact("SO"),
        Exact("SW"),
        Exact("SWK"),
    ],
);
pub const INTERJECTION: TagSet = TagSet::new("interjection", &[Exact("IC")]);
pub const CONNECTOR: TagSet = TagSet::new("connector", &[Exact("JC"), Family("CON")]);
pub const PREPOSITIONAL_SUFFIX: TagSet = TagSet::new("prepositional suffix", &[Family("PRP")]);
pub const DETERMINER: TagSet = TagSet::new("determiner", &[Exact("MM")]);
pub const NUMBER: TagSet = TagSet::new("number", &[Exact("MM"), Family("NUM"), Exact("SN")]);
pub const COUNTER: TagSet = TagSet::new("counter", &[Exact("NNB"), Exact("NNG")]);
pub const SIMPLE_ADVERB: TagSet = TagSet::new("simple adverb", &[Family("MAG")]);
pub const POSSESSIVE_PARTICLE: TagSet = TagSet::new("possessive particle", &[Exact("JKG")]);
pub const DESCRIPTIVE_VERB: TagSet = TagSet::new(
    "descriptive verb",
    &[Exact("VA"), Exact("VCP"), Exact("VCN"), Family("VAND")],
);
pub const AUXILIARY_VERB_CONNECTOR: TagSet =
    TagSet::new("auxiliary verb connector", &[Exact("EC"), Family("PSXEC")]);
pub const AUXILIARY_VERB_PATTERN: TagSet =
    TagSet::new("auxiliary verb pattern", &[Family("AUX")]);
pub const ADJECTIVE_FORMING_SUFFIX: TagSet =
    TagSet::new("adjective forming suffix", &[Exact("ETM")]);
pub const NOMINAL_VERB_FORM: TagSet = TagSet::new("nominal verb form", &[Family("FNV")]);
pub const VERB_SUFFIX: TagSet = TagSet::new("verb suffix", &[Exact("EP"), Family("PSXEP")]);
pub const SIMPLE_NOUN: TagSet = TagSet::new(
    "simple noun",
    &[
        Family("NN"),
        Exact("NR"),
        Exact("SL"),
        Family("NP"),
        Exact("SN"),
    ],
);
pub const SIMPLE_VERB: TagSet = TagSet::new(
    "simple verb",
    &[Family("VV"), Exact("VX"), Family("VND")],
);
pub const NOMINALIZING_SUFFIX: TagSet = TagSet::new("nominalizing suffix", &[Family("PNOM")]);
pub const NOUN_MODIFYING_SUFFIX: TagSet =
    TagSet::new("noun modifying suffix", &[Exact("XSN")]);
pub const ADVERBIAL_PARTICLE: TagSet =
    TagSet::new("adverbial particle", &[Exact("JKB"), Family("ADVSF")]);
pub const AUXILIARY_PARTICLE: TagSet =
    TagSet::new("auxiliary particle", &[Exact("JX"), Family("PRT")]);

// Particles matched inline inside phrase productions, without a production of their own
pub const NEGATIVE_CONNECTOR: TagSet = TagSet::new("negative connector", &[Family("JNEC")]);
pub const NEGATIVE_OBJECT: TagSet = TagSet::new(
    "negative object marker",
    &[Family("JKS"), Exact("JKO"), Family("TOP")],
);
pub const OBJECT_MARKER: TagSet = TagSet::new("object marker", &[Exact("JKO")]);
pub const SUBJECT_MARKER: TagSet = TagSet::new("subject marker", &[Family("JKS")]);
pub const COMPLEMENT_MARKER: TagSet = TagSet::new("complement marker", &[Exact("JKC")]);
pub const TOPIC_MARKER: TagSet = TagSet::new("topic marker", &[Family("TOP")]);

/// Sentence-final punctuation; the parse driver expects the match to stop right before it
pub const SENTENCE_FINAL: TagSet = TagSet::new("sentence final", &[Family("SF")]);
