//! Production catalogue
//!
//! Every grammar rule has a [`Production`] identity. It keys the memo table and
//! the recursion guard, names the rule in trace lines, and gives internal nodes
//! their label. Terminal productions also carry the closed tag set they accept,
//! so the tag side of the grammar can be inspected and tested as data.

use crate::kparse::lexing::tags::{self, TagSet};

macro_rules! productions {
    ($($variant:ident => $name:literal),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Production {
            $($variant),*
        }

        impl Production {
            pub const ALL: &'static [Production] = &[$(Production::$variant),*];

            /// Rule name as written in the grammar (`simpleNounPhrase`)
            pub fn name(self) -> &'static str {
                match self {
                    $(Production::$variant => $name),*
                }
            }

            /// Display-cased name used as the node label (`SimpleNounPhrase`)
            pub fn label(self) -> &'static str {
                match self {
                    $(Production::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

productions! {
    Input => "input",
    StandAlonePhrase => "standAlonePhrase",
    Sentence => "sentence",
    SubordinateClause => "subordinateClause",
    MainClause => "mainClause",
    Predicate => "predicate",
    Phrase => "phrase",
    Conjunction => "conjunction",
    CombinedNounPhrase => "combinedNounPhrase",
    PrepositionalPhrase => "prepositionalPhrase",
    NounPhrase => "nounPhrase",
    SimpleNounPhrase => "simpleNounPhrase",
    Noun => "noun",
    Count => "count",
    AdjectivalPhrase => "adjectivalPhrase",
    Adjective => "adjective",
    VerbPhrase => "verbPhrase",
    NegativeVerbPhrase => "negativeVerbPhrase",
    Adverbial => "adverbial",
    Adverb => "adverb",
    Possessive => "possessive",
    VerbAndAuxiliary => "verbAndAuxiliary",
    AuxiliaryVerb => "auxiliaryVerb",
    NominalizedVerb => "nominalizedVerb",
    Verb => "verb",
    AdverbialPhrase => "adverbialPhrase",
    ObjectPhrase => "objectPhrase",
    SubjectPhrase => "subjectPhrase",
    ComplementPhrase => "complementPhrase",
    TopicPhrase => "topicPhrase",
    JoiningAdverb => "joiningAdverb",
    ConnectingSuffix => "connectingSuffix",
    EndingSuffix => "endingSuffix",
    Punctuation => "punctuation",
    Interjection => "interjection",
    Connector => "connector",
    PrepositionalSuffix => "prepositionalSuffix",
    Determiner => "determiner",
    Number => "number",
    Counter => "counter",
    SimpleAdverb => "simpleAdverb",
    PossessiveParticle => "possessiveParticle",
    DescriptiveVerb => "descriptiveVerb",
    AuxiliaryVerbConnector => "auxiliaryVerbConnector",
    AuxiliaryVerbPattern => "auxiliaryVerbPattern",
    AdjectiveFormingSuffix => "adjectiveFormingSuffix",
    NominalVerbForm => "nominalVerbForm",
    VerbSuffix => "verbSuffix",
    SimpleNoun => "simpleNoun",
    SimpleVerb => "simpleVerb",
    NominalizingSuffix => "nominalizingSuffix",
    NounModifyingSuffix => "nounModifyingSuffix",
    AdverbialParticle => "adverbialParticle",
    AuxiliaryParticle => "auxiliaryParticle",
}

impl Production {
    /// The tags a terminal production accepts; `None` for composite productions
    pub fn accepted_tags(self) -> Option<&'static TagSet> {
        use Production::*;
        let set = match self {
            JoiningAdverb => &tags::JOINING_ADVERB,
            ConnectingSuffix => &tags::CONNECTING_SUFFIX,
            EndingSuffix => &tags::ENDING_SUFFIX,
            Punctuation => &tags::PUNCTUATION,
            Interjection => &tags::INTERJECTION,
            Connector => &tags::CONNECTOR,
            PrepositionalSuffix => &tags::PREPOSITIONAL_SUFFIX,
            Determiner => &tags::DETERMINER,
            Number => &tags::NUMBER,
            Counter => &tags::COUNTER,
            SimpleAdverb => &tags::SIMPLE_ADVERB,
            PossessiveParticle => &tags::POSSESSIVE_PARTICLE,
            DescriptiveVerb => &tags::DESCRIPTIVE_VERB,
            AuxiliaryVerbConnector => &tags::AUXILIARY_VERB_CONNECTOR,
            AuxiliaryVerbPattern => &tags::AUXILIARY_VERB_PATTERN,
            AdjectiveFormingSuffix => &tags::ADJECTIVE_FORMING_SUFFIX,
            NominalVerbForm => &tags::NOMINAL_VERB_FORM,
            VerbSuffix => &tags::VERB_SUFFIX,
            SimpleNoun => &tags::SIMPLE_NOUN,
            SimpleVerb => &tags::SIMPLE_VERB,
            NominalizingSuffix => &tags::NOMINALIZING_SUFFIX,
            NounModifyingSuffix => &tags::NOUN_MODIFYING_SUFFIX,
            AdverbialParticle => &tags::ADVERBIAL_PARTICLE,
            AuxiliaryParticle => &tags::AUXILIARY_PARTICLE,
            _ => return None,
        };
        Some(set)
    }

    pub fn is_terminal(self) -> bool {
        self.accepted_tags().is_some()
    }
}
