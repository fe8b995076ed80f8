//! Korean constituency grammar
//!
//! One function per production. Composite productions are written with the
//! combinators; terminal productions accept one token from their tag set (see
//! [`Production::accepted_tags`]). A few particles are matched inline inside the
//! phrase that owns them and so appear as bare terminals under that phrase.
//!
//! ```text
//! input             = sentence | standAlonePhrase
//! sentence          = subordinateClause* mainClause
//! subordinateClause = joiningAdverb? phrase* verbPhrase connectingSuffix punctuation?
//! mainClause        = joiningAdverb? phrase* predicate
//! predicate         = verbPhrase endingSuffix
//! phrase            = (nounPhrase | objectPhrase | subjectPhrase | topicPhrase
//!                      | adverbialPhrase | complementPhrase) interjection*
//! ```
//!
//! Alternation is longest-match, so the order of options only matters for ties.
//! The sentence-final token is never consumed here; the driver checks for it.

use super::combinators::{any_one_of, one_or_more, optional, sequence, zero_or_more, Match};
use super::parser::Parser;
use super::production::Production;
use crate::kparse::lexing::tags;

/// Start production
pub fn input(p: &mut Parser) -> Match {
    p.rule(Production::Input, |p| any_one_of(p, &[sentence, stand_alone_phrase]))
}

pub fn stand_alone_phrase(p: &mut Parser) -> Match {
    p.rule(Production::StandAlonePhrase, |p| {
        sequence(p, &[phrase, |p| optional(p, auxiliary_particle)])
    })
}

pub fn sentence(p: &mut Parser) -> Match {
    p.rule(Production::Sentence, |p| {
        sequence(p, &[|p| zero_or_more(p, subordinate_clause), main_clause])
    })
}

pub fn subordinate_clause(p: &mut Parser) -> Match {
    p.rule(Production::SubordinateClause, |p| {
        sequence(
            p,
            &[
                |p| optional(p, joining_adverb),
                |p| zero_or_more(p, phrase),
                verb_phrase,
                connecting_suffix,
                |p| optional(p, punctuation),
            ],
        )
    })
}

pub fn main_clause(p: &mut Parser) -> Match {
    p.rule(Production::MainClause, |p| {
        sequence(
            p,
            &[
                |p| optional(p, joining_adverb),
                |p| zero_or_more(p, phrase),
                predicate,
            ],
        )
    })
}

pub fn predicate(p: &mut Parser) -> Match {
    p.rule(Production::Predicate, |p| sequence(p, &[verb_phrase, ending_suffix]))
}

pub fn phrase(p: &mut Parser) -> Match {
    p.rule(Production::Phrase, |p| {
        sequence(
            p,
            &[
                |p| {
                    any_one_of(
                        p,
                        &[
                            noun_phrase,
                            object_phrase,
                            subject_phrase,
                            topic_phrase,
                            adverbial_phrase,
                            complement_phrase,
                        ],
                    )
                },
                |p| zero_or_more(p, interjection),
            ],
        )
    })
}

// ---- noun-phrase machinery ----

pub fn conjunction(p: &mut Parser) -> Match {
    p.rule(Production::Conjunction, |p| {
        sequence(p, &[simple_noun_phrase, connector])
    })
}

pub fn combined_noun_phrase(p: &mut Parser) -> Match {
    p.rule(Production::CombinedNounPhrase, |p| {
        sequence(p, &[|p| zero_or_more(p, conjunction), simple_noun_phrase])
    })
}

pub fn prepositional_phrase(p: &mut Parser) -> Match {
    p.rule(Production::PrepositionalPhrase, |p| {
        sequence(
            p,
            &[
                |p| any_one_of(p, &[simple_noun_phrase, adjective]),
                prepositional_suffix,
            ],
        )
    })
}

pub fn noun_phrase(p: &mut Parser) -> Match {
    p.rule(Production::NounPhrase, |p| {
        any_one_of(
            p,
            &[simple_noun_phrase, combined_noun_phrase, prepositional_phrase],
        )
    })
}

pub fn simple_noun_phrase(p: &mut Parser) -> Match {
    p.rule(Production::SimpleNounPhrase, |p| {
        sequence(
            p,
            &[
                |p| zero_or_more(p, punctuation),
                |p| optional(p, determiner),
                |p| zero_or_more(p, punctuation),
                |p| any_one_of(p, &[noun, count, adjectival_phrase]),
                |p| zero_or_more(p, punctuation),
                |p| zero_or_more(p, noun),
                |p| zero_or_more(p, punctuation),
                |p| zero_or_more(p, noun_modifying_suffix),
                |p| zero_or_more(p, auxiliary_particle),
                |p| zero_or_more(p, punctuation),
            ],
        )
    })
}

pub fn noun(p: &mut Parser) -> Match {
    p.rule(Production::Noun, |p| any_one_of(p, &[simple_noun, nominalized_verb]))
}

pub fn count(p: &mut Parser) -> Match {
    p.rule(Production::Count, |p| {
        sequence(p, &[simple_noun, number, |p| optional(p, counter)])
    })
}

pub fn adjectival_phrase(p: &mut Parser) -> Match {
    p.rule(Production::AdjectivalPhrase, |p| {
        sequence(
            p,
            &[
                |p| one_or_more(p, adjective),
                |p| any_one_of(p, &[noun, count]),
            ],
        )
    })
}

pub fn adjective(p: &mut Parser) -> Match {
    p.rule(Production::Adjective, |p| {
        any_one_of(
            p,
            &[
                |p| sequence(p, &[verb_phrase, adjective_forming_suffix]),
                adverb,
                possessive,
            ],
        )
    })
}

pub fn possessive(p: &mut Parser) -> Match {
    p.rule(Production::Possessive, |p| {
        sequence(p, &[|p| one_or_more(p, noun), possessive_particle])
    })
}

// ---- verb-phrase machinery ----

pub fn verb_phrase(p: &mut Parser) -> Match {
    p.rule(Production::VerbPhrase, |p| {
        any_one_of(
            p,
            &[
                |p| {
                    sequence(
                        p,
                        &[
                            |p| zero_or_more(p, adverbial),
                            |p| any_one_of(p, &[verb, verb_and_auxiliary]),
                            |p| optional(p, nominal_verb_form),
                            |p| zero_or_more(p, verb_suffix),
                        ],
                    )
                },
                negative_verb_phrase,
            ],
        )
    })
}

/// Long-form negation: verb + 지 (+ particle) + 않다/못하다
pub fn negative_verb_phrase(p: &mut Parser) -> Match {
    p.rule(Production::NegativeVerbPhrase, |p| {
        sequence(
            p,
            &[
                |p| zero_or_more(p, adverbial),
                |p| any_one_of(p, &[verb, verb_and_auxiliary]),
                |p| p.token(&tags::NEGATIVE_CONNECTOR),
                |p| optional(p, |p| p.token(&tags::NEGATIVE_OBJECT)),
                verb,
                |p| zero_or_more(p, verb_suffix),
            ],
        )
    })
}

pub fn adverbial(p: &mut Parser) -> Match {
    p.rule(Production::Adverbial, |p| any_one_of(p, &[adverb, adverbial_phrase]))
}

pub fn adverb(p: &mut Parser) -> Match {
    p.rule(Production::Adverb, |p| any_one_of(p, &[simple_adverb]))
}

pub fn verb_and_auxiliary(p: &mut Parser) -> Match {
    p.rule(Production::VerbAndAuxiliary, |p| {
        sequence(p, &[verb, |p| one_or_more(p, auxiliary_verb)])
    })
}

pub fn auxiliary_verb(p: &mut Parser) -> Match {
    p.rule(Production::AuxiliaryVerb, |p| {
        any_one_of(
            p,
            &[
                |p| sequence(p, &[auxiliary_verb_connector, verb]),
                auxiliary_verb_pattern,
            ],
        )
    })
}

pub fn nominalized_verb(p: &mut Parser) -> Match {
    p.rule(Production::NominalizedVerb, |p| {
        sequence(
            p,
            &[verb_phrase, |p| optional(p, verb_suffix), nominalizing_suffix],
        )
    })
}

pub fn verb(p: &mut Parser) -> Match {
    p.rule(Production::Verb, |p| any_one_of(p, &[simple_verb, descriptive_verb]))
}

// ---- particle-marked phrases ----

pub fn adverbial_phrase(p: &mut Parser) -> Match {
    p.rule(Production::AdverbialPhrase, |p| {
        sequence(
            p,
            &[
                |p| any_one_of(p, &[noun_phrase, adjectival_phrase, verb]),
                adverbial_particle,
                |p| optional(p, auxiliary_particle),
            ],
        )
    })
}

pub fn object_phrase(p: &mut Parser) -> Match {
    p.rule(Production::ObjectPhrase, |p| {
        sequence(
            p,
            &[
                |p| zero_or_more(p, conjunction),
                noun_phrase,
                |p| p.token(&tags::OBJECT_MARKER),
            ],
        )
    })
}

pub fn subject_phrase(p: &mut Parser) -> Match {
    p.rule(Production::SubjectPhrase, |p| {
        sequence(
            p,
            &[
                |p| zero_or_more(p, conjunction),
                noun_phrase,
                |p| p.token(&tags::SUBJECT_MARKER),
            ],
        )
    })
}

pub fn complement_phrase(p: &mut Parser) -> Match {
    p.rule(Production::ComplementPhrase, |p| {
        sequence(
            p,
            &[
                |p| zero_or_more(p, conjunction),
                noun_phrase,
                |p| p.token(&tags::COMPLEMENT_MARKER),
            ],
        )
    })
}

pub fn topic_phrase(p: &mut Parser) -> Match {
    p.rule(Production::TopicPhrase, |p| {
        sequence(
            p,
            &[
                |p| zero_or_more(p, conjunction),
                |p| any_one_of(p, &[noun_phrase, adverbial_phrase]),
                |p| p.token(&tags::TOPIC_MARKER),
            ],
        )
    })
}

// ---- terminals ----

macro_rules! terminals {
    ($($name:ident => $production:ident),* $(,)?) => {
        $(
            pub fn $name(p: &mut Parser) -> Match {
                p.terminal(Production::$production)
            }
        )*
    };
}

terminals! {
    joining_adverb => JoiningAdverb,
    connecting_suffix => ConnectingSuffix,
    ending_suffix => EndingSuffix,
    punctuation => Punctuation,
    interjection => Interjection,
    connector => Connector,
    prepositional_suffix => PrepositionalSuffix,
    determiner => Determiner,
    number => Number,
    counter => Counter,
    simple_adverb => SimpleAdverb,
    possessive_particle => PossessiveParticle,
    descriptive_verb => DescriptiveVerb,
    auxiliary_verb_connector => AuxiliaryVerbConnector,
    auxiliary_verb_pattern => AuxiliaryVerbPattern,
    adjective_forming_suffix => AdjectiveFormingSuffix,
    nominal_verb_form => NominalVerbForm,
    verb_suffix => VerbSuffix,
    simple_noun => SimpleNoun,
    simple_verb => SimpleVerb,
    nominalizing_suffix => NominalizingSuffix,
    noun_modifying_suffix => NounModifyingSuffix,
    adverbial_particle => AdverbialParticle,
    auxiliary_particle => AuxiliaryParticle,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kparse::lexing::token::parse_descriptors;
    use crate::kparse::parsing::trace::TraceLevel;

    fn parse_with(rule: fn(&mut Parser) -> Match, input: &str) -> (String, usize) {
        let mut p = Parser::new(parse_descriptors(input).unwrap(), TraceLevel::Quiet);
        let matched = rule(&mut p);
        let tree = match matched.nodes().first() {
            Some(&root) => p.build_tree(root).to_string(),
            None => String::new(),
        };
        (tree, p.mark())
    }

    #[test]
    fn test_predicate() {
        let (tree, end) = parse_with(predicate, "먹:VV 다:EF");
        assert_eq!(
            tree,
            "Predicate [VerbPhrase [Verb [SimpleVerb [먹:VV]]], EndingSuffix [다:EF]]"
        );
        assert_eq!(end, 2);
    }

    #[test]
    fn test_object_phrase_keeps_inline_particle() {
        let (tree, _) = parse_with(object_phrase, "밥:NNG 을:JKO");
        assert_eq!(
            tree,
            "ObjectPhrase [NounPhrase [SimpleNounPhrase [Noun [SimpleNoun [밥:NNG]]]], 을:JKO]"
        );
    }

    #[test]
    fn test_count_with_counter() {
        let (tree, end) = parse_with(count, "사과:NNG 세:MM 개:NNB");
        assert_eq!(
            tree,
            "Count [SimpleNoun [사과:NNG], Number [세:MM], Counter [개:NNB]]"
        );
        assert_eq!(end, 3);
    }

    #[test]
    fn test_verb_and_auxiliary_chain() {
        let (tree, end) = parse_with(verb_phrase, "먹:VV 고:EC 싶:VX");
        assert_eq!(
            tree,
            "VerbPhrase [VerbAndAuxiliary [Verb [SimpleVerb [먹:VV]], \
             AuxiliaryVerb [AuxiliaryVerbConnector [고:EC], Verb [SimpleVerb [싶:VX]]]]]"
        );
        assert_eq!(end, 3);
    }

    #[test]
    fn test_negative_verb_phrase() {
        let (tree, end) = parse_with(negative_verb_phrase, "가:VV 지:JNEC 않:VX 았:EP");
        assert_eq!(
            tree,
            "NegativeVerbPhrase [Verb [SimpleVerb [가:VV]], 지:JNEC, Verb [SimpleVerb [않:VX]], \
             VerbSuffix [았:EP]]"
        );
        assert_eq!(end, 4);
    }

    #[test]
    fn test_failed_production_leaves_cursor() {
        let (tree, end) = parse_with(predicate, "밥:NNG 다:EF");
        assert_eq!(tree, "");
        assert_eq!(end, 0);
    }

    #[test]
    fn test_possessive() {
        let (tree, _) = parse_with(possessive, "소년:NNG 의:JKG");
        assert_eq!(
            tree,
            "Possessive [Noun [SimpleNoun [소년:NNG]], PossessiveParticle [의:JKG]]"
        );
    }
}
