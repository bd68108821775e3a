//! `sign` area: signs, patterns and the communities that recognise them.

use crate::class::HqdmClass as C;
use crate::model::{Area, ClassDef, PropertyRule, SchemaModule};
use crate::property::HqdmProperty as P;

/// Returns the `sign` schema module.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        area: Area::Sign,
        label: "Signs",
        comment: "Signs, patterns and the communities that recognise them.",
        classes: classes(),
    }
}

fn classes() -> Vec<ClassDef> {
    vec![
        ClassDef {
            class: C::Pattern,
            comment: "A class of sign that share a common shape.",
            subclass_of: &[C::Class],
            rules: super::top::CLASS_RULES,
        },
        ClassDef {
            class: C::RepresentationBySign,
            comment: "An association of a sign and a recognizing language community that represents a thing.",
            subclass_of: &[C::Association],
            rules: REPRESENTATION_BY_SIGN_RULES,
        },
        ClassDef {
            class: C::Sign,
            comment: "A participant that is a member of a pattern and represents something.",
            subclass_of: &[C::Participant],
            rules: SIGN_RULES,
        },
        ClassDef {
            class: C::RecognizingLanguageCommunity,
            comment: "A participant state of a language community that recognizes a sign.",
            subclass_of: &[C::Participant],
            rules: RECOGNIZING_LANGUAGE_COMMUNITY_RULES,
        },
    ]
}

const REPRESENTATION_BY_SIGN_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::ConsistsOfParticipant, C::Participant),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::mandatory(P::MemberOfKind, C::KindOfAssociation),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];

const SIGN_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::mandatory(P::MemberOf, C::Pattern),
    PropertyRule::mandatory(P::MemberOfKind, C::Role),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::mandatory(P::ParticipantIn, C::RepresentationBySign),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];

const RECOGNIZING_LANGUAGE_COMMUNITY_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::mandatory(P::MemberOfKind, C::Role),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::mandatory(P::ParticipantIn, C::RepresentationBySign),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
    PropertyRule::optional(P::TemporalPartOf, C::LanguageCommunity),
];
