//! `activity` area: activities, participants and states of socially constructed activity.

use crate::class::HqdmClass as C;
use crate::model::{Area, ClassDef, PropertyRule, SchemaModule};
use crate::property::HqdmProperty as P;

/// Returns the `activity` schema module.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        area: Area::Activity,
        label: "Activities",
        comment: "Activities, participants and states of socially constructed activity.",
        classes: classes(),
    }
}

fn classes() -> Vec<ClassDef> {
    vec![
        ClassDef {
            class: C::Activity,
            comment: "An individual that consists of its participants and causes some event.",
            subclass_of: &[C::Individual],
            rules: ACTIVITY_RULES,
        },
        ClassDef {
            class: C::SociallyConstructedActivity,
            comment: "An activity that is defined by an agreement between the parties involved.",
            subclass_of: &[C::Activity],
            rules: SOCIALLY_CONSTRUCTED_ACTIVITY_RULES,
        },
        ClassDef {
            class: C::StateOfSociallyConstructedActivity,
            comment: "A state that is a socially constructed activity or a temporal part of one.",
            subclass_of: &[C::State],
            rules: STATE_OF_SOCIALLY_CONSTRUCTED_ACTIVITY_RULES,
        },
        ClassDef {
            class: C::Participant,
            comment: "A state of a party or object that takes part in an activity or association.",
            subclass_of: &[C::State],
            rules: PARTICIPANT_RULES,
        },
    ]
}

const ACTIVITY_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::mandatory(P::Causes, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::ConsistsOf, C::Activity),
    PropertyRule::optional(P::ConsistsOfParticipant, C::Participant),
    PropertyRule::optional(P::Determines, C::Thing),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::mandatory(P::MemberOfKind, C::KindOfActivity),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::PartOf, C::Activity),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::References, C::Thing),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];

const SOCIALLY_CONSTRUCTED_ACTIVITY_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::mandatory(P::Causes, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::ConsistsOf, C::Activity),
    PropertyRule::optional(P::ConsistsOfParticipant, C::Participant),
    PropertyRule::optional(P::Determines, C::Thing),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::MemberOf, C::ClassOfSociallyConstructedActivity),
    PropertyRule::mandatory(P::MemberOfKind, C::KindOfActivity),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::PartOf, C::Activity),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::References, C::Thing),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];

const STATE_OF_SOCIALLY_CONSTRUCTED_ACTIVITY_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::MemberOf, C::ClassOfStateOfSociallyConstructedActivity),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
    PropertyRule::optional(P::TemporalPartOf, C::SociallyConstructedActivity),
];

const PARTICIPANT_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::mandatory(P::MemberOfKind, C::Role),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::ParticipantIn, C::Individual),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];
