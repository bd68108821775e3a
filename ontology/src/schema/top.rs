//! `top` area: things, spatio-temporal extents, events, states and possible worlds.

use crate::class::HqdmClass as C;
use crate::model::{Area, ClassDef, PropertyRule, SchemaModule};
use crate::property::HqdmProperty as P;

/// Returns the `top` schema module.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        area: Area::Top,
        label: "Top-level categories",
        comment: "Things, spatio-temporal extents, events, states and possible worlds.",
        classes: classes(),
    }
}

fn classes() -> Vec<ClassDef> {
    vec![
        ClassDef {
            class: C::Thing,
            comment: "Anything that exists, real or imagined.",
            subclass_of: &[],
            rules: THING_RULES,
        },
        ClassDef {
            class: C::AbstractObject,
            comment: "A thing that does not exist in space or time.",
            subclass_of: &[C::Thing],
            rules: THING_RULES,
        },
        ClassDef {
            class: C::Class,
            comment: "An abstract object that has members and whose identity is defined by its membership.",
            subclass_of: &[C::AbstractObject],
            rules: CLASS_RULES,
        },
        ClassDef {
            class: C::SpatioTemporalExtent,
            comment: "A thing that exists in time and space.",
            subclass_of: &[C::Thing],
            rules: EXTENT_RULES,
        },
        ClassDef {
            class: C::Event,
            comment: "A spatio-temporal extent with zero temporal thickness that bounds other extents.",
            subclass_of: &[C::SpatioTemporalExtent],
            rules: EVENT_RULES,
        },
        ClassDef {
            class: C::State,
            comment: "A spatio-temporal extent that is an individual or a temporal part of one.",
            subclass_of: &[C::SpatioTemporalExtent],
            rules: EXTENT_RULES,
        },
        ClassDef {
            class: C::Individual,
            comment: "A state that is a whole life temporal part of itself.",
            subclass_of: &[C::State],
            rules: EXTENT_RULES,
        },
        ClassDef {
            class: C::PeriodOfTime,
            comment: "A state that is all of the possible world between two events.",
            subclass_of: &[C::State],
            rules: PERIOD_OF_TIME_RULES,
        },
        ClassDef {
            class: C::PossibleWorld,
            comment: "An individual that is a complete spatio-temporal history of some possible world.",
            subclass_of: &[C::Individual, C::PeriodOfTime],
            rules: POSSIBLE_WORLD_RULES,
        },
        ClassDef {
            class: C::Plan,
            comment: "A possible world that some party would like to bring about.",
            subclass_of: &[C::PossibleWorld],
            rules: POSSIBLE_WORLD_RULES,
        },
    ]
}

const THING_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::MemberOfClass, C::Class),
];

/// Rules shared by every class that adds nothing of its own.
pub(crate) const CLASS_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::HasSuperclass, C::Class),
    PropertyRule::optional(P::MemberOfClass, C::Class),
];

/// Rules shared by spatio-temporal extents that add nothing of their own.
pub(crate) const EXTENT_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];

const EVENT_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
];

const PERIOD_OF_TIME_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
    PropertyRule::optional(P::TemporalPartOf, C::PossibleWorld),
];

const POSSIBLE_WORLD_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::MemberOf, C::ClassOfPossibleWorld),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];
