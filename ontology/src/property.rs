//! The HQDM property vocabulary.
//!
//! HQDM names the general form of a relationship with a double underscore
//! (`part__of`) and its specialised form with a single one (`part_of`). The
//! labels are kept verbatim because they appear in IRIs and error messages.

use std::fmt;

use crate::model::iris::HQDM;

/// A relationship that an entity can assert against another entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HqdmProperty {
    /// `aggregated_into`: a part_of relationship where the whole is the aggregate of its parts.
    AggregatedInto,
    /// `beginning`: the event that marks the temporal beginning of a spatio-temporal extent.
    Beginning,
    /// `causes`: the events an activity brings about.
    Causes,
    /// `class_of_offered`: the class of things offered in a product offering.
    ClassOfOffered,
    /// `component_of`: the system a system component is a component of.
    ComponentOf,
    /// `consideration_by_class`: the price asked in a product offering.
    ConsiderationByClass,
    /// `consists__of`: the spatio-temporal extents that are parts of a whole.
    ConsistsOfExtent,
    /// `consists_of`: the activities an activity is made up of.
    ConsistsOf,
    /// `consists_of_participant`: the participants that are parts of an activity or association.
    ConsistsOfParticipant,
    /// `determines`: the things an activity determines the existence or nature of.
    Determines,
    /// `ending`: the event that marks the temporal ending of a spatio-temporal extent.
    Ending,
    /// `has_superclass`: a class that every member of this class is also a member of.
    HasSuperclass,
    /// `intended_role`: the role a functional object or system is intended to play.
    IntendedRole,
    /// `member__of`: a class the thing is a member of.
    MemberOfClass,
    /// `member_of`: a specific class the thing is a member of.
    MemberOf,
    /// `member_of_currency`: the currency an amount of money is denominated in.
    MemberOfCurrency,
    /// `member_of_kind`: the kind the thing is a member of.
    MemberOfKind,
    /// `natural_role`: the role a biological system naturally plays.
    NaturalRole,
    /// `offeror`: the party that makes a product offering.
    Offeror,
    /// `part__of`: a spatio-temporal extent this one is a part of.
    PartOfExtent,
    /// `part_of`: the specific whole this individual is a part of.
    PartOf,
    /// `part_of_possible_world`: the possible world the spatio-temporal extent is part of.
    PartOfPossibleWorld,
    /// `participant_in`: the activity or association a participant takes part in.
    ParticipantIn,
    /// `period_offered`: the period of time during which a product offering is valid.
    PeriodOffered,
    /// `references`: the things an activity refers to.
    References,
    /// `temporal__part_of`: the individual this spatio-temporal extent is a temporal part of.
    TemporalPartOfIndividual,
    /// `temporal_part_of`: the specific individual this state is a temporal part of.
    TemporalPartOf,
}

impl HqdmProperty {
    /// Every property in the vocabulary, in label order.
    pub const ALL: [HqdmProperty; 27] = [
        HqdmProperty::AggregatedInto,
        HqdmProperty::Beginning,
        HqdmProperty::Causes,
        HqdmProperty::ClassOfOffered,
        HqdmProperty::ComponentOf,
        HqdmProperty::ConsiderationByClass,
        HqdmProperty::ConsistsOfExtent,
        HqdmProperty::ConsistsOf,
        HqdmProperty::ConsistsOfParticipant,
        HqdmProperty::Determines,
        HqdmProperty::Ending,
        HqdmProperty::HasSuperclass,
        HqdmProperty::IntendedRole,
        HqdmProperty::MemberOfClass,
        HqdmProperty::MemberOf,
        HqdmProperty::MemberOfCurrency,
        HqdmProperty::MemberOfKind,
        HqdmProperty::NaturalRole,
        HqdmProperty::Offeror,
        HqdmProperty::PartOfExtent,
        HqdmProperty::PartOf,
        HqdmProperty::PartOfPossibleWorld,
        HqdmProperty::ParticipantIn,
        HqdmProperty::PeriodOffered,
        HqdmProperty::References,
        HqdmProperty::TemporalPartOfIndividual,
        HqdmProperty::TemporalPartOf,
    ];

    /// Returns the HQDM name of the property (e.g. `"part_of_possible_world"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            HqdmProperty::AggregatedInto => "aggregated_into",
            HqdmProperty::Beginning => "beginning",
            HqdmProperty::Causes => "causes",
            HqdmProperty::ClassOfOffered => "class_of_offered",
            HqdmProperty::ComponentOf => "component_of",
            HqdmProperty::ConsiderationByClass => "consideration_by_class",
            HqdmProperty::ConsistsOfExtent => "consists__of",
            HqdmProperty::ConsistsOf => "consists_of",
            HqdmProperty::ConsistsOfParticipant => "consists_of_participant",
            HqdmProperty::Determines => "determines",
            HqdmProperty::Ending => "ending",
            HqdmProperty::HasSuperclass => "has_superclass",
            HqdmProperty::IntendedRole => "intended_role",
            HqdmProperty::MemberOfClass => "member__of",
            HqdmProperty::MemberOf => "member_of",
            HqdmProperty::MemberOfCurrency => "member_of_currency",
            HqdmProperty::MemberOfKind => "member_of_kind",
            HqdmProperty::NaturalRole => "natural_role",
            HqdmProperty::Offeror => "offeror",
            HqdmProperty::PartOfExtent => "part__of",
            HqdmProperty::PartOf => "part_of",
            HqdmProperty::PartOfPossibleWorld => "part_of_possible_world",
            HqdmProperty::ParticipantIn => "participant_in",
            HqdmProperty::PeriodOffered => "period_offered",
            HqdmProperty::References => "references",
            HqdmProperty::TemporalPartOfIndividual => "temporal__part_of",
            HqdmProperty::TemporalPartOf => "temporal_part_of",
        }
    }

    /// Returns a one-line description of the property.
    #[must_use]
    pub const fn comment(self) -> &'static str {
        match self {
            HqdmProperty::AggregatedInto => "A part_of relationship where the whole is the aggregate of its parts.",
            HqdmProperty::Beginning => "The event that marks the temporal beginning of a spatio-temporal extent.",
            HqdmProperty::Causes => "The events an activity brings about.",
            HqdmProperty::ClassOfOffered => "The class of things offered in a product offering.",
            HqdmProperty::ComponentOf => "The system a system component is a component of.",
            HqdmProperty::ConsiderationByClass => "The price asked in a product offering.",
            HqdmProperty::ConsistsOfExtent => "The spatio-temporal extents that are parts of a whole.",
            HqdmProperty::ConsistsOf => "The activities an activity is made up of.",
            HqdmProperty::ConsistsOfParticipant => "The participants that are parts of an activity or association.",
            HqdmProperty::Determines => "The things an activity determines the existence or nature of.",
            HqdmProperty::Ending => "The event that marks the temporal ending of a spatio-temporal extent.",
            HqdmProperty::HasSuperclass => "A class that every member of this class is also a member of.",
            HqdmProperty::IntendedRole => "The role a functional object or system is intended to play.",
            HqdmProperty::MemberOfClass => "A class the thing is a member of.",
            HqdmProperty::MemberOf => "A specific class the thing is a member of.",
            HqdmProperty::MemberOfCurrency => "The currency an amount of money is denominated in.",
            HqdmProperty::MemberOfKind => "The kind the thing is a member of.",
            HqdmProperty::NaturalRole => "The role a biological system naturally plays.",
            HqdmProperty::Offeror => "The party that makes a product offering.",
            HqdmProperty::PartOfExtent => "A spatio-temporal extent this one is a part of.",
            HqdmProperty::PartOf => "The specific whole this individual is a part of.",
            HqdmProperty::PartOfPossibleWorld => "The possible world the spatio-temporal extent is part of.",
            HqdmProperty::ParticipantIn => "The activity or association a participant takes part in.",
            HqdmProperty::PeriodOffered => "The period of time during which a product offering is valid.",
            HqdmProperty::References => "The things an activity refers to.",
            HqdmProperty::TemporalPartOfIndividual => "The individual this spatio-temporal extent is a temporal part of.",
            HqdmProperty::TemporalPartOf => "The specific individual this state is a temporal part of.",
        }
    }

    /// Returns the more general property this one specialises, if any.
    #[must_use]
    pub const fn super_property(self) -> Option<HqdmProperty> {
        match self {
            HqdmProperty::AggregatedInto => Some(HqdmProperty::PartOfExtent),
            HqdmProperty::ComponentOf => Some(HqdmProperty::PartOfExtent),
            HqdmProperty::ConsistsOf => Some(HqdmProperty::ConsistsOfExtent),
            HqdmProperty::ConsistsOfParticipant => Some(HqdmProperty::ConsistsOfExtent),
            HqdmProperty::IntendedRole => Some(HqdmProperty::MemberOfClass),
            HqdmProperty::MemberOf => Some(HqdmProperty::MemberOfClass),
            HqdmProperty::MemberOfCurrency => Some(HqdmProperty::MemberOfClass),
            HqdmProperty::MemberOfKind => Some(HqdmProperty::MemberOfClass),
            HqdmProperty::NaturalRole => Some(HqdmProperty::MemberOfClass),
            HqdmProperty::PartOf => Some(HqdmProperty::PartOfExtent),
            HqdmProperty::PartOfPossibleWorld => Some(HqdmProperty::PartOfExtent),
            HqdmProperty::ParticipantIn => Some(HqdmProperty::PartOfExtent),
            HqdmProperty::TemporalPartOfIndividual => Some(HqdmProperty::PartOfExtent),
            HqdmProperty::TemporalPartOf => Some(HqdmProperty::TemporalPartOfIndividual),
            _ => None,
        }
    }

    /// Returns the full IRI of the property.
    #[must_use]
    pub fn iri(self) -> String {
        format!("{HQDM}{}", self.label())
    }

    /// Looks up a property by its HQDM name.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|property| property.label() == label)
    }
}

impl fmt::Display for HqdmProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_sorted_by_label() {
        let labels: Vec<_> = HqdmProperty::ALL.iter().map(|p| p.label()).collect();
        let mut sorted = labels.clone();
        sorted.sort_unstable();
        assert_eq!(labels, sorted);
    }

    #[test]
    fn super_properties_do_not_cycle() {
        for property in HqdmProperty::ALL {
            let mut current = property;
            let mut steps = 0;
            while let Some(parent) = current.super_property() {
                current = parent;
                steps += 1;
                assert!(steps <= HqdmProperty::ALL.len(), "cycle through {property}");
            }
        }
    }

    #[test]
    fn double_underscore_labels_are_preserved() {
        assert_eq!(HqdmProperty::PartOfExtent.label(), "part__of");
        assert_eq!(HqdmProperty::PartOf.super_property(), Some(HqdmProperty::PartOfExtent));
        assert_eq!(HqdmProperty::from_label("consists__of"), Some(HqdmProperty::ConsistsOfExtent));
    }
}
