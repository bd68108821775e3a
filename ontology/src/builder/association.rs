//! Builders for associations.

use crate::entity::{
    Class, Employment, Event, Individual, KindOfAssociation, Ownership, Participant, PossibleWorld,
    SpatioTemporalExtent,
};

hqdm_builder! {
    /// Builds an [`Ownership`]: an association where an owner owns an asset.
    OwnershipBuilder => Ownership {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning_m => Beginning: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        consists_of_participant_m => ConsistsOfParticipant: Participant,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of_kind_m => MemberOfKind: KindOfAssociation,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}

hqdm_builder! {
    /// Builds an [`Employment`]: an association where an employee works for an employer.
    EmploymentBuilder => Employment {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        consists_of_participant_m => ConsistsOfParticipant: Participant,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of_kind_m => MemberOfKind: KindOfAssociation,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}
