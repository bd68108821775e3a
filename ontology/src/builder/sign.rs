//! Builders for signs and recognizing language communities.

use crate::entity::{
    Class, Event, Individual, LanguageCommunity, Pattern, PossibleWorld,
    RecognizingLanguageCommunity, RepresentationBySign, Role, Sign, SpatioTemporalExtent,
};

hqdm_builder! {
    /// Builds a [`Sign`]: a participant that is a member of a pattern and represents something.
    SignBuilder => Sign {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of_m => MemberOf: Pattern,
        member_of_kind_m => MemberOfKind: Role,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        participant_in_m => ParticipantIn: RepresentationBySign,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}

hqdm_builder! {
    /// Builds a [`RecognizingLanguageCommunity`]: a participant state of a language community that
    /// recognizes a sign.
    RecognizingLanguageCommunityBuilder => RecognizingLanguageCommunity {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of_kind_m => MemberOfKind: Role,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        participant_in_m => ParticipantIn: RepresentationBySign,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
        temporal_part_of => TemporalPartOf: LanguageCommunity,
    }
}
