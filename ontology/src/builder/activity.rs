//! Builders for activities, participants and activity states.

use crate::entity::{
    Activity, Class, ClassOfSociallyConstructedActivity, ClassOfStateOfSociallyConstructedActivity,
    Event, Individual, KindOfActivity, Participant, PossibleWorld, Role,
    SociallyConstructedActivity, SpatioTemporalExtent, StateOfSociallyConstructedActivity, Thing,
};

hqdm_builder! {
    /// Builds an [`Activity`]: an individual that consists of its participants and causes some
    /// event.
    ActivityBuilder => Activity {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        causes_m => Causes: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        consists_of => ConsistsOf: Activity,
        consists_of_participant => ConsistsOfParticipant: Participant,
        determines => Determines: Thing,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of_kind_m => MemberOfKind: KindOfActivity,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of => PartOf: Activity,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        references => References: Thing,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}

hqdm_builder! {
    /// Builds a [`SociallyConstructedActivity`]: an activity that is defined by an agreement
    /// between the parties involved.
    SociallyConstructedActivityBuilder => SociallyConstructedActivity {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        causes_m => Causes: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        consists_of => ConsistsOf: Activity,
        consists_of_participant => ConsistsOfParticipant: Participant,
        determines => Determines: Thing,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of => MemberOf: ClassOfSociallyConstructedActivity,
        member_of_kind_m => MemberOfKind: KindOfActivity,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of => PartOf: Activity,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        references => References: Thing,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}

hqdm_builder! {
    /// Builds a [`StateOfSociallyConstructedActivity`]: a state that is a socially constructed
    /// activity or a temporal part of one.
    StateOfSociallyConstructedActivityBuilder => StateOfSociallyConstructedActivity {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of => MemberOf: ClassOfStateOfSociallyConstructedActivity,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
        temporal_part_of => TemporalPartOf: SociallyConstructedActivity,
    }
}

hqdm_builder! {
    /// Builds a [`Participant`]: a state of a party or object that takes part in an activity or
    /// association.
    ParticipantBuilder => Participant {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of_kind_m => MemberOfKind: Role,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        participant_in => ParticipantIn: Individual,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}
