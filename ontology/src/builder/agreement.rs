//! Builders for offers, agreements, contracts and sales.

use crate::entity::{
    AcceptanceOfOffer, Activity, AgreeContract, AgreementProcess, AmountOfMoney, Class,
    ClassOfAgreeContract, ClassOfContractProcess, ClassOfOffer, ClassOfReachingAgreement,
    ClassOfSociallyConstructedActivity, ContractProcess, Event, ExchangeOfGoodsAndMoney, Individual,
    KindOfActivity, Offer, OfferAndAcceptanceForGoods, OfferForGoods, Participant, PossibleWorld,
    ReachingAgreement, SaleOfGoods, SociallyConstructedActivity, SpatioTemporalExtent, Thing,
    TransferOfOwnershipOfMoney,
};

hqdm_builder! {
    /// Builds a [`ReachingAgreement`]: a socially constructed activity where two or more parties
    /// determine a course of action.
    ReachingAgreementBuilder => ReachingAgreement {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        causes_m => Causes: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        consists_of => ConsistsOf: Activity,
        consists_of_participant => ConsistsOfParticipant: Participant,
        determines => Determines: Thing,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of => MemberOf: ClassOfReachingAgreement,
        member_of_kind_m => MemberOfKind: KindOfActivity,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of => PartOf: AgreementProcess,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        references => References: Thing,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}

hqdm_builder! {
    /// Builds an [`AgreeContract`]: a reaching agreement that results in a contract.
    AgreeContractBuilder => AgreeContract {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        causes_m => Causes: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        consists_of => ConsistsOf: Activity,
        consists_of_participant => ConsistsOfParticipant: Participant,
        determines => Determines: Thing,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of => MemberOf: ClassOfAgreeContract,
        member_of_kind_m => MemberOfKind: KindOfActivity,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of => PartOf: ContractProcess,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        references => References: Thing,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}

hqdm_builder! {
    /// Builds a [`ContractProcess`]: an agreement process that consists of agreeing a contract and
    /// executing it.
    ContractProcessBuilder => ContractProcess {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        causes_m => Causes: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        consists_of_m => ConsistsOf: SociallyConstructedActivity,
        consists_of_participant => ConsistsOfParticipant: Participant,
        determines => Determines: Thing,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of => MemberOf: ClassOfContractProcess,
        member_of_kind_m => MemberOfKind: KindOfActivity,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of => PartOf: Activity,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        references => References: Thing,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}

hqdm_builder! {
    /// Builds a [`SaleOfGoods`]: a contract process where goods are exchanged for money.
    SaleOfGoodsBuilder => SaleOfGoods {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        causes_m => Causes: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        consists_of_m => ConsistsOf: SociallyConstructedActivity,
        consists_of_participant => ConsistsOfParticipant: Participant,
        determines => Determines: Thing,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of => MemberOf: ClassOfContractProcess,
        member_of_kind_m => MemberOfKind: KindOfActivity,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of => PartOf: Activity,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        references => References: Thing,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}

hqdm_builder! {
    /// Builds an [`Offer`]: a socially constructed activity where a party proposes an agreement.
    OfferBuilder => Offer {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        causes_m => Causes: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        consists_of => ConsistsOf: Activity,
        consists_of_participant_m => ConsistsOfParticipant: Participant,
        determines => Determines: Thing,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of => MemberOf: ClassOfOffer,
        member_of_kind_m => MemberOfKind: KindOfActivity,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of => PartOf: ReachingAgreement,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        references => References: Thing,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}

hqdm_builder! {
    /// Builds an [`OfferForGoods`]: an offer to exchange goods for money.
    OfferForGoodsBuilder => OfferForGoods {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        causes_m => Causes: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        consists_of => ConsistsOf: Activity,
        consists_of_participant_m => ConsistsOfParticipant: Participant,
        determines => Determines: Thing,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of => MemberOf: ClassOfOffer,
        member_of_kind_m => MemberOfKind: KindOfActivity,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of => PartOf: OfferAndAcceptanceForGoods,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        references_m => References: ExchangeOfGoodsAndMoney,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}

hqdm_builder! {
    /// Builds an [`AcceptanceOfOffer`]: a socially constructed activity where a party accepts an
    /// offer.
    AcceptanceOfOfferBuilder => AcceptanceOfOffer {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        causes_m => Causes: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        consists_of => ConsistsOf: Activity,
        consists_of_participant_m => ConsistsOfParticipant: Participant,
        determines => Determines: Thing,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of => MemberOf: ClassOfSociallyConstructedActivity,
        member_of_kind_m => MemberOfKind: KindOfActivity,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of => PartOf: ReachingAgreement,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        references_m => References: Offer,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}

hqdm_builder! {
    /// Builds an [`OfferAndAcceptanceForGoods`]: a reaching agreement that consists of an offer for
    /// goods and its acceptance.
    OfferAndAcceptanceForGoodsBuilder => OfferAndAcceptanceForGoods {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        causes_m => Causes: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        consists_of_m => ConsistsOf: SociallyConstructedActivity,
        consists_of_participant => ConsistsOfParticipant: Participant,
        determines => Determines: Thing,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of => MemberOf: ClassOfReachingAgreement,
        member_of_kind_m => MemberOfKind: KindOfActivity,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of => PartOf: SaleOfGoods,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        references => References: Thing,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}

hqdm_builder! {
    /// Builds an [`ExchangeOfGoodsAndMoney`]: a socially constructed activity where goods and money
    /// change hands.
    ExchangeOfGoodsAndMoneyBuilder => ExchangeOfGoodsAndMoney {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        causes_m => Causes: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        consists_of_m => ConsistsOf: SociallyConstructedActivity,
        consists_of_participant => ConsistsOfParticipant: Participant,
        determines => Determines: Thing,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of => MemberOf: ClassOfSociallyConstructedActivity,
        member_of_kind_m => MemberOfKind: KindOfActivity,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of => PartOf: SaleOfGoods,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        references => References: Thing,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}

hqdm_builder! {
    /// Builds a [`TransferOfOwnershipOfMoney`]: a socially constructed activity where ownership of
    /// an amount of money passes between parties.
    TransferOfOwnershipOfMoneyBuilder => TransferOfOwnershipOfMoney {
        aggregated_into => AggregatedInto: SpatioTemporalExtent,
        beginning => Beginning: Event,
        causes_m => Causes: Event,
        consists_of_extent => ConsistsOfExtent: SpatioTemporalExtent,
        consists_of => ConsistsOf: Activity,
        consists_of_participant_m => ConsistsOfParticipant: Participant,
        determines => Determines: Thing,
        ending => Ending: Event,
        member_of_class => MemberOfClass: Class,
        member_of => MemberOf: ClassOfSociallyConstructedActivity,
        member_of_kind_m => MemberOfKind: KindOfActivity,
        part_of_extent => PartOfExtent: SpatioTemporalExtent,
        part_of => PartOf: ExchangeOfGoodsAndMoney,
        part_of_possible_world_m => PartOfPossibleWorld: PossibleWorld,
        references_m => References: AmountOfMoney,
        temporal_part_of_individual => TemporalPartOfIndividual: Individual,
    }
}
