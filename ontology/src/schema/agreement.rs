//! `agreement` area: offers, acceptances, contracts and the sale of goods.

use crate::class::HqdmClass as C;
use crate::model::{Area, ClassDef, PropertyRule, SchemaModule};
use crate::property::HqdmProperty as P;

/// Returns the `agreement` schema module.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        area: Area::Agreement,
        label: "Agreements",
        comment: "Offers, acceptances, contracts and the sale of goods.",
        classes: classes(),
    }
}

fn classes() -> Vec<ClassDef> {
    vec![
        ClassDef {
            class: C::ReachingAgreement,
            comment: "A socially constructed activity where two or more parties determine a course of action.",
            subclass_of: &[C::SociallyConstructedActivity],
            rules: REACHING_AGREEMENT_RULES,
        },
        ClassDef {
            class: C::AgreeContract,
            comment: "A reaching agreement that results in a contract.",
            subclass_of: &[C::ReachingAgreement],
            rules: AGREE_CONTRACT_RULES,
        },
        ClassDef {
            class: C::AgreementProcess,
            comment: "A socially constructed activity that consists of reaching an agreement and executing it.",
            subclass_of: &[C::SociallyConstructedActivity],
            rules: AGREEMENT_PROCESS_RULES,
        },
        ClassDef {
            class: C::ContractProcess,
            comment: "An agreement process that consists of agreeing a contract and executing it.",
            subclass_of: &[C::AgreementProcess],
            rules: CONTRACT_PROCESS_RULES,
        },
        ClassDef {
            class: C::SaleOfGoods,
            comment: "A contract process where goods are exchanged for money.",
            subclass_of: &[C::ContractProcess],
            rules: CONTRACT_PROCESS_RULES,
        },
        ClassDef {
            class: C::Offer,
            comment: "A socially constructed activity where a party proposes an agreement.",
            subclass_of: &[C::SociallyConstructedActivity],
            rules: OFFER_RULES,
        },
        ClassDef {
            class: C::OfferForGoods,
            comment: "An offer to exchange goods for money.",
            subclass_of: &[C::Offer],
            rules: OFFER_FOR_GOODS_RULES,
        },
        ClassDef {
            class: C::AcceptanceOfOffer,
            comment: "A socially constructed activity where a party accepts an offer.",
            subclass_of: &[C::SociallyConstructedActivity],
            rules: ACCEPTANCE_OF_OFFER_RULES,
        },
        ClassDef {
            class: C::OfferAndAcceptanceForGoods,
            comment: "A reaching agreement that consists of an offer for goods and its acceptance.",
            subclass_of: &[C::ReachingAgreement],
            rules: OFFER_AND_ACCEPTANCE_FOR_GOODS_RULES,
        },
        ClassDef {
            class: C::ExchangeOfGoodsAndMoney,
            comment: "A socially constructed activity where goods and money change hands.",
            subclass_of: &[C::SociallyConstructedActivity],
            rules: EXCHANGE_OF_GOODS_AND_MONEY_RULES,
        },
        ClassDef {
            class: C::TransferOfOwnershipOfMoney,
            comment: "A socially constructed activity where ownership of an amount of money passes between parties.",
            subclass_of: &[C::SociallyConstructedActivity],
            rules: TRANSFER_OF_OWNERSHIP_OF_MONEY_RULES,
        },
    ]
}

const REACHING_AGREEMENT_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::mandatory(P::Causes, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::ConsistsOf, C::Activity),
    PropertyRule::optional(P::ConsistsOfParticipant, C::Participant),
    PropertyRule::optional(P::Determines, C::Thing),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::MemberOf, C::ClassOfReachingAgreement),
    PropertyRule::mandatory(P::MemberOfKind, C::KindOfActivity),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::PartOf, C::AgreementProcess),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::References, C::Thing),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];

const AGREE_CONTRACT_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::mandatory(P::Causes, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::ConsistsOf, C::Activity),
    PropertyRule::optional(P::ConsistsOfParticipant, C::Participant),
    PropertyRule::optional(P::Determines, C::Thing),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::MemberOf, C::ClassOfAgreeContract),
    PropertyRule::mandatory(P::MemberOfKind, C::KindOfActivity),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::PartOf, C::ContractProcess),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::References, C::Thing),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];

const AGREEMENT_PROCESS_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::mandatory(P::Causes, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::ConsistsOf, C::SociallyConstructedActivity),
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

const CONTRACT_PROCESS_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::mandatory(P::Causes, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::ConsistsOf, C::SociallyConstructedActivity),
    PropertyRule::optional(P::ConsistsOfParticipant, C::Participant),
    PropertyRule::optional(P::Determines, C::Thing),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::MemberOf, C::ClassOfContractProcess),
    PropertyRule::mandatory(P::MemberOfKind, C::KindOfActivity),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::PartOf, C::Activity),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::References, C::Thing),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];

const OFFER_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::mandatory(P::Causes, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::ConsistsOf, C::Activity),
    PropertyRule::mandatory(P::ConsistsOfParticipant, C::Participant),
    PropertyRule::optional(P::Determines, C::Thing),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::MemberOf, C::ClassOfOffer),
    PropertyRule::mandatory(P::MemberOfKind, C::KindOfActivity),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::PartOf, C::ReachingAgreement),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::References, C::Thing),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];

const OFFER_FOR_GOODS_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::mandatory(P::Causes, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::ConsistsOf, C::Activity),
    PropertyRule::mandatory(P::ConsistsOfParticipant, C::Participant),
    PropertyRule::optional(P::Determines, C::Thing),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::MemberOf, C::ClassOfOffer),
    PropertyRule::mandatory(P::MemberOfKind, C::KindOfActivity),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::PartOf, C::OfferAndAcceptanceForGoods),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::mandatory(P::References, C::ExchangeOfGoodsAndMoney),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];

const ACCEPTANCE_OF_OFFER_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::mandatory(P::Causes, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::ConsistsOf, C::Activity),
    PropertyRule::mandatory(P::ConsistsOfParticipant, C::Participant),
    PropertyRule::optional(P::Determines, C::Thing),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::MemberOf, C::ClassOfSociallyConstructedActivity),
    PropertyRule::mandatory(P::MemberOfKind, C::KindOfActivity),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::PartOf, C::ReachingAgreement),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::mandatory(P::References, C::Offer),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];

const OFFER_AND_ACCEPTANCE_FOR_GOODS_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::mandatory(P::Causes, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::ConsistsOf, C::SociallyConstructedActivity),
    PropertyRule::optional(P::ConsistsOfParticipant, C::Participant),
    PropertyRule::optional(P::Determines, C::Thing),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::MemberOf, C::ClassOfReachingAgreement),
    PropertyRule::mandatory(P::MemberOfKind, C::KindOfActivity),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::PartOf, C::SaleOfGoods),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::References, C::Thing),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];

const EXCHANGE_OF_GOODS_AND_MONEY_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::mandatory(P::Causes, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::mandatory(P::ConsistsOf, C::SociallyConstructedActivity),
    PropertyRule::optional(P::ConsistsOfParticipant, C::Participant),
    PropertyRule::optional(P::Determines, C::Thing),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::MemberOf, C::ClassOfSociallyConstructedActivity),
    PropertyRule::mandatory(P::MemberOfKind, C::KindOfActivity),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::PartOf, C::SaleOfGoods),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::optional(P::References, C::Thing),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];

const TRANSFER_OF_OWNERSHIP_OF_MONEY_RULES: &[PropertyRule] = &[
    PropertyRule::optional(P::AggregatedInto, C::SpatioTemporalExtent),
    PropertyRule::optional(P::Beginning, C::Event),
    PropertyRule::mandatory(P::Causes, C::Event),
    PropertyRule::optional(P::ConsistsOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::ConsistsOf, C::Activity),
    PropertyRule::mandatory(P::ConsistsOfParticipant, C::Participant),
    PropertyRule::optional(P::Determines, C::Thing),
    PropertyRule::optional(P::Ending, C::Event),
    PropertyRule::optional(P::MemberOfClass, C::Class),
    PropertyRule::optional(P::MemberOf, C::ClassOfSociallyConstructedActivity),
    PropertyRule::mandatory(P::MemberOfKind, C::KindOfActivity),
    PropertyRule::optional(P::PartOfExtent, C::SpatioTemporalExtent),
    PropertyRule::optional(P::PartOf, C::ExchangeOfGoodsAndMoney),
    PropertyRule::mandatory(P::PartOfPossibleWorld, C::PossibleWorld),
    PropertyRule::mandatory(P::References, C::AmountOfMoney),
    PropertyRule::optional(P::TemporalPartOfIndividual, C::Individual),
];
