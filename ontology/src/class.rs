//! The closed set of HQDM classes covered by the catalogue.

use std::fmt;

use crate::model::iris::HQDM;

/// An HQDM ontology class.
///
/// [`HqdmClass::label`] yields the HQDM name of the class, which is also the
/// local part of its IRI under [`HQDM`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HqdmClass {
    /// Anything that exists, real or imagined.
    Thing,
    /// A thing that does not exist in space or time.
    AbstractObject,
    /// An abstract object that has members and whose identity is defined by its membership.
    Class,
    /// A thing that exists in time and space.
    SpatioTemporalExtent,
    /// A spatio-temporal extent with zero temporal thickness that bounds other extents.
    Event,
    /// A spatio-temporal extent that is an individual or a temporal part of one.
    State,
    /// A state that is a whole life temporal part of itself.
    Individual,
    /// A state that is all of the possible world between two events.
    PeriodOfTime,
    /// An individual that is a complete spatio-temporal history of some possible world.
    PossibleWorld,
    /// A possible world that some party would like to bring about.
    Plan,
    /// A class whose members are participants playing the same part in activities or associations.
    Role,
    /// A class of activity where all the members are of the same kind.
    KindOfActivity,
    /// A class of association where all the members have the same kind of participants.
    KindOfAssociation,
    /// A class of ordinary physical object where all the members are of the same kind.
    KindOfOrdinaryPhysicalObject,
    /// A class of ordinary functional object where all the members are of the same kind.
    KindOfOrdinaryFunctionalObject,
    /// A class of system where all the members are of the same kind.
    KindOfSystem,
    /// A class of biological system where all the members are of the same kind.
    KindOfBiologicalSystem,
    /// A class of functional system where all the members are of the same kind.
    KindOfFunctionalSystem,
    /// A class of system component where all the members are of the same kind.
    KindOfSystemComponent,
    /// A class of functional system component where all the members are of the same kind.
    KindOfFunctionalSystemComponent,
    /// A class of organization component where all the members are of the same kind.
    KindOfOrganizationComponent,
    /// A class whose members are possible worlds.
    ClassOfPossibleWorld,
    /// A class whose members are intentionally constructed objects.
    ClassOfIntentionallyConstructedObject,
    /// A class whose members are states of intentionally constructed objects.
    ClassOfStateOfIntentionallyConstructedObject,
    /// A class whose members are socially constructed activities.
    ClassOfSociallyConstructedActivity,
    /// A class whose members are states of socially constructed activities.
    ClassOfStateOfSociallyConstructedActivity,
    /// A class whose members are reaching agreement activities.
    ClassOfReachingAgreement,
    /// A class whose members are agree contract activities.
    ClassOfAgreeContract,
    /// A class whose members are contract processes.
    ClassOfContractProcess,
    /// A class whose members are offers.
    ClassOfOffer,
    /// A class whose members are amounts of money.
    ClassOfAmountOfMoney,
    /// A class whose members are sales product instances.
    ClassOfSalesProductInstance,
    /// An individual that consists of its participants and causes some event.
    Activity,
    /// An activity that is defined by an agreement between the parties involved.
    SociallyConstructedActivity,
    /// A state that is a socially constructed activity or a temporal part of one.
    StateOfSociallyConstructedActivity,
    /// A state of a party or object that takes part in an activity or association.
    Participant,
    /// An individual that consists of the participants that are associated.
    Association,
    /// An association where an owner owns an asset.
    Ownership,
    /// An association where an employee works for an employer.
    Employment,
    /// A person or organization.
    Party,
    /// A biological person.
    Person,
    /// A socially constructed object that is an organized body of people.
    Organization,
    /// An organization whose members recognize a common language.
    LanguageCommunity,
    /// A socially constructed activity where two or more parties determine a course of action.
    ReachingAgreement,
    /// A reaching agreement that results in a contract.
    AgreeContract,
    /// A socially constructed activity that consists of reaching an agreement and executing it.
    AgreementProcess,
    /// An agreement process that consists of agreeing a contract and executing it.
    ContractProcess,
    /// A contract process where goods are exchanged for money.
    SaleOfGoods,
    /// A socially constructed activity where a party proposes an agreement.
    Offer,
    /// An offer to exchange goods for money.
    OfferForGoods,
    /// A socially constructed activity where a party accepts an offer.
    AcceptanceOfOffer,
    /// A reaching agreement that consists of an offer for goods and its acceptance.
    OfferAndAcceptanceForGoods,
    /// A socially constructed activity where goods and money change hands.
    ExchangeOfGoodsAndMoney,
    /// A socially constructed activity where ownership of an amount of money passes between
    /// parties.
    TransferOfOwnershipOfMoney,
    /// A physical object that does not survive the replacement of all its parts.
    OrdinaryPhysicalObject,
    /// An individual that is intentionally constructed.
    IntentionallyConstructedObject,
    /// A state that is an intentionally constructed object or a temporal part of one.
    StateOfIntentionallyConstructedObject,
    /// An ordinary physical object that has an intended role.
    OrdinaryFunctionalObject,
    /// An organized or connected group of physical objects.
    System,
    /// A system that is alive and plays a natural role.
    BiologicalSystem,
    /// A system that has an intended role.
    FunctionalSystem,
    /// An individual that is a replaceable component of a system.
    SystemComponent,
    /// A system component of a functional system with an intended role.
    FunctionalSystemComponent,
    /// A state of an ordinary functional object while it is installed as a functional system
    /// component.
    InstalledFunctionalSystemComponent,
    /// A system component that is a position or part of an organization.
    OrganizationComponent,
    /// A socially constructed object that is an amount of some currency.
    AmountOfMoney,
    /// A class of amount of money issued by some authority.
    Currency,
    /// A class of amount of money that is the consideration asked for a product.
    Price,
    /// A class of sales product instance sold under a brand.
    SalesProduct,
    /// An ordinary functional object that is produced in order to be sold.
    SalesProductInstance,
    /// A class of offer for a sales product, at a price, by a party, for a period.
    ProductOffering,
    /// A class of sign that share a common shape.
    Pattern,
    /// An association of a sign and a recognizing language community that represents a thing.
    RepresentationBySign,
    /// A participant that is a member of a pattern and represents something.
    Sign,
    /// A participant state of a language community that recognizes a sign.
    RecognizingLanguageCommunity,
}

impl HqdmClass {
    /// Every class, in catalogue order.
    pub const ALL: [HqdmClass; 75] = [
        HqdmClass::Thing,
        HqdmClass::AbstractObject,
        HqdmClass::Class,
        HqdmClass::SpatioTemporalExtent,
        HqdmClass::Event,
        HqdmClass::State,
        HqdmClass::Individual,
        HqdmClass::PeriodOfTime,
        HqdmClass::PossibleWorld,
        HqdmClass::Plan,
        HqdmClass::Role,
        HqdmClass::KindOfActivity,
        HqdmClass::KindOfAssociation,
        HqdmClass::KindOfOrdinaryPhysicalObject,
        HqdmClass::KindOfOrdinaryFunctionalObject,
        HqdmClass::KindOfSystem,
        HqdmClass::KindOfBiologicalSystem,
        HqdmClass::KindOfFunctionalSystem,
        HqdmClass::KindOfSystemComponent,
        HqdmClass::KindOfFunctionalSystemComponent,
        HqdmClass::KindOfOrganizationComponent,
        HqdmClass::ClassOfPossibleWorld,
        HqdmClass::ClassOfIntentionallyConstructedObject,
        HqdmClass::ClassOfStateOfIntentionallyConstructedObject,
        HqdmClass::ClassOfSociallyConstructedActivity,
        HqdmClass::ClassOfStateOfSociallyConstructedActivity,
        HqdmClass::ClassOfReachingAgreement,
        HqdmClass::ClassOfAgreeContract,
        HqdmClass::ClassOfContractProcess,
        HqdmClass::ClassOfOffer,
        HqdmClass::ClassOfAmountOfMoney,
        HqdmClass::ClassOfSalesProductInstance,
        HqdmClass::Activity,
        HqdmClass::SociallyConstructedActivity,
        HqdmClass::StateOfSociallyConstructedActivity,
        HqdmClass::Participant,
        HqdmClass::Association,
        HqdmClass::Ownership,
        HqdmClass::Employment,
        HqdmClass::Party,
        HqdmClass::Person,
        HqdmClass::Organization,
        HqdmClass::LanguageCommunity,
        HqdmClass::ReachingAgreement,
        HqdmClass::AgreeContract,
        HqdmClass::AgreementProcess,
        HqdmClass::ContractProcess,
        HqdmClass::SaleOfGoods,
        HqdmClass::Offer,
        HqdmClass::OfferForGoods,
        HqdmClass::AcceptanceOfOffer,
        HqdmClass::OfferAndAcceptanceForGoods,
        HqdmClass::ExchangeOfGoodsAndMoney,
        HqdmClass::TransferOfOwnershipOfMoney,
        HqdmClass::OrdinaryPhysicalObject,
        HqdmClass::IntentionallyConstructedObject,
        HqdmClass::StateOfIntentionallyConstructedObject,
        HqdmClass::OrdinaryFunctionalObject,
        HqdmClass::System,
        HqdmClass::BiologicalSystem,
        HqdmClass::FunctionalSystem,
        HqdmClass::SystemComponent,
        HqdmClass::FunctionalSystemComponent,
        HqdmClass::InstalledFunctionalSystemComponent,
        HqdmClass::OrganizationComponent,
        HqdmClass::AmountOfMoney,
        HqdmClass::Currency,
        HqdmClass::Price,
        HqdmClass::SalesProduct,
        HqdmClass::SalesProductInstance,
        HqdmClass::ProductOffering,
        HqdmClass::Pattern,
        HqdmClass::RepresentationBySign,
        HqdmClass::Sign,
        HqdmClass::RecognizingLanguageCommunity,
    ];

    /// Returns the HQDM name of the class (e.g. `"kind_of_activity"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            HqdmClass::Thing => "thing",
            HqdmClass::AbstractObject => "abstract_object",
            HqdmClass::Class => "class",
            HqdmClass::SpatioTemporalExtent => "spatio_temporal_extent",
            HqdmClass::Event => "event",
            HqdmClass::State => "state",
            HqdmClass::Individual => "individual",
            HqdmClass::PeriodOfTime => "period_of_time",
            HqdmClass::PossibleWorld => "possible_world",
            HqdmClass::Plan => "plan",
            HqdmClass::Role => "role",
            HqdmClass::KindOfActivity => "kind_of_activity",
            HqdmClass::KindOfAssociation => "kind_of_association",
            HqdmClass::KindOfOrdinaryPhysicalObject => "kind_of_ordinary_physical_object",
            HqdmClass::KindOfOrdinaryFunctionalObject => "kind_of_ordinary_functional_object",
            HqdmClass::KindOfSystem => "kind_of_system",
            HqdmClass::KindOfBiologicalSystem => "kind_of_biological_system",
            HqdmClass::KindOfFunctionalSystem => "kind_of_functional_system",
            HqdmClass::KindOfSystemComponent => "kind_of_system_component",
            HqdmClass::KindOfFunctionalSystemComponent => "kind_of_functional_system_component",
            HqdmClass::KindOfOrganizationComponent => "kind_of_organization_component",
            HqdmClass::ClassOfPossibleWorld => "class_of_possible_world",
            HqdmClass::ClassOfIntentionallyConstructedObject => "class_of_intentionally_constructed_object",
            HqdmClass::ClassOfStateOfIntentionallyConstructedObject => "class_of_state_of_intentionally_constructed_object",
            HqdmClass::ClassOfSociallyConstructedActivity => "class_of_socially_constructed_activity",
            HqdmClass::ClassOfStateOfSociallyConstructedActivity => "class_of_state_of_socially_constructed_activity",
            HqdmClass::ClassOfReachingAgreement => "class_of_reaching_agreement",
            HqdmClass::ClassOfAgreeContract => "class_of_agree_contract",
            HqdmClass::ClassOfContractProcess => "class_of_contract_process",
            HqdmClass::ClassOfOffer => "class_of_offer",
            HqdmClass::ClassOfAmountOfMoney => "class_of_amount_of_money",
            HqdmClass::ClassOfSalesProductInstance => "class_of_sales_product_instance",
            HqdmClass::Activity => "activity",
            HqdmClass::SociallyConstructedActivity => "socially_constructed_activity",
            HqdmClass::StateOfSociallyConstructedActivity => "state_of_socially_constructed_activity",
            HqdmClass::Participant => "participant",
            HqdmClass::Association => "association",
            HqdmClass::Ownership => "ownership",
            HqdmClass::Employment => "employment",
            HqdmClass::Party => "party",
            HqdmClass::Person => "person",
            HqdmClass::Organization => "organization",
            HqdmClass::LanguageCommunity => "language_community",
            HqdmClass::ReachingAgreement => "reaching_agreement",
            HqdmClass::AgreeContract => "agree_contract",
            HqdmClass::AgreementProcess => "agreement_process",
            HqdmClass::ContractProcess => "contract_process",
            HqdmClass::SaleOfGoods => "sale_of_goods",
            HqdmClass::Offer => "offer",
            HqdmClass::OfferForGoods => "offer_for_goods",
            HqdmClass::AcceptanceOfOffer => "acceptance_of_offer",
            HqdmClass::OfferAndAcceptanceForGoods => "offer_and_acceptance_for_goods",
            HqdmClass::ExchangeOfGoodsAndMoney => "exchange_of_goods_and_money",
            HqdmClass::TransferOfOwnershipOfMoney => "transfer_of_ownership_of_money",
            HqdmClass::OrdinaryPhysicalObject => "ordinary_physical_object",
            HqdmClass::IntentionallyConstructedObject => "intentionally_constructed_object",
            HqdmClass::StateOfIntentionallyConstructedObject => "state_of_intentionally_constructed_object",
            HqdmClass::OrdinaryFunctionalObject => "ordinary_functional_object",
            HqdmClass::System => "system",
            HqdmClass::BiologicalSystem => "biological_system",
            HqdmClass::FunctionalSystem => "functional_system",
            HqdmClass::SystemComponent => "system_component",
            HqdmClass::FunctionalSystemComponent => "functional_system_component",
            HqdmClass::InstalledFunctionalSystemComponent => "installed_functional_system_component",
            HqdmClass::OrganizationComponent => "organization_component",
            HqdmClass::AmountOfMoney => "amount_of_money",
            HqdmClass::Currency => "currency",
            HqdmClass::Price => "price",
            HqdmClass::SalesProduct => "sales_product",
            HqdmClass::SalesProductInstance => "sales_product_instance",
            HqdmClass::ProductOffering => "product_offering",
            HqdmClass::Pattern => "pattern",
            HqdmClass::RepresentationBySign => "representation_by_sign",
            HqdmClass::Sign => "sign",
            HqdmClass::RecognizingLanguageCommunity => "recognizing_language_community",
        }
    }

    /// Returns the full IRI of the class.
    #[must_use]
    pub fn iri(self) -> String {
        format!("{HQDM}{}", self.label())
    }

    /// Looks up a class by its HQDM name.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.label() == label)
    }
}

impl fmt::Display for HqdmClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for class in HqdmClass::ALL {
            assert!(seen.insert(class.label()), "duplicate label: {}", class.label());
        }
    }

    #[test]
    fn label_round_trips_through_lookup() {
        for class in HqdmClass::ALL {
            assert_eq!(HqdmClass::from_label(class.label()), Some(class));
        }
        assert_eq!(HqdmClass::from_label("no_such_class"), None);
    }

    #[test]
    fn iri_uses_hqdm_namespace() {
        assert_eq!(
            HqdmClass::KindOfActivity.iri(),
            "https://hqdmtop.github.io/hqdm#kind_of_activity"
        );
    }
}
