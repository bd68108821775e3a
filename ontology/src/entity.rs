//! Typed HQDM entities.
//!
//! Every catalogue class has a struct here wrapping the [`Resource`] it was
//! built from. Entities can only be obtained from a builder, so holding one
//! means its rule table was satisfied when it was built.
//!
//! [`IsA<T>`] is implemented for each entity type and every transitive
//! superclass, which lets typed builder setters accept any specialisation of
//! the range class.

use std::collections::BTreeSet;

use crate::class::HqdmClass;
use crate::iri::Iri;
use crate::property::HqdmProperty;
use crate::resource::Resource;

pub(crate) mod sealed {
    use crate::resource::Resource;

    /// Construction from a resource, restricted to builders in this crate.
    pub trait FromResource {
        fn from_resource(resource: Resource) -> Self;
    }
}

/// A built HQDM entity.
pub trait Entity: sealed::FromResource {
    /// The class this entity type represents.
    const CLASS: HqdmClass;

    /// Every transitive superclass of [`Entity::CLASS`].
    const ANCESTORS: &'static [HqdmClass];

    /// Returns the resource backing the entity.
    fn resource(&self) -> &Resource;

    /// Unwraps the backing resource.
    fn into_resource(self) -> Resource;

    /// Returns the IRI of the entity.
    fn iri(&self) -> &Iri {
        self.resource().iri()
    }

    /// Returns true if the property key is present on the entity.
    fn has_value(&self, property: HqdmProperty) -> bool {
        self.resource().has_value(property)
    }

    /// Returns the values asserted for `property`.
    fn value(&self, property: HqdmProperty) -> &BTreeSet<Iri> {
        self.resource().value(property)
    }
}

/// Marker: `Self` is an instance of the class of `T`.
pub trait IsA<T: Entity>: Entity {}

macro_rules! entities {
    ($($(#[$doc:meta])* $name:ident => [$($ancestor:ident),* $(,)?];)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, PartialEq, Eq)]
            pub struct $name {
                resource: Resource,
            }

            impl sealed::FromResource for $name {
                fn from_resource(resource: Resource) -> Self {
                    Self { resource }
                }
            }

            impl Entity for $name {
                const CLASS: HqdmClass = HqdmClass::$name;
                const ANCESTORS: &'static [HqdmClass] = &[$(HqdmClass::$ancestor),*];

                fn resource(&self) -> &Resource {
                    &self.resource
                }

                fn into_resource(self) -> Resource {
                    self.resource
                }
            }

            impl IsA<$name> for $name {}
            $(impl IsA<$ancestor> for $name {})*
        )*
    };
}

entities! {
    /// `thing`: anything that exists, real or imagined.
    Thing => [];
    /// `abstract_object`: a thing that does not exist in space or time.
    AbstractObject => [Thing];
    /// `class`: an abstract object that has members and whose identity is defined by its
    /// membership.
    Class => [AbstractObject, Thing];
    /// `spatio_temporal_extent`: a thing that exists in time and space.
    SpatioTemporalExtent => [Thing];
    /// `event`: a spatio-temporal extent with zero temporal thickness that bounds other extents.
    Event => [SpatioTemporalExtent, Thing];
    /// `state`: a spatio-temporal extent that is an individual or a temporal part of one.
    State => [SpatioTemporalExtent, Thing];
    /// `individual`: a state that is a whole life temporal part of itself.
    Individual => [State, SpatioTemporalExtent, Thing];
    /// `period_of_time`: a state that is all of the possible world between two events.
    PeriodOfTime => [State, SpatioTemporalExtent, Thing];
    /// `possible_world`: an individual that is a complete spatio-temporal history of some possible
    /// world.
    PossibleWorld => [Individual, PeriodOfTime, State, SpatioTemporalExtent, Thing];
    /// `plan`: a possible world that some party would like to bring about.
    Plan => [PossibleWorld, Individual, PeriodOfTime, State, SpatioTemporalExtent, Thing];
    /// `role`: a class whose members are participants playing the same part in activities or
    /// associations.
    Role => [Class, AbstractObject, Thing];
    /// `kind_of_activity`: a class of activity where all the members are of the same kind.
    KindOfActivity => [Class, AbstractObject, Thing];
    /// `kind_of_association`: a class of association where all the members have the same kind of
    /// participants.
    KindOfAssociation => [Class, AbstractObject, Thing];
    /// `kind_of_ordinary_physical_object`: a class of ordinary physical object where all the
    /// members are of the same kind.
    KindOfOrdinaryPhysicalObject => [Class, AbstractObject, Thing];
    /// `kind_of_ordinary_functional_object`: a class of ordinary functional object where all the
    /// members are of the same kind.
    KindOfOrdinaryFunctionalObject => [KindOfOrdinaryPhysicalObject, Class, AbstractObject, Thing];
    /// `kind_of_system`: a class of system where all the members are of the same kind.
    KindOfSystem => [Class, AbstractObject, Thing];
    /// `kind_of_biological_system`: a class of biological system where all the members are of the
    /// same kind.
    KindOfBiologicalSystem => [KindOfSystem, Class, AbstractObject, Thing];
    /// `kind_of_functional_system`: a class of functional system where all the members are of the
    /// same kind.
    KindOfFunctionalSystem => [KindOfSystem, Class, AbstractObject, Thing];
    /// `kind_of_system_component`: a class of system component where all the members are of the
    /// same kind.
    KindOfSystemComponent => [Class, AbstractObject, Thing];
    /// `kind_of_functional_system_component`: a class of functional system component where all the
    /// members are of the same kind.
    KindOfFunctionalSystemComponent => [KindOfSystemComponent, Class, AbstractObject, Thing];
    /// `kind_of_organization_component`: a class of organization component where all the members
    /// are of the same kind.
    KindOfOrganizationComponent => [KindOfSystemComponent, Class, AbstractObject, Thing];
    /// `class_of_possible_world`: a class whose members are possible worlds.
    ClassOfPossibleWorld => [Class, AbstractObject, Thing];
    /// `class_of_intentionally_constructed_object`: a class whose members are intentionally
    /// constructed objects.
    ClassOfIntentionallyConstructedObject => [Class, AbstractObject, Thing];
    /// `class_of_state_of_intentionally_constructed_object`: a class whose members are states of
    /// intentionally constructed objects.
    ClassOfStateOfIntentionallyConstructedObject => [Class, AbstractObject, Thing];
    /// `class_of_socially_constructed_activity`: a class whose members are socially constructed
    /// activities.
    ClassOfSociallyConstructedActivity => [Class, AbstractObject, Thing];
    /// `class_of_state_of_socially_constructed_activity`: a class whose members are states of
    /// socially constructed activities.
    ClassOfStateOfSociallyConstructedActivity => [Class, AbstractObject, Thing];
    /// `class_of_reaching_agreement`: a class whose members are reaching agreement activities.
    ClassOfReachingAgreement => [ClassOfSociallyConstructedActivity, Class, AbstractObject, Thing];
    /// `class_of_agree_contract`: a class whose members are agree contract activities.
    ClassOfAgreeContract => [
        ClassOfReachingAgreement, ClassOfSociallyConstructedActivity, Class, AbstractObject, Thing,
    ];
    /// `class_of_contract_process`: a class whose members are contract processes.
    ClassOfContractProcess => [ClassOfSociallyConstructedActivity, Class, AbstractObject, Thing];
    /// `class_of_offer`: a class whose members are offers.
    ClassOfOffer => [ClassOfSociallyConstructedActivity, Class, AbstractObject, Thing];
    /// `class_of_amount_of_money`: a class whose members are amounts of money.
    ClassOfAmountOfMoney => [Class, AbstractObject, Thing];
    /// `class_of_sales_product_instance`: a class whose members are sales product instances.
    ClassOfSalesProductInstance => [Class, AbstractObject, Thing];
    /// `activity`: an individual that consists of its participants and causes some event.
    Activity => [Individual, State, SpatioTemporalExtent, Thing];
    /// `socially_constructed_activity`: an activity that is defined by an agreement between the
    /// parties involved.
    SociallyConstructedActivity => [Activity, Individual, State, SpatioTemporalExtent, Thing];
    /// `state_of_socially_constructed_activity`: a state that is a socially constructed activity or
    /// a temporal part of one.
    StateOfSociallyConstructedActivity => [State, SpatioTemporalExtent, Thing];
    /// `participant`: a state of a party or object that takes part in an activity or association.
    Participant => [State, SpatioTemporalExtent, Thing];
    /// `association`: an individual that consists of the participants that are associated.
    Association => [Individual, State, SpatioTemporalExtent, Thing];
    /// `ownership`: an association where an owner owns an asset.
    Ownership => [Association, Individual, State, SpatioTemporalExtent, Thing];
    /// `employment`: an association where an employee works for an employer.
    Employment => [Association, Individual, State, SpatioTemporalExtent, Thing];
    /// `party`: a person or organization.
    Party => [Individual, State, SpatioTemporalExtent, Thing];
    /// `person`: a biological person.
    Person => [Party, Individual, State, SpatioTemporalExtent, Thing];
    /// `organization`: a socially constructed object that is an organized body of people.
    Organization => [Party, Individual, State, SpatioTemporalExtent, Thing];
    /// `language_community`: an organization whose members recognize a common language.
    LanguageCommunity => [Organization, Party, Individual, State, SpatioTemporalExtent, Thing];
    /// `reaching_agreement`: a socially constructed activity where two or more parties determine a
    /// course of action.
    ReachingAgreement => [
        SociallyConstructedActivity, Activity, Individual, State, SpatioTemporalExtent, Thing,
    ];
    /// `agree_contract`: a reaching agreement that results in a contract.
    AgreeContract => [
        ReachingAgreement, SociallyConstructedActivity, Activity, Individual, State,
        SpatioTemporalExtent, Thing,
    ];
    /// `agreement_process`: a socially constructed activity that consists of reaching an agreement
    /// and executing it.
    AgreementProcess => [
        SociallyConstructedActivity, Activity, Individual, State, SpatioTemporalExtent, Thing,
    ];
    /// `contract_process`: an agreement process that consists of agreeing a contract and executing
    /// it.
    ContractProcess => [
        AgreementProcess, SociallyConstructedActivity, Activity, Individual, State,
        SpatioTemporalExtent, Thing,
    ];
    /// `sale_of_goods`: a contract process where goods are exchanged for money.
    SaleOfGoods => [
        ContractProcess, AgreementProcess, SociallyConstructedActivity, Activity, Individual, State,
        SpatioTemporalExtent, Thing,
    ];
    /// `offer`: a socially constructed activity where a party proposes an agreement.
    Offer => [
        SociallyConstructedActivity, Activity, Individual, State, SpatioTemporalExtent, Thing,
    ];
    /// `offer_for_goods`: an offer to exchange goods for money.
    OfferForGoods => [
        Offer, SociallyConstructedActivity, Activity, Individual, State, SpatioTemporalExtent,
        Thing,
    ];
    /// `acceptance_of_offer`: a socially constructed activity where a party accepts an offer.
    AcceptanceOfOffer => [
        SociallyConstructedActivity, Activity, Individual, State, SpatioTemporalExtent, Thing,
    ];
    /// `offer_and_acceptance_for_goods`: a reaching agreement that consists of an offer for goods
    /// and its acceptance.
    OfferAndAcceptanceForGoods => [
        ReachingAgreement, SociallyConstructedActivity, Activity, Individual, State,
        SpatioTemporalExtent, Thing,
    ];
    /// `exchange_of_goods_and_money`: a socially constructed activity where goods and money change
    /// hands.
    ExchangeOfGoodsAndMoney => [
        SociallyConstructedActivity, Activity, Individual, State, SpatioTemporalExtent, Thing,
    ];
    /// `transfer_of_ownership_of_money`: a socially constructed activity where ownership of an
    /// amount of money passes between parties.
    TransferOfOwnershipOfMoney => [
        SociallyConstructedActivity, Activity, Individual, State, SpatioTemporalExtent, Thing,
    ];
    /// `ordinary_physical_object`: a physical object that does not survive the replacement of all
    /// its parts.
    OrdinaryPhysicalObject => [Individual, State, SpatioTemporalExtent, Thing];
    /// `intentionally_constructed_object`: an individual that is intentionally constructed.
    IntentionallyConstructedObject => [Individual, State, SpatioTemporalExtent, Thing];
    /// `state_of_intentionally_constructed_object`: a state that is an intentionally constructed
    /// object or a temporal part of one.
    StateOfIntentionallyConstructedObject => [State, SpatioTemporalExtent, Thing];
    /// `ordinary_functional_object`: an ordinary physical object that has an intended role.
    OrdinaryFunctionalObject => [
        OrdinaryPhysicalObject, IntentionallyConstructedObject, Individual, State,
        SpatioTemporalExtent, Thing,
    ];
    /// `system`: an organized or connected group of physical objects.
    System => [Individual, State, SpatioTemporalExtent, Thing];
    /// `biological_system`: a system that is alive and plays a natural role.
    BiologicalSystem => [
        System, OrdinaryPhysicalObject, Individual, State, SpatioTemporalExtent, Thing,
    ];
    /// `functional_system`: a system that has an intended role.
    FunctionalSystem => [
        System, IntentionallyConstructedObject, Individual, State, SpatioTemporalExtent, Thing,
    ];
    /// `system_component`: an individual that is a replaceable component of a system.
    SystemComponent => [Individual, State, SpatioTemporalExtent, Thing];
    /// `functional_system_component`: a system component of a functional system with an intended
    /// role.
    FunctionalSystemComponent => [
        SystemComponent, IntentionallyConstructedObject, Individual, State, SpatioTemporalExtent,
        Thing,
    ];
    /// `installed_functional_system_component`: a state of an ordinary functional object while it
    /// is installed as a functional system component.
    InstalledFunctionalSystemComponent => [State, SpatioTemporalExtent, Thing];
    /// `organization_component`: a system component that is a position or part of an organization.
    OrganizationComponent => [SystemComponent, Individual, State, SpatioTemporalExtent, Thing];
    /// `amount_of_money`: a socially constructed object that is an amount of some currency.
    AmountOfMoney => [Individual, State, SpatioTemporalExtent, Thing];
    /// `currency`: a class of amount of money issued by some authority.
    Currency => [ClassOfAmountOfMoney, Class, AbstractObject, Thing];
    /// `price`: a class of amount of money that is the consideration asked for a product.
    Price => [ClassOfAmountOfMoney, Class, AbstractObject, Thing];
    /// `sales_product`: a class of sales product instance sold under a brand.
    SalesProduct => [ClassOfSalesProductInstance, Class, AbstractObject, Thing];
    /// `sales_product_instance`: an ordinary functional object that is produced in order to be
    /// sold.
    SalesProductInstance => [
        OrdinaryFunctionalObject, OrdinaryPhysicalObject, IntentionallyConstructedObject,
        Individual, State, SpatioTemporalExtent, Thing,
    ];
    /// `product_offering`: a class of offer for a sales product, at a price, by a party, for a
    /// period.
    ProductOffering => [
        ClassOfOffer, ClassOfSociallyConstructedActivity, Class, AbstractObject, Thing,
    ];
    /// `pattern`: a class of sign that share a common shape.
    Pattern => [Class, AbstractObject, Thing];
    /// `representation_by_sign`: an association of a sign and a recognizing language community that
    /// represents a thing.
    RepresentationBySign => [Association, Individual, State, SpatioTemporalExtent, Thing];
    /// `sign`: a participant that is a member of a pattern and represents something.
    Sign => [Participant, State, SpatioTemporalExtent, Thing];
    /// `recognizing_language_community`: a participant state of a language community that
    /// recognizes a sign.
    RecognizingLanguageCommunity => [Participant, State, SpatioTemporalExtent, Thing];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ontology;

    fn assert_is_a<T: Entity, E: IsA<T>>() {}

    #[test]
    fn specialisations_are_instances_of_their_ancestors() {
        assert_is_a::<Event, Event>();
        assert_is_a::<Thing, PossibleWorld>();
        assert_is_a::<Individual, Plan>();
        assert_is_a::<SociallyConstructedActivity, SaleOfGoods>();
        assert_is_a::<ClassOfOffer, ProductOffering>();
        assert_is_a::<IntentionallyConstructedObject, FunctionalSystemComponent>();
    }

    #[test]
    fn ancestors_match_schema_closure() {
        let ontology = Ontology::hqdm();
        let mut expected = ontology.superclasses(Activity::CLASS);
        let mut actual = Activity::ANCESTORS.to_vec();
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);
        assert!(Thing::ANCESTORS.is_empty());
    }
}
