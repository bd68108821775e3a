//! Entity builders.
//!
//! [`EntityBuilder`] accumulates `(property, target)` assertions on a fresh
//! resource and checks them against the rule table of the entity's class
//! when [`EntityBuilder::build`] is called. The typed builders in this module
//! wrap it with one setter per rule, each accepting only targets that are
//! instances of the rule's range class.

use std::marker::PhantomData;

use tracing::debug;

use crate::cardinality;
use crate::class::HqdmClass;
use crate::entity::Entity;
use crate::error::{HqdmError, Result};
use crate::iri::Iri;
use crate::model::Ontology;
use crate::property::HqdmProperty;
use crate::resource::Resource;
use crate::services::{RdfSpatioTemporalExtentServices, SpatioTemporalExtentServices};

/// Builds an entity of type `E`.
#[derive(Debug, Clone)]
pub struct EntityBuilder<E: Entity> {
    resource: Resource,
    entity: PhantomData<fn() -> E>,
}

impl<E: Entity> EntityBuilder<E> {
    /// Starts a builder on a resource from the default factory.
    #[must_use]
    pub fn new(iri: Iri) -> Self {
        Self {
            resource: RdfSpatioTemporalExtentServices.resource(E::CLASS, iri),
            entity: PhantomData,
        }
    }

    /// Starts a builder on a resource from `services`.
    ///
    /// # Errors
    ///
    /// Returns the factory's error, or [`HqdmError::Factory`] if the factory
    /// returns a resource with a different class or IRI than requested.
    pub fn with_services(services: &dyn SpatioTemporalExtentServices, iri: Iri) -> Result<Self> {
        let resource = services.create(E::CLASS, iri.clone())?;
        if resource.class() != E::CLASS || resource.iri() != &iri {
            return Err(HqdmError::Factory {
                class: E::CLASS,
                iri: iri.into(),
                reason: format!(
                    "factory returned {} resource <{}>",
                    resource.class(),
                    resource.iri()
                ),
            });
        }
        Ok(Self {
            resource,
            entity: PhantomData,
        })
    }

    /// Asserts `(property, value)`. Never validates.
    #[must_use]
    pub fn add(mut self, property: HqdmProperty, value: &impl Entity) -> Self {
        self.resource.add_value(property, value.iri().clone());
        self
    }

    /// Returns the resource being built.
    #[must_use]
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Returns the resource being built for direct manipulation.
    pub fn resource_mut(&mut self) -> &mut Resource {
        &mut self.resource
    }

    /// Validates the accumulated assertions and returns the entity.
    ///
    /// # Errors
    ///
    /// Returns [`HqdmError::PropertyNotSet`] naming the first property, in
    /// rule table order, that is mandatory and has no value, or that is
    /// present with an empty value set.
    pub fn build(self) -> Result<E> {
        cardinality::check(&self.resource, Ontology::hqdm().rules_for(E::CLASS))?;
        debug!(
            iri = %self.resource.iri(),
            class = %E::CLASS,
            triples = self.resource.triple_count(),
            "built entity"
        );
        Ok(E::from_resource(self.resource))
    }
}

/// One setter of a typed builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderSetter {
    /// Method name.
    pub method: &'static str,
    /// Property the setter asserts.
    pub property: HqdmProperty,
    /// Class the setter's argument must be an instance of.
    pub target: HqdmClass,
}

/// The setters of a typed builder.
#[derive(Debug, Clone, Copy)]
pub struct BuilderManifest {
    /// Builder type name.
    pub builder: &'static str,
    /// Class of the entity built.
    pub class: HqdmClass,
    /// Setters in declaration order.
    pub setters: &'static [BuilderSetter],
}

macro_rules! hqdm_builder {
    (
        $(#[$doc:meta])*
        $builder:ident => $entity:ident {
            $($method:ident => $property:ident: $target:ident,)*
        }
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $builder {
            inner: $crate::builder::EntityBuilder<$entity>,
        }

        impl $builder {
            /// The setters of this builder.
            pub const MANIFEST: $crate::builder::BuilderManifest =
                $crate::builder::BuilderManifest {
                    builder: stringify!($builder),
                    class: $crate::class::HqdmClass::$entity,
                    setters: &[$($crate::builder::BuilderSetter {
                        method: stringify!($method),
                        property: $crate::property::HqdmProperty::$property,
                        target: $crate::class::HqdmClass::$target,
                    },)*],
                };

            /// Starts a builder on a resource from the default factory.
            #[must_use]
            pub fn new(iri: $crate::iri::Iri) -> Self {
                Self {
                    inner: $crate::builder::EntityBuilder::new(iri),
                }
            }

            /// Starts a builder on a resource from `services`.
            ///
            /// # Errors
            ///
            /// Returns the factory's error, or
            /// [`HqdmError::Factory`]($crate::error::HqdmError::Factory) if the
            /// factory returns a resource with a different class or IRI than
            /// requested.
            pub fn with_services(
                services: &dyn $crate::services::SpatioTemporalExtentServices,
                iri: $crate::iri::Iri,
            ) -> $crate::error::Result<Self> {
                Ok(Self {
                    inner: $crate::builder::EntityBuilder::with_services(services, iri)?,
                })
            }

            $(
                #[doc = concat!(
                    "Asserts [`HqdmProperty::", stringify!($property),
                    "`](crate::HqdmProperty) with a [`", stringify!($target),
                    "`](crate::entity::", stringify!($target), ") value."
                )]
                #[must_use]
                pub fn $method(self, value: &impl $crate::entity::IsA<$target>) -> Self {
                    Self {
                        inner: self.inner.add($crate::property::HqdmProperty::$property, value),
                    }
                }
            )*

            /// Returns the resource being built.
            #[must_use]
            pub fn resource(&self) -> &$crate::resource::Resource {
                self.inner.resource()
            }

            /// Returns the resource being built for direct manipulation.
            pub fn resource_mut(&mut self) -> &mut $crate::resource::Resource {
                self.inner.resource_mut()
            }

            /// Validates the accumulated assertions and returns the entity.
            ///
            /// # Errors
            ///
            /// Returns [`HqdmError::PropertyNotSet`](crate::HqdmError::PropertyNotSet)
            /// naming the first unsatisfied property.
            pub fn build(self) -> $crate::error::Result<$entity> {
                self.inner.build()
            }
        }
    };
}

mod activity;
mod agreement;
mod association;
mod money;
mod physical;
mod sign;
mod system;
mod world;

pub use activity::{
    ActivityBuilder, ParticipantBuilder, SociallyConstructedActivityBuilder,
    StateOfSociallyConstructedActivityBuilder,
};
pub use agreement::{
    AcceptanceOfOfferBuilder, AgreeContractBuilder, ContractProcessBuilder,
    ExchangeOfGoodsAndMoneyBuilder, OfferAndAcceptanceForGoodsBuilder, OfferBuilder,
    OfferForGoodsBuilder, ReachingAgreementBuilder, SaleOfGoodsBuilder,
    TransferOfOwnershipOfMoneyBuilder,
};
pub use association::{EmploymentBuilder, OwnershipBuilder};
pub use money::{AmountOfMoneyBuilder, ProductOfferingBuilder, SalesProductInstanceBuilder};
pub use physical::{
    IntentionallyConstructedObjectBuilder, OrdinaryFunctionalObjectBuilder,
    OrdinaryPhysicalObjectBuilder, StateOfIntentionallyConstructedObjectBuilder,
};
pub use sign::{RecognizingLanguageCommunityBuilder, SignBuilder};
pub use system::{
    BiologicalSystemBuilder, FunctionalSystemBuilder, FunctionalSystemComponentBuilder,
    InstalledFunctionalSystemComponentBuilder, OrganizationComponentBuilder,
    SystemComponentBuilder,
};
pub use world::{PlanBuilder, PossibleWorldBuilder};

const MANIFESTS: &[BuilderManifest] = &[
    world::PossibleWorldBuilder::MANIFEST,
    world::PlanBuilder::MANIFEST,
    activity::ActivityBuilder::MANIFEST,
    activity::SociallyConstructedActivityBuilder::MANIFEST,
    activity::StateOfSociallyConstructedActivityBuilder::MANIFEST,
    activity::ParticipantBuilder::MANIFEST,
    association::OwnershipBuilder::MANIFEST,
    association::EmploymentBuilder::MANIFEST,
    agreement::ReachingAgreementBuilder::MANIFEST,
    agreement::AgreeContractBuilder::MANIFEST,
    agreement::ContractProcessBuilder::MANIFEST,
    agreement::SaleOfGoodsBuilder::MANIFEST,
    agreement::OfferBuilder::MANIFEST,
    agreement::OfferForGoodsBuilder::MANIFEST,
    agreement::AcceptanceOfOfferBuilder::MANIFEST,
    agreement::OfferAndAcceptanceForGoodsBuilder::MANIFEST,
    agreement::ExchangeOfGoodsAndMoneyBuilder::MANIFEST,
    agreement::TransferOfOwnershipOfMoneyBuilder::MANIFEST,
    physical::OrdinaryPhysicalObjectBuilder::MANIFEST,
    physical::IntentionallyConstructedObjectBuilder::MANIFEST,
    physical::StateOfIntentionallyConstructedObjectBuilder::MANIFEST,
    physical::OrdinaryFunctionalObjectBuilder::MANIFEST,
    system::BiologicalSystemBuilder::MANIFEST,
    system::FunctionalSystemBuilder::MANIFEST,
    system::SystemComponentBuilder::MANIFEST,
    system::FunctionalSystemComponentBuilder::MANIFEST,
    system::InstalledFunctionalSystemComponentBuilder::MANIFEST,
    system::OrganizationComponentBuilder::MANIFEST,
    money::AmountOfMoneyBuilder::MANIFEST,
    money::SalesProductInstanceBuilder::MANIFEST,
    money::ProductOfferingBuilder::MANIFEST,
    sign::SignBuilder::MANIFEST,
    sign::RecognizingLanguageCommunityBuilder::MANIFEST,
];

/// Returns the manifests of every typed builder.
#[must_use]
pub fn manifests() -> &'static [BuilderManifest] {
    MANIFESTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Activity, Event, KindOfActivity, PossibleWorld};

    struct Refusing;

    impl SpatioTemporalExtentServices for Refusing {
        fn create(&self, class: HqdmClass, iri: Iri) -> Result<Resource> {
            Err(HqdmError::Factory {
                class,
                iri: iri.into(),
                reason: "read-only store".to_string(),
            })
        }
    }

    struct Mislabelling;

    impl SpatioTemporalExtentServices for Mislabelling {
        fn create(&self, _class: HqdmClass, iri: Iri) -> Result<Resource> {
            Ok(Resource::new(iri, HqdmClass::Thing))
        }
    }

    fn iri(local: &str) -> Iri {
        Iri::new(format!("https://example.org/plant#{local}"))
    }

    #[test]
    fn generic_builder_validates_on_build() {
        let world = EntityBuilder::<PossibleWorld>::new(iri("world")).build();
        let Ok(world) = world else {
            unreachable!("possible world has no mandatory properties");
        };
        let missing = EntityBuilder::<Event>::new(iri("e")).build();
        assert_eq!(
            missing,
            Err(HqdmError::PropertyNotSet("part_of_possible_world"))
        );
        let event = EntityBuilder::<Event>::new(iri("e"))
            .add(HqdmProperty::PartOfPossibleWorld, &world)
            .build();
        assert!(event.is_ok());
    }

    #[test]
    fn refusing_factory_error_is_returned() {
        let result = EntityBuilder::<Activity>::with_services(&Refusing, iri("a"));
        assert!(matches!(
            result,
            Err(HqdmError::Factory { class: HqdmClass::Activity, .. })
        ));
        let typed = ActivityBuilder::with_services(&Refusing, iri("a"));
        assert!(typed.is_err());
    }

    #[test]
    fn factory_returning_wrong_class_is_rejected() {
        let result = EntityBuilder::<KindOfActivity>::with_services(&Mislabelling, iri("k"));
        assert!(matches!(result, Err(HqdmError::Factory { .. })));
        let typed = ActivityBuilder::with_services(&Mislabelling, iri("a"));
        assert!(matches!(
            typed,
            Err(HqdmError::Factory { class: HqdmClass::Activity, .. })
        ));
    }

    #[test]
    fn default_factory_through_with_services() {
        let built = EntityBuilder::<KindOfActivity>::with_services(
            &RdfSpatioTemporalExtentServices,
            iri("k"),
        )
        .and_then(EntityBuilder::build);
        assert_eq!(built.map(|k| k.iri().clone()), Ok(iri("k")));
    }

    #[test]
    fn one_manifest_per_typed_builder() {
        assert_eq!(manifests().len(), 33);
        let mut classes: Vec<_> = manifests().iter().map(|m| m.class).collect();
        classes.sort();
        classes.dedup();
        assert_eq!(classes.len(), 33);
    }

    #[test]
    fn manifest_names_builder_and_setters() {
        let m = ActivityBuilder::MANIFEST;
        assert_eq!(m.builder, "ActivityBuilder");
        assert_eq!(m.class, HqdmClass::Activity);
        let causes = m.setters.iter().find(|s| s.method == "causes_m");
        assert_eq!(
            causes.map(|s| (s.property, s.target)),
            Some((HqdmProperty::Causes, HqdmClass::Event))
        );
    }
}
