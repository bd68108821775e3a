//! Builder scenarios: successful builds, missing mandatory properties, and
//! present-but-empty property keys.

#![allow(clippy::unwrap_used)]

use hqdm_ontology::builder::{ActivityBuilder, OwnershipBuilder, ParticipantBuilder};
use hqdm_ontology::entity::{Event, KindOfActivity, KindOfAssociation, Person, PossibleWorld, Role};
use hqdm_ontology::{
    Entity, EntityBuilder, HqdmClass, HqdmError, HqdmProperty, Iri, IriBase, Resource,
    SpatioTemporalExtentServices,
};

struct Fixture {
    base: IriBase,
    world: PossibleWorld,
    event: Event,
    kind: KindOfActivity,
}

fn fixture() -> Fixture {
    let base = IriBase::new("https://example.org/plant#").unwrap();
    let world = EntityBuilder::<PossibleWorld>::new(base.iri("world"))
        .build()
        .unwrap();
    let event = EntityBuilder::<Event>::new(base.iri("pump-failed"))
        .add(HqdmProperty::PartOfPossibleWorld, &world)
        .build()
        .unwrap();
    let kind = EntityBuilder::<KindOfActivity>::new(base.iri("repair"))
        .build()
        .unwrap();
    Fixture {
        base,
        world,
        event,
        kind,
    }
}

#[test]
fn activity_with_all_mandatory_properties_builds() {
    let f = fixture();
    let activity = ActivityBuilder::new(f.base.iri("repair-1"))
        .causes_m(&f.event)
        .member_of_kind_m(&f.kind)
        .part_of_possible_world_m(&f.world)
        .build()
        .unwrap();

    assert_eq!(activity.resource().class(), HqdmClass::Activity);
    for (property, target) in [
        (HqdmProperty::Causes, f.event.iri()),
        (HqdmProperty::MemberOfKind, f.kind.iri()),
        (HqdmProperty::PartOfPossibleWorld, f.world.iri()),
    ] {
        assert!(activity.has_value(property));
        assert_eq!(activity.value(property).iter().collect::<Vec<_>>(), vec![target]);
    }
}

#[test]
fn activity_without_causes_fails() {
    let f = fixture();
    let result = ActivityBuilder::new(f.base.iri("repair-2"))
        .member_of_kind_m(&f.kind)
        .part_of_possible_world_m(&f.world)
        .build();
    let err = result.unwrap_err();
    assert_eq!(err, HqdmError::PropertyNotSet("causes"));
    assert_eq!(err.to_string(), "Property Not Set: causes");
}

#[test]
fn omitting_each_mandatory_property_names_it() {
    let f = fixture();
    let cases: [(&str, fn(ActivityBuilder, &Fixture) -> ActivityBuilder); 3] = [
        ("causes", |b, f| b.member_of_kind_m(&f.kind).part_of_possible_world_m(&f.world)),
        ("member_of_kind", |b, f| b.causes_m(&f.event).part_of_possible_world_m(&f.world)),
        ("part_of_possible_world", |b, f| b.causes_m(&f.event).member_of_kind_m(&f.kind)),
    ];
    for (missing, populate) in cases {
        let builder = populate(ActivityBuilder::new(f.base.fresh()), &f);
        assert_eq!(builder.build(), Err(HqdmError::PropertyNotSet(missing)));
    }
}

#[test]
fn ownership_without_beginning_fails_on_beginning() {
    let f = fixture();
    let kind = EntityBuilder::<KindOfAssociation>::new(f.base.iri("ownership"))
        .build()
        .unwrap();
    let result = OwnershipBuilder::new(f.base.iri("ownership-1"))
        .member_of_kind_m(&kind)
        .part_of_possible_world_m(&f.world)
        .build();
    assert_eq!(result.unwrap_err().to_string(), "Property Not Set: beginning");
}

#[test]
fn ownership_with_participants_builds() {
    let f = fixture();
    let kind = EntityBuilder::<KindOfAssociation>::new(f.base.iri("ownership"))
        .build()
        .unwrap();
    let owner_role = EntityBuilder::<Role>::new(f.base.iri("owner")).build().unwrap();
    let person = EntityBuilder::<Person>::new(f.base.iri("alice"))
        .add(HqdmProperty::PartOfPossibleWorld, &f.world)
        .build()
        .unwrap();
    let owner = ParticipantBuilder::new(f.base.iri("alice-as-owner"))
        .member_of_kind_m(&owner_role)
        .part_of_possible_world_m(&f.world)
        .temporal_part_of_individual(&person)
        .build()
        .unwrap();
    let ownership = OwnershipBuilder::new(f.base.iri("ownership-2"))
        .beginning_m(&f.event)
        .consists_of_participant_m(&owner)
        .member_of_kind_m(&kind)
        .part_of_possible_world_m(&f.world)
        .build()
        .unwrap();
    assert!(ownership.value(HqdmProperty::ConsistsOfParticipant).contains(owner.iri()));
}

#[test]
fn declared_empty_optional_property_fails() {
    let f = fixture();
    let mut builder = ActivityBuilder::new(f.base.iri("repair-3"))
        .causes_m(&f.event)
        .member_of_kind_m(&f.kind)
        .part_of_possible_world_m(&f.world);
    builder.resource_mut().declare(HqdmProperty::References);
    assert_eq!(
        builder.build(),
        Err(HqdmError::PropertyNotSet("references"))
    );
}

#[test]
fn removing_last_value_of_optional_property_fails() {
    let f = fixture();
    let mut builder = ActivityBuilder::new(f.base.iri("repair-4"))
        .causes_m(&f.event)
        .member_of_kind_m(&f.kind)
        .part_of_possible_world_m(&f.world)
        .ending(&f.event);
    assert!(builder
        .resource_mut()
        .remove_value(HqdmProperty::Ending, f.event.iri()));
    assert_eq!(builder.build(), Err(HqdmError::PropertyNotSet("ending")));
}

#[test]
fn removing_last_value_of_mandatory_property_fails() {
    let f = fixture();
    let mut builder = ActivityBuilder::new(f.base.iri("repair-5"))
        .causes_m(&f.event)
        .member_of_kind_m(&f.kind)
        .part_of_possible_world_m(&f.world);
    builder
        .resource_mut()
        .remove_value(HqdmProperty::MemberOfKind, f.kind.iri());
    assert_eq!(
        builder.build(),
        Err(HqdmError::PropertyNotSet("member_of_kind"))
    );
}

#[test]
fn repeated_setter_accumulates_values() {
    let f = fixture();
    let second = EntityBuilder::<Event>::new(f.base.iri("pump-restarted"))
        .add(HqdmProperty::PartOfPossibleWorld, &f.world)
        .build()
        .unwrap();
    let activity = ActivityBuilder::new(f.base.iri("repair-6"))
        .causes_m(&f.event)
        .causes_m(&second)
        .member_of_kind_m(&f.kind)
        .part_of_possible_world_m(&f.world)
        .build()
        .unwrap();
    let causes = activity.value(HqdmProperty::Causes);
    assert_eq!(causes.len(), 2);
    assert!(causes.contains(f.event.iri()));
    assert!(causes.contains(second.iri()));
}

#[test]
fn injected_factory_is_used() {
    struct Counting(std::cell::Cell<usize>);

    impl SpatioTemporalExtentServices for Counting {
        fn create(&self, class: HqdmClass, iri: Iri) -> hqdm_ontology::Result<Resource> {
            self.0.set(self.0.get() + 1);
            Ok(Resource::new(iri, class))
        }
    }

    let f = fixture();
    let services = Counting(std::cell::Cell::new(0));
    let activity = ActivityBuilder::with_services(&services, f.base.iri("repair-7"))
        .unwrap()
        .causes_m(&f.event)
        .member_of_kind_m(&f.kind)
        .part_of_possible_world_m(&f.world)
        .build();
    assert!(activity.is_ok());
    assert_eq!(services.0.get(), 1);
}
