//! HQDM ontology encoded as typed Rust data, with validated entity builders.
//!
//! The `hqdm-ontology` crate provides the HQDM (High Quality Data Model)
//! classes and property vocabulary as static Rust data, a declarative
//! cardinality rule table per class, and builders that assemble RDF-style
//! entities and refuse to hand them out until the rule table is satisfied.
//!
//! # Entry Point
//!
//! ```
//! let ontology = hqdm_ontology::Ontology::hqdm();
//! assert_eq!(ontology.class_count(), 75);
//! ```
//!
//! # Building entities
//!
//! ```
//! use hqdm_ontology::builder::ActivityBuilder;
//! use hqdm_ontology::entity::{Event, KindOfActivity, PossibleWorld};
//! use hqdm_ontology::{EntityBuilder, HqdmProperty, IriBase};
//!
//! # fn main() -> hqdm_ontology::Result<()> {
//! let base = IriBase::new("https://example.org/plant#")?;
//! let world = EntityBuilder::<PossibleWorld>::new(base.iri("world")).build()?;
//! let kind = EntityBuilder::<KindOfActivity>::new(base.iri("maintenance")).build()?;
//! let event = EntityBuilder::<Event>::new(base.iri("pump-stopped"))
//!     .add(HqdmProperty::PartOfPossibleWorld, &world)
//!     .build()?;
//!
//! let activity = ActivityBuilder::new(base.iri("repair"))
//!     .causes_m(&event)
//!     .member_of_kind_m(&kind)
//!     .part_of_possible_world_m(&world)
//!     .build()?;
//! # let _ = activity;
//! # Ok(())
//! # }
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod builder;
pub mod cardinality;
pub mod class;
pub mod entity;
pub mod error;
pub mod graph;
pub mod iri;
pub mod model;
pub mod property;
pub mod resource;
pub mod schema;
#[cfg(feature = "serializers")]
pub mod serializer;
pub mod services;

pub use builder::EntityBuilder;
pub use class::HqdmClass;
pub use entity::{Entity, IsA};
pub use error::{HqdmError, Result};
pub use graph::EntityGraph;
pub use iri::{Iri, IriBase};
pub use model::{Area, Cardinality, ClassDef, Ontology, PropertyRule, SchemaModule};
pub use property::HqdmProperty;
pub use resource::Resource;
pub use services::{RdfSpatioTemporalExtentServices, SpatioTemporalExtentServices};

impl Ontology {
    /// Returns the HQDM catalogue with every schema module.
    ///
    /// Modules are assembled top-down: the top-level categories first, then
    /// the kinds individuals can be members of, then each application area.
    #[must_use]
    pub fn hqdm() -> &'static Ontology {
        static ONTOLOGY: std::sync::OnceLock<Ontology> = std::sync::OnceLock::new();
        ONTOLOGY.get_or_init(|| Ontology {
            version: "1.0.0",
            base_iri: model::iris::HQDM_ONTOLOGY,
            modules: vec![
                schema::top::module(),
                schema::kinds::module(),
                schema::activity::module(),
                schema::association::module(),
                schema::party::module(),
                schema::agreement::module(),
                schema::physical::module(),
                schema::system::module(),
                schema::money::module(),
                schema::sign::module(),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_count() {
        assert_eq!(Ontology::hqdm().modules.len(), 10);
    }

    #[test]
    fn every_class_is_catalogued_once() {
        let ontology = Ontology::hqdm();
        assert_eq!(ontology.class_count(), HqdmClass::ALL.len());
        let mut seen = std::collections::HashSet::new();
        for def in ontology.classes() {
            assert!(seen.insert(def.class), "Duplicate class: {}", def.class);
        }
    }

    #[test]
    fn property_count() {
        assert_eq!(Ontology::hqdm().property_count(), 27);
    }

    #[test]
    fn every_class_reaches_thing() {
        let ontology = Ontology::hqdm();
        for class in HqdmClass::ALL {
            assert!(
                ontology.is_subclass_of(class, HqdmClass::Thing),
                "{class} does not specialise thing"
            );
        }
    }
}
