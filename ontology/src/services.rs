//! Factories that create the resources entities are built on.

use tracing::trace;

use crate::class::HqdmClass;
use crate::error::Result;
use crate::iri::Iri;
use crate::resource::Resource;

/// Creates typed resources for spatio-temporal extents and the other HQDM
/// classes.
///
/// Builders obtain their resource from an implementation of this trait. The
/// default, [`RdfSpatioTemporalExtentServices`], creates in-memory resources.
/// Other implementations can register the IRI with a store and refuse when it
/// cannot.
pub trait SpatioTemporalExtentServices {
    /// Creates an empty resource typed as `class`.
    ///
    /// # Errors
    ///
    /// Returns [`HqdmError::Factory`](crate::HqdmError::Factory) when the
    /// implementation cannot create the resource.
    fn create(&self, class: HqdmClass, iri: Iri) -> Result<Resource>;
}

/// The in-memory resource factory. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct RdfSpatioTemporalExtentServices;

impl RdfSpatioTemporalExtentServices {
    /// Creates an empty resource typed as `class`.
    #[must_use]
    pub fn resource(&self, class: HqdmClass, iri: Iri) -> Resource {
        trace!(iri = %iri, class = %class, "creating resource");
        Resource::new(iri, class)
    }
}

impl SpatioTemporalExtentServices for RdfSpatioTemporalExtentServices {
    fn create(&self, class: HqdmClass, iri: Iri) -> Result<Resource> {
        Ok(self.resource(class, iri))
    }
}

/// Creates an empty resource with the default factory.
#[must_use]
pub fn create_resource(class: HqdmClass, iri: Iri) -> Resource {
    RdfSpatioTemporalExtentServices.resource(class, iri)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_factory_creates_empty_typed_resource() {
        let iri = Iri::new("https://example.org/plant#repair");
        let created = RdfSpatioTemporalExtentServices.create(HqdmClass::Activity, iri.clone());
        assert_eq!(created, Ok(Resource::new(iri.clone(), HqdmClass::Activity)));
        let r = create_resource(HqdmClass::Activity, iri);
        assert_eq!(r.class(), HqdmClass::Activity);
        assert_eq!(r.triple_count(), 0);
    }
}
