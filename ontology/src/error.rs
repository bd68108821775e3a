//! Error types for hqdm-ontology.

use thiserror::Error;

use crate::class::HqdmClass;

/// Error type for entity construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HqdmError {
    /// A mandatory property has no value, or a declared property key carries
    /// an empty value set. Holds the property label.
    #[error("Property Not Set: {0}")]
    PropertyNotSet(&'static str),

    /// A string was rejected as an absolute IRI.
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    /// A spatio-temporal extent factory refused to create a resource.
    #[error("Failed to create {class} resource <{iri}>: {reason}")]
    Factory {
        /// Class requested from the factory.
        class: HqdmClass,
        /// IRI requested from the factory.
        iri: String,
        /// Factory-specific explanation.
        reason: String,
    },
}

/// Result type for entity construction.
pub type Result<T> = std::result::Result<T, HqdmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_not_set_message() {
        let err = HqdmError::PropertyNotSet("causes");
        assert_eq!(err.to_string(), "Property Not Set: causes");
    }

    #[test]
    fn factory_message_names_class_and_iri() {
        let err = HqdmError::Factory {
            class: HqdmClass::Activity,
            iri: "https://example.org/a".to_string(),
            reason: "store offline".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to create activity resource <https://example.org/a>: store offline"
        );
    }
}
