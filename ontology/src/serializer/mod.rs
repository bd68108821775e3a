//! Serializers for the HQDM schema and for entity graphs.
//!
//! Three serialization formats are supported:
//! - **JSON-LD** ([`jsonld`]), output to `hqdm.json`
//! - **Turtle** ([`turtle`]), output to `hqdm.ttl`
//! - **N-Triples** ([`ntriples`]), output to `hqdm.nt`
//!
//! Each format has a `schema_to_*` function for the catalogue and a
//! `graph_to_*` function for an [`EntityGraph`](crate::EntityGraph). The
//! Turtle and N-Triples renderings of the same input hold the same triples.

pub mod jsonld;
pub mod ntriples;
pub mod turtle;

/// Label of the ontology header node.
pub(crate) const ONTOLOGY_LABEL: &str = "HQDM";
