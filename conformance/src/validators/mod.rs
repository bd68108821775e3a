//! Conformance validators.
//!
//! Validators over the live catalogue (`schema`, `builders`, `instances`)
//! need no file I/O. The others read the built artifacts or the workspace
//! sources.

pub mod builders;
pub mod instances;
pub mod inventory;
pub mod rdf;
pub mod schema;
pub mod source;
