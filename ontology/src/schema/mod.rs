//! The HQDM catalogue, one module per subject area.
//!
//! Each module declares its classes with their direct superclasses and
//! cardinality rule tables. Rule tables list properties in ascending label
//! order.

pub mod activity;
pub mod agreement;
pub mod association;
pub mod kinds;
pub mod money;
pub mod party;
pub mod physical;
pub mod sign;
pub mod system;
pub mod top;
