//! Resource model shared by the operation handlers and the store.
//!
//! * [`identifier`] - Resource identifiers
//! * [`representation`] - Bodies and their metadata
//! * [`conditions`] - Request preconditions forwarded to the store
//! * [`vocabulary`] - Well-known metadata keys

pub mod conditions;
pub mod identifier;
pub mod representation;
pub mod vocabulary;

pub use conditions::{Conditions, ResourceState};
pub use identifier::ResourceIdentifier;
pub use representation::{Representation, RepresentationMetadata};
