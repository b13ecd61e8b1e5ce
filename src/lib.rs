//! Operation handlers for a Linked Data Platform resource server.
//!
//! Translates resource creation (POST) and modification (PATCH) requests into
//! calls on a pluggable [`ResourceStore`](storage::ResourceStore), enforcing the
//! invariants around metadata resources: companion resources named by appending
//! a fixed suffix to the path of the resource they describe.
//!
//! # Core Components
//!
//! - [`OperationRouter`] - Ordered dispatch over the operation handlers
//! - [`PostOperationHandler`] / [`PatchOperationHandler`] - The mutating handlers
//! - [`MetadataIdentifierStrategy`] - Classification of metadata identifiers
//! - [`ResourceStore`](storage::ResourceStore) - Trait for storage backends
//!
//! # Quick Start
//!
//! ```rust,no_run
//! # use ldp_operations::storage::ResourceStore;
//! use ldp_operations::{LdpRouterBuilder, Operation, OperationHandler, Representation};
//!
//! # async fn example<S: ResourceStore>(store: S) -> Result<(), Box<dyn std::error::Error>> {
//! let router = LdpRouterBuilder::new(store).build()?;
//!
//! let body = Representation::new("<> a <#Note>.", "text/turtle").with_slug("note");
//! let response = router.handle(&Operation::post("http://example.org/notes/", body)).await?;
//! println!("created at {:?}", response.location());
//! # Ok(())
//! # }
//! ```
//!
//! The library logs through the `log` facade and installs no logger itself.

pub mod config;
pub mod error;
pub mod identifier_strategy;
pub mod operation_handler;
pub mod resource;
pub mod storage;

// Re-export commonly used types for convenience
pub use config::{LdpConfig, LdpRouterBuilder};
pub use error::{LdpError, LdpResult};
pub use identifier_strategy::{MetadataIdentifierStrategy, SuffixMetadataStrategy};
pub use operation_handler::{
    LdpOperationHandler, Method, Operation, OperationHandler, OperationRouter,
    PatchOperationHandler, PostOperationHandler, Preferences, ResponseDescription,
};
pub use resource::{
    Conditions, Representation, RepresentationMetadata, ResourceIdentifier, ResourceState,
};
