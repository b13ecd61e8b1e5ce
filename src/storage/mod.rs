//! Storage abstraction consumed by the operation handlers.
//!
//! The handlers never persist anything themselves. They translate operations into
//! calls on a [`ResourceStore`] and shape the results into response descriptions.
//!
//! # Architecture
//!
//! The store is responsible for:
//! - Persisting representations and minting identifiers for new resources
//! - Evaluating the [`Conditions`] it receives
//! - Atomicity of each individual call
//!
//! The store is NOT responsible for:
//! - Metadata resource invariants (handled by the operation handlers)
//! - Choosing response status codes
//!
//! # Example Usage
//!
//! ```rust
//! use ldp_operations::storage::ResourceStore;
//! use ldp_operations::{Conditions, Representation, ResourceIdentifier};
//! use std::collections::HashSet;
//! use std::sync::{Arc, Mutex};
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("store unavailable")]
//! struct Unavailable;
//!
//! #[derive(Default)]
//! struct SetStore {
//!     paths: Arc<Mutex<HashSet<String>>>,
//! }
//!
//! impl ResourceStore for SetStore {
//!     type Error = Unavailable;
//!
//!     async fn add_resource(
//!         &self,
//!         container: &ResourceIdentifier,
//!         _representation: &Representation,
//!         _conditions: Option<&Conditions>,
//!     ) -> Result<ResourceIdentifier, Self::Error> {
//!         let mut paths = self.paths.lock().map_err(|_| Unavailable)?;
//!         let id = container.child(&paths.len().to_string());
//!         paths.insert(id.path().to_string());
//!         Ok(id)
//!     }
//!
//!     async fn modify_resource(
//!         &self,
//!         target: &ResourceIdentifier,
//!         _representation: &Representation,
//!         _conditions: Option<&Conditions>,
//!     ) -> Result<(), Self::Error> {
//!         let mut paths = self.paths.lock().map_err(|_| Unavailable)?;
//!         paths.insert(target.path().to_string());
//!         Ok(())
//!     }
//!
//!     async fn resource_exists(&self, identifier: &ResourceIdentifier) -> Result<bool, Self::Error> {
//!         let paths = self.paths.lock().map_err(|_| Unavailable)?;
//!         Ok(paths.contains(identifier.path()))
//!     }
//! }
//! ```

use crate::resource::{Conditions, Representation, ResourceIdentifier};
use std::future::Future;

/// Resource storage as seen by the operation handlers.
///
/// # Design Principles
///
/// - **Async First**: All operations return futures
/// - **Error Transparency**: Store errors are surfaced to the caller unchanged
/// - **Conditions Passthrough**: Conditions are handed over exactly as received
pub trait ResourceStore: Send + Sync {
    /// The error type returned by store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a new resource inside `container` and return its identifier.
    ///
    /// The store decides the final name. It may honour, adapt or ignore the slug
    /// found in the representation metadata.
    fn add_resource(
        &self,
        container: &ResourceIdentifier,
        representation: &Representation,
        conditions: Option<&Conditions>,
    ) -> impl Future<Output = Result<ResourceIdentifier, Self::Error>> + Send;

    /// Apply `representation` to the resource at `target`, creating it if needed.
    fn modify_resource(
        &self,
        target: &ResourceIdentifier,
        representation: &Representation,
        conditions: Option<&Conditions>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Check if a resource exists.
    fn resource_exists(
        &self,
        identifier: &ResourceIdentifier,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;
}
