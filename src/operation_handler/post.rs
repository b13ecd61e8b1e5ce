//! POST operation handler
//!
//! Creates a new resource inside the target container. The store picks the final
//! identifier; the handler only makes sure the request could not produce a
//! metadata resource through the slug.

use crate::{
    error::{LdpError, LdpResult},
    identifier_strategy::MetadataIdentifierStrategy,
    operation_handler::{
        core::{Method, Operation, OperationHandler, ResponseDescription},
        require_content_type,
    },
    storage::ResourceStore,
};
use log::{debug, info, warn};
use std::sync::Arc;

/// Handles POST operations by adding a resource to the target container.
pub struct PostOperationHandler<S, M> {
    store: Arc<S>,
    metadata_strategy: Arc<M>,
}

impl<S, M> PostOperationHandler<S, M>
where
    S: ResourceStore,
    M: MetadataIdentifierStrategy,
{
    /// Create a new POST handler.
    pub fn new(store: Arc<S>, metadata_strategy: Arc<M>) -> Self {
        Self {
            store,
            metadata_strategy,
        }
    }
}

impl<S, M> Clone for PostOperationHandler<S, M> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            metadata_strategy: Arc::clone(&self.metadata_strategy),
        }
    }
}

impl<S, M> OperationHandler for PostOperationHandler<S, M>
where
    S: ResourceStore,
    M: MetadataIdentifierStrategy,
{
    fn can_handle(&self, operation: &Operation) -> LdpResult<()> {
        if operation.method != Method::Post {
            return Err(LdpError::unsupported_method(operation.method.as_str()));
        }
        Ok(())
    }

    async fn handle(&self, operation: &Operation) -> LdpResult<ResponseDescription> {
        debug!("POST handler processing request to {}", operation.target);

        require_content_type(operation)?;

        if let Some(slug) = operation.body.metadata.slug() {
            let requested = operation.target.child(slug);
            if self.metadata_strategy.is_metadata_identifier(&requested) {
                warn!(
                    "POST to {} rejected: slug '{}' would create metadata resource {}",
                    operation.target, slug, requested
                );
                return Err(LdpError::conflict(format!(
                    "Not allowed to create metadata resource {} through a POST request",
                    requested
                )));
            }
        }

        let identifier = self
            .store
            .add_resource(
                &operation.target,
                &operation.body,
                operation.conditions.as_ref(),
            )
            .await
            .map_err(|e| {
                warn!("Store failed to add resource to {}: {}", operation.target, e);
                LdpError::store(e)
            })?;

        info!("Created resource {} in {}", identifier, operation.target);
        Ok(ResponseDescription::created(&identifier))
    }
}
