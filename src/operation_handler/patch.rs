//! PATCH operation handler
//!
//! Modifies the target resource, creating it when it does not exist yet. Metadata
//! resources may only be patched while the resource they describe exists, and
//! never when they would describe another metadata resource.

use crate::{
    error::{LdpError, LdpResult},
    identifier_strategy::MetadataIdentifierStrategy,
    operation_handler::{
        core::{Method, Operation, OperationHandler, ResponseDescription},
        require_content_type,
    },
    resource::ResourceIdentifier,
    storage::ResourceStore,
};
use log::{debug, info, warn};
use std::sync::Arc;

/// Handles PATCH operations by modifying the target resource.
///
/// Answers 201 with the target as location when the resource was created, and
/// 205 when an existing resource was modified.
pub struct PatchOperationHandler<S, M> {
    store: Arc<S>,
    metadata_strategy: Arc<M>,
}

impl<S, M> PatchOperationHandler<S, M>
where
    S: ResourceStore,
    M: MetadataIdentifierStrategy,
{
    /// Create a new PATCH handler.
    pub fn new(store: Arc<S>, metadata_strategy: Arc<M>) -> Self {
        Self {
            store,
            metadata_strategy,
        }
    }

    /// Check the metadata invariants for a metadata resource target.
    async fn validate_metadata_target(&self, target: &ResourceIdentifier) -> LdpResult<()> {
        let subject = self.metadata_strategy.associated_identifier(target)?;

        if self.metadata_strategy.is_metadata_identifier(&subject) {
            warn!("PATCH to {} rejected: metadata of a metadata resource", target);
            return Err(LdpError::conflict(format!(
                "Not allowed to create metadata resource {} describing metadata resource {}",
                target, subject
            )));
        }

        if !self.exists(&subject).await? {
            warn!(
                "PATCH to {} rejected: described resource {} does not exist",
                target, subject
            );
            return Err(LdpError::conflict(format!(
                "Metadata resource {} cannot be modified since {} does not exist",
                target, subject
            )));
        }

        Ok(())
    }

    async fn exists(&self, identifier: &ResourceIdentifier) -> LdpResult<bool> {
        self.store.resource_exists(identifier).await.map_err(|e| {
            warn!("Store failed to check existence of {}: {}", identifier, e);
            LdpError::store(e)
        })
    }
}

impl<S, M> Clone for PatchOperationHandler<S, M> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            metadata_strategy: Arc::clone(&self.metadata_strategy),
        }
    }
}

impl<S, M> OperationHandler for PatchOperationHandler<S, M>
where
    S: ResourceStore,
    M: MetadataIdentifierStrategy,
{
    fn can_handle(&self, operation: &Operation) -> LdpResult<()> {
        if operation.method != Method::Patch {
            return Err(LdpError::unsupported_method(operation.method.as_str()));
        }
        Ok(())
    }

    async fn handle(&self, operation: &Operation) -> LdpResult<ResponseDescription> {
        let target = &operation.target;
        debug!("PATCH handler processing request to {}", target);

        require_content_type(operation)?;

        if self.metadata_strategy.is_metadata_identifier(target) {
            self.validate_metadata_target(target).await?;
        }

        // Existence has to be known before the store creates the resource.
        let existed = self.exists(target).await?;

        self.store
            .modify_resource(target, &operation.body, operation.conditions.as_ref())
            .await
            .map_err(|e| {
                warn!("Store failed to modify {}: {}", target, e);
                LdpError::store(e)
            })?;

        if existed {
            info!("Modified resource {}", target);
            Ok(ResponseDescription::reset_content())
        } else {
            info!("Created resource {} through PATCH", target);
            Ok(ResponseDescription::created(target))
        }
    }
}
