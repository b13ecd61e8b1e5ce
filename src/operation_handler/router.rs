//! Ordered dispatch over operation handlers.
//!
//! The router holds a fixed list of tagged handler entries and hands each
//! operation to the first entry whose capability check accepts it.

use crate::{
    error::{LdpError, LdpResult},
    identifier_strategy::MetadataIdentifierStrategy,
    operation_handler::{
        core::{Operation, OperationHandler, ResponseDescription},
        patch::PatchOperationHandler,
        post::PostOperationHandler,
    },
    storage::ResourceStore,
};
use log::{debug, info, warn};
use std::sync::Arc;

/// One entry of the dispatch chain.
pub enum LdpOperationHandler<S, M> {
    Post(PostOperationHandler<S, M>),
    Patch(PatchOperationHandler<S, M>),
}

impl<S, M> Clone for LdpOperationHandler<S, M> {
    fn clone(&self) -> Self {
        match self {
            LdpOperationHandler::Post(handler) => LdpOperationHandler::Post(handler.clone()),
            LdpOperationHandler::Patch(handler) => LdpOperationHandler::Patch(handler.clone()),
        }
    }
}

impl<S, M> LdpOperationHandler<S, M> {
    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            LdpOperationHandler::Post(_) => "post",
            LdpOperationHandler::Patch(_) => "patch",
        }
    }
}

impl<S, M> OperationHandler for LdpOperationHandler<S, M>
where
    S: ResourceStore,
    M: MetadataIdentifierStrategy,
{
    fn can_handle(&self, operation: &Operation) -> LdpResult<()> {
        match self {
            LdpOperationHandler::Post(handler) => handler.can_handle(operation),
            LdpOperationHandler::Patch(handler) => handler.can_handle(operation),
        }
    }

    async fn handle(&self, operation: &Operation) -> LdpResult<ResponseDescription> {
        match self {
            LdpOperationHandler::Post(handler) => handler.handle(operation).await,
            LdpOperationHandler::Patch(handler) => handler.handle(operation).await,
        }
    }
}

/// Dispatches operations to the first handler that supports them.
///
/// ```rust,no_run
/// # use ldp_operations::storage::ResourceStore;
/// use ldp_operations::{
///     Operation, OperationHandler, OperationRouter, Representation, SuffixMetadataStrategy,
/// };
/// use std::sync::Arc;
///
/// # async fn example<S: ResourceStore>(store: S) -> Result<(), Box<dyn std::error::Error>> {
/// let router = OperationRouter::new(Arc::new(store), Arc::new(SuffixMetadataStrategy::new(".meta")));
///
/// let operation = Operation::post("http://test.com/", Representation::new("", "text/turtle"));
/// let response = router.handle(&operation).await?;
/// assert_eq!(response.status_code, 201);
/// # Ok(())
/// # }
/// ```
pub struct OperationRouter<S, M> {
    handlers: Vec<LdpOperationHandler<S, M>>,
}

impl<S, M> OperationRouter<S, M>
where
    S: ResourceStore,
    M: MetadataIdentifierStrategy,
{
    /// Create a router with the POST and PATCH handlers sharing `store` and
    /// `metadata_strategy`.
    pub fn new(store: Arc<S>, metadata_strategy: Arc<M>) -> Self {
        Self::from_handlers(vec![
            LdpOperationHandler::Post(PostOperationHandler::new(
                Arc::clone(&store),
                Arc::clone(&metadata_strategy),
            )),
            LdpOperationHandler::Patch(PatchOperationHandler::new(store, metadata_strategy)),
        ])
    }

    /// Create a router trying `handlers` in the given order.
    pub fn from_handlers(handlers: Vec<LdpOperationHandler<S, M>>) -> Self {
        Self { handlers }
    }

    /// The handlers in dispatch order.
    pub fn handlers(&self) -> &[LdpOperationHandler<S, M>] {
        &self.handlers
    }

    fn select(&self, operation: &Operation) -> LdpResult<&LdpOperationHandler<S, M>> {
        self.handlers
            .iter()
            .find(|handler| handler.can_handle(operation).is_ok())
            .ok_or_else(|| LdpError::unsupported_method(operation.method.as_str()))
    }
}

impl<S, M> OperationHandler for OperationRouter<S, M>
where
    S: ResourceStore,
    M: MetadataIdentifierStrategy,
{
    fn can_handle(&self, operation: &Operation) -> LdpResult<()> {
        self.select(operation).map(|_| ())
    }

    async fn handle(&self, operation: &Operation) -> LdpResult<ResponseDescription> {
        let request_id = uuid::Uuid::new_v4().to_string();

        let handler = match self.select(operation) {
            Ok(handler) => handler,
            Err(e) => {
                warn!(
                    "No handler supports {} {} (request: '{}')",
                    operation.method, operation.target, request_id
                );
                return Err(e);
            }
        };

        info!(
            "Dispatching {} {} to {} handler (request: '{}')",
            operation.method,
            operation.target,
            handler.name(),
            request_id
        );

        let result = handler.handle(operation).await;

        match &result {
            Ok(response) => {
                debug!(
                    "Operation completed with status {} (request: '{}')",
                    response.status_code, request_id
                );
            }
            Err(e) => {
                warn!("Operation failed: {} (request: '{}')", e, request_id);
            }
        }

        result
    }
}
