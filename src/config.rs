//! Configuration and builder for operation routers.
//!
//! [`LdpConfig`] holds the settings that shape how operations are handled: the
//! suffix naming metadata resources and which handlers take part in dispatch.
//! [`LdpRouterBuilder`] turns a store and a configuration into a ready
//! [`OperationRouter`].

use crate::error::{LdpError, LdpResult};
use crate::identifier_strategy::SuffixMetadataStrategy;
use crate::operation_handler::{
    LdpOperationHandler, OperationRouter, PatchOperationHandler, PostOperationHandler,
};
use crate::storage::ResourceStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Default suffix identifying metadata resources.
pub const DEFAULT_METADATA_SUFFIX: &str = ".meta";

/// Settings for the operation handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LdpConfig {
    /// Suffix appended to a resource path to name its metadata resource.
    pub metadata_suffix: String,

    /// Whether POST operations are dispatched.
    pub handle_post: bool,

    /// Whether PATCH operations are dispatched.
    pub handle_patch: bool,
}

impl Default for LdpConfig {
    fn default() -> Self {
        Self {
            metadata_suffix: DEFAULT_METADATA_SUFFIX.to_string(),
            handle_post: true,
            handle_patch: true,
        }
    }
}

impl LdpConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> LdpResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| LdpError::internal(format!("Invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> LdpResult<()> {
        if self.metadata_suffix.is_empty() {
            return Err(LdpError::internal("Metadata suffix cannot be empty"));
        }

        if self.metadata_suffix.contains('/') {
            return Err(LdpError::internal(
                "Metadata suffix cannot contain a path separator",
            ));
        }

        if !self.handle_post && !self.handle_patch {
            return Err(LdpError::internal("At least one handler must be enabled"));
        }

        Ok(())
    }
}

/// Builder for configuring and creating operation routers.
///
/// # Examples
///
/// ```rust,no_run
/// # use ldp_operations::storage::ResourceStore;
/// use ldp_operations::LdpRouterBuilder;
///
/// # fn example<S: ResourceStore>(store: S) -> Result<(), Box<dyn std::error::Error>> {
/// let router = LdpRouterBuilder::new(store)
///     .with_metadata_suffix(".acl-meta")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct LdpRouterBuilder<S> {
    store: Arc<S>,
    config: LdpConfig,
}

impl<S: ResourceStore> LdpRouterBuilder<S> {
    /// Create a builder with the default configuration.
    pub fn new(store: S) -> Self {
        Self::from_shared(Arc::new(store))
    }

    /// Create a builder around a store that is shared with other components.
    pub fn from_shared(store: Arc<S>) -> Self {
        Self {
            store,
            config: LdpConfig::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: LdpConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the metadata suffix.
    pub fn with_metadata_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.metadata_suffix = suffix.into();
        self
    }

    /// Enable or disable the POST handler.
    pub fn with_post(mut self, enabled: bool) -> Self {
        self.config.handle_post = enabled;
        self
    }

    /// Enable or disable the PATCH handler.
    pub fn with_patch(mut self, enabled: bool) -> Self {
        self.config.handle_patch = enabled;
        self
    }

    /// Build the router.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> LdpResult<OperationRouter<S, SuffixMetadataStrategy>> {
        self.config.validate()?;

        let strategy = Arc::new(SuffixMetadataStrategy::new(
            self.config.metadata_suffix.clone(),
        ));

        let mut handlers = Vec::new();
        if self.config.handle_post {
            handlers.push(LdpOperationHandler::Post(PostOperationHandler::new(
                Arc::clone(&self.store),
                Arc::clone(&strategy),
            )));
        }
        if self.config.handle_patch {
            handlers.push(LdpOperationHandler::Patch(PatchOperationHandler::new(
                Arc::clone(&self.store),
                strategy,
            )));
        }

        log::debug!(
            "Built operation router with {} handlers, metadata suffix '{}'",
            handlers.len(),
            self.config.metadata_suffix
        );

        Ok(OperationRouter::from_handlers(handlers))
    }
}
