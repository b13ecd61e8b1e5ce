//! Metadata identifier strategies.
//!
//! A metadata resource is a companion resource describing another resource. The
//! strategy decides which identifiers name metadata resources and maps them to
//! the resource they describe. Handlers receive the strategy by injection so the
//! naming convention can change without touching handler logic.

use crate::error::{LdpError, LdpResult};
use crate::resource::ResourceIdentifier;

/// Classification and derivation of metadata identifiers.
///
/// Implementations must be pure: no I/O and no interior state that changes
/// between calls.
pub trait MetadataIdentifierStrategy: Send + Sync {
    /// Whether `identifier` names a metadata resource.
    fn is_metadata_identifier(&self, identifier: &ResourceIdentifier) -> bool;

    /// Identifier of the resource described by the metadata resource `identifier`.
    ///
    /// Fails with [`LdpError::Internal`] if `identifier` is not a metadata
    /// identifier.
    fn associated_identifier(
        &self,
        identifier: &ResourceIdentifier,
    ) -> LdpResult<ResourceIdentifier>;

    /// Identifier of the metadata resource describing `identifier`.
    fn metadata_identifier(&self, identifier: &ResourceIdentifier) -> ResourceIdentifier;
}

/// Names metadata resources by appending a fixed suffix to the resource path.
///
/// ```rust
/// use ldp_operations::{MetadataIdentifierStrategy, ResourceIdentifier, SuffixMetadataStrategy};
///
/// let strategy = SuffixMetadataStrategy::new(".meta");
/// let meta = ResourceIdentifier::new("http://test.com/foo.meta");
///
/// assert!(strategy.is_metadata_identifier(&meta));
/// assert_eq!(
///     strategy.associated_identifier(&meta).unwrap().path(),
///     "http://test.com/foo"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixMetadataStrategy {
    suffix: String,
}

impl SuffixMetadataStrategy {
    /// Create a strategy using `suffix`, e.g. `.meta`.
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// The configured suffix.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl MetadataIdentifierStrategy for SuffixMetadataStrategy {
    fn is_metadata_identifier(&self, identifier: &ResourceIdentifier) -> bool {
        // An empty suffix would classify everything as metadata.
        !self.suffix.is_empty() && identifier.path().ends_with(&self.suffix)
    }

    fn associated_identifier(
        &self,
        identifier: &ResourceIdentifier,
    ) -> LdpResult<ResourceIdentifier> {
        if !self.is_metadata_identifier(identifier) {
            return Err(LdpError::internal(format!(
                "{} is not a metadata identifier",
                identifier
            )));
        }

        let path = identifier.path();
        Ok(ResourceIdentifier::new(
            &path[..path.len() - self.suffix.len()],
        ))
    }

    fn metadata_identifier(&self, identifier: &ResourceIdentifier) -> ResourceIdentifier {
        ResourceIdentifier::new(format!("{}{}", identifier.path(), self.suffix))
    }
}
