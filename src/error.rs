//! Error types for LDP operation handling.
//!
//! Every failure the handlers can produce is expressed as an [`LdpError`]. Errors
//! raised by the injected [`ResourceStore`](crate::storage::ResourceStore) are
//! carried through untouched in [`LdpError::Store`], so callers can recover the
//! original error through [`std::error::Error::source`] or by downcasting.

/// Main error type for LDP operation handlers.
#[derive(Debug, thiserror::Error)]
pub enum LdpError {
    /// The handler does not support the operation's method.
    ///
    /// This is not a client-facing failure: a dispatcher receiving it should
    /// continue with the next handler in its chain.
    #[error("Unsupported method: {method}")]
    UnsupportedMethod { method: String },

    /// The request is malformed, e.g. the body has no content type.
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// The request violates a metadata resource invariant.
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Errors from the injected resource store, propagated verbatim.
    #[error("Resource store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Internal errors such as contract misuse or invalid configuration.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Result type for LDP operations.
pub type LdpResult<T> = Result<T, LdpError>;

impl LdpError {
    /// Create an unsupported method error.
    pub fn unsupported_method(method: impl Into<String>) -> Self {
        Self::UnsupportedMethod {
            method: method.into(),
        }
    }

    /// Create an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Wrap an error raised by the resource store.
    pub fn store<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Store(Box::new(error))
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code an outer layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            LdpError::UnsupportedMethod { .. } => 501,
            LdpError::InvalidRequest { .. } => 400,
            LdpError::Conflict { .. } => 409,
            LdpError::Store(_) | LdpError::Internal { .. } => 500,
        }
    }

    /// Stable error code for programmatic handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            LdpError::UnsupportedMethod { .. } => "UNSUPPORTED_METHOD",
            LdpError::InvalidRequest { .. } => "INVALID_REQUEST",
            LdpError::Conflict { .. } => "CONFLICT",
            LdpError::Store(_) => "STORE_ERROR",
            LdpError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Whether the error is the client's fault (4xx).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }

    /// Whether a dispatcher should try the next handler instead of failing.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, LdpError::UnsupportedMethod { .. })
    }
}
