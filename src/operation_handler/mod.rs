//! Operation handlers for mutating requests.
//!
//! # Module Organization
//!
//! * [`core`] - Operation and response types, the [`OperationHandler`] trait
//! * [`post`] - Resource creation inside a container
//! * [`patch`] - Resource modification, including metadata resource rules
//! * [`router`] - Ordered dispatch over the handlers

pub mod core;
pub mod patch;
pub mod post;
pub mod router;

pub use self::core::{Method, Operation, OperationHandler, Preferences, ResponseDescription};
pub use patch::PatchOperationHandler;
pub use post::PostOperationHandler;
pub use router::{LdpOperationHandler, OperationRouter};

use crate::error::{LdpError, LdpResult};
use log::warn;

/// Reject operations whose body carries no content type.
pub(crate) fn require_content_type(operation: &Operation) -> LdpResult<()> {
    if operation.body.metadata.content_type().is_none() {
        warn!(
            "{} to {} rejected: body has no content type",
            operation.method, operation.target
        );
        return Err(LdpError::invalid_request(format!(
            "{} requests require the content-type header to be set",
            operation.method
        )));
    }
    Ok(())
}
