//! Core operation handler infrastructure
//!
//! This module contains the foundational types shared by every operation handler:
//! the [`Operation`] being handled, the [`ResponseDescription`] produced, and the
//! [`OperationHandler`] trait tying the two together.

use crate::{
    error::LdpResult,
    resource::{
        Conditions, Representation, RepresentationMetadata, ResourceIdentifier,
        vocabulary::SOLID_HTTP_LOCATION,
    },
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::str::FromStr;

/// HTTP methods an operation can carry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    Get,
    Head,
    Options,
    Post,
    Put,
    Patch,
    Delete,
    /// Any extension method, kept verbatim.
    Other(String),
}

impl Method {
    /// The method token as sent on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Other(method) => method.as_str(),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_uppercase().as_str() {
            "GET" => Method::Get,
            "HEAD" => Method::Head,
            "OPTIONS" => Method::Options,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "PATCH" => Method::Patch,
            "DELETE" => Method::Delete,
            _ => Method::Other(s.to_string()),
        })
    }
}

/// Client preferences for the response, keyed by preference kind
/// (e.g. `type`, `charset`) and then by value with its weight.
///
/// The mutating handlers do not produce a body, so they ignore preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences(pub HashMap<String, HashMap<String, f64>>);

/// A request to be handled, independent of the transport it arrived on.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// The request method
    pub method: Method,
    /// The resource the request targets
    pub target: ResourceIdentifier,
    /// The request body
    pub body: Representation,
    /// Preconditions to forward to the store
    pub conditions: Option<Conditions>,
    /// Client preferences for the response
    pub preferences: Preferences,
}

impl Operation {
    /// Create an operation without conditions or preferences.
    pub fn new(
        method: Method,
        target: impl Into<ResourceIdentifier>,
        body: Representation,
    ) -> Self {
        Self {
            method,
            target: target.into(),
            body,
            conditions: None,
            preferences: Preferences::default(),
        }
    }

    /// Create a POST operation.
    pub fn post(target: impl Into<ResourceIdentifier>, body: Representation) -> Self {
        Self::new(Method::Post, target, body)
    }

    /// Create a PATCH operation.
    pub fn patch(target: impl Into<ResourceIdentifier>, body: Representation) -> Self {
        Self::new(Method::Patch, target, body)
    }

    /// Attach preconditions.
    pub fn with_conditions(mut self, conditions: Conditions) -> Self {
        self.conditions = Some(conditions);
        self
    }

    /// Attach client preferences.
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }
}

/// Outcome of a successfully handled operation.
///
/// An outer layer turns this into a protocol response: the status code, headers
/// derived from the metadata, and the body if present.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseDescription {
    /// HTTP status code
    pub status_code: u16,
    /// Response metadata, such as the location of a created resource
    pub metadata: Option<RepresentationMetadata>,
    /// Response body
    pub data: Option<Representation>,
}

impl ResponseDescription {
    /// 201 Created, with the location of the new resource.
    pub fn created(location: &ResourceIdentifier) -> Self {
        let mut metadata = RepresentationMetadata::new();
        metadata.set(SOLID_HTTP_LOCATION, location.path());

        Self {
            status_code: 201,
            metadata: Some(metadata),
            data: None,
        }
    }

    /// 205 Reset Content, without metadata or body.
    pub fn reset_content() -> Self {
        Self {
            status_code: 205,
            metadata: None,
            data: None,
        }
    }

    /// The reported location, if any.
    pub fn location(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|metadata| metadata.location())
    }
}

/// A handler for one kind of operation.
///
/// Handlers are composed into an ordered chain: a dispatcher asks each handler
/// in turn whether it [can handle](OperationHandler::can_handle) the operation,
/// and [handles](OperationHandler::handle) it with the first that accepts.
pub trait OperationHandler: Send + Sync {
    /// Check whether the operation is supported.
    ///
    /// Fails with [`LdpError::UnsupportedMethod`](crate::LdpError::UnsupportedMethod)
    /// when it is not.
    fn can_handle(&self, operation: &Operation) -> LdpResult<()>;

    /// Handle the operation.
    ///
    /// Callers are expected to have checked [`can_handle`](OperationHandler::can_handle)
    /// first.
    fn handle(
        &self,
        operation: &Operation,
    ) -> impl Future<Output = LdpResult<ResponseDescription>> + Send;

    /// Check support, then handle.
    fn handle_safe(
        &self,
        operation: &Operation,
    ) -> impl Future<Output = LdpResult<ResponseDescription>> + Send {
        async move {
            self.can_handle(operation)?;
            self.handle(operation).await
        }
    }
}
