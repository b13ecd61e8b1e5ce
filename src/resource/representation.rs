//! Representations and their metadata.
//!
//! A [`Representation`] is the body of a request or resource together with its
//! [`RepresentationMetadata`]. The handlers only inspect the metadata: the content
//! type, and the slug naming hint on creation. The body bytes are forwarded to
//! the store without being parsed.

use crate::resource::vocabulary::{SOLID_HTTP_LOCATION, SOLID_HTTP_SLUG};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Descriptive metadata attached to a representation or an operation outcome.
///
/// Properties are keyed by IRI and hold arbitrary JSON values. The content type
/// is kept apart because every mutating operation requires it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepresentationMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content_type: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    properties: HashMap<String, Value>,
}

impl RepresentationMetadata {
    /// Create empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create metadata with the given content type.
    pub fn with_content_type(content_type: impl Into<String>) -> Self {
        Self {
            content_type: Some(content_type.into()),
            properties: HashMap::new(),
        }
    }

    /// The content type, if one was supplied.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Replace or clear the content type.
    pub fn set_content_type(&mut self, content_type: Option<String>) {
        self.content_type = content_type;
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Get the value stored under `key` if it is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Remove the value stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.properties.remove(key)
    }

    /// Whether neither a content type nor any property is present.
    pub fn is_empty(&self) -> bool {
        self.content_type.is_none() && self.properties.is_empty()
    }

    /// The client-supplied naming hint of a creation request.
    pub fn slug(&self) -> Option<&str> {
        self.get_str(SOLID_HTTP_SLUG)
    }

    /// The location of a created or targeted resource.
    pub fn location(&self) -> Option<&str> {
        self.get_str(SOLID_HTTP_LOCATION)
    }
}

/// A body together with its metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Representation {
    /// Raw body bytes.
    pub data: Vec<u8>,
    /// Metadata describing the body.
    pub metadata: RepresentationMetadata,
}

impl Representation {
    /// Create a representation from a body and a content type.
    pub fn new(data: impl Into<Vec<u8>>, content_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            metadata: RepresentationMetadata::with_content_type(content_type),
        }
    }

    /// Create a representation with explicit metadata.
    pub fn with_metadata(data: impl Into<Vec<u8>>, metadata: RepresentationMetadata) -> Self {
        Self {
            data: data.into(),
            metadata,
        }
    }

    /// Set the slug naming hint, returning the updated representation.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        let slug: String = slug.into();
        self.metadata.set(SOLID_HTTP_SLUG, slug);
        self
    }
}
