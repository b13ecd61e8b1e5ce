//! ResourceIdentifier value object.
//!
//! A resource identifier is an opaque absolute path or URI naming a resource.
//! The handlers never parse it beyond simple string suffix checks, so no
//! validation is enforced at construction time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a resource on the server.
///
/// Paths ending in `/` denote containers.
///
/// ```rust
/// use ldp_operations::ResourceIdentifier;
///
/// let container = ResourceIdentifier::new("http://test.com/");
/// assert!(container.is_container());
/// assert_eq!(container.child("foo").path(), "http://test.com/foo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    path: String,
}

impl ResourceIdentifier {
    /// Create a new identifier from a path.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The absolute path of the resource.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Consume the identifier and return its path.
    pub fn into_path(self) -> String {
        self.path
    }

    /// Whether the identifier denotes a container.
    pub fn is_container(&self) -> bool {
        self.path.ends_with('/')
    }

    /// Identifier of `name` inside this resource, treated as a container.
    ///
    /// A separating `/` is inserted when the path does not already end in one.
    pub fn child(&self, name: &str) -> Self {
        if self.is_container() {
            Self::new(format!("{}{}", self.path, name))
        } else {
            Self::new(format!("{}/{}", self.path, name))
        }
    }
}

impl fmt::Display for ResourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

impl From<&str> for ResourceIdentifier {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for ResourceIdentifier {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl AsRef<str> for ResourceIdentifier {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_detection() {
        assert!(ResourceIdentifier::new("http://test.com/").is_container());
        assert!(ResourceIdentifier::new("http://test.com/a/b/").is_container());
        assert!(!ResourceIdentifier::new("http://test.com/foo").is_container());
    }

    #[test]
    fn test_child_inserts_separator_when_needed() {
        let container = ResourceIdentifier::new("http://test.com/");
        assert_eq!(container.child("foo").path(), "http://test.com/foo");

        let plain = ResourceIdentifier::new("http://test.com/foo");
        assert_eq!(plain.child("bar").path(), "http://test.com/foo/bar");
    }

    #[test]
    fn test_display_and_serialization() {
        let id = ResourceIdentifier::from("http://test.com/foo");
        assert_eq!(id.to_string(), "http://test.com/foo");

        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json, serde_json::json!({ "path": "http://test.com/foo" }));

        let back: ResourceIdentifier = serde_json::from_value(json).unwrap();
        assert_eq!(back, id);
    }
}
