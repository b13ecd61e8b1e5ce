//! Request preconditions.
//!
//! [`Conditions`] bundles the HTTP precondition headers of a request. The
//! operation handlers never evaluate them: they forward the bundle unchanged on
//! every mutating store call. Stores that honour preconditions can use
//! [`Conditions::matches_metadata`] to check them against the current state of
//! a resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wildcard ETag matching any existing representation.
const ANY_ETAG: &str = "*";

/// Precondition tests of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditions {
    /// `If-Match` ETags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches_etag: Option<Vec<String>>,
    /// `If-None-Match` ETags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_matches_etag: Option<Vec<String>>,
    /// `If-Modified-Since` timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_since: Option<DateTime<Utc>>,
    /// `If-Unmodified-Since` timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unmodified_since: Option<DateTime<Utc>>,
}

/// State of an existing resource that conditions are checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceState<'a> {
    /// Current ETag of the resource.
    pub etag: Option<&'a str>,
    /// Last modification time of the resource.
    pub last_modified: Option<DateTime<Utc>>,
}

impl Conditions {
    /// Create an empty set of conditions which matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require one of the given ETags to match.
    pub fn with_matches_etag<I, T>(mut self, etags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.matches_etag = Some(etags.into_iter().map(Into::into).collect());
        self
    }

    /// Require none of the given ETags to match.
    pub fn with_not_matches_etag<I, T>(mut self, etags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.not_matches_etag = Some(etags.into_iter().map(Into::into).collect());
        self
    }

    /// Require the resource to be modified after `since`.
    pub fn with_modified_since(mut self, since: DateTime<Utc>) -> Self {
        self.modified_since = Some(since);
        self
    }

    /// Require the resource to be unmodified since `since`.
    pub fn with_unmodified_since(mut self, since: DateTime<Utc>) -> Self {
        self.unmodified_since = Some(since);
        self
    }

    /// Whether no test is present.
    pub fn is_empty(&self) -> bool {
        self.matches_etag.is_none()
            && self.not_matches_etag.is_none()
            && self.modified_since.is_none()
            && self.unmodified_since.is_none()
    }

    /// Check the conditions against a resource.
    ///
    /// `state` is `None` when the resource does not exist. In that case only an
    /// `If-Match` test can fail, since there is no representation to match.
    pub fn matches_metadata(&self, state: Option<ResourceState<'_>>) -> bool {
        let Some(state) = state else {
            return self.matches_etag.is_none();
        };

        if let Some(etags) = &self.matches_etag {
            let matched = etags.iter().any(|etag| {
                etag == ANY_ETAG || state.etag.is_some_and(|current| current == etag)
            });
            if !matched {
                return false;
            }
        }

        if let Some(etags) = &self.not_matches_etag {
            let matched = etags.iter().any(|etag| {
                etag == ANY_ETAG || state.etag.is_some_and(|current| current == etag)
            });
            if matched {
                return false;
            }
        }

        if let Some(last_modified) = state.last_modified {
            if self
                .modified_since
                .is_some_and(|since| last_modified <= since)
            {
                return false;
            }
            if self
                .unmodified_since
                .is_some_and(|since| last_modified > since)
            {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn state(etag: &str, seconds: i64) -> ResourceState<'_> {
        ResourceState {
            etag: Some(etag),
            last_modified: Some(Utc.timestamp_opt(seconds, 0).unwrap()),
        }
    }

    #[test]
    fn test_empty_conditions_match_everything() {
        let conditions = Conditions::new();
        assert!(conditions.is_empty());
        assert!(conditions.matches_metadata(None));
        assert!(conditions.matches_metadata(Some(state("\"1\"", 10))));
    }

    #[test]
    fn test_if_match() {
        let conditions = Conditions::new().with_matches_etag(["\"1\""]);
        assert!(conditions.matches_metadata(Some(state("\"1\"", 10))));
        assert!(!conditions.matches_metadata(Some(state("\"2\"", 10))));
        assert!(!conditions.matches_metadata(None));

        let wildcard = Conditions::new().with_matches_etag(["*"]);
        assert!(wildcard.matches_metadata(Some(state("\"2\"", 10))));
        assert!(!wildcard.matches_metadata(None));
    }

    #[test]
    fn test_if_none_match() {
        let conditions = Conditions::new().with_not_matches_etag(["\"1\""]);
        assert!(!conditions.matches_metadata(Some(state("\"1\"", 10))));
        assert!(conditions.matches_metadata(Some(state("\"2\"", 10))));
        assert!(conditions.matches_metadata(None));

        let wildcard = Conditions::new().with_not_matches_etag(["*"]);
        assert!(!wildcard.matches_metadata(Some(state("\"2\"", 10))));
        assert!(wildcard.matches_metadata(None));
    }

    #[test]
    fn test_modification_dates() {
        let since = Utc.timestamp_opt(100, 0).unwrap();

        let modified = Conditions::new().with_modified_since(since);
        assert!(modified.matches_metadata(Some(state("\"1\"", 200))));
        assert!(!modified.matches_metadata(Some(state("\"1\"", 50))));

        let unmodified = Conditions::new().with_unmodified_since(since);
        assert!(unmodified.matches_metadata(Some(state("\"1\"", 50))));
        assert!(!unmodified.matches_metadata(Some(state("\"1\"", 200))));
    }
}
