//! Well-known metadata keys.
//!
//! Representation metadata is keyed by IRI. Only the handful of terms the
//! operation handlers read or write are listed here.

/// Solid HTTP vocabulary namespace.
pub const SOLID_HTTP: &str = "http://www.w3.org/ns/solid/http#";

/// Key under which a created or targeted resource's path is reported.
pub const SOLID_HTTP_LOCATION: &str = "http://www.w3.org/ns/solid/http#location";

/// Key carrying the client-supplied naming hint of a POST request.
pub const SOLID_HTTP_SLUG: &str = "http://www.w3.org/ns/solid/http#slug";
