//! Typed cache keys.
//!
//! Keys are built from a [`Resource`] so that whatever a route handler
//! caches always sits under the prefix the invalidator deletes:
//!
//! ```
//! use lectio_cache::{CacheKey, Resource};
//!
//! let key = CacheKey::new(Resource::News)
//!     .param("lang", "sk")
//!     .param("page", 1)
//!     .param("limit", 20)
//!     .param_opt("search", None::<&str>);
//!
//! assert_eq!(key.as_str(), "cache:news:lang:sk:page:1:limit:20:search:");
//! ```
//!
//! Values are percent-encoded so that a search term containing `:` or a
//! glob character cannot collide with another key or match a pattern it
//! was not built for.

use crate::policy::Resource;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::fmt::{self, Display, Write};

/// Bytes escaped in key parts: the separator, Redis glob syntax, and `%`.
const KEY_PART: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'%')
    .add(b':')
    .add(b'*')
    .add(b'?')
    .add(b'[')
    .add(b']')
    .add(b'\\');

fn encode(part: impl Display) -> String {
    utf8_percent_encode(&part.to_string(), KEY_PART).to_string()
}

/// A cache key: the resource prefix followed by `:`-separated parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    resource: Resource,
    key: String,
}

impl CacheKey {
    /// Start a key at `resource`'s prefix.
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            key: resource.prefix(),
        }
    }

    /// Append a segment, e.g. `all` or an id.
    pub fn segment(mut self, segment: impl Display) -> Self {
        // Writing to a String cannot fail.
        let _ = write!(self.key, ":{}", encode(segment));
        self
    }

    /// Append `name:value`.
    pub fn param(mut self, name: &str, value: impl Display) -> Self {
        let _ = write!(self.key, ":{}:{}", encode(name), encode(value));
        self
    }

    /// Append `name:value`, or `name:` when the filter is absent.
    pub fn param_opt<V: Display>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self.param(name, ""),
        }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }

    pub fn into_string(self) -> String {
        self.key
    }
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.key
    }
}

impl From<CacheKey> for String {
    fn from(key: CacheKey) -> Self {
        key.key
    }
}
