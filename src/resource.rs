//! Base resource locators
//!
//! Every transform pipeline and file link is anchored to a base resource:
//! a CDN file handle, a storage alias, or an external URL. This module only
//! renders the textual path form; it knows nothing about what the resource
//! points at.

use std::fmt;

/// The base resource a pipeline or policy applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// An opaque CDN file handle (e.g. `UPqbkTIETnGaQJa1nqnG`)
    Handle(String),
    /// A named storage alias plus a path inside it, rendered as
    /// `src://alias/path`
    StorageAlias { alias: String, path: String },
    /// An absolute external URL
    External(String),
}

impl Resource {
    pub fn handle(handle: impl Into<String>) -> Self {
        Resource::Handle(handle.into())
    }

    pub fn storage_alias(alias: impl Into<String>, path: impl Into<String>) -> Self {
        Resource::StorageAlias {
            alias: alias.into(),
            path: path.into(),
        }
    }

    pub fn external(url: impl Into<String>) -> Self {
        Resource::External(url.into())
    }

    /// Renders the path form used as the final segment of a pipeline URL.
    ///
    /// External URLs are percent-encoded since they contain `/`, `:` and
    /// possibly `?`, all of which are significant in the pipeline path.
    /// Handles and aliases are emitted verbatim.
    pub fn to_path(&self) -> String {
        match self {
            Resource::Handle(handle) => handle.clone(),
            Resource::StorageAlias { alias, path } => {
                format!("src://{}/{}", alias, path.trim_start_matches('/'))
            }
            Resource::External(url) => urlencoding::encode(url).into_owned(),
        }
    }

    /// True when the locator has no usable content (empty handle, alias or
    /// URL). Rendering such a resource is a caller error caught at render.
    pub fn is_empty(&self) -> bool {
        match self {
            Resource::Handle(handle) => handle.is_empty(),
            Resource::StorageAlias { alias, .. } => alias.is_empty(),
            Resource::External(url) => url.is_empty(),
        }
    }
}

impl From<&str> for Resource {
    /// Bare strings are treated as file handles, the common case.
    fn from(handle: &str) -> Self {
        Resource::Handle(handle.to_string())
    }
}

impl From<String> for Resource {
    fn from(handle: String) -> Self {
        Resource::Handle(handle)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
