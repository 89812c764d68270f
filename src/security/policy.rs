//! Access-control policy model and canonicalization
//!
//! A policy limits what a signed request may do: when it expires, which API
//! calls it permits, and which handles, URLs, sizes or paths it is scoped
//! to. Its canonical JSON form must be byte-stable across call sites,
//! since signatures and test fixtures depend on it: key order is fixed by
//! struct field order, absent fields are omitted entirely, and permissions
//! always serialize in enumeration order no matter how they were added.

use std::collections::BTreeSet;

use serde::Serialize;

use super::error::SecurityError;

/// An API call permission a policy may grant.
///
/// The declaration order is the canonical serialization order; the derived
/// `Ord` makes `BTreeSet` iterate permissions in exactly this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Call {
    #[serde(rename = "pick")]
    Pick,
    #[serde(rename = "read")]
    Read,
    #[serde(rename = "stat")]
    Stat,
    #[serde(rename = "write")]
    Write,
    #[serde(rename = "writeUrl")]
    WriteUrl,
    #[serde(rename = "store")]
    Store,
    #[serde(rename = "convert")]
    Convert,
    #[serde(rename = "remove")]
    Remove,
    #[serde(rename = "exif")]
    Exif,
    #[serde(rename = "runWorkflow")]
    RunWorkflow,
}

/// A structured access-control descriptor.
///
/// All fields are optional; a meaningful policy sets at least one, but the
/// encoder never rejects an empty policy; it encodes whatever is present
/// (`{}` for nothing at all).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Policy {
    #[serde(skip_serializing_if = "Option::is_none")]
    expiry: Option<u64>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    call: BTreeSet<Call>,
    #[serde(skip_serializing_if = "Option::is_none")]
    handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(rename = "maxSize", skip_serializing_if = "Option::is_none")]
    max_size: Option<u64>,
    #[serde(rename = "minSize", skip_serializing_if = "Option::is_none")]
    min_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    container: Option<String>,
}

impl Policy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the expiry as a unix timestamp in seconds.
    pub fn expiry(mut self, timestamp: u64) -> Self {
        self.expiry = Some(timestamp);
        self
    }

    /// Grants one call permission. Duplicates and insertion order are
    /// irrelevant to the canonical form.
    pub fn call(mut self, call: Call) -> Self {
        self.call.insert(call);
        self
    }

    /// Grants several call permissions at once.
    pub fn calls(mut self, calls: impl IntoIterator<Item = Call>) -> Self {
        self.call.extend(calls);
        self
    }

    /// Restricts the policy to a single file handle.
    pub fn handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    /// Restricts external-URL transforms to URLs matching this regex.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Caps the size in bytes of uploaded files.
    pub fn max_size(mut self, bytes: u64) -> Self {
        self.max_size = Some(bytes);
        self
    }

    /// Sets a lower bound in bytes on uploaded files.
    pub fn min_size(mut self, bytes: u64) -> Self {
        self.min_size = Some(bytes);
        self
    }

    /// Restricts storage operations to paths matching this pattern.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Restricts storage operations to a named container/bucket.
    pub fn container(mut self, container: impl Into<String>) -> Self {
        self.container = Some(container.into());
        self
    }

    /// True when no field is set; such a policy canonicalizes to `{}`.
    pub fn is_empty(&self) -> bool {
        *self == Policy::default()
    }

    /// Emits the canonical JSON bytes.
    ///
    /// Key order is the struct field order (`expiry, call, handle, url,
    /// maxSize, minSize, path, container`), absent fields are omitted, and
    /// output is compact. Semantically identical policies produce identical
    /// bytes regardless of how their fields were populated.
    pub fn canonical_json(&self) -> Result<Vec<u8>, SecurityError> {
        Ok(serde_json::to_vec(self)?)
    }
}
