//! File link URL construction
//!
//! A file link addresses a stored file directly, with no transform chain:
//! `{base}/{handle}`, plus the signed `policy`/`signature` query pair when
//! the account requires security. Only the URL is built here; issuing the
//! request belongs to the surrounding HTTP layer.

use crate::security::Security;

/// A direct link to a stored file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLink {
    base: String,
    handle: String,
    security: Option<Security>,
}

impl FileLink {
    pub fn new(base: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            handle: handle.into(),
            security: None,
        }
    }

    /// Attaches a signed security token; its query pair is appended to the
    /// URL.
    pub fn with_security(mut self, security: Security) -> Self {
        self.security = Some(security);
        self
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub fn security(&self) -> Option<&Security> {
        self.security.as_ref()
    }

    /// Builds the request URL.
    pub fn url(&self) -> String {
        let base = self.base.trim_end_matches('/');
        match &self.security {
            Some(security) => format!("{}/{}?{}", base, self.handle, security.as_query()),
            None => format!("{}/{}", base, self.handle),
        }
    }
}
