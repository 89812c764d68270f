//! Policy signing
//!
//! Derives the `(policy, signature)` pair every signed request carries:
//! the policy's canonical JSON encoded as URL-safe unpadded base64, and an
//! HMAC-SHA256 over those same canonical bytes rendered as lowercase hex.
//! Signing happens over the pre-base64 bytes, so a verifier can decode the
//! token and check the MAC against exactly what it decodes to.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::transform::{OptionValue, Transform};

use super::error::SecurityError;
use super::policy::Policy;

type HmacSha256 = Hmac<Sha256>;

/// An immutable encoded-policy/signature pair.
///
/// Derived exactly once at construction; the secret key is only needed
/// transiently for the MAC and is not retained. Two `Security` values are
/// equal iff both derived strings are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Security {
    encoded_policy: String,
    signature: String,
}

impl Security {
    /// Signs `policy` with `secret`.
    ///
    /// The secret is treated as opaque bytes (typically the UTF-8 of an API
    /// secret string). An empty secret is a configuration error surfaced
    /// here rather than at request time.
    pub fn new(policy: &Policy, secret: &str) -> Result<Self, SecurityError> {
        if secret.is_empty() {
            return Err(SecurityError::MissingSecret);
        }

        let canonical = policy.canonical_json()?;

        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(&canonical);
        let signature = hex::encode(mac.finalize().into_bytes());

        let encoded_policy = URL_SAFE_NO_PAD.encode(&canonical);

        tracing::debug!(
            policy_bytes = canonical.len(),
            signature = %signature,
            "signed security policy"
        );

        Ok(Self {
            encoded_policy,
            signature,
        })
    }

    /// The URL-safe base64 canonical policy, transmittable as a single
    /// query value.
    pub fn encoded_policy(&self) -> &str {
        &self.encoded_policy
    }

    /// The lowercase hex HMAC-SHA256 signature.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// The query-string form appended to signed request URLs:
    /// `policy=...&signature=...`
    pub fn as_query(&self) -> String {
        format!(
            "policy={}&signature={}",
            self.encoded_policy, self.signature
        )
    }

    /// The path-task form used by endpoints that carry security inside the
    /// transform chain: `security=policy:...,signature:...`
    ///
    /// Both values are already URL-safe, hence `Raw`.
    pub fn to_transform(&self) -> Transform {
        Transform::new("security")
            .with("policy", OptionValue::raw(self.encoded_policy.as_str()))
            .with("signature", OptionValue::raw(self.signature.as_str()))
    }
}
