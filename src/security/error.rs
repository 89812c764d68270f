//! Error types for policy encoding and signing

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SecurityError {
    /// Signing was attempted without a secret key. API-key-only flows never
    /// construct a `Security` value; building one implies a secret exists.
    #[error("signing requires a non-empty secret key")]
    MissingSecret,

    /// Policy canonicalization failed. Not expected in practice: the policy
    /// model contains nothing serde_json cannot emit.
    #[error("policy serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
