//! Security policy and signature engine
//!
//! Encodes an access-control policy into a transportable token and signs it
//! with the caller's secret key:
//!
//! ```
//! use cdnkit::security::{Call, Policy, Security};
//!
//! let policy = Policy::new().expiry(1_700_000_000).call(Call::Read);
//! let security = Security::new(&policy, "MY-SECRET").unwrap();
//!
//! assert_eq!(security.signature().len(), 64);
//! ```
//!
//! Signature verification is the server's job; this side only guarantees
//! that identical policy content and secret reproduce identical tokens,
//! bit for bit.

pub mod error;
pub mod policy;
pub mod signature;

pub use error::SecurityError;
pub use policy::{Call, Policy};
pub use signature::Security;
