//! cdnkit: client-side URL construction and request signing for
//! media-processing CDN APIs.
//!
//! Two subsystems, both pure and synchronous:
//!
//! - [`transform`]: serializes an ordered chain of named transforms into the
//!   CDN's canonical path grammar
//! - [`security`]: encodes an access-control policy into a URL-safe token
//!   and signs it with HMAC-SHA256
//!
//! ```
//! use cdnkit::security::{Call, Policy, Security};
//! use cdnkit::transform::{Transform, TransformPipeline};
//!
//! let policy = Policy::new().expiry(1_700_000_000).call(Call::Read);
//! let security = Security::new(&policy, "MY-SECRET").unwrap();
//!
//! let url = TransformPipeline::new("abc123")
//!     .push(security.to_transform())
//!     .push(Transform::new("resize").with("width", 100).with("height", 200))
//!     .url("https://cdn.example.com")
//!     .unwrap();
//! ```
//!
//! The surrounding application owns transport, retries and uploads; this
//! crate only produces strings.

pub mod color;
pub mod link;
pub mod resource;
pub mod security;
pub mod transform;

pub use color::RgbColor;
pub use link::FileLink;
pub use resource::Resource;
pub use security::{Call, Policy, Security};
pub use transform::{OptionValue, Transform, TransformPipeline};
