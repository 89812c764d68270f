//! Transform pipeline encoding
//!
//! Serializes an ordered chain of named media transforms, each with typed
//! key/value options, into the CDN's canonical URL path grammar:
//!
//! ```text
//! resize=width:100,height:200/rotate=deg:90/abc123
//! ```
//!
//! Submodules:
//! - `value`: option value variants and their textual encoding
//! - `step`: one named step with an ordered option map
//! - `pipeline`: step sequences over a base resource, with composition
//! - `catalog`: declarative table of known steps, advisory validation
//! - `error`: construction/render-time error types

pub mod catalog;
pub mod error;
pub mod pipeline;
pub mod step;
pub mod value;

pub use error::TransformError;
pub use pipeline::TransformPipeline;
pub use step::Transform;
pub use value::OptionValue;
