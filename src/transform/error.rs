//! Transform encoding error types
//!
//! The encoder is total over its accepted domain, so everything here is a
//! caller error detected before any output is produced: a malformed option
//! string that reached the network layer would only surface as a confusing
//! server-side 4xx.

use std::fmt;

/// Errors raised while building or rendering a transform pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// A float option value is NaN or infinite and has no decimal form
    NonFiniteNumber { option: String, value: f64 },
    /// The pipeline's base resource is empty
    EmptyResource,
    /// Catalog check: the option is not defined for this step
    UnknownOption { step: String, option: String },
    /// Catalog check: the option value has the wrong kind
    WrongKind {
        step: String,
        option: String,
        expected: &'static str,
    },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::NonFiniteNumber { option, value } => {
                write!(f, "Option '{}' has non-finite value {}", option, value)
            }
            TransformError::EmptyResource => {
                write!(f, "Pipeline base resource is empty")
            }
            TransformError::UnknownOption { step, option } => {
                write!(f, "Step '{}' has no option named '{}'", step, option)
            }
            TransformError::WrongKind {
                step,
                option,
                expected,
            } => {
                write!(
                    f,
                    "Option '{}' of step '{}' expects kind {}",
                    option, step, expected
                )
            }
        }
    }
}

impl std::error::Error for TransformError {}

impl TransformError {
    /// Helper constructors for common error patterns
    pub fn non_finite(option: impl Into<String>, value: f64) -> Self {
        TransformError::NonFiniteNumber {
            option: option.into(),
            value,
        }
    }

    pub fn unknown_option(step: impl Into<String>, option: impl Into<String>) -> Self {
        TransformError::UnknownOption {
            step: step.into(),
            option: option.into(),
        }
    }

    pub fn wrong_kind(
        step: impl Into<String>,
        option: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        TransformError::WrongKind {
            step: step.into(),
            option: option.into(),
            expected,
        }
    }
}
