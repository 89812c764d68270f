//! Single transform step
//!
//! A step is a fixed name plus an ordered option map. The rendered form is
//! the wire convention used throughout the pipeline path:
//! `name=key1:val1,key2:val2`, or the bare name when no options are set.
//! The `=`/`:`/`,` separators are a protocol contract, fixed once here.

use super::error::TransformError;
use super::value::OptionValue;

/// One named transform step with typed key/value options.
///
/// Options render in insertion order. Setting a key twice overwrites the
/// earlier value in place, keeping the key's original position; last write
/// wins, never an error. Numeric ranges documented by the server are caller
/// guidance only and are not validated here.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    name: String,
    options: Vec<(String, OptionValue)>,
}

impl Transform {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    /// Adds or overwrites an option, consuming and returning the builder.
    ///
    /// ```
    /// use cdnkit::transform::Transform;
    ///
    /// let step = Transform::new("resize").with("width", 100).with("height", 200);
    /// assert_eq!(step.render().unwrap(), "resize=width:100,height:200");
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.set(key, value);
        self
    }

    /// In-place variant of [`Transform::with`].
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();

        match self.options.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.options.push((key, value)),
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The option entries in render order.
    pub fn options(&self) -> &[(String, OptionValue)] {
        &self.options
    }

    /// Renders the step's path segment.
    pub fn render(&self) -> Result<String, TransformError> {
        if self.options.is_empty() {
            return Ok(self.name.clone());
        }

        let mut pairs = Vec::with_capacity(self.options.len());
        for (key, value) in &self.options {
            pairs.push(format!("{}:{}", key, value.encode(key)?));
        }

        Ok(format!("{}={}", self.name, pairs.join(",")))
    }
}
