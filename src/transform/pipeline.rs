//! Transform pipeline
//!
//! An ordered chain of transform steps applied to a base resource, rendered
//! as `step1/step2/.../resource`. Pipelines compose: a pre-built fragment
//! (a shared watermark, a debug chain) can be appended or prepended onto
//! another pipeline without either one aliasing the other's steps.

use crate::resource::Resource;

use super::error::TransformError;
use super::step::Transform;

/// An ordered sequence of transform steps over a base resource.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformPipeline {
    resource: Resource,
    steps: Vec<Transform>,
}

impl TransformPipeline {
    pub fn new(resource: impl Into<Resource>) -> Self {
        Self {
            resource: resource.into(),
            steps: Vec::new(),
        }
    }

    /// Appends one step, consuming and returning the builder.
    pub fn push(mut self, step: Transform) -> Self {
        self.steps.push(step);
        self
    }

    /// Appends all of `other`'s steps after this pipeline's, preserving
    /// their internal order. `other` is copied, never mutated; the two
    /// pipelines share no state afterwards.
    pub fn append(mut self, other: &TransformPipeline) -> Self {
        self.steps.extend_from_slice(&other.steps);
        self
    }

    /// Prepends all of `other`'s steps before this pipeline's, preserving
    /// their internal order. Copy semantics as with [`append`].
    ///
    /// [`append`]: TransformPipeline::append
    pub fn prepend(mut self, other: &TransformPipeline) -> Self {
        let mut steps = other.steps.clone();
        steps.append(&mut self.steps);
        self.steps = steps;
        self
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn steps(&self) -> &[Transform] {
        &self.steps
    }

    /// Renders the pipeline path: rendered steps joined with `/`, followed
    /// by the resource's path form.
    ///
    /// Rendering is idempotent; two calls without intervening mutation yield
    /// byte-identical output. An empty base resource or a non-finite float
    /// option fails here, before any output exists.
    pub fn render(&self) -> Result<String, TransformError> {
        if self.resource.is_empty() {
            return Err(TransformError::EmptyResource);
        }

        let mut segments = Vec::with_capacity(self.steps.len() + 1);
        for step in &self.steps {
            segments.push(step.render()?);
        }
        segments.push(self.resource.to_path());

        let path = segments.join("/");
        tracing::debug!(steps = self.steps.len(), %path, "rendered transform pipeline");
        Ok(path)
    }

    /// Joins the rendered path onto a CDN base URL.
    pub fn url(&self, base: &str) -> Result<String, TransformError> {
        Ok(format!("{}/{}", base.trim_end_matches('/'), self.render()?))
    }
}
