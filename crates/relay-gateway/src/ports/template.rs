//! Templating capability consumed by the render pipeline.

use crate::domain::error::EngineError;
use serde_json::{Map, Value};

/// A template language with separate parse and render stages.
///
/// Implementations must run in strict mode: undefined variables, filters and
/// tags are errors, never blank output. Parse failures are
/// [`EngineError::Syntax`]; failures while rendering are
/// [`EngineError::Runtime`].
pub trait TemplateEngine: Send + Sync + 'static {
    /// A parsed template, ready to render.
    type Compiled: Send;

    /// Compile template source.
    fn parse(&self, source: &str) -> Result<Self::Compiled, EngineError>;

    /// Render a compiled template against a context.
    fn render(
        &self,
        template: &Self::Compiled,
        context: &Map<String, Value>,
    ) -> Result<String, EngineError>;
}
