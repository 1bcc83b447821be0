//! MiniJinja-backed [`TemplateEngine`].
//!
//! Each request compiles into its own environment, so nothing is cached
//! between requests and one request's template can never be reached from
//! another.

use crate::domain::error::EngineError;
use crate::ports::template::TemplateEngine;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde_json::{Map, Value};

/// Name the request template is registered under; shows up in error locations.
const TEMPLATE_NAME: &str = "template";

/// Strict-mode MiniJinja engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct MiniJinjaEngine;

impl MiniJinjaEngine {
    pub fn new() -> Self {
        Self
    }

    fn environment() -> Environment<'static> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        // Output mirrors the template text byte for byte, final newline included.
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env
    }
}

/// A request template compiled into its own environment.
pub struct CompiledTemplate {
    env: Environment<'static>,
}

impl TemplateEngine for MiniJinjaEngine {
    type Compiled = CompiledTemplate;

    fn parse(&self, source: &str) -> Result<CompiledTemplate, EngineError> {
        let mut env = Self::environment();
        env.add_template_owned(TEMPLATE_NAME, source.to_owned())
            .map_err(|e| EngineError::Syntax(e.to_string()))?;
        Ok(CompiledTemplate { env })
    }

    fn render(
        &self,
        template: &CompiledTemplate,
        context: &Map<String, Value>,
    ) -> Result<String, EngineError> {
        let tmpl = template
            .env
            .get_template(TEMPLATE_NAME)
            .map_err(|e| EngineError::Runtime(e.to_string()))?;
        tmpl.render(context)
            .map_err(|e| EngineError::Runtime(e.to_string()))
    }
}
