//! Render pipeline: decode → extract → parse → render.
//!
//! Every stage can fail independently and the first failure decides the
//! outcome. Nothing escapes as a panic or a transport error: every path
//! ends in a [`RenderOutcome`].

use crate::adapters::jinja::MiniJinjaEngine;
use crate::domain::error::RenderError;
use crate::domain::types::{RenderOutcome, RenderRequest};
use crate::ports::template::TemplateEngine;
use bytes::Bytes;
use std::sync::Arc;
use tracing::{debug, error};

/// Turns an authenticated request body into a render outcome.
pub struct RenderPipeline<E: TemplateEngine = MiniJinjaEngine> {
    engine: Arc<E>,
}

impl<E: TemplateEngine> Clone for RenderPipeline<E> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

impl Default for RenderPipeline<MiniJinjaEngine> {
    fn default() -> Self {
        Self::new(MiniJinjaEngine::new())
    }
}

impl<E: TemplateEngine> RenderPipeline<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Run all stages synchronously on the current thread.
    pub fn render(&self, body: &[u8]) -> RenderOutcome {
        let request = RenderRequest::from_body(body)?;
        let compiled = self.engine.parse(&request.template)?;
        let rendered = self.engine.render(&compiled, &request.data)?;
        Ok(rendered)
    }

    /// Run the pipeline on the blocking thread pool.
    ///
    /// A render task that panics is reported as [`RenderError::Internal`].
    pub async fn run(&self, body: Bytes) -> RenderOutcome {
        let pipeline = self.clone();
        let outcome = match tokio::task::spawn_blocking(move || pipeline.render(&body)).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, "Render task failed");
                Err(RenderError::Internal(format!("render task failed: {}", e)))
            }
        };

        match &outcome {
            Ok(rendered) => debug!(bytes = rendered.len(), "Template rendered"),
            Err(e) => debug!(category = e.category(), "Template render failed"),
        }

        outcome
    }
}
