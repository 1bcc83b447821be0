//! Relay gateway service - HTTP surface and server lifecycle.
//!
//! Routes:
//! - `GET /`  → 405 `needs to be post` (doubles as health check)
//! - `POST /` → HMAC authentication, then the render pipeline
//! - anything else → 404 `404`

use crate::adapters::jinja::MiniJinjaEngine;
use crate::domain::config::GatewayConfig;
use crate::domain::error::{ConfigError, GatewayError};
use crate::domain::secret::SecretKey;
use crate::domain::types::{format_response, RenderResponse};
use crate::middleware::{HmacAuthLayer, TracingLayer};
use crate::pipeline::RenderPipeline;
use crate::ports::template::TemplateEngine;
use crate::security::Authenticator;
use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    routing::post,
    Router,
};
use bytes::Bytes;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Body of the `GET /` response
pub const NEEDS_POST_BODY: &str = "needs to be post";

/// Body of a 404 response
pub const NOT_FOUND_BODY: &str = "404";

/// Relay gateway service state
pub struct RenderGatewayService {
    config: GatewayConfig,
    router: Router,
}

impl RenderGatewayService {
    /// Create a service rendering with the strict MiniJinja engine.
    pub fn new(config: GatewayConfig, secret: SecretKey) -> Result<Self, GatewayError> {
        Self::with_engine(config, secret, MiniJinjaEngine::new())
    }

    /// Create a service rendering with a custom engine.
    pub fn with_engine<E: TemplateEngine>(
        config: GatewayConfig,
        secret: SecretKey,
        engine: E,
    ) -> Result<Self, GatewayError> {
        config.validate()?;
        if secret.is_empty() {
            return Err(ConfigError::MissingSecret.into());
        }

        let router = build_router(
            &config,
            Authenticator::new(secret),
            RenderPipeline::new(engine),
        );

        Ok(Self { config, router })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Get a clone of the HTTP router
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Bind the configured HTTP address.
    pub async fn bind(&self) -> Result<TcpListener, GatewayError> {
        let addr = self.config.http_addr();
        TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind(format!("{}: {}", addr, e)))
    }

    /// Serve requests on `listener` until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: Option<SocketAddr> = listener.local_addr().ok();
        info!(addr = ?addr, "Relay gateway listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| {
                error!(error = %e, "HTTP server error");
                GatewayError::Serve(e.to_string())
            })?;

        info!("Relay gateway stopped");
        Ok(())
    }

    /// Bind and serve until `shutdown` resolves.
    pub async fn start<F>(self, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!("Starting relay gateway...");
        let listener = self.bind().await?;
        self.serve(listener, shutdown).await
    }
}

/// Application state shared across handlers
struct AppState<E: TemplateEngine> {
    pipeline: RenderPipeline<E>,
}

impl<E: TemplateEngine> Clone for AppState<E> {
    fn clone(&self) -> Self {
        Self {
            pipeline: self.pipeline.clone(),
        }
    }
}

/// Build the HTTP router.
///
/// Authentication wraps only the `POST /` handler, so a request that fails
/// it never reaches the pipeline.
pub fn build_router<E: TemplateEngine>(
    config: &GatewayConfig,
    authenticator: Authenticator,
    pipeline: RenderPipeline<E>,
) -> Router {
    let state = AppState { pipeline };
    let max_body_size = config.limits.max_body_size;

    let root = post(handle_render::<E>)
        .layer(HmacAuthLayer::new(authenticator, max_body_size))
        .get(needs_post)
        .fallback(not_found);

    Router::new()
        .route("/", root)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(TracingLayer::new())
        .with_state(state)
}

/// Handle an authenticated render request
async fn handle_render<E: TemplateEngine>(
    State(state): State<AppState<E>>,
    body: Bytes,
) -> RenderResponse {
    format_response(state.pipeline.run(body).await)
}

async fn needs_post() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, NEEDS_POST_BODY)
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}
