//! HMAC authentication middleware.
//!
//! Buffers the request body, checks the `X-Hmac-Sha256` signature over the
//! exact bytes received and only then hands the request (body restored) to
//! the inner service. Rejections never reach the render pipeline.

use crate::security::{Authenticator, SIGNATURE_HEADER};
use axum::{
    body::Body,
    http::{header::CONTENT_LENGTH, Request, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tower::{Layer, Service};
use tracing::warn;

/// Body of a 401 response
pub const UNAUTHORIZED_BODY: &str = "wrong hmac";

/// Body of a 413 response
pub const PAYLOAD_TOO_LARGE_BODY: &str = "request body too large";

/// Authentication layer
#[derive(Clone)]
pub struct HmacAuthLayer {
    authenticator: Authenticator,
    max_body_size: usize,
}

impl HmacAuthLayer {
    pub fn new(authenticator: Authenticator, max_body_size: usize) -> Self {
        Self {
            authenticator,
            max_body_size,
        }
    }
}

impl<S> Layer<S> for HmacAuthLayer {
    type Service = HmacAuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HmacAuthService {
            inner,
            authenticator: self.authenticator.clone(),
            max_body_size: self.max_body_size,
        }
    }
}

/// Authentication service
#[derive(Clone)]
pub struct HmacAuthService<S> {
    inner: S,
    authenticator: Authenticator,
    max_body_size: usize,
}

impl<S> Service<Request<Body>> for HmacAuthService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let authenticator = self.authenticator.clone();
        let max_body_size = self.max_body_size;
        // Take the service that was driven to readiness, leave a fresh clone behind.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            // Check content-length header first (fast path)
            if let Some(len) = declared_length(&req) {
                if len > max_body_size {
                    warn!(size = len, max = max_body_size, "Request too large (from header)");
                    return Ok(payload_too_large());
                }
            }

            let (parts, body) = req.into_parts();
            let body = match read_body_with_limit(body, max_body_size).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!(error = %e, max = max_body_size, "Failed to read request body");
                    return Ok(payload_too_large());
                }
            };

            // Non-ASCII header values count as absent.
            let signature = parts
                .headers
                .get(SIGNATURE_HEADER)
                .and_then(|v| v.to_str().ok());

            if !authenticator.authenticate(&body, signature) {
                let reason = if signature.is_some() {
                    "signature mismatch"
                } else {
                    "missing signature header"
                };
                warn!(reason, body_len = body.len(), "Rejected unauthenticated request");
                return Ok(unauthorized());
            }

            let req = Request::from_parts(parts, Body::from(body));
            inner.call(req).await
        })
    }
}

fn declared_length<B>(req: &Request<B>) -> Option<usize> {
    req.headers()
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

/// Read body with size limit
async fn read_body_with_limit(body: Body, max_size: usize) -> Result<Bytes, axum::Error> {
    axum::body::to_bytes(body, max_size).await
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, UNAUTHORIZED_BODY).into_response()
}

fn payload_too_large() -> Response {
    (StatusCode::PAYLOAD_TOO_LARGE, PAYLOAD_TOO_LARGE_BODY).into_response()
}
