//! Request tracing middleware.
//!
//! Wraps every request in an `http_request` span and records the response
//! status on it once the inner service finishes.

use axum::{body::Body, http::Request, response::Response};
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::{info_span, Instrument, Span};

/// Tracing layer that creates spans for each request
#[derive(Clone, Default)]
pub struct TracingLayer;

impl TracingLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for TracingLayer {
    type Service = TracingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TracingService { inner }
    }
}

/// Tracing service
#[derive(Clone)]
pub struct TracingService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for TracingService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let span = info_span!(
            "http_request",
            http.method = %req.method(),
            http.target = %req.uri().path(),
            http.status_code = tracing::field::Empty,
        );

        Box::pin(
            async move {
                let result = inner.call(req).await;

                if let Ok(response) = &result {
                    Span::current().record("http.status_code", response.status().as_u16());
                    tracing::debug!("Request completed");
                }

                result
            }
            .instrument(span),
        )
    }
}
