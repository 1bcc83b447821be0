//! Gateway error types.
//!
//! `RenderError` is what callers see: its `Display` output is the exact
//! `error` string of the JSON response, prefix included.

/// Failure of one render request.
///
/// The wire format only distinguishes three prefixes. `Runtime` and
/// `Internal` share the `"Error: "` prefix; they are kept apart so logs can
/// tell an engine evaluation failure from everything else.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Body is not valid JSON or not a JSON object
    #[error("JSON parsing error: {0}")]
    Json(String),

    /// Template failed to compile
    #[error("Template syntax error: {0}")]
    Syntax(String),

    /// Template failed during evaluation
    #[error("Error: {0}")]
    Runtime(String),

    /// Any other failure (bad field shapes, crashed render task)
    #[error("Error: {0}")]
    Internal(String),
}

impl RenderError {
    /// Short category name for structured logs.
    pub fn category(&self) -> &'static str {
        match self {
            RenderError::Json(_) => "json",
            RenderError::Syntax(_) => "syntax",
            RenderError::Runtime(_) => "runtime",
            RenderError::Internal(_) => "internal",
        }
    }
}

/// Failure reported by a [`TemplateEngine`](crate::ports::template::TemplateEngine).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Raised while parsing the template source
    #[error("{0}")]
    Syntax(String),

    /// Raised while rendering a parsed template
    #[error("{0}")]
    Runtime(String),
}

impl From<EngineError> for RenderError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Syntax(msg) => RenderError::Syntax(msg),
            EngineError::Runtime(msg) => RenderError::Runtime(msg),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Shared secret not provided
    #[error("SECRET is not set; refusing to start an unauthenticated render endpoint")]
    MissingSecret,

    /// Port cannot be used
    #[error("invalid port: {0}")]
    InvalidPort(String),

    /// A limit is out of range
    #[error("invalid limit: {0}")]
    InvalidLimit(String),

    /// An environment variable could not be parsed
    #[error("invalid value for {name}: {reason}")]
    InvalidEnv { name: String, reason: String },
}

/// Gateway-level errors (not reported to callers)
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(String),

    /// Server loop terminated with an error
    #[error("server error: {0}")]
    Serve(String),
}
