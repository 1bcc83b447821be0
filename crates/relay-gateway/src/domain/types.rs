//! Request, outcome and response types for the render pipeline.

use super::error::RenderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result of one render attempt: the rendered text or a categorized failure.
pub type RenderOutcome = Result<String, RenderError>;

/// A decoded render request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderRequest {
    /// Template source text
    pub template: String,
    /// Rendering context
    pub data: Map<String, Value>,
}

impl RenderRequest {
    /// Decode a request body and extract its fields.
    ///
    /// Decoding failures (bad UTF-8, malformed JSON, non-object JSON) are
    /// [`RenderError::Json`]. A `template` that is not a string or `data` that
    /// is not an object is [`RenderError::Internal`]. Absent or `null`
    /// fields fall back to an empty template and an empty context.
    pub fn from_body(body: &[u8]) -> Result<Self, RenderError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| RenderError::Json(e.to_string()))?;

        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(RenderError::Json(format!(
                    "expected a JSON object, found {}",
                    json_type_name(&other)
                )))
            }
        };

        let template = match fields.remove("template") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s,
            Some(other) => {
                return Err(RenderError::Internal(format!(
                    "template must be a string, found {}",
                    json_type_name(&other)
                )))
            }
        };

        let data = match fields.remove("data") {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(RenderError::Internal(format!(
                    "data must be an object, found {}",
                    json_type_name(&other)
                )))
            }
        };

        Ok(Self { template, data })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// JSON response body.
///
/// Serializes as `{"rendered": "..."}` or `{"error": "..."}`; exactly one key
/// is ever present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderResponse {
    #[serde(rename = "rendered")]
    Rendered(String),
    #[serde(rename = "error")]
    Error(String),
}

impl RenderResponse {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderResponse::Rendered(_))
    }
}

/// Map a render outcome onto the response body.
pub fn format_response(outcome: RenderOutcome) -> RenderResponse {
    match outcome {
        Ok(text) => RenderResponse::Rendered(text),
        Err(e) => RenderResponse::Error(e.to_string()),
    }
}

impl From<RenderOutcome> for RenderResponse {
    fn from(outcome: RenderOutcome) -> Self {
        format_response(outcome)
    }
}

/// Render failures are still a 200: the status only reflects transport.
impl IntoResponse for RenderResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
