use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

pub const MISSING_KEY_MESSAGE: &str = "OpenRouter API key not provided. Add 'api_key' in JSON body, \
or set 'OPENROUTER_API_KEY' env var, or send header 'x-openrouter-key: <key>' or \
'Authorization: Bearer <key>'.";

/// One rejected input field, reported back in the 422 body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("request validation failed")]
    Validation(Vec<FieldError>),

    #[error("{}", MISSING_KEY_MESSAGE)]
    MissingCredential,

    #[error("Upstream request failed: {0}")]
    UpstreamUnreachable(#[from] reqwest::Error),

    #[error("upstream returned status {status}")]
    Upstream { status: u16, detail: Value },

    #[error("Unexpected response format from OpenRouter")]
    MalformedResponse,
}

impl ProxyError {
    fn detail(&self) -> Value {
        match self {
            ProxyError::Validation(fields) => json!(fields),
            ProxyError::Upstream { detail, .. } => detail.clone(),
            other => Value::String(other.to_string()),
        }
    }
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ProxyError::MissingCredential => StatusCode::BAD_REQUEST,
            ProxyError::UpstreamUnreachable(_) => StatusCode::BAD_GATEWAY,
            ProxyError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ProxyError::MalformedResponse => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.detail() }))
    }
}
