//! Request handlers and the error-to-envelope mapping.
//!
//! Every failure leaves the boundary as a structured JSON envelope
//! (`ok:false, error, hint?`), never as an opaque 500 without a body. The
//! frontend treats any `ok:false` uniformly and renders `hint` when
//! present.

pub mod assets;
pub mod system;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use aperture_core::Error;

/// JSON error envelope for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub ok: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// Boundary error: a core error paired with its HTTP status.
#[derive(Debug)]
pub enum ApiError {
    /// Every strategy ran and nothing matched (404).
    NotFound { hint: String },
    /// Provider or transport failure (502).
    Upstream(String),
    /// Misconfiguration surfaced at request time (500).
    Config(String),
    /// Anything else (500).
    Internal(String),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound { hint } => ApiError::NotFound { hint },
            Error::Provider(msg) => ApiError::Upstream(format!("Provider error: {}", msg)),
            Error::Timeout(msg) => ApiError::Upstream(format!("Timeout: {}", msg)),
            Error::Request(msg) => ApiError::Upstream(format!("Request error: {}", msg)),
            Error::Serialization(msg) => ApiError::Upstream(format!("Bad provider payload: {}", msg)),
            Error::Config(msg) => ApiError::Config(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error, hint) = match self {
            ApiError::NotFound { hint } => (
                StatusCode::NOT_FOUND,
                "No images found.".to_string(),
                Some(hint),
            ),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg, None),
            ApiError::Config(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Configuration error: {}", msg),
                None,
            ),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg, None),
        };

        let body = Json(ErrorEnvelope {
            ok: false,
            error,
            hint,
        });
        (status, body).into_response()
    }
}
