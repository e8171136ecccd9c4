//! Unified server error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors become a JSON body of the form
//! `{"detail": "..."}` with an appropriate status code.
//!
//! Upstream and internal errors are logged with full detail; the caller only
//! ever sees a fixed message, so provider error bodies, account identifiers
//! and the like never leak to the frontend.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub const NOT_CONFIGURED_MESSAGE: &str = "Groq API Key not configured in backend";
pub const UPSTREAM_MESSAGE: &str = "An error occurred while communicating with the AI.";

/// All errors that can occur in the mydoc-server request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// No provider credential was configured at startup.
    #[error("provider credential not configured")]
    NotConfigured,

    /// The completions API call failed.
    #[error("upstream error: {0}")]
    Upstream(#[from] mydoc_groq::GroqError),

    /// The caller sent an invalid request.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The JSON body was missing, malformed or of the wrong shape.
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// An unclassified internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, client_message) = match &self {
            ServerError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
            ServerError::InvalidBody(r) => (r.status(), r.body_text()),

            ServerError::NotConfigured => {
                error!("chat request rejected: GROQ_API_KEY not configured");
                (StatusCode::INTERNAL_SERVER_ERROR, NOT_CONFIGURED_MESSAGE.to_owned())
            }
            ServerError::Upstream(e) => {
                error!(error = %e.detail(), "error calling Groq API");
                (StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_MESSAGE.to_owned())
            }
            ServerError::Internal(m) => {
                error!(message = %m, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            }
        };
        (status, Json(json!({ "detail": client_message }))).into_response()
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(e: anyhow::Error) -> Self {
        error!(error = ?e, "converting anyhow error to ServerError::Internal");
        ServerError::Internal(e.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::Value;

    async fn body_json(resp: Response) -> Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn upstream_error_hides_detail() {
        let err = ServerError::Upstream(mydoc_groq::GroqError::Api {
            status: 500,
            body: "secret provider trace".into(),
        });
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(resp).await;
        assert_eq!(body, json!({ "detail": UPSTREAM_MESSAGE }));
        assert!(!body.to_string().contains("secret provider trace"));
    }

    #[tokio::test]
    async fn not_configured_has_fixed_detail() {
        let resp = ServerError::NotConfigured.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(resp).await, json!({ "detail": NOT_CONFIGURED_MESSAGE }));
    }

    #[test]
    fn bad_request_keeps_status() {
        let resp = ServerError::BadRequest("nope".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn anyhow_becomes_internal() {
        let err: ServerError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, ServerError::Internal(m) if m == "boom"));
    }
}
