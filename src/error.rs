use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub const ANALYZE_FAILED_MESSAGE: &str =
    "Unable to analyze product right now. Please try again shortly.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_)
            | AppError::Configuration(_)
            | AppError::Upstream(_)
            | AppError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::InvalidInput(msg) => json!({ "error": msg }),
            AppError::Configuration(msg) => {
                tracing::warn!("Configuration error: {}", msg);
                json!({ "error": msg })
            }
            AppError::Upstream(details) => {
                tracing::error!("Upstream model error: {}", details);
                json!({ "error": ANALYZE_FAILED_MESSAGE, "details": details })
            }
            AppError::Parse(details) => {
                tracing::error!("Failed to parse model response: {}", details);
                json!({ "error": ANALYZE_FAILED_MESSAGE, "details": details })
            }
            AppError::Internal(err) => {
                tracing::error!("Internal error: {}", err);
                json!({ "error": ANALYZE_FAILED_MESSAGE, "details": err.to_string() })
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn invalid_input_is_bad_request_without_details() {
        let (status, body) = body_json(AppError::InvalidInput("bad".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "bad" }));
    }

    #[tokio::test]
    async fn configuration_error_has_no_details() {
        let (status, body) = body_json(AppError::Configuration("no key".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "no key" }));
    }

    #[tokio::test]
    async fn upstream_and_parse_errors_carry_details() {
        let (status, body) = body_json(AppError::Upstream("quota exceeded".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], ANALYZE_FAILED_MESSAGE);
        assert_eq!(body["details"], "quota exceeded");

        let (status, body) = body_json(AppError::Parse("expected value".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["details"], "expected value");
    }

    #[tokio::test]
    async fn internal_error_from_anyhow() {
        let err: AppError = anyhow::anyhow!("boom").into();
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["details"], "boom");
    }
}
