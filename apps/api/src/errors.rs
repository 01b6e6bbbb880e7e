use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant maps to a 500 with a `{"detail": ...}` body, which is the shape
/// the chat frontend already understands.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotConfigured(String),

    #[error("{0}")]
    Llm(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let detail = match &self {
            AppError::NotConfigured(msg) => {
                tracing::warn!("Service misconfigured: {msg}");
                msg.clone()
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                msg.clone()
            }
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": detail })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_configured_keeps_message() {
        let response = AppError::NotConfigured("OpenAI API Key not configured".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "OpenAI API Key not configured");
    }

    #[tokio::test]
    async fn test_llm_error_surfaces_detail() {
        let response = AppError::Llm("API error (status 401): bad key".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "API error (status 401): bad key");
    }
}
