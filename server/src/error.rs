//! Error types for the pipeline service

use thiserror::Error;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

impl From<JsonRejection> for PipelineError {
    fn from(rejection: JsonRejection) -> Self {
        PipelineError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            PipelineError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "Invalid input"),
            PipelineError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Configuration error"),
            PipelineError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO error"),
            PipelineError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"),
        };

        let body = Json(json!({
            "error": error_message,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_bad_request() {
        let response = PipelineError::InvalidInput("missing body".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_other_errors_are_server_errors() {
        let response = PipelineError::Config("bad origin".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let response = PipelineError::from(io).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
