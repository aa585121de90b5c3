//! API error types

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use notes_core::CoreError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

const SERVER_ERROR: &str = "Server error";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Core(e) => match e {
                CoreError::Validation(msg) | CoreError::Conflict(msg) => {
                    (StatusCode::BAD_REQUEST, msg.clone())
                }
                CoreError::InvalidCredentials => (StatusCode::BAD_REQUEST, e.to_string()),
                CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
                CoreError::NotAuthorized => (StatusCode::UNAUTHORIZED, e.to_string()),
                CoreError::Auth(auth) => {
                    let (status, message) = auth.status_and_message();
                    (status, message.to_string())
                }
                CoreError::Database(_) | CoreError::Internal(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR.to_string())
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            error!("Request failed: {}", self);
        }

        let body = axum::Json(json!({
            "message": message
        }));

        (status, body).into_response()
    }
}
