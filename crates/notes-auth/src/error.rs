//! Authentication error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Missing authorization header")]
    MissingToken,

    #[error("Invalid authorization header format")]
    InvalidAuthHeader,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

impl AuthError {
    /// Status code and client-facing message
    ///
    /// Every token failure collapses to the same message so callers cannot
    /// tell a forged token from an expired one.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "No token, authorization denied"),
            AuthError::InvalidToken | AuthError::TokenExpired | AuthError::InvalidAuthHeader => {
                (StatusCode::UNAUTHORIZED, "Token is not valid")
            }
            AuthError::PasswordHash(_) | AuthError::Jwt(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error")
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!("Authentication failure: {}", self);
        }

        let body = axum::Json(json!({
            "message": message
        }));

        (status, body).into_response()
    }
}
