//! Registration and login routes

use axum::{Json, Router, extract::State, routing::post};
use tracing::debug;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

use super::types::{LoginRequest, RegisterRequest, TokenResponse};

/// POST /api/auth/register
async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    debug!("Registration request received");

    let token = state
        .auth
        .register(
            request.username.as_deref().unwrap_or_default(),
            request.email.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
        )
        .await?;

    metrics::counter!("notes_auth_registrations_total").increment(1);

    Ok(Json(TokenResponse { token }))
}

/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    debug!("Login request received");

    let result = state
        .auth
        .login(
            request.email.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
        )
        .await;

    let outcome = if result.is_ok() { "success" } else { "failure" };
    metrics::counter!("notes_auth_logins_total", "result" => outcome).increment(1);

    Ok(Json(TokenResponse { token: result? }))
}

/// Create auth routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
}
