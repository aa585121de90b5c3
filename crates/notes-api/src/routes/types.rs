//! Request and response bodies

use serde::{Deserialize, Serialize};

/// POST /api/auth/register
///
/// Fields are optional so that a missing field reaches the service's own
/// validation instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /api/auth/login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Returned by both register and login
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /api/notes and PUT /api/notes/{id}
#[derive(Debug, Default, Deserialize)]
pub struct NoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Plain confirmation body
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
