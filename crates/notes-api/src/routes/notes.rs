//! Note routes
//!
//! Every route here sits behind the bearer-token guard; handlers receive
//! the caller as an [`AuthUser`] and pass it down explicitly.

use axum::{
    Json, Router,
    extract::{Path, State},
    middleware::from_fn_with_state,
    routing::{get, put},
};
use notes_auth::{AuthUser, JwtManager, require_auth};
use notes_core::NoteInput;
use notes_db::Note;
use std::sync::Arc;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

use super::types::{MessageResponse, NoteRequest};

impl From<NoteRequest> for NoteInput {
    fn from(request: NoteRequest) -> Self {
        NoteInput {
            title: request.title,
            content: request.content,
        }
    }
}

fn record(op: &'static str) {
    metrics::counter!("notes_notes_operations_total", "op" => op).increment(1);
}

/// GET /api/notes
async fn list_notes(
    user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state.notes.list(&user).await?;
    record("list");
    Ok(Json(notes))
}

/// POST /api/notes
async fn create_note(
    user: AuthUser,
    State(state): State<AppState>,
    ApiJson(request): ApiJson<NoteRequest>,
) -> Result<Json<Note>, ApiError> {
    let note = state.notes.create(&user, request.into()).await?;
    record("create");
    Ok(Json(note))
}

/// PUT /api/notes/{id}
async fn update_note(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<NoteRequest>,
) -> Result<Json<Note>, ApiError> {
    let note = state.notes.update(&user, &id, request.into()).await?;
    record("update");
    Ok(Json(note))
}

/// DELETE /api/notes/{id}
async fn delete_note(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.notes.delete(&user, &id).await?;
    record("delete");
    Ok(Json(MessageResponse {
        message: "Note removed".to_string(),
    }))
}

/// Create note routes guarded by `jwt`
pub fn routes(jwt: Arc<JwtManager>) -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route("/api/notes/{id}", put(update_note).delete(delete_note))
        .route_layer(from_fn_with_state(jwt, require_auth))
}
