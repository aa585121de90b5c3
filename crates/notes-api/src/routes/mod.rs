//! API routes

mod auth;
mod health;
pub mod metrics;
mod notes;
pub mod types;

use axum::Router;
use std::sync::Arc;

use crate::state::{AppState, MetricsHandle};

/// Create the main router
pub fn create_router(state: AppState, metrics_handle: Option<Arc<MetricsHandle>>) -> Router {
    let mut router = Router::new()
        // Health check
        .merge(health::routes())
        // Registration and login
        .merge(auth::routes())
        // Owner-scoped notes, behind the access guard
        .merge(notes::routes(state.jwt.clone()))
        .with_state(state);

    if let Some(handle) = metrics_handle {
        router = router.merge(metrics::routes(handle));
    }

    router
}
