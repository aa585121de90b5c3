//! Application state

use metrics_exporter_prometheus::PrometheusHandle;
use notes_auth::JwtManager;
use notes_core::{AuthService, NoteService};
use notes_db::Database;
use std::sync::Arc;

/// Handle used to render the Prometheus exposition
pub type MetricsHandle = PrometheusHandle;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub auth: AuthService,
    pub notes: NoteService,
    pub jwt: Arc<JwtManager>,
}

impl AppState {
    pub fn new(db: Database, jwt: Arc<JwtManager>) -> Self {
        Self {
            auth: AuthService::new(db.clone(), jwt.clone()),
            notes: NoteService::new(db.clone()),
            db,
            jwt,
        }
    }
}
