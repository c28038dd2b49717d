use axum::extract::State;
use axum::{routing::get, Json, Router};
use prompttube_db::repositories::DocumentRepo;
use serde::Serialize;

use crate::state::AppState;

/// Longest database error message echoed back by the storage probe.
const MAX_ERROR_CHARS: usize = 120;

/// Liveness response payload.
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// Storage probe response payload.
#[derive(Serialize)]
pub struct StorageHealthResponse {
    pub backend: &'static str,
    /// `"connected"`, or `"error: <message>"` when the store is unreachable.
    pub database: String,
    /// Collections currently holding documents.
    pub collections: Vec<String>,
}

/// GET / -- static liveness message.
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "PromptToTube backend running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /test -- lists collections; storage failures are reported inline, never as an error status.
async fn storage_health(State(state): State<AppState>) -> Json<StorageHealthResponse> {
    let (database, collections) = match DocumentRepo::list_collection_names(&state.pool).await {
        Ok(collections) => ("connected".to_string(), collections),
        Err(e) => {
            tracing::warn!(error = %e, "Storage health probe failed");
            let msg: String = e.to_string().chars().take(MAX_ERROR_CHARS).collect();
            (format!("error: {msg}"), Vec::new())
        }
    };

    Json(StorageHealthResponse {
        backend: "running",
        database,
        collections,
    })
}

/// Mount health routes (root level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/test", get(storage_health))
}
