//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::Json;
use prompttube_core::error::{parse_doc_id, CoreError};
use prompttube_core::pagination::{clamp_limit, DEFAULT_LIMIT, MAX_LIMIT};
use prompttube_core::types::DocId;
use prompttube_db::models::video_project::{
    CreateVideoProject, UpdateVideoProject, VideoProject,
};
use prompttube_db::repositories::VideoProjectRepo;
use serde_json::Value;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::query::ListParams;
use crate::state::AppState;

fn not_found(id: DocId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "VideoProject",
        id,
    })
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateVideoProject>,
) -> AppResult<Json<Value>> {
    input.validate()?;

    let project = VideoProject::from_request(&input);
    let doc = VideoProjectRepo::create(&state.pool, &project).await?;
    tracing::info!(id = %doc.id, mode = %project.mode, "Created video project");

    Ok(Json(doc.into_shaped()))
}

/// GET /api/projects
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<Vec<Value>>> {
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let docs = VideoProjectRepo::list(&state.pool, limit).await?;
    Ok(Json(docs.into_iter().map(|d| d.into_shaped()).collect()))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_doc_id(&raw_id)?;
    let doc = VideoProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(doc.into_shaped()))
}

/// PATCH /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    AppJson(input): AppJson<UpdateVideoProject>,
) -> AppResult<Json<Value>> {
    let id = parse_doc_id(&raw_id)?;
    input.validate()?;

    let doc = VideoProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(%id, "Updated video project");

    Ok(Json(doc.into_shaped()))
}
