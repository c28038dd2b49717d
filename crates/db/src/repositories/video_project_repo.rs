//! Repository for video projects stored in the `videoproject` collection.

use serde_json::Map;
use sqlx::PgPool;
use prompttube_core::types::DocId;
use prompttube_core::video_project::COLLECTION;

use crate::models::document::Document;
use crate::models::video_project::{UpdateVideoProject, VideoProject};
use crate::repositories::DocumentRepo;

/// Typed access to the project collection.
pub struct VideoProjectRepo;

impl VideoProjectRepo {
    /// Persist a new project and read it back by its generated ID.
    pub async fn create(pool: &PgPool, project: &VideoProject) -> Result<Document, sqlx::Error> {
        let body = project.to_body().map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        let id = DocumentRepo::insert_one(pool, COLLECTION, body).await?;
        DocumentRepo::find_one_by_id(pool, COLLECTION, id)
            .await?
            .ok_or_else(|| missing_after_insert(id))
    }

    /// Up to `limit` projects in insertion order, unfiltered.
    pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<Document>, sqlx::Error> {
        DocumentRepo::find_many(pool, COLLECTION, &Map::new(), limit).await
    }

    /// Find a project by ID.
    pub async fn find_by_id(pool: &PgPool, id: DocId) -> Result<Option<Document>, sqlx::Error> {
        DocumentRepo::find_one_by_id(pool, COLLECTION, id).await
    }

    /// Overwrite the set fields of `input` on a project.
    ///
    /// Returns `None` if no project with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DocId,
        input: &UpdateVideoProject,
    ) -> Result<Option<Document>, sqlx::Error> {
        let fields = input.to_fields().map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        DocumentRepo::update_one_by_id(pool, COLLECTION, id, fields).await
    }
}

/// A project missing right after its own insert is a storage fault, never `RowNotFound`.
fn missing_after_insert(id: DocId) -> sqlx::Error {
    sqlx::Error::Protocol(format!(
        "project {id} was not found immediately after insert"
    ))
}
