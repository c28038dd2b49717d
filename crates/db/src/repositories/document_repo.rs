//! Repository for the `documents` table, addressed by collection name.

use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::PgPool;
use prompttube_core::types::DocId;

use crate::models::document::{strip_reserved, Document};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, collection, body, created_at";

/// Schema-flexible document operations. The store assigns every identifier.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Insert a document into `collection`, returning its generated ID.
    ///
    /// Identity keys (`id`, `_id`) in `body` are discarded.
    pub async fn insert_one(
        pool: &PgPool,
        collection: &str,
        mut body: Map<String, Value>,
    ) -> Result<DocId, sqlx::Error> {
        strip_reserved(&mut body);
        let id = DocId::now_v7();
        sqlx::query("INSERT INTO documents (id, collection, body) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(collection)
            .bind(Json(&body))
            .execute(pool)
            .await?;
        tracing::debug!(%id, collection, "Inserted document");
        Ok(id)
    }

    /// Documents in `collection` whose body contains `filter`, in insertion order.
    ///
    /// An empty filter matches every document in the collection.
    pub async fn find_many(
        pool: &PgPool,
        collection: &str,
        filter: &Map<String, Value>,
        limit: i64,
    ) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM documents
             WHERE collection = $1 AND body @> $2
             ORDER BY created_at, id
             LIMIT $3"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(collection)
            .bind(Json(filter))
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Find a single document by ID within `collection`.
    pub async fn find_one_by_id(
        pool: &PgPool,
        collection: &str,
        id: DocId,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents WHERE collection = $1 AND id = $2");
        sqlx::query_as::<_, Document>(&query)
            .bind(collection)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Shallow-merge `fields` into a document, overwriting existing keys.
    ///
    /// Returns `None` if no document with the given `id` exists.
    pub async fn update_one_by_id(
        pool: &PgPool,
        collection: &str,
        id: DocId,
        mut fields: Map<String, Value>,
    ) -> Result<Option<Document>, sqlx::Error> {
        strip_reserved(&mut fields);
        let query = format!(
            "UPDATE documents SET body = body || $3
             WHERE collection = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(collection)
            .bind(id)
            .bind(Json(&fields))
            .fetch_optional(pool)
            .await
    }

    /// Names of every collection holding at least one document, sorted.
    pub async fn list_collection_names(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT collection FROM documents ORDER BY collection")
            .fetch_all(pool)
            .await
    }
}
