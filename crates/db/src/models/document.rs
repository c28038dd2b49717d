//! Raw document row and its client-facing shape.

use serde_json::{Map, Value};
use sqlx::FromRow;
use prompttube_core::types::{DocId, Timestamp};

/// Keys that carry identity and are never stored inside a document body.
pub const RESERVED_KEYS: &[&str] = &["id", "_id"];

/// A row from the `documents` table.
#[derive(Debug, Clone, FromRow)]
pub struct Document {
    pub id: DocId,
    pub collection: String,
    pub body: Value,
    pub created_at: Timestamp,
}

impl Document {
    /// The document body with an `"id"` field holding the identifier string.
    pub fn into_shaped(self) -> Value {
        let mut map = match self.body {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("value".to_string(), other);
                map
            }
        };
        map.insert("id".to_string(), Value::String(self.id.to_string()));
        Value::Object(map)
    }
}

/// Remove identity keys from a document body or update set.
pub fn strip_reserved(map: &mut Map<String, Value>) {
    for key in RESERVED_KEYS {
        map.remove(*key);
    }
}
