use crate::types::DocId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DocId },

    #[error("Malformed identifier '{raw}': {reason}")]
    MalformedId { raw: String, reason: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Parse a client-supplied identifier into a [`DocId`].
pub fn parse_doc_id(raw: &str) -> Result<DocId, CoreError> {
    raw.parse::<DocId>().map_err(|e| CoreError::MalformedId {
        raw: raw.to_string(),
        reason: e.to_string(),
    })
}
