/// Every stored document is addressed by a store-assigned UUID (v7, time-ordered).
pub type DocId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
