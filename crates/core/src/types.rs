/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Movie identifiers as issued by the metadata provider.
pub type MovieId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
