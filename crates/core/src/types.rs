//! Aliases shared by every layer.

/// Database key; BIGSERIAL on the PostgreSQL side.
pub type DbId = i64;

/// Instants are always UTC; conversion to local time is a client concern.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
