/// All entity identifiers issued by the backend are 64-bit integers.
pub type DbId = i64;

/// Timestamps exchanged with the backend and stored on entities are
/// milliseconds since the Unix epoch.
pub type EpochMillis = i64;
