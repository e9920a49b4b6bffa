/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Timestamps are stored as unix seconds (BIGINT).
pub type UnixTime = i64;

/// Current wall-clock time in unix seconds.
pub fn unix_now() -> UnixTime {
    chrono::Utc::now().timestamp()
}
