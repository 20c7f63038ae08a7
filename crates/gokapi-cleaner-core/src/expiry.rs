use chrono::Utc;
use tracing::debug;

use crate::file::FileRecord;

/// Current time as Unix seconds. Read once per sweep.
pub fn unix_now() -> i64 {
    Utc::now().timestamp()
}

/// Return the records whose `ExpireAt` is strictly before `now`,
/// in listing order.
pub fn select_expired(records: &[FileRecord], now: i64) -> Vec<FileRecord> {
    records
        .iter()
        .filter(|r| r.is_expired(now))
        .inspect(|r| {
            debug!(
                "found file '{}' which expires at {}",
                r.name,
                r.expiry_label()
            )
        })
        .cloned()
        .collect()
}
