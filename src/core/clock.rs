use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_TIMESTAMP: AtomicI64 = AtomicI64::new(0);

/// Current time in epoch milliseconds, never lower than a value returned earlier in this process.
pub fn now_millis() -> i64 {
    let now = Utc::now().timestamp_millis();
    let previous = LAST_TIMESTAMP.fetch_max(now, Ordering::Relaxed);
    previous.max(now)
}
