use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// Process start, reported as uptime by the health endpoint.
pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);
