//! Process-wide TTL cache used by every external-call site.
//!
//! Keys are deterministic strings built by the caller from the logical
//! operation name plus its normalized parameters, so identical requests
//! within the TTL window never re-hit external services. Entries expire
//! lazily on read; there is no proactive sweep and no size bound.
//! Failed lookups are never cached, so repeated failures re-attempt.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Default entry lifetime: 15 minutes.
pub const DEFAULT_TTL_SECONDS: u64 = 900;

struct StoredEntry {
    value: Value,
    inserted_at: Instant,
}

/// In-memory key/value cache with per-instance TTL.
///
/// Safe to share across tasks; the inner map is mutex-guarded.
pub struct TtlCache {
    entries: Mutex<HashMap<String, StoredEntry>>,
    ttl: Duration,
}

impl TtlCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    #[must_use]
    pub fn with_default_ttl() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TTL_SECONDS))
    }

    /// Retrieves a value if it exists and has not expired.
    /// Returns `None` for misses, expired entries, and values that no
    /// longer deserialize to `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let mut entries = self.entries.lock().expect("cache mutex poisoned");
        match entries.get(key) {
            Some(entry) if entry.inserted_at.elapsed() <= self.ttl => {
                tracing::debug!(key, "cache hit");
                serde_json::from_value(entry.value.clone()).ok()
            }
            Some(_) => {
                tracing::debug!(key, "cache entry expired");
                entries.remove(key);
                None
            }
            None => {
                tracing::debug!(key, "cache miss");
                None
            }
        }
    }

    /// Stores a serializable value under `key`, replacing any prior entry.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) {
        let Ok(value) = serde_json::to_value(value) else {
            tracing::warn!(key, "value not serializable, skipping cache write");
            return;
        };
        let mut entries = self.entries.lock().expect("cache mutex poisoned");
        entries.insert(
            key.to_string(),
            StoredEntry {
                value,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Number of live plus not-yet-collected entries (test support).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache mutex poisoned").len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
