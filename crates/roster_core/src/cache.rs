//! Shared configuration side-cache.
//!
//! # Responsibility
//! - Mirror configuration updates from record stores into one shared map.
//! - Expose the process-wide cache used by default-constructed stores.
//!
//! # Invariants
//! - Handles are cheap clones of the same underlying map.
//! - The process-wide cache lives for the whole process and is never cleared.
//! - A poisoned lock is recovered; readers still observe the last write.

use once_cell::sync::Lazy;
use std::sync::{Arc, PoisonError, RwLock};

use crate::model::config::{ConfigMap, ConfigValue};

static PROCESS_CONFIG_CACHE: Lazy<SharedConfigCache> = Lazy::new(SharedConfigCache::new);

/// Cloneable handle to a lock-guarded configuration map.
#[derive(Debug, Clone, Default)]
pub struct SharedConfigCache {
    entries: Arc<RwLock<ConfigMap>>,
}

impl SharedConfigCache {
    /// Creates an empty cache not shared with anything else.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key -> value`, replacing any previous value.
    pub fn set(&self, key: impl Into<String>, value: ConfigValue) {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Returns a point-in-time copy of every entry.
    pub fn snapshot(&self) -> ConfigMap {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether both handles point at the same underlying map.
    pub fn shares_storage_with(&self, other: &SharedConfigCache) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

/// Returns a handle to the process-wide side-cache.
pub fn process_config_cache() -> SharedConfigCache {
    PROCESS_CONFIG_CACHE.clone()
}

#[cfg(test)]
mod tests {
    use super::{process_config_cache, SharedConfigCache};
    use serde_json::json;
    use std::thread;

    #[test]
    fn clones_share_entries() {
        let cache = SharedConfigCache::new();
        let other = cache.clone();
        cache.set("theme", json!("dark"));

        assert_eq!(other.get("theme"), Some(json!("dark")));
        assert!(cache.shares_storage_with(&other));
        assert!(!cache.shares_storage_with(&SharedConfigCache::new()));
    }

    #[test]
    fn set_replaces_previous_value() {
        let cache = SharedConfigCache::new();
        cache.set("retries", json!(1));
        cache.set("retries", json!(3));

        assert_eq!(cache.get("retries"), Some(json!(3)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn concurrent_writers_do_not_lose_updates() {
        let cache = SharedConfigCache::new();
        let handles = (0..8)
            .map(|worker| {
                let cache = cache.clone();
                thread::spawn(move || {
                    for n in 0..50 {
                        cache.set(format!("w{worker}-k{n}"), json!(n));
                    }
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.join().expect("writer thread should not panic");
        }

        assert_eq!(cache.len(), 400);
    }

    #[test]
    fn process_cache_handles_share_storage() {
        let a = process_config_cache();
        let b = process_config_cache();
        assert!(a.shares_storage_with(&b));
    }
}
