//! In-memory query cache for the JobBoard API SDK.
//!
//! This module provides the [`QueryCache`] consulted by read operations and
//! updated explicitly after mutations. Entries are keyed by
//! {operation name, canonical variables}, so a value written under a read
//! operation's key is served to a later call of that read with the same
//! variables.
//!
//! # Overview
//!
//! - [`QueryCache`]: the in-memory store (`read`/`write`/`clear`)
//! - [`CacheKey`]: a key combining an operation name with canonicalized variables
//! - [`CacheWrite`]: a declared write to perform after a successful mutation
//! - [`FetchPolicy`]: how a read operation interacts with the cache
//!
//! Entries are evicted only by [`QueryCache::clear`] or process termination;
//! there is no expiration policy.
//!
//! # Example
//!
//! ```rust
//! use jobboard_api::{CacheKey, QueryCache};
//! use serde_json::json;
//!
//! let cache = QueryCache::new();
//! let key = CacheKey::new("QueryJob", &json!({ "id": "42" }));
//!
//! assert!(cache.read(&key).is_none());
//! cache.write(key.clone(), json!({ "job": { "id": "42", "title": "Engineer" } }));
//! assert!(cache.read(&key).is_some());
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

/// How a read operation interacts with the [`QueryCache`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Consult the cache before the network; a hit short-circuits the
    /// round trip, and a successful fetch is written back.
    CacheFirst,
    /// Always issue a network fetch; never read or write the cache.
    NoCache,
}

/// A cache key identifying one operation invocation.
///
/// Keys combine the operation name with a canonical rendering of the
/// variables, so two variable maps carrying the same entries in different
/// order map to the same key.
///
/// # Example
///
/// ```rust
/// use jobboard_api::CacheKey;
/// use serde_json::json;
///
/// let a = CacheKey::new("QueryJob", &json!({ "id": "42" }));
/// let b = CacheKey::new("QueryJob", &json!({ "id": "42" }));
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    operation: &'static str,
    variables: String,
}

impl CacheKey {
    /// Creates a key for the given operation name and variables.
    ///
    /// Pass `Value::Null` for operations without variables.
    #[must_use]
    pub fn new(operation: &'static str, variables: &serde_json::Value) -> Self {
        Self {
            operation,
            variables: canonical_json(variables),
        }
    }

    /// Returns the operation name this key belongs to.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }
}

/// Renders a JSON value with object keys sorted, independent of the order
/// the map was built in.
fn canonical_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Object(map) => {
            let sorted: BTreeMap<&String, String> = map
                .iter()
                .map(|(k, v)| (k, canonical_json(v)))
                .collect();
            let fields: Vec<String> = sorted
                .iter()
                .map(|(k, v)| format!("{}:{v}", serde_json::Value::String((*k).clone())))
                .collect();
            format!("{{{}}}", fields.join(","))
        }
        serde_json::Value::Array(items) => {
            let rendered: Vec<String> = items.iter().map(canonical_json).collect();
            format!("[{}]", rendered.join(","))
        }
        other => other.to_string(),
    }
}

/// A single cache write declared by a mutation's post-write rule.
///
/// The key names the read operation (and variables) the write should
/// satisfy; the data is the value that read would have returned.
#[derive(Clone, Debug)]
pub struct CacheWrite {
    /// The key a future read will look up.
    pub key: CacheKey,
    /// The response data stored under the key.
    pub data: serde_json::Value,
}

/// An in-memory store of operation results keyed by [`CacheKey`].
///
/// Reads with [`FetchPolicy::CacheFirst`] consult the cache before issuing
/// a network call; mutations pre-populate it so a freshly created entity is
/// readable without another round trip.
///
/// # Thread Safety
///
/// `QueryCache` is `Send + Sync`; the store is guarded by a `Mutex`.
///
/// # Panics
///
/// Methods panic if the internal mutex is poisoned, which only happens if a
/// thread panicked while holding the lock.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<CacheKey, serde_json::Value>>,
}

impl QueryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached data for `key`, if present.
    #[must_use]
    pub fn read(&self, key: &CacheKey) -> Option<serde_json::Value> {
        self.entries
            .lock()
            .expect("cache mutex poisoned")
            .get(key)
            .cloned()
    }

    /// Stores `data` under `key`, replacing any previous entry.
    pub fn write(&self, key: CacheKey, data: serde_json::Value) {
        tracing::debug!(operation = key.operation(), "writing cache entry");
        self.entries
            .lock()
            .expect("cache mutex poisoned")
            .insert(key, data);
    }

    /// Applies a declared [`CacheWrite`].
    pub fn apply(&self, write: CacheWrite) {
        self.write(write.key, write.data);
    }

    /// Removes all entries. Intended for logout, where cached responses may
    /// belong to the previous session.
    pub fn clear(&self) {
        self.entries.lock().expect("cache mutex poisoned").clear();
    }

    /// Returns the number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache mutex poisoned").len()
    }

    /// Returns `true` if the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Verify QueryCache is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QueryCache>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_miss_returns_none() {
        let cache = QueryCache::new();
        let key = CacheKey::new("QueryJob", &json!({ "id": "1" }));
        assert!(cache.read(&key).is_none());
    }

    #[test]
    fn test_write_then_read_returns_data() {
        let cache = QueryCache::new();
        let key = CacheKey::new("QueryJob", &json!({ "id": "1" }));
        let data = json!({ "job": { "id": "1", "title": "Engineer" } });

        cache.write(key.clone(), data.clone());

        assert_eq!(cache.read(&key), Some(data));
    }

    #[test]
    fn test_write_replaces_previous_entry() {
        let cache = QueryCache::new();
        let key = CacheKey::new("QueryJob", &json!({ "id": "1" }));

        cache.write(key.clone(), json!({ "job": { "title": "Old" } }));
        cache.write(key.clone(), json!({ "job": { "title": "New" } }));

        assert_eq!(cache.read(&key), Some(json!({ "job": { "title": "New" } })));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_keys_distinguish_variables() {
        let cache = QueryCache::new();
        cache.write(
            CacheKey::new("QueryJob", &json!({ "id": "1" })),
            json!({ "job": { "id": "1" } }),
        );

        let other = CacheKey::new("QueryJob", &json!({ "id": "2" }));
        assert!(cache.read(&other).is_none());
    }

    #[test]
    fn test_keys_distinguish_operations() {
        let cache = QueryCache::new();
        cache.write(
            CacheKey::new("QueryJob", &json!({ "id": "1" })),
            json!({ "job": { "id": "1" } }),
        );

        let other = CacheKey::new("QueryCompany", &json!({ "id": "1" }));
        assert!(cache.read(&other).is_none());
    }

    #[test]
    fn test_key_canonicalization_ignores_field_order() {
        let mut forward = serde_json::Map::new();
        forward.insert("a".to_string(), json!(1));
        forward.insert("b".to_string(), json!(2));

        let mut reverse = serde_json::Map::new();
        reverse.insert("b".to_string(), json!(2));
        reverse.insert("a".to_string(), json!(1));

        let key_a = CacheKey::new("QueryJob", &serde_json::Value::Object(forward));
        let key_b = CacheKey::new("QueryJob", &serde_json::Value::Object(reverse));

        assert_eq!(key_a, key_b);
    }

    #[test]
    fn test_key_canonicalization_recurses_into_nested_objects() {
        let key_a = CacheKey::new(
            "CreateJob",
            &json!({ "input": { "title": "T", "description": "D" } }),
        );
        let key_b = CacheKey::new(
            "CreateJob",
            &json!({ "input": { "description": "D", "title": "T" } }),
        );

        assert_eq!(key_a, key_b);
    }

    #[test]
    fn test_null_variables_are_a_valid_key() {
        let cache = QueryCache::new();
        let key = CacheKey::new("QueryJobs", &serde_json::Value::Null);

        cache.write(key.clone(), json!({ "jobs": [] }));

        assert_eq!(cache.read(&key), Some(json!({ "jobs": [] })));
    }

    #[test]
    fn test_clear_removes_all_entries() {
        let cache = QueryCache::new();
        cache.write(CacheKey::new("QueryJob", &json!({ "id": "1" })), json!({}));
        cache.write(CacheKey::new("QueryJob", &json!({ "id": "2" })), json!({}));
        assert_eq!(cache.len(), 2);

        cache.clear();

        assert!(cache.is_empty());
    }

    #[test]
    fn test_apply_performs_declared_write() {
        let cache = QueryCache::new();
        let key = CacheKey::new("QueryJob", &json!({ "id": "9" }));
        let write = CacheWrite {
            key: key.clone(),
            data: json!({ "job": { "id": "9" } }),
        };

        cache.apply(write);

        assert_eq!(cache.read(&key), Some(json!({ "job": { "id": "9" } })));
    }

    #[test]
    fn test_cache_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QueryCache>();
    }
}
