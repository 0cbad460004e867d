use async_trait::async_trait;
use dashmap::DashMap;
use ip_gate_application::ports::{CacheCompactionOutcome, CacheMaintenancePort, KeyValueCache};
use ip_gate_domain::DomainError;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

const DEFAULT_CAPACITY: usize = 100_000;
const EVICTION_BATCH_SIZE: usize = 64;

#[derive(Clone)]
struct Entry {
    value: Arc<[u8]>,
    expires_at: Instant,
}

impl Entry {
    #[inline]
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Process-local key-value store with per-entry TTL.
///
/// Expired entries are dropped on read and by [`CacheMaintenancePort`]
/// compaction. When full, expired entries are evicted first, then an
/// arbitrary live one.
pub struct InMemoryKeyValueCache {
    inner: DashMap<String, Entry, FxBuildHasher>,
    capacity: usize,
}

impl InMemoryKeyValueCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: DashMap::with_capacity_and_hasher(capacity.min(4_096), FxBuildHasher),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&self) {
        self.inner.clear();
    }

    fn make_room(&self) {
        if self.inner.len() < self.capacity {
            return;
        }

        let now = Instant::now();
        let expired: Vec<String> = self
            .inner
            .iter()
            .filter(|e| e.value().is_expired(now))
            .map(|e| e.key().clone())
            .take(EVICTION_BATCH_SIZE)
            .collect();
        for k in &expired {
            self.inner.remove(k);
        }

        if self.inner.len() >= self.capacity {
            // Bind first: the iterator holds a shard read lock.
            let victim = self.inner.iter().map(|e| e.key().clone()).next();
            if let Some(k) = victim {
                self.inner.remove(&k);
            }
        }
    }

    fn remove_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.inner.len();
        self.inner.retain(|_, entry| !entry.is_expired(now));
        before.saturating_sub(self.inner.len())
    }
}

impl Default for InMemoryKeyValueCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[async_trait]
impl KeyValueCache for InMemoryKeyValueCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError> {
        let now = Instant::now();
        let hit = match self.inner.get(key) {
            None => return Ok(None),
            Some(entry) if !entry.is_expired(now) => Some(entry.value.to_vec()),
            Some(_) => None,
        };

        if hit.is_none() {
            self.inner.remove_if(key, |_, entry| entry.is_expired(now));
        }
        Ok(hit)
    }

    async fn set_with_ttl(
        &self,
        key: &str,
        value: Vec<u8>,
        ttl: Duration,
    ) -> Result<(), DomainError> {
        if ttl.is_zero() {
            self.inner.remove(key);
            return Ok(());
        }

        if !self.inner.contains_key(key) {
            self.make_room();
        }

        self.inner.insert(
            key.to_string(),
            Entry {
                value: Arc::from(value),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }
}

#[async_trait]
impl CacheMaintenancePort for InMemoryKeyValueCache {
    async fn run_compaction_cycle(&self) -> Result<CacheCompactionOutcome, DomainError> {
        let entries_removed = self.remove_expired();
        let cache_size = self.inner.len();
        debug!(entries_removed, cache_size, "Key-value cache compacted");
        Ok(CacheCompactionOutcome {
            entries_removed,
            cache_size,
        })
    }
}
